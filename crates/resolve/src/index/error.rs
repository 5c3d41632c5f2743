/// Fatal errors while building a [`super::NormalizationIndex`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
	/// Two canonical prefixes claim the same normalized key.
	#[error("normalized key {key:?} (from {raw:?}) maps to {incoming:?} but is already claimed by {existing:?}")]
	Collision {
		key: String,
		raw: String,
		existing: String,
		incoming: String,
	},

	/// A spelling has no characters left after canonicalization.
	#[error("{raw:?} normalizes to an empty key (canonical prefix {canonical:?})")]
	EmptyKey { raw: String, canonical: String },
}
