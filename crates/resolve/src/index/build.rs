use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use super::error::IndexError;
use super::types::{NormalizationIndex, canonicalize};

/// Result of a successful insertion.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertAction {
	/// Key was new.
	InsertedNew,
	/// Key already mapped to the same canonical prefix.
	AlreadyPresent,
}

/// Validating builder for a [`NormalizationIndex`].
///
/// Uniqueness is checked on every insert; once [`build`](Self::build) runs the
/// map is frozen and never checked again.
#[derive(Debug, Default)]
pub struct NormalizationIndexBuilder {
	by_key: FxHashMap<Box<str>, Box<str>>,
}

impl NormalizationIndexBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Maps the canonical form of `raw` to `canonical`.
	///
	/// Fails if the key is already claimed by a different canonical prefix.
	pub fn insert(&mut self, raw: &str, canonical: &str) -> Result<InsertAction, IndexError> {
		let key = canonicalize(raw);
		if key.is_empty() {
			return Err(IndexError::EmptyKey {
				raw: raw.to_owned(),
				canonical: canonical.to_owned(),
			});
		}

		match self.by_key.entry(key.into_boxed_str()) {
			Entry::Vacant(v) => {
				v.insert(Box::from(canonical));
				Ok(InsertAction::InsertedNew)
			}
			Entry::Occupied(o) if &**o.get() == canonical => Ok(InsertAction::AlreadyPresent),
			Entry::Occupied(o) => Err(IndexError::Collision {
				key: o.key().to_string(),
				raw: raw.to_owned(),
				existing: o.get().to_string(),
				incoming: canonical.to_owned(),
			}),
		}
	}

	/// Returns true if the canonical form of `raw` is already claimed.
	pub fn contains(&self, raw: &str) -> bool {
		self.by_key.contains_key(canonicalize(raw).as_str())
	}

	pub fn len(&self) -> usize {
		self.by_key.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_key.is_empty()
	}

	/// Freezes the builder into an index.
	pub fn build(self) -> NormalizationIndex {
		NormalizationIndex { by_key: self.by_key }
	}
}
