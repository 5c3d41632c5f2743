use std::collections::BTreeMap;

use bioreg_schema::Resource;
use rustc_hash::FxHashMap;

use super::build::NormalizationIndexBuilder;
use super::error::IndexError;

/// Canonicalizes a prefix spelling for index keys.
///
/// Lowercases, then deletes every space, period, hyphen, underscore and slash.
pub fn canonicalize(raw: &str) -> String {
	raw.to_lowercase()
		.chars()
		.filter(|c| !matches!(c, ' ' | '.' | '-' | '_' | '/'))
		.collect()
}

/// Frozen mapping from canonicalized spellings to canonical prefixes.
#[derive(Debug, Clone, Default)]
pub struct NormalizationIndex {
	pub(super) by_key: FxHashMap<Box<str>, Box<str>>,
}

impl NormalizationIndex {
	/// Builds the index over every resource in a store snapshot.
	///
	/// `scan` lists the authorities whose own `prefix` field is compared
	/// against the finished synonym set; misses are logged, not inserted.
	pub fn from_resources<S: AsRef<str>>(resources: &BTreeMap<String, Resource>, scan: &[S]) -> Result<Self, IndexError> {
		let mut builder = NormalizationIndexBuilder::new();

		for (prefix, resource) in resources {
			builder.insert(prefix, prefix)?;
			for synonym in resource.synonyms() {
				builder.insert(synonym, prefix)?;
			}

			for metaprefix in scan {
				let metaprefix = metaprefix.as_ref();
				let Some(external_prefix) = resource.external_record(metaprefix).get_str("prefix") else {
					continue;
				};
				if !builder.contains(external_prefix) {
					tracing::debug!(
						prefix = %prefix,
						metaprefix,
						external_prefix,
						"missing potential synonym",
					);
				}
			}
		}

		Ok(builder.build())
	}

	/// Returns the canonical prefix for `raw`, if any curated spelling matches.
	pub fn resolve(&self, raw: &str) -> Option<&str> {
		self.by_key.get(canonicalize(raw).as_str()).map(|p| &**p)
	}

	pub fn contains(&self, raw: &str) -> bool {
		self.by_key.contains_key(canonicalize(raw).as_str())
	}

	/// Returns the number of normalized keys.
	pub fn len(&self) -> usize {
		self.by_key.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_key.is_empty()
	}

	/// Iterates `(normalized key, canonical prefix)` pairs in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
		self.by_key.iter().map(|(k, v)| (&**k, &**v))
	}
}
