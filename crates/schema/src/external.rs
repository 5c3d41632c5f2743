//! Opaque records imported from external authorities.
//!
//! Each [`crate::Resource`] carries one [`ExternalRecord`] per metaprefix it is
//! cross-referenced in. The keys follow the upstream authority's own spelling
//! (`preferredPrefix`, `download.owl`, `sampleId`, ...) and are never rewritten.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resource::FieldValue;

/// Arbitrary key/value data sourced from one external authority.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalRecord(BTreeMap<String, Value>);

impl ExternalRecord {
	/// Creates an empty record.
	pub const fn new() -> Self {
		Self(BTreeMap::new())
	}

	/// Adds a field, returning the updated record.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.0.insert(key.into(), value.into());
		self
	}

	/// Returns the raw value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Returns the value under `key` if it is a string.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.0.get(key).and_then(Value::as_str)
	}

	/// Returns the value under `key` as a typed field value.
	///
	/// Strings and booleans are surfaced; numbers, arrays, objects and nulls
	/// count as absent.
	pub fn field(&self, key: &str) -> Option<FieldValue<'_>> {
		match self.0.get(key)? {
			Value::String(s) => Some(FieldValue::Text(s)),
			Value::Bool(b) => Some(FieldValue::Flag(*b)),
			_ => None,
		}
	}

	/// Returns true if `key` holds a truthy value.
	///
	/// Upstream exports are inconsistent about flags: some write `true`, some
	/// a non-empty string, some `1`.
	pub fn is_truthy(&self, key: &str) -> bool {
		match self.0.get(key) {
			None | Some(Value::Null) => false,
			Some(Value::Bool(b)) => *b,
			Some(Value::String(s)) => !s.is_empty(),
			Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
			Some(Value::Array(items)) => !items.is_empty(),
			Some(Value::Object(map)) => !map.is_empty(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ExternalRecord {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn field_surfaces_strings_and_flags_only() {
		let record = ExternalRecord::new()
			.with("prefix", "GO")
			.with("deprecated", true)
			.with("count", 3)
			.with("missing", Value::Null);

		assert_eq!(record.field("prefix"), Some(FieldValue::Text("GO")));
		assert_eq!(record.field("deprecated"), Some(FieldValue::Flag(true)));
		assert_eq!(record.field("count"), None);
		assert_eq!(record.field("missing"), None);
		assert_eq!(record.field("absent"), None);
	}

	#[test]
	fn truthiness_follows_upstream_flag_styles() {
		let record: ExternalRecord = serde_json::from_value(json!({
			"a": true,
			"b": false,
			"c": "yes",
			"d": "",
			"e": 1,
			"f": 0,
		}))
		.unwrap();

		assert!(record.is_truthy("a"));
		assert!(!record.is_truthy("b"));
		assert!(record.is_truthy("c"));
		assert!(!record.is_truthy("d"));
		assert!(record.is_truthy("e"));
		assert!(!record.is_truthy("f"));
		assert!(!record.is_truthy("nope"));
	}
}
