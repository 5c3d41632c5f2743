//! Curated namespace records.
//!
//! A [`Resource`] is one namespace's curated entry: its canonical prefix, the
//! local overrides curators chose to pin, and the raw records imported from
//! every external authority that also lists the namespace.
//!
//! # Field access
//!
//! Resolution of descriptive fields follows one rule: the local override wins,
//! otherwise the external records are consulted in a caller-supplied order.
//! [`Resource::field_with_fallback`] implements that rule for every [`Field`];
//! values come back as a [`FieldValue`] so callers can tell a text field from
//! a flag without guessing.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::external::ExternalRecord;

static EMPTY_RECORD: ExternalRecord = ExternalRecord::new();

/// A namespace's curated record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
	/// Canonical prefix. Filled from the registry key when loaded from JSON.
	#[serde(default)]
	pub prefix: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub pattern: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub homepage: Option<String>,
	/// Contact email address.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub contact: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub license: Option<String>,
	/// Example local unique identifier.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub example: Option<String>,
	/// Primary URI format string, with `$1` marking the identifier.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub download_obo: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub download_json: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub download_owl: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub synonyms: Option<BTreeSet<String>>,
	/// Redundant prefix embedded in raw identifiers, without a trailing `:`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub banana: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub deprecated: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub proprietary: Option<bool>,
	/// Prefix of the resource this entry provides an alternate resolver for.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub provides: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub no_own_terms: Option<bool>,
	#[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
	pub kind: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub namespace_in_lui: Option<bool>,
	/// Curated metaprefix → external prefix table.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub mappings: Option<BTreeMap<String, String>>,
	/// Raw records keyed by metaprefix.
	///
	/// Only object-valued keys outside [`NON_AUTHORITY_KEYS`] decode as
	/// records; other upstream annotations (lists, scalars, people) are dropped.
	#[serde(flatten, deserialize_with = "authority_records")]
	pub externals: BTreeMap<String, ExternalRecord>,
}

/// Descriptive fields that resolve through local override and external fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
	Name,
	Description,
	Pattern,
	Homepage,
	/// Contact email.
	Contact,
	/// Whether the namespace is embedded in its local identifiers.
	NamespaceInLui,
}

impl Field {
	/// Key under which external authorities publish this field.
	pub const fn key(self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Description => "description",
			Self::Pattern => "pattern",
			Self::Homepage => "homepage",
			Self::Contact => "contact",
			Self::NamespaceInLui => "namespaceEmbeddedInLui",
		}
	}
}

impl std::fmt::Display for Field {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.key())
	}
}

/// A resolved field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
	Text(&'a str),
	Flag(bool),
}

impl<'a> FieldValue<'a> {
	/// Returns the string if this is a `Text` variant.
	pub fn as_str(self) -> Option<&'a str> {
		match self {
			FieldValue::Text(s) => Some(s),
			FieldValue::Flag(_) => None,
		}
	}

	/// Returns the flag if this is a `Flag` variant.
	pub fn as_bool(self) -> Option<bool> {
		match self {
			FieldValue::Flag(b) => Some(b),
			FieldValue::Text(_) => None,
		}
	}
}

impl Resource {
	/// Creates an otherwise empty resource for `prefix`.
	pub fn new(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			..Self::default()
		}
	}

	/// Attaches an external record, returning the updated resource.
	pub fn with_external(mut self, metaprefix: impl Into<String>, record: ExternalRecord) -> Self {
		self.externals.insert(metaprefix.into(), record);
		self
	}

	/// Returns the record imported from `metaprefix`.
	///
	/// Authorities that do not list this resource yield an empty record, so
	/// callers can chain field lookups without checking membership first.
	pub fn external_record(&self, metaprefix: &str) -> &ExternalRecord {
		self.externals.get(metaprefix).unwrap_or(&EMPTY_RECORD)
	}

	/// Returns the local override for `field`, if curated.
	pub fn local(&self, field: Field) -> Option<FieldValue<'_>> {
		match field {
			Field::Name => text(&self.name),
			Field::Description => text(&self.description),
			Field::Pattern => text(&self.pattern),
			Field::Homepage => text(&self.homepage),
			Field::Contact => text(&self.contact),
			Field::NamespaceInLui => self.namespace_in_lui.map(FieldValue::Flag),
		}
	}

	/// Resolves `field` from the local override, then from each metaprefix in order.
	///
	/// The first present value wins. Returns `None` when neither the resource
	/// nor any listed authority carries the field.
	pub fn field_with_fallback<S: AsRef<str>>(&self, field: Field, metaprefixes: &[S]) -> Option<FieldValue<'_>> {
		if let Some(value) = self.local(field) {
			return Some(value);
		}
		metaprefixes
			.iter()
			.find_map(|metaprefix| self.external_record(metaprefix.as_ref()).field(field.key()))
	}

	/// Returns the curated synonyms, empty when none are curated.
	pub fn synonyms(&self) -> impl Iterator<Item = &str> + '_ {
		self.synonyms.iter().flatten().map(String::as_str)
	}
}

/// Object-valued upstream fields that describe people rather than authorities.
pub const NON_AUTHORITY_KEYS: &[&str] = &["contributor", "reviewer"];

fn authority_records<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BTreeMap<String, ExternalRecord>, D::Error> {
	let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
	Ok(raw
		.into_iter()
		.filter_map(|(key, value)| match value {
			Value::Object(fields) if !NON_AUTHORITY_KEYS.contains(&key.as_str()) => Some((key, fields.into_iter().collect())),
			_ => None,
		})
		.collect())
}

fn text(value: &Option<String>) -> Option<FieldValue<'_>> {
	value.as_deref().map(FieldValue::Text)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use serde_json::json;

	use super::*;

	fn chebi() -> Resource {
		serde_json::from_value(json!({
			"prefix": "chebi",
			"homepage": "https://www.ebi.ac.uk/chebi",
			"synonyms": ["CHEBI", "ChEBI"],
			"miriam": {"prefix": "chebi", "name": "ChEBI", "namespaceEmbeddedInLui": true},
			"obofoundry": {"prefix": "chebi", "name": "Chemical Entities of Biological Interest"},
		}))
		.unwrap()
	}

	#[test]
	fn externals_are_flattened_by_metaprefix() {
		let resource = chebi();
		assert_eq!(resource.externals.len(), 2);
		assert_eq!(resource.external_record("miriam").get_str("name"), Some("ChEBI"));
		assert!(resource.external_record("wikidata").is_empty());
	}

	#[test]
	fn local_override_wins() {
		let resource = chebi();
		assert_eq!(
			resource.field_with_fallback(Field::Homepage, &["miriam"]),
			Some(FieldValue::Text("https://www.ebi.ac.uk/chebi"))
		);
	}

	#[test]
	fn fallback_walks_metaprefixes_in_order() {
		let resource = chebi();
		assert_eq!(
			resource.field_with_fallback(Field::Name, &["obofoundry", "miriam"]),
			Some(FieldValue::Text("Chemical Entities of Biological Interest"))
		);
		assert_eq!(resource.field_with_fallback(Field::Name, &["ols", "miriam"]), Some(FieldValue::Text("ChEBI")));
		assert_eq!(resource.field_with_fallback(Field::Description, &["ols", "miriam"]), None);
	}

	#[test]
	fn flags_come_back_typed() {
		let resource = chebi();
		let value = resource.field_with_fallback(Field::NamespaceInLui, &["miriam"]);
		assert_eq!(value.and_then(FieldValue::as_bool), Some(true));
		assert_eq!(value.and_then(FieldValue::as_str), None);
	}

	#[test]
	fn upstream_annotations_are_not_records() {
		let resource: Resource = serde_json::from_value(json!({
			"name": "Gene Ontology",
			"appears_in": ["uberon"],
			"keywords": ["biology"],
			"publications": [{"pubmed": "10802651"}],
			"github_request_issue": 123,
			"contributor": {"name": "Charles Tapley Hoyt", "orcid": "0000-0003-4423-4370"},
			"obofoundry": {"prefix": "go"},
		}))
		.unwrap();

		assert_eq!(resource.name.as_deref(), Some("Gene Ontology"));
		assert_eq!(resource.externals.keys().collect::<Vec<_>>(), ["obofoundry"]);
		assert!(resource.external_record("contributor").is_empty());
	}

	#[test]
	fn type_tag_round_trips_under_its_wire_name() {
		let resource: Resource = serde_json::from_value(json!({"type": "provider", "provides": "pdb"})).unwrap();
		assert_eq!(resource.kind.as_deref(), Some("provider"));
		assert!(resource.externals.is_empty());

		let value = serde_json::to_value(&resource).unwrap();
		assert_eq!(value["type"], json!("provider"));
	}
}
