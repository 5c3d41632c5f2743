//! Metaregistry records.

use serde::{Deserialize, Serialize};

/// Descriptive metadata about one external authority.
///
/// Only enumerated by the resolver (which authorities exist), never used to
/// decide how a field resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
	/// The metaprefix. Filled from the metaregistry key when loaded from JSON.
	#[serde(default)]
	pub prefix: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub homepage: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub example: Option<String>,
	/// Format string for the authority's own prefix pages.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub provider_url: Option<String>,
}

impl Registry {
	pub fn new(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			..Self::default()
		}
	}
}
