//! Resolver configuration.
//!
//! Every precedence list and base URL the resolver uses lives here.
//! [`ResolverConfig::default`] reproduces the registry's published behavior;
//! deployments that trust authorities differently can deserialize an override
//! (any omitted field keeps its default).

use serde::{Deserialize, Serialize};

use crate::metaprefix::{BIOPORTAL, CELLOSAURUS, GO, MIRIAM, N2T, NCBI, OBOFOUNDRY, OLS, WIKIDATA};

/// Tunables for a [`crate::ResolutionContext`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
	/// Per-attribute fallback order.
	pub precedence: Precedence,
	/// Authorities whose `deprecated` flag marks a resource deprecated.
	pub deprecation_sources: Vec<String>,
	/// Authorities whose `prefix` field is checked against the synonym index
	/// while it is built.
	pub synonym_scan: Vec<String>,
	/// Format sources tried by [`crate::ResolutionContext::format`].
	pub format_priority: Vec<String>,
	pub urls: BaseUrls,
}

/// Fallback order per attribute, consulted after the local override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Precedence {
	pub name: Vec<String>,
	pub description: Vec<String>,
	pub homepage: Vec<String>,
	pub email: Vec<String>,
	pub pattern: Vec<String>,
	pub namespace_in_lui: Vec<String>,
	/// Authorities whose `license` field is read; there is no local fallback.
	pub license: Vec<String>,
}

/// Base URLs for derived URI format strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseUrls {
	pub obofoundry: String,
	pub identifiers_org: String,
	pub ols: String,
}

impl Default for ResolverConfig {
	fn default() -> Self {
		Self {
			precedence: Precedence::default(),
			deprecation_sources: owned(&[OBOFOUNDRY, OLS, MIRIAM]),
			synonym_scan: owned(&[MIRIAM, OLS, OBOFOUNDRY, GO]),
			format_priority: owned(&["default", OBOFOUNDRY, "prefixcommons", MIRIAM, OLS]),
			urls: BaseUrls::default(),
		}
	}
}

impl Default for Precedence {
	fn default() -> Self {
		Self {
			name: owned(&[OBOFOUNDRY, OLS, WIKIDATA, GO, NCBI, BIOPORTAL, MIRIAM]),
			description: owned(&[MIRIAM, OLS, OBOFOUNDRY, WIKIDATA]),
			homepage: owned(&[OBOFOUNDRY, OLS, MIRIAM, N2T, WIKIDATA, GO, NCBI, CELLOSAURUS]),
			email: owned(&[OBOFOUNDRY, OLS]),
			pattern: owned(&[MIRIAM, WIKIDATA]),
			namespace_in_lui: owned(&[MIRIAM]),
			license: owned(&[OBOFOUNDRY, OLS]),
		}
	}
}

impl Default for BaseUrls {
	fn default() -> Self {
		Self {
			obofoundry: "http://purl.obolibrary.org/obo/".to_owned(),
			identifiers_org: "https://identifiers.org/".to_owned(),
			ols: "https://www.ebi.ac.uk/ols/ontologies/".to_owned(),
		}
	}
}

fn owned(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| (*s).to_owned()).collect()
}
