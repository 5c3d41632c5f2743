//! URI format strings.
//!
//! A URI format string marks the identifier position with `$1`, e.g.
//! `http://purl.obolibrary.org/obo/GO_$1`. A URI prefix is the same string
//! with a single trailing `$1` removed, suitable for prefix maps.
//!
//! Format sources, by name:
//!
//! | Source          | Built from |
//! |-----------------|------------|
//! | `default`       | [`ResolutionContext::default_format`] |
//! | `obofoundry`    | OBO PURL base + OBO Foundry prefix + `_` |
//! | `prefixcommons` | the Prefix Commons `formatter` field |
//! | `miriam`        | identifiers.org base + MIRIAM prefix + `:` |
//! | `ols`           | OLS base + OLS prefix + `/terms?iri=` + OBO PURL |

use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::context::ResolutionContext;
use crate::metaprefix::{MIRIAM, OBOFOUNDRY, OLS, PREFIXCOMMONS};

/// Identifier placeholder in format strings.
pub const PLACEHOLDER: &str = "$1";

impl ResolutionContext {
	/// OBO PURL URI prefix, e.g. `http://purl.obolibrary.org/obo/NCBITaxon_`.
	pub fn obofoundry_format(&self, prefix: &str) -> Option<String> {
		let obo_prefix = self.obofoundry_prefix(prefix)?;
		Some(format!("{}{obo_prefix}_", self.config.urls.obofoundry))
	}

	pub fn obofoundry_formatter(&self, prefix: &str) -> Option<String> {
		self.obofoundry_format(prefix).map(with_placeholder)
	}

	/// identifiers.org URI prefix, e.g. `https://identifiers.org/taxonomy:`.
	///
	/// The MIRIAM prefix is uppercased when the namespace is embedded in the
	/// local identifier. Not every such resource capitalizes that way, but
	/// most do.
	pub fn miriam_url_prefix(&self, prefix: &str) -> Option<String> {
		let mut miriam_prefix = self.identifiers_org_prefix(prefix)?;
		if self.namespace_in_lui(prefix) == Some(true) {
			miriam_prefix = miriam_prefix.to_uppercase();
		}
		Some(format!("{}{miriam_prefix}:", self.config.urls.identifiers_org))
	}

	pub fn miriam_format(&self, prefix: &str) -> Option<String> {
		self.miriam_url_prefix(prefix).map(with_placeholder)
	}

	/// OLS term page URI prefix.
	///
	/// Only available for ontologies with OBO PURLs; OLS has no normal form
	/// for anything else.
	pub fn ols_url_prefix(&self, prefix: &str) -> Option<String> {
		let ols_prefix = self.ols_prefix(prefix)?;
		let obo_format = self.obofoundry_format(prefix)?;
		Some(format!("{}{ols_prefix}/terms?iri={obo_format}", self.config.urls.ols))
	}

	pub fn ols_format(&self, prefix: &str) -> Option<String> {
		self.ols_url_prefix(prefix).map(with_placeholder)
	}

	pub fn prefixcommons_format(&self, prefix: &str) -> Option<&str> {
		self.resource_for(prefix)?
			.external_record(PREFIXCOMMONS)
			.get_str("formatter")
	}

	/// Returns the best format string using the configured source priority.
	pub fn format(&self, prefix: &str) -> Option<String> {
		self.format_with(prefix, &self.config.format_priority)
	}

	/// Returns the first format string produced by a source in `priority`.
	pub fn format_with<S: AsRef<str>>(&self, prefix: &str, priority: &[S]) -> Option<String> {
		self.resource_for(prefix)?;
		priority
			.iter()
			.find_map(|source| self.format_from(prefix, source.as_ref()))
	}

	fn format_from(&self, prefix: &str, source: &str) -> Option<String> {
		match source {
			"default" => self.default_format(prefix).map(str::to_owned),
			OBOFOUNDRY => self.obofoundry_formatter(prefix),
			PREFIXCOMMONS => self.prefixcommons_format(prefix).map(str::to_owned),
			MIRIAM => self.miriam_format(prefix),
			OLS => self.ols_format(prefix),
			_ => {
				tracing::debug!(source, "unknown format source");
				None
			}
		}
	}

	/// Returns the URI prefix for `prefix` using the configured priority.
	pub fn format_url(&self, prefix: &str) -> Option<String> {
		self.format_url_with(prefix, &self.config.format_priority)
	}

	/// Returns the format string with its trailing `$1` removed.
	///
	/// Absent when the format does not end with exactly one placeholder.
	pub fn format_url_with<S: AsRef<str>>(&self, prefix: &str, priority: &[S]) -> Option<String> {
		let format = self.format_with(prefix, priority)?;
		match format.strip_suffix(PLACEHOLDER) {
			Some(url) if !url.contains(PLACEHOLDER) => Some(url.to_owned()),
			_ => {
				tracing::debug!(prefix, format = %format, "format is not a plain URI prefix");
				None
			}
		}
	}

	/// Builds a prefix map from canonical prefixes to URI prefixes.
	///
	/// With `include_synonyms`, every curated synonym maps to its resource's
	/// URI prefix too. `remapping` renames keys after the map is assembled.
	pub fn format_urls<S: AsRef<str>>(
		&self,
		priority: &[S],
		include_synonyms: bool,
		remapping: Option<&BTreeMap<String, String>>,
	) -> BTreeMap<String, String> {
		let mut rv = BTreeMap::new();
		for (prefix, resource) in self.resources() {
			let Some(url) = self.format_url_with(prefix, priority) else {
				continue;
			};
			if include_synonyms {
				for synonym in resource.synonyms() {
					rv.insert(synonym.to_owned(), url.clone());
				}
			}
			rv.insert(prefix.clone(), url);
		}

		match remapping {
			Some(remapping) => rv
				.into_iter()
				.map(|(prefix, url)| (remapping.get(&prefix).cloned().unwrap_or(prefix), url))
				.collect(),
			None => rv,
		}
	}

	/// Prefix list for the default priority, longest prefixes first.
	pub fn default_prefix_list(&self) -> Vec<(String, String)> {
		prepare_prefix_list(self.format_urls(&self.config.format_priority, false, None))
	}
}

/// Orders a prefix map by descending prefix length.
///
/// Longer prefixes come first so that matching URIs against the list never
/// stops at a shorter prefix of the intended one. Ties keep map order.
pub fn prepare_prefix_list(prefix_map: BTreeMap<String, String>) -> Vec<(String, String)> {
	let mut items: Vec<_> = prefix_map.into_iter().collect();
	items.sort_by_key(|(prefix, _)| Reverse(prefix.chars().count()));
	items
}

fn with_placeholder(mut url: String) -> String {
	url.push_str(PLACEHOLDER);
	url
}
