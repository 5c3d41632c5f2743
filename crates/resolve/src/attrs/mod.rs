//! Attribute resolution.
//!
//! Every descriptive attribute resolves the same way: the resource's local
//! override, else the first external authority in the attribute's precedence
//! list that carries the field. The precedence lists come from
//! [`crate::config::Precedence`]. Unknown prefixes resolve to `None` (or
//! `false` for predicates); nothing here fails.

mod license;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use bioreg_schema::{Field, FieldValue};
use fancy_regex::Regex as PatternRegex;
use regex::Regex;

pub use self::license::normalize_license;
use crate::context::ResolutionContext;
use crate::metaprefix::{MIRIAM, NCBI, OBOFOUNDRY, OLS, PREFIXCOMMONS, WIKIDATA};


/// Loose email shape check; rejects obvious junk, not every invalid address.
static EMAIL_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[\w.\-]+@[\w.\-]+[.]\w{2,5}$").expect("email pattern compiles"));

impl ResolutionContext {
	/// Resolves `field` for `prefix` through the local override, then `precedence`.
	pub fn resolve_field<S: AsRef<str>>(&self, prefix: &str, field: Field, precedence: &[S]) -> Option<FieldValue<'_>> {
		self.resource_for(prefix)?.field_with_fallback(field, precedence)
	}

	fn resolve_text<S: AsRef<str>>(&self, prefix: &str, field: Field, precedence: &[S]) -> Option<&str> {
		self.resolve_field(prefix, field, precedence)
			.and_then(FieldValue::as_str)
	}

	pub fn name(&self, prefix: &str) -> Option<&str> {
		self.resolve_text(prefix, Field::Name, &self.config.precedence.name)
	}

	pub fn description(&self, prefix: &str) -> Option<&str> {
		self.resolve_text(prefix, Field::Description, &self.config.precedence.description)
	}

	pub fn homepage(&self, prefix: &str) -> Option<&str> {
		self.resolve_text(prefix, Field::Homepage, &self.config.precedence.homepage)
	}

	/// Returns the contact email, if one is listed and looks like an address.
	///
	/// Malformed values are logged and dropped rather than returned.
	pub fn email(&self, prefix: &str) -> Option<&str> {
		let email = self.resolve_text(prefix, Field::Contact, &self.config.precedence.email)?;
		if !EMAIL_RE.is_match(email) {
			tracing::warn!(prefix, email, "invalid email address listed");
			return None;
		}
		Some(email)
	}

	/// Returns the regular expression that local identifiers must match.
	pub fn pattern_for(&self, prefix: &str) -> Option<&str> {
		self.resolve_text(prefix, Field::Pattern, &self.config.precedence.pattern)
	}

	/// Returns the compiled pattern for `prefix`, compiling it on first use.
	///
	/// Look-around and backreferences are supported. Patterns that still fail
	/// to compile are logged once and resolve to `None` from then on.
	pub fn compiled_pattern_for(&self, prefix: &str) -> Option<&PatternRegex> {
		let canonical = self.resolve_prefix(prefix)?;
		let cell = self.patterns.get(canonical)?;
		cell.get_or_init(|| {
			let pattern = self.pattern_for(canonical)?;
			match PatternRegex::new(pattern) {
				Ok(re) => Some(re),
				Err(error) => {
					tracing::warn!(prefix = canonical, pattern, %error, "pattern does not compile");
					None
				}
			}
		})
		.as_ref()
	}

	/// Returns whether the namespace appears inside local identifiers.
	pub fn namespace_in_lui(&self, prefix: &str) -> Option<bool> {
		self.resolve_field(prefix, Field::NamespaceInLui, &self.config.precedence.namespace_in_lui)
			.and_then(FieldValue::as_bool)
	}

	/// Returns an example local identifier.
	pub fn example(&self, prefix: &str) -> Option<&str> {
		let resource = self.resource_for(prefix)?;
		resource
			.example
			.as_deref()
			.or_else(|| resource.external_record(MIRIAM).get_str("sampleId"))
			.or_else(|| resource.external_record(NCBI).get_str("example"))
	}

	/// Returns the normalized license code.
	///
	/// Only the configured authorities are consulted; the first one that
	/// lists a license wins.
	pub fn license(&self, prefix: &str) -> Option<&str> {
		let resource = self.resource_for(prefix)?;
		self.config
			.precedence
			.license
			.iter()
			.find_map(|metaprefix| resource.external_record(metaprefix).get_str("license"))
			.map(normalize_license)
	}

	/// Returns true if the registry or any deprecation source marks the resource deprecated.
	pub fn is_deprecated(&self, prefix: &str) -> bool {
		let Some(resource) = self.resource_for(prefix) else {
			return false;
		};
		resource.deprecated == Some(true)
			|| self
				.config
				.deprecation_sources
				.iter()
				.any(|metaprefix| resource.external_record(metaprefix).is_truthy("deprecated"))
	}

	/// Returns whether the resource is proprietary; unannotated means no.
	pub fn is_proprietary(&self, prefix: &str) -> Option<bool> {
		Some(self.resource_for(prefix)?.proprietary.unwrap_or(false))
	}

	/// Returns true if the resource is explicitly noted to mint no terms of its own.
	pub fn has_no_terms(&self, prefix: &str) -> bool {
		self.resource_for(prefix)
			.and_then(|resource| resource.no_own_terms)
			.unwrap_or(false)
	}

	pub fn is_provider(&self, prefix: &str) -> bool {
		self.resource_for(prefix)
			.is_some_and(|resource| resource.kind.as_deref() == Some("provider"))
	}

	/// Returns the prefix the given provider resolves identifiers for.
	pub fn provides_for(&self, prefix: &str) -> Option<&str> {
		self.resource_for(prefix)?.provides.as_deref()
	}

	/// Download link for the latest OBO file.
	pub fn obo_download(&self, prefix: &str) -> Option<&str> {
		let resource = self.resource_for(prefix)?;
		resource
			.download_obo
			.as_deref()
			.or_else(|| resource.external_record(OBOFOUNDRY).get_str("download.obo"))
	}

	/// Download link for the latest OBO Graph JSON file.
	pub fn json_download(&self, prefix: &str) -> Option<&str> {
		let resource = self.resource_for(prefix)?;
		resource
			.download_json
			.as_deref()
			.or_else(|| resource.external_record(OBOFOUNDRY).get_str("download.json"))
	}

	/// Download link for the latest OWL file.
	pub fn owl_download(&self, prefix: &str) -> Option<&str> {
		let resource = self.resource_for(prefix)?;
		let ols = resource.external_record(OLS);
		resource
			.download_owl
			.as_deref()
			.or_else(|| ols.get_str("version.iri"))
			.or_else(|| ols.get_str("download"))
			.or_else(|| resource.external_record(OBOFOUNDRY).get_str("download.owl"))
	}

	/// Returns the first-party URI format string.
	pub fn default_format(&self, prefix: &str) -> Option<&str> {
		let resource = self.resource_for(prefix)?;
		resource
			.url
			.as_deref()
			.or_else(|| resource.external_record(MIRIAM).get_str("provider_url"))
			.or_else(|| resource.external_record(PREFIXCOMMONS).get_str("formatter"))
			.or_else(|| resource.external_record(WIKIDATA).get_str("format"))
	}

	/// Returns the version OLS reports for `prefix`.
	pub fn version(&self, prefix: &str) -> Option<&str> {
		let canonical = self.resolve_prefix(prefix)?;
		self.versions().get(canonical).map(String::as_str)
	}

	/// Canonical prefix → version, for every resource OLS reports a version for.
	pub fn versions(&self) -> &BTreeMap<String, String> {
		self.versions.get_or_init(|| {
			self.resources()
				.iter()
				.filter_map(|(prefix, resource)| {
					let version = resource.external_record(OLS).get_str("version")?;
					Some((prefix.clone(), version.to_owned()))
				})
				.collect()
		})
	}
}
