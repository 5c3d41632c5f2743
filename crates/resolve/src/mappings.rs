//! Cross-registry prefix mappings.
//!
//! For each resource, the mapping table says how every external authority
//! spells its prefix. The curated `mappings` table seeds the result; values
//! computed from the imported external records are then written on top, so a
//! computed value replaces a curated one under the same metaprefix.

use std::collections::BTreeMap;

use bioreg_schema::ExternalRecord;

use crate::context::ResolutionContext;
use crate::metaprefix::{BIOPORTAL, FAIRSHARING, MIRIAM, N2T, OBOFOUNDRY, OLS, WIKIDATA};

impl ResolutionContext {
	/// Returns metaprefix → external prefix for `prefix`.
	///
	/// `None` only when `prefix` itself is unknown.
	pub fn mappings_for(&self, prefix: &str) -> Option<BTreeMap<String, String>> {
		let resource = self.resource_for(prefix)?;
		let mut rv = resource.mappings.clone().unwrap_or_default();

		for metaprefix in self.metaregistry().keys() {
			let external = resource.external_record(metaprefix);
			if external.is_empty() {
				continue;
			}
			if let Some(value) = external_prefix(metaprefix, external) {
				rv.insert(metaprefix.clone(), value);
			}
		}

		Some(rv)
	}

	/// Returns the prefix `metaprefix` uses for `prefix`, if mapped.
	pub fn mapped_prefix(&self, prefix: &str, metaprefix: &str) -> Option<String> {
		self.mappings_for(prefix)?.remove(metaprefix)
	}

	/// Returns the identifiers.org (MIRIAM) prefix.
	pub fn identifiers_org_prefix(&self, prefix: &str) -> Option<String> {
		self.mapped_prefix(prefix, MIRIAM)
	}

	pub fn n2t_prefix(&self, prefix: &str) -> Option<String> {
		self.mapped_prefix(prefix, N2T)
	}

	pub fn wikidata_prefix(&self, prefix: &str) -> Option<String> {
		self.mapped_prefix(prefix, WIKIDATA)
	}

	pub fn bioportal_prefix(&self, prefix: &str) -> Option<String> {
		self.mapped_prefix(prefix, BIOPORTAL)
	}

	/// Returns the OBO Foundry prefix in its preferred capitalization.
	pub fn obofoundry_prefix(&self, prefix: &str) -> Option<String> {
		self.mapped_prefix(prefix, OBOFOUNDRY)
	}

	pub fn ols_prefix(&self, prefix: &str) -> Option<String> {
		self.mapped_prefix(prefix, OLS)
	}

	pub fn fairsharing_prefix(&self, prefix: &str) -> Option<String> {
		self.mapped_prefix(prefix, FAIRSHARING)
	}

	/// Returns canonical prefix → `metaprefix`'s prefix for every mapped resource.
	pub fn registry_map(&self, metaprefix: &str) -> BTreeMap<String, String> {
		self.resources()
			.keys()
			.filter_map(|prefix| Some((prefix.clone(), self.mapped_prefix(prefix, metaprefix)?)))
			.collect()
	}
}

/// Computes the prefix an authority uses from its own record.
///
/// Records without a usable field contribute nothing.
fn external_prefix(metaprefix: &str, external: &ExternalRecord) -> Option<String> {
	match metaprefix {
		OBOFOUNDRY => external
			.get_str("preferredPrefix")
			.map(str::to_owned)
			.or_else(|| external.get_str("prefix").map(str::to_uppercase)),
		_ => external.get_str("prefix").map(str::to_owned),
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use pretty_assertions::assert_eq;

	use crate::test_fixtures::context;

	fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
		entries.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
	}

	#[test]
	fn computed_values_overwrite_curated_ones() {
		assert_eq!(
			context().mappings_for("go"),
			Some(map(&[
				("fairsharing", "FAIRsharing.6xq0ee"),
				("miriam", "go"),
				("n2t", "go"),
				("obofoundry", "GO"),
				("ols", "go"),
				("wikidata", "P686"),
			]))
		);
	}

	#[test]
	fn obofoundry_falls_back_to_uppercased_prefix() {
		let ctx = context();
		assert_eq!(ctx.obofoundry_prefix("chebi").as_deref(), Some("CHEBI"));
		assert_eq!(ctx.obofoundry_prefix("ncbitaxon").as_deref(), Some("NCBITaxon"));
	}

	#[test]
	fn per_registry_shortcuts() {
		let ctx = context();
		assert_eq!(ctx.identifiers_org_prefix("ncbitaxon").as_deref(), Some("taxonomy"));
		assert_eq!(ctx.identifiers_org_prefix("chebi").as_deref(), Some("chebi"));
		assert_eq!(ctx.wikidata_prefix("ncbitaxon").as_deref(), Some("P685"));
		assert_eq!(ctx.bioportal_prefix("sty").as_deref(), Some("STY"));
		assert_eq!(ctx.fairsharing_prefix("go").as_deref(), Some("FAIRsharing.6xq0ee"));
		assert_eq!(ctx.ols_prefix("pdb"), None);
		assert_eq!(ctx.n2t_prefix("pdb"), None);
	}

	#[test]
	fn resource_without_records_maps_to_empty_table() {
		assert_eq!(context().mappings_for("eccode"), Some(BTreeMap::new()));
	}

	#[test]
	fn unknown_prefix_has_no_mappings() {
		let ctx = context();
		assert_eq!(ctx.mappings_for("nope"), None);
		assert_eq!(ctx.mapped_prefix("nope", "miriam"), None);
	}

	#[test]
	fn registry_map_covers_every_mapped_resource() {
		assert_eq!(
			context().registry_map("wikidata"),
			map(&[("go", "P686"), ("ncbigene", "P351"), ("ncbitaxon", "P685")])
		);
	}
}
