//! Whole-registry properties checked against the fixture snapshot.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use bioreg_resolve::bioreg_schema::{InMemoryStore, Resource};
use bioreg_resolve::{IndexError, ResolutionContext, canonicalize};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use {fancy_regex as _, regex as _, rstest as _, rustc_hash as _, serde as _, serde_json as _};
use {thiserror as _, toml as _, tracing as _};

static CONTEXT: LazyLock<ResolutionContext> = LazyLock::new(|| {
	let _ = tracing_subscriber::fmt::try_init();
	let store = InMemoryStore::from_json(
		include_str!("fixtures/registry.json"),
		include_str!("fixtures/metaregistry.json"),
	)
	.expect("fixture registry decodes");
	ResolutionContext::new(store).expect("fixture registry has no collisions")
});

/// Every curated spelling paired with the prefix it belongs to.
fn spellings() -> Vec<(String, String)> {
	CONTEXT
		.resources()
		.iter()
		.flat_map(|(prefix, resource)| {
			std::iter::once(prefix.as_str())
				.chain(resource.synonyms())
				.map(move |spelling| (spelling.to_owned(), prefix.clone()))
		})
		.collect()
}

fn scramble(raw: &str, upper: &[bool], separators: &[(usize, char)]) -> String {
	let mut chars: Vec<char> = raw
		.chars()
		.zip(upper.iter().copied().chain(std::iter::repeat(false)))
		.map(|(c, up)| if up { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
		.collect();
	for &(at, sep) in separators {
		chars.insert(at % (chars.len() + 1), sep);
	}
	chars.into_iter().collect()
}

proptest! {
	#[test]
	fn resolution_ignores_case_and_separators(
		(spelling, prefix) in prop::sample::select(spellings()),
		upper in prop::collection::vec(any::<bool>(), 0..24),
		separators in prop::collection::vec((0usize..32, prop::sample::select(vec![' ', '.', '-', '_', '/'])), 0..4),
	) {
		let variant = scramble(&spelling, &upper, &separators);
		prop_assert_eq!(CONTEXT.resolve_prefix(&variant), Some(prefix.as_str()));
	}

	#[test]
	fn resolution_is_idempotent(raw in "[A-Za-z._ -]{0,12}") {
		if let Some(canonical) = CONTEXT.resolve_prefix(&raw) {
			prop_assert_eq!(CONTEXT.resolve_prefix(canonical), Some(canonical));
		}
	}
}

#[test]
fn every_index_value_is_a_registered_prefix() {
	for (key, prefix) in CONTEXT.index().iter() {
		assert!(CONTEXT.resources().contains_key(prefix), "{key} -> {prefix}");
		assert_eq!(canonicalize(key), key);
	}
}

#[test]
fn colliding_spellings_fail_the_build() {
	let store = InMemoryStore::new()
		.with_resource(Resource::new("ec-code"))
		.with_resource(Resource::new("eccode"));

	let err = ResolutionContext::new(store).unwrap_err();
	assert_eq!(
		err,
		IndexError::Collision {
			key: "eccode".to_owned(),
			raw: "eccode".to_owned(),
			existing: "ec-code".to_owned(),
			incoming: "eccode".to_owned(),
		}
	);
}

#[test]
fn shared_synonym_fails_the_build() {
	let mut chebi = Resource::new("chebi");
	chebi.synonyms = Some(BTreeSet::from(["CHEMBL".to_owned()]));
	let store = InMemoryStore::new()
		.with_resource(chebi)
		.with_resource(Resource::new("chembl"));

	assert!(matches!(
		ResolutionContext::new(store),
		Err(IndexError::Collision { .. })
	));
}

#[test]
fn unknown_prefixes_resolve_to_nothing() {
	assert_eq!(CONTEXT.resolve_prefix("nope"), None);
	assert_eq!(CONTEXT.mappings_for("nope"), None);
	assert_eq!(CONTEXT.parse_curie("nope:1", ":"), None);
	assert!(!CONTEXT.is_deprecated("nope"));
}

#[test]
fn provider_targets_resolve() {
	for (prefix, resource) in CONTEXT.resources() {
		if let Some(target) = resource.provides.as_deref() {
			assert!(CONTEXT.resolve_prefix(target).is_some(), "{prefix} provides for unknown {target}");
		}
	}
}

#[test]
fn normalized_curies_use_canonical_prefixes() {
	for (spelling, prefix) in spellings() {
		let curie = format!("{spelling}:123");
		assert_eq!(CONTEXT.normalize_curie(&curie, ":"), Some(format!("{prefix}:123")));
	}
}
