use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::test_fixtures::context;

fn parse(curie: &str, sep: &str) -> Option<(String, String)> {
	context().parse_curie(curie, sep).map(Curie::into_parts)
}

fn pair(prefix: &str, identifier: &str) -> Option<(String, String)> {
	Some((prefix.to_owned(), identifier.to_owned()))
}

#[rstest]
#[case("pdb:1234", pair("pdb", "1234"))]
#[case("go:1234", pair("go", "1234"))]
#[case("go:GO:1234", pair("go", "1234"))]
#[case("go:go:1234", pair("go", "1234"))]
#[case("GO:GO:1234", pair("go", "1234"))]
#[case("fbbt:FBbt:1234", pair("fbbt", "1234"))]
#[case("fbbt:fbbt:1234", pair("fbbt", "1234"))]
#[case("fbbt:1234", pair("fbbt", "1234"))]
#[case("go.ref:GO_REF:1234", pair("go.ref", "1234"))]
#[case("go.ref:1234", pair("go.ref", "1234"))]
#[case("taxonomy:9606", pair("ncbitaxon", "9606"))]
#[case("chebi:CHEBI:1234", pair("chebi", "1234"))]
fn parse_colon_curies(#[case] curie: &str, #[case] expected: Option<(String, String)>) {
	assert_eq!(parse(curie, ":"), expected);
}

#[test]
fn parse_alternate_separators() {
	assert_eq!(parse("GO_1234", "_"), pair("go", "1234"));
	assert_eq!(parse("NCBITaxon_9606", "_"), pair("ncbitaxon", "9606"));
	assert_eq!(parse("pdb/2gc4", "/"), pair("pdb", "2gc4"));
}

#[test]
fn splits_on_first_separator_only() {
	assert_eq!(parse("pdb:1234:extra", ":"), pair("pdb", "1234:extra"));
}

#[test]
fn failures_are_never_partial() {
	assert_eq!(parse("pdb1234", ":"), None);
	assert_eq!(parse("nope:1234", ":"), None);
	assert_eq!(parse(":1234", ":"), None);
	assert_eq!(parse("pdb:1234", ""), None);
}

#[test]
fn banana_strip_takes_precedence_and_happens_once() {
	// Banana removed, then the remaining "fbbt:" is identifier content.
	assert_eq!(parse("fbbt:FBbt:fbbt:1", ":"), pair("fbbt", "fbbt:1"));
	// Banana is case-sensitive; self-prefix strip applies instead.
	assert_eq!(parse("go.ref:go_ref:1", ":"), pair("go.ref", "go_ref:1"));
	assert_eq!(parse("go.ref:GO.REF:1", ":"), pair("go.ref", "1"));
}

#[rstest]
#[case("pdb:1234", ":", Some("pdb:1234"))]
#[case("pubchem:1234", ":", Some("pubchem.compound:1234"))]
#[case("GO:GO:1234", ":", Some("go:1234"))]
#[case("go.ref:GO_REF:1234", ":", Some("go.ref:1234"))]
#[case("GO_1234", "_", Some("go:1234"))]
#[case("EC_CODE/1.1.1.1", "/", Some("eccode:1.1.1.1"))]
#[case("nope:1", ":", None)]
fn normalize_rejoins_with_colon(#[case] curie: &str, #[case] sep: &str, #[case] expected: Option<&str>) {
	assert_eq!(context().normalize_curie(curie, sep).as_deref(), expected);
}

#[test]
fn normalize_parsed_pair() {
	let ctx = context();
	assert_eq!(ctx.normalize_parsed_curie("NCBITaxon", "NCBITaxon:9606"), Some(Curie::new("ncbitaxon", "9606")));
	assert_eq!(ctx.normalize_parsed_curie("unknown", "1"), None);
}

#[test]
fn strip_ignores_case_char_by_char() {
	assert_eq!(strip_prefix_ignore_case("GO:1", "go"), Some(":1"));
	assert_eq!(strip_prefix_ignore_case("G", "go"), None);
	assert_eq!(strip_prefix_ignore_case("ÉCO:1", "éco"), Some(":1"));
}
