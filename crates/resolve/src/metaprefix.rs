//! Metaprefixes of the external authorities the resolver knows by name.
//!
//! Resolution order is configurable (see [`crate::ResolverConfig`]), but a few
//! rules are tied to a specific authority's record layout and reference these
//! names directly.

pub const MIRIAM: &str = "miriam";
pub const OLS: &str = "ols";
pub const OBOFOUNDRY: &str = "obofoundry";
pub const GO: &str = "go";
pub const WIKIDATA: &str = "wikidata";
pub const NCBI: &str = "ncbi";
pub const BIOPORTAL: &str = "bioportal";
pub const N2T: &str = "n2t";
pub const PREFIXCOMMONS: &str = "prefixcommons";
pub const CELLOSAURUS: &str = "cellosaurus";
pub const FAIRSHARING: &str = "fairsharing";
