//! Prefix normalization and CURIE resolution.
//!
//! Everything here reads one registry snapshot through a [`ResolutionContext`]:
//! build it from a [`RegistryStore`](bioreg_schema::RegistryStore), then ask it
//! to resolve prefixes, parse CURIEs, or reconcile attributes that several
//! external authorities describe differently.
//!
//! ```ignore
//! let ctx = ResolutionContext::new(store)?;
//! assert_eq!(ctx.resolve_prefix("GO"), Some("go"));
//! assert_eq!(ctx.normalize_curie("GO:GO:0006915", ":").as_deref(), Some("go:0006915"));
//! ```
//!
//! # Sub-modules
//!
//! - [`index`] - Canonicalization and the synonym → prefix lookup table
//! - [`curie`] - CURIE parsing and redundant-prefix stripping
//! - [`attrs`] - Attribute resolution with per-field source precedence
//! - [`formats`] - URI format strings and prefix maps
//! - [`config`] - Precedence lists and base URLs
//! - [`metaprefix`] - Well-known external authority keys
//!
//! Banana lookup and cross-registry mappings are methods on
//! [`ResolutionContext`] directly.

pub mod attrs;
mod banana;
pub mod config;
mod context;
pub mod curie;
pub mod formats;
pub mod index;
mod mappings;
pub mod metaprefix;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use attrs::normalize_license;
pub use bioreg_schema;
pub use config::{BaseUrls, Precedence, ResolverConfig};
pub use context::ResolutionContext;
pub use curie::Curie;
pub use formats::prepare_prefix_list;
pub use index::{IndexError, NormalizationIndex, NormalizationIndexBuilder, canonicalize};
