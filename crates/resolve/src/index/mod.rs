//! Prefix normalization index.
//!
//! # Purpose
//!
//! Namespaces are written many ways: `GO`, `go`, `ec-code`, `EC_CODE`,
//! `ncbi.taxon`. The index maps every curated spelling to the one canonical
//! prefix the registry keys its resources by.
//!
//! # Mental Model
//!
//! 1. **Canonicalization:** [`canonicalize`] lowercases a spelling and deletes
//!    spaces, periods, hyphens, underscores and slashes. Two spellings are
//!    equivalent iff they canonicalize identically.
//! 2. **Build Phase:** [`NormalizationIndexBuilder`] registers each canonical
//!    prefix against itself, then each of its curated synonyms. A key may be
//!    claimed by one canonical prefix only.
//! 3. **Consumption:** [`NormalizationIndex::resolve`] canonicalizes the query
//!    and reads the frozen map. There is no fuzzy fallback.
//!
//! # Invariants
//!
//! - A canonical key maps to exactly one canonical prefix.
//!   - Enforced in: [`NormalizationIndexBuilder::insert`].
//!   - Failure symptom: [`IndexError::Collision`] aborts the build.
//!
//! - Every canonical prefix resolves to itself.
//!   - Enforced in: [`NormalizationIndex::from_resources`] (self-mapping first).
//!
//! - External prefixes are never registered automatically; only curated
//!   synonyms participate in resolution. Missing ones are reported at debug
//!   level so curators can promote them.

mod build;
mod error;
mod types;

pub use build::{InsertAction, NormalizationIndexBuilder};
pub use error::IndexError;
pub use types::{NormalizationIndex, canonicalize};
