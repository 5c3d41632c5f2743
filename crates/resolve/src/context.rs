//! The resolution context.
//!
//! A [`ResolutionContext`] is built once from a store snapshot and then only
//! read. It owns the normalization index (built eagerly, so an ambiguous
//! registry is rejected before any lookup runs) and the derived caches that
//! are filled lazily on first use.
//!
//! # Concurrency
//!
//! The context is `Send + Sync`. Lazy caches sit behind [`OnceLock`]: racing
//! first readers may each compute a value, exactly one is published, and every
//! caller observes the published one. Computations are pure, so a lost race
//! only costs time.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, OnceLock};

use bioreg_schema::{Registry, RegistryStore, Resource};
use fancy_regex::Regex;
use rustc_hash::FxHashMap;

use crate::config::ResolverConfig;
use crate::index::{IndexError, NormalizationIndex};

/// Immutable resolution state over one registry snapshot.
pub struct ResolutionContext {
	store: Arc<dyn RegistryStore>,
	pub(crate) config: ResolverConfig,
	index: NormalizationIndex,
	/// One cell per canonical prefix, filled on first pattern request.
	pub(crate) patterns: FxHashMap<Box<str>, OnceLock<Option<Regex>>>,
	pub(crate) versions: OnceLock<BTreeMap<String, String>>,
}

impl ResolutionContext {
	/// Builds a context with the default configuration.
	pub fn new(store: impl RegistryStore + 'static) -> Result<Self, IndexError> {
		Self::with_config(store, ResolverConfig::default())
	}

	pub fn with_config(store: impl RegistryStore + 'static, config: ResolverConfig) -> Result<Self, IndexError> {
		Self::from_shared(Arc::new(store), config)
	}

	/// Builds a context over a store that is shared with other owners.
	pub fn from_shared(store: Arc<dyn RegistryStore>, config: ResolverConfig) -> Result<Self, IndexError> {
		let resources = store.all_resources();
		let index = NormalizationIndex::from_resources(resources, &config.synonym_scan)?;
		let patterns = resources
			.keys()
			.map(|prefix| (Box::from(prefix.as_str()), OnceLock::new()))
			.collect();

		tracing::debug!(resources = resources.len(), keys = index.len(), "built normalization index");

		Ok(Self {
			store,
			config,
			index,
			patterns,
			versions: OnceLock::new(),
		})
	}

	pub fn config(&self) -> &ResolverConfig {
		&self.config
	}

	pub fn index(&self) -> &NormalizationIndex {
		&self.index
	}

	/// Canonical prefix → resource, for every resource in the snapshot.
	pub fn resources(&self) -> &BTreeMap<String, Resource> {
		self.store.all_resources()
	}

	/// Metaprefix → metaregistry record.
	pub fn metaregistry(&self) -> &BTreeMap<String, Registry> {
		self.store.all_metaregistry_entries()
	}

	/// Returns the canonical prefix for any curated spelling of a prefix.
	pub fn resolve_prefix(&self, prefix: &str) -> Option<&str> {
		self.index.resolve(prefix)
	}

	/// Returns the resource for `prefix` after normalizing it.
	pub fn resource_for(&self, prefix: &str) -> Option<&Resource> {
		let canonical = self.resolve_prefix(prefix)?;
		self.resources().get(canonical)
	}

	/// Returns the resource for `prefix`.
	#[deprecated(note = "use ResolutionContext::resource_for instead")]
	pub fn get(&self, prefix: &str) -> Option<&Resource> {
		tracing::warn!(prefix, "ResolutionContext::get is deprecated; use resource_for");
		self.resource_for(prefix)
	}

	/// Returns the curated synonyms of `prefix`.
	pub fn synonyms_for(&self, prefix: &str) -> Option<BTreeSet<String>> {
		let resource = self.resource_for(prefix)?;
		Some(resource.synonyms().map(str::to_owned).collect())
	}
}

impl std::fmt::Debug for ResolutionContext {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ResolutionContext")
			.field("resources", &self.resources().len())
			.field("keys", &self.index.len())
			.field("config", &self.config)
			.finish_non_exhaustive()
	}
}
