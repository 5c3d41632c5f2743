//! The read-only registry store collaborator.

use std::collections::BTreeMap;

use crate::registry::Registry;
use crate::resource::Resource;

/// Supplies fully loaded registry contents.
///
/// Implementations are read-only: the resolver never asks a store to change.
pub trait RegistryStore: Send + Sync {
	/// Canonical prefix → resource.
	fn all_resources(&self) -> &BTreeMap<String, Resource>;

	/// Metaprefix → metaregistry record.
	fn all_metaregistry_entries(&self) -> &BTreeMap<String, Registry>;
}

/// Errors raised while assembling an [`InMemoryStore`].
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
	#[error("invalid registry JSON: {0}")]
	Json(#[from] serde_json::Error),

	/// A record's own prefix disagrees with the key it is stored under.
	#[error("record stored under {key:?} declares prefix {prefix:?}")]
	PrefixMismatch { key: String, prefix: String },

	#[error("empty prefix key")]
	EmptyKey,
}

/// A [`RegistryStore`] held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
	resources: BTreeMap<String, Resource>,
	metaregistry: BTreeMap<String, Registry>,
}

impl InMemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Decodes registry and metaregistry documents that were already read into memory.
	///
	/// Both documents are JSON objects keyed by prefix. Records that omit their
	/// own `prefix` inherit the key; records that declare a different one are
	/// rejected.
	pub fn from_json(registry: &str, metaregistry: &str) -> Result<Self, SchemaError> {
		let mut resources: BTreeMap<String, Resource> = serde_json::from_str(registry)?;
		for (key, resource) in &mut resources {
			adopt_key(key, &mut resource.prefix)?;
		}

		let mut entries: BTreeMap<String, Registry> = serde_json::from_str(metaregistry)?;
		for (key, entry) in &mut entries {
			adopt_key(key, &mut entry.prefix)?;
		}

		Ok(Self {
			resources,
			metaregistry: entries,
		})
	}

	/// Adds a resource keyed by its own prefix, replacing any previous record.
	pub fn with_resource(mut self, resource: Resource) -> Self {
		self.resources.insert(resource.prefix.clone(), resource);
		self
	}

	/// Adds a metaregistry record keyed by its metaprefix.
	pub fn with_registry(mut self, registry: Registry) -> Self {
		self.metaregistry.insert(registry.prefix.clone(), registry);
		self
	}
}

impl RegistryStore for InMemoryStore {
	fn all_resources(&self) -> &BTreeMap<String, Resource> {
		&self.resources
	}

	fn all_metaregistry_entries(&self) -> &BTreeMap<String, Registry> {
		&self.metaregistry
	}
}

fn adopt_key(key: &str, prefix: &mut String) -> Result<(), SchemaError> {
	if key.is_empty() {
		return Err(SchemaError::EmptyKey);
	}
	if prefix.is_empty() {
		key.clone_into(prefix);
	} else if prefix != key {
		return Err(SchemaError::PrefixMismatch {
			key: key.to_owned(),
			prefix: prefix.clone(),
		});
	}
	Ok(())
}
