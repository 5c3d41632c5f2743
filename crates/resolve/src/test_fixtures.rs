//! Shared registry snapshot for unit tests.

use bioreg_schema::InMemoryStore;

use crate::ResolutionContext;

pub(crate) const REGISTRY: &str = include_str!("../tests/fixtures/registry.json");
pub(crate) const METAREGISTRY: &str = include_str!("../tests/fixtures/metaregistry.json");

pub(crate) fn store() -> InMemoryStore {
	InMemoryStore::from_json(REGISTRY, METAREGISTRY).expect("fixture registry decodes")
}

pub(crate) fn context() -> ResolutionContext {
	let _ = tracing_subscriber::fmt::try_init();
	ResolutionContext::new(store()).expect("fixture registry has no collisions")
}
