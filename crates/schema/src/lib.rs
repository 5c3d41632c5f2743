//! Data model for the federated prefix registry.
//!
//! This crate holds the already-loaded registry contents that the resolution
//! engine reads from. Nothing here normalizes or resolves anything; it only
//! describes what a curated [`Resource`] looks like, how the opaque
//! [`ExternalRecord`]s imported from upstream authorities are stored, and how
//! a [`RegistryStore`] hands both to consumers.
//!
//! # Sub-modules
//!
//! - [`resource`] - Curated namespace records and typed field access
//! - [`external`] - Raw key/value data imported from one external authority
//! - [`registry`] - Metaregistry records describing external authorities
//! - [`store`] - The read-only store collaborator and its in-memory form

pub mod external;
pub mod registry;
pub mod resource;
pub mod store;

pub use external::ExternalRecord;
pub use registry::Registry;
pub use resource::{Field, FieldValue, Resource};
pub use store::{InMemoryStore, RegistryStore, SchemaError};
