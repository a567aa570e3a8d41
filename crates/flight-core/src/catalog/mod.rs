//! Module catalog discovery
//!
//! This module provides the discovery pipeline:
//! - Repository listing from the hosting API (paginated)
//! - Concurrent per-repository manifest resolution with failure isolation
//! - Catalog persistence under the system temp directory

pub mod cache;
pub mod descriptor;
pub mod error;
pub mod fetcher;
pub mod resolver;

pub use cache::CatalogCache;
pub use descriptor::{derive_category, Catalog, ModuleDescriptor};
pub use error::CatalogError;
pub use fetcher::{CatalogFetcher, CatalogSource, ModuleManifest, RepoRecord};
pub use resolver::{descriptor_from_manifest, resolve_catalog, resolve_descriptors};
