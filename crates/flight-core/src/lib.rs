//! Flight Core - Shared library for scaffolding modular CSS projects
//!
//! This library discovers a catalog of modular CSS components published as
//! separate repositories under a GitHub organization, lets a user pick a
//! subset, and writes a project whose main stylesheet imports the chosen
//! modules in the correct cascade order. It is designed to be used by CLI
//! binaries that share the pipeline but bind it to different organizations
//! via a product configuration.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Discovery** - repository listing, concurrent manifest
//!   resolution, catalog caching
//! - **Layer 2: Ordering** - pure selection and cascade-manifest building
//! - **Layer 3: Output** - project scaffolding and the optional
//!   cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use flight_core::catalog::{resolve_catalog, CatalogFetcher};
//! use flight_core::cascade::{select_modules, CascadeManifest};
//!
//! let fetcher = CatalogFetcher::from_config(&MyConfig)?;
//! let catalog = resolve_catalog(&fetcher).await?;
//! let selection = select_modules(&catalog, &chosen_names);
//! let manifest = CascadeManifest::build(&selection);
//! ```

pub mod cascade;
pub mod catalog;
pub mod product;
pub mod runtime;
pub mod scaffold;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use cascade::{select_modules, CascadeLayer, CascadeManifest, Selection};
pub use catalog::{Catalog, CatalogCache, CatalogError, CatalogFetcher, ModuleDescriptor};
pub use product::ProductConfig;
pub use scaffold::ProjectInfo;

#[cfg(feature = "tui")]
pub use tui::run;
