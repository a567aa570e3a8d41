//! Product configuration trait for CLI binaries
//!
//! Each product binary implements this trait to bind the shared pipeline to
//! a concrete catalog: the organization whose repositories are discovered,
//! the API endpoints (with env-var overrides), the cache location, and the
//! user-facing identity.

use std::path::Path;

pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Organization whose repositories form the module catalog
    fn organization(&self) -> &'static str;

    /// Default hosting API base URL
    fn default_api_url(&self) -> &'static str;

    /// Environment variable name for overriding the API base URL
    fn api_url_env(&self) -> &'static str;

    /// Default raw-content base URL (per-repository manifest fetches)
    fn default_raw_url(&self) -> &'static str;

    /// Environment variable name for overriding the raw-content base URL
    fn raw_url_env(&self) -> &'static str;

    /// File name of the catalog cache under the system temp directory
    fn cache_file_name(&self) -> &'static str;

    /// Modules pre-selected in the module prompt
    fn recommended_modules(&self) -> &'static [&'static str];

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path) -> Vec<String>;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}
