//! Error taxonomy for catalog discovery
//!
//! None of these conditions are fatal to a run. Module discovery is
//! advisory: a failed listing or an unreadable cache degrades to an empty or
//! freshly fetched catalog with a warning, and a single repository's bad
//! manifest is skipped at the item boundary without surfacing further.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The organization's repository listing could not be retrieved.
    #[error("repository listing unavailable: {0}")]
    CatalogUnavailable(String),

    /// One repository's manifest is missing, unparsable, or incomplete.
    #[error("manifest for '{repo}' rejected: {reason}")]
    ManifestInvalid { repo: String, reason: String },

    /// The cache file exists but cannot be read as a catalog.
    #[error("catalog cache is corrupt: {0}")]
    CacheCorrupt(String),

    /// The catalog could not be written back to the cache file.
    #[error("failed to persist catalog cache: {0}")]
    CachePersistFailed(#[from] std::io::Error),
}

impl CatalogError {
    pub(crate) fn invalid(repo: &str, reason: impl Into<String>) -> Self {
        Self::ManifestInvalid {
            repo: repo.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
