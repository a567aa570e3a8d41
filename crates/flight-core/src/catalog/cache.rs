//! Catalog persistence under the system temp directory
//!
//! Write-through cache for resolved catalogs. Presence of the file is the
//! only freshness signal; the `--refresh` flag and the `clear-cache`
//! subcommand are the control points for staleness.

use super::descriptor::Catalog;
use super::error::{CatalogError, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CatalogCache {
    path: PathBuf,
}

impl CatalogCache {
    /// Cache at the process-wide default location for a product.
    pub fn for_product(file_name: &str) -> Self {
        Self {
            path: std::env::temp_dir().join(file_name),
        }
    }

    /// Cache at an explicit path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load the cached catalog. Unreadable or unparsable content is
    /// [`CatalogError::CacheCorrupt`]; callers fall back to remote
    /// resolution.
    pub fn load(&self) -> Result<Catalog> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| CatalogError::CacheCorrupt(format!("{}: {e}", self.path.display())))?;
        serde_json::from_str(&content)
            .map_err(|e| CatalogError::CacheCorrupt(format!("{}: {e}", self.path.display())))
    }

    /// Persist a catalog. Best-effort at the call site: a failed store is
    /// reported and the run continues without caching.
    pub fn store(&self, catalog: &Catalog) -> Result<()> {
        let content = serde_json::to_string_pretty(catalog)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Remove the cache file if present.
    pub fn clear(&self) -> Result<()> {
        if self.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::descriptor::ModuleDescriptor;
    use tempfile::TempDir;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.push(ModuleDescriptor {
            name: "inuit-defaults".to_string(),
            entry_file: "_settings.defaults.scss".to_string(),
            version: "1.0.0".to_string(),
            category: "settings".to_string(),
        });
        catalog.push(ModuleDescriptor {
            name: "inuit-layout".to_string(),
            entry_file: "_objects.layout.scss".to_string(),
            version: "2.1.0".to_string(),
            category: "objects".to_string(),
        });
        catalog
    }

    #[test]
    fn store_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let cache = CatalogCache::at(dir.path().join("modules.json"));
        let catalog = sample_catalog();

        assert!(!cache.exists());
        cache.store(&catalog).unwrap();
        assert!(cache.exists());
        assert_eq!(cache.load().unwrap(), catalog);
    }

    #[test]
    fn corrupt_content_is_cache_corrupt() {
        let dir = TempDir::new().unwrap();
        let cache = CatalogCache::at(dir.path().join("modules.json"));
        std::fs::write(cache.path(), "not json {").unwrap();

        let err = cache.load().unwrap_err();
        assert!(matches!(err, CatalogError::CacheCorrupt(_)));
    }

    #[test]
    fn missing_file_is_cache_corrupt() {
        let dir = TempDir::new().unwrap();
        let cache = CatalogCache::at(dir.path().join("missing.json"));
        assert!(matches!(
            cache.load().unwrap_err(),
            CatalogError::CacheCorrupt(_)
        ));
    }

    #[test]
    fn clear_removes_the_file() {
        let dir = TempDir::new().unwrap();
        let cache = CatalogCache::at(dir.path().join("modules.json"));
        cache.store(&sample_catalog()).unwrap();

        cache.clear().unwrap();
        assert!(!cache.exists());
        // Clearing an absent cache is fine too
        cache.clear().unwrap();
    }
}
