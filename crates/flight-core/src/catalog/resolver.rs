//! Concurrent descriptor resolution across repositories
//!
//! Each repository is resolved by its own task: fetch the manifest, validate
//! it, derive the category. Tasks share no mutable state; every task returns
//! its own `(index, Option<descriptor>)` and the results are joined at a
//! barrier before the catalog is finalized. A repository that fails in any
//! way is skipped without disturbing its siblings.

use super::descriptor::{derive_category, Catalog, ModuleDescriptor};
use super::error::{CatalogError, Result};
use super::fetcher::{CatalogFetcher, ModuleManifest, RepoRecord};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::{timeout_at, Instant};

/// Upper bound on in-flight manifest fetches.
const MAX_IN_FLIGHT: usize = 8;

/// Wall-clock budget for resolving the whole catalog. On expiry the
/// remaining tasks are aborted and the catalog is finalized from whatever
/// resolved in time.
const RESOLVE_DEADLINE: Duration = Duration::from_secs(30);

/// Validate a raw manifest into a descriptor.
///
/// Requires a non-empty `name`, a non-empty `main` entry file, and an entry
/// file that yields a non-empty category. A missing version is informational
/// and defaults rather than rejects.
pub fn descriptor_from_manifest(repo: &str, manifest: ModuleManifest) -> Result<ModuleDescriptor> {
    let name = manifest
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| CatalogError::invalid(repo, "missing module name"))?;
    let entry_file = manifest
        .main
        .filter(|m| !m.is_empty())
        .ok_or_else(|| CatalogError::invalid(repo, "missing main entry file"))?;

    let category = derive_category(&entry_file);
    if category.is_empty() {
        return Err(CatalogError::invalid(
            repo,
            format!("entry file '{}' yields no category", entry_file),
        ));
    }

    Ok(ModuleDescriptor {
        name,
        entry_file,
        version: manifest.version.unwrap_or_else(|| "0.0.0".to_string()),
        category,
    })
}

/// Resolve descriptors for the listed repositories, concurrently with a
/// bounded fan-out. The returned catalog preserves listing order regardless
/// of completion order and is deduplicated by module name.
pub async fn resolve_descriptors(fetcher: &CatalogFetcher, repos: Vec<RepoRecord>) -> Catalog {
    let limiter = Arc::new(Semaphore::new(MAX_IN_FLIGHT));
    let mut tasks = JoinSet::new();

    for (index, repo) in repos.into_iter().enumerate() {
        let fetcher = fetcher.clone();
        let limiter = Arc::clone(&limiter);
        tasks.spawn(async move {
            let Ok(_permit) = limiter.acquire_owned().await else {
                return (index, None);
            };
            let descriptor = match fetcher.fetch_manifest(&repo.full_name).await {
                Ok(manifest) => descriptor_from_manifest(&repo.full_name, manifest).ok(),
                // Skip signal: this repository only
                Err(_) => None,
            };
            (index, descriptor)
        });
    }

    let deadline = Instant::now() + RESOLVE_DEADLINE;
    let mut resolved: Vec<(usize, ModuleDescriptor)> = Vec::new();

    loop {
        match timeout_at(deadline, tasks.join_next()).await {
            Ok(Some(Ok((index, Some(descriptor))))) => resolved.push((index, descriptor)),
            Ok(Some(Ok((_, None)))) => {}
            // A panicked task counts as a skip
            Ok(Some(Err(_))) => {}
            Ok(None) => break,
            Err(_) => {
                tasks.abort_all();
                break;
            }
        }
    }

    resolved.sort_by_key(|(index, _)| *index);

    let mut catalog = Catalog::new();
    for (_, descriptor) in resolved {
        catalog.push(descriptor);
    }
    catalog
}

/// List the organization's repositories and resolve them into a catalog.
///
/// Fails only when the listing itself is unavailable; individual
/// repositories never fail the aggregate.
pub async fn resolve_catalog(fetcher: &CatalogFetcher) -> Result<Catalog> {
    let repos = fetcher.list_repositories().await?;
    Ok(resolve_descriptors(fetcher, repos).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(name: &str, main: &str) -> ModuleManifest {
        ModuleManifest {
            name: Some(name.to_string()),
            version: Some("1.2.3".to_string()),
            main: Some(main.to_string()),
        }
    }

    #[test]
    fn valid_manifest_resolves() {
        let descriptor =
            descriptor_from_manifest("inuitcss/settings.defaults", manifest("inuit-defaults", "_settings.defaults.scss"))
                .unwrap();
        assert_eq!(descriptor.name, "inuit-defaults");
        assert_eq!(descriptor.entry_file, "_settings.defaults.scss");
        assert_eq!(descriptor.version, "1.2.3");
        assert_eq!(descriptor.category, "settings");
    }

    #[test]
    fn missing_main_is_rejected() {
        let raw = ModuleManifest {
            name: Some("inuit-defaults".to_string()),
            version: None,
            main: None,
        };
        let err = descriptor_from_manifest("inuitcss/settings.defaults", raw).unwrap_err();
        assert!(matches!(err, CatalogError::ManifestInvalid { .. }));
    }

    #[test]
    fn empty_main_is_rejected() {
        let err =
            descriptor_from_manifest("inuitcss/settings.defaults", manifest("inuit-defaults", ""))
                .unwrap_err();
        assert!(matches!(err, CatalogError::ManifestInvalid { .. }));
    }

    #[test]
    fn missing_name_is_rejected() {
        let raw = ModuleManifest {
            name: None,
            version: None,
            main: Some("_settings.defaults.scss".to_string()),
        };
        let err = descriptor_from_manifest("inuitcss/settings.defaults", raw).unwrap_err();
        assert!(matches!(err, CatalogError::ManifestInvalid { .. }));
    }

    #[test]
    fn entry_file_without_category_is_rejected() {
        let err = descriptor_from_manifest("inuitcss/odd", manifest("odd", "_.scss")).unwrap_err();
        assert!(matches!(err, CatalogError::ManifestInvalid { .. }));
    }

    #[test]
    fn missing_version_defaults() {
        let raw = ModuleManifest {
            name: Some("inuit-defaults".to_string()),
            version: None,
            main: Some("_settings.defaults.scss".to_string()),
        };
        let descriptor = descriptor_from_manifest("inuitcss/settings.defaults", raw).unwrap();
        assert_eq!(descriptor.version, "0.0.0");
    }
}
