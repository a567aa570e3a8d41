//! Remote catalog discovery against the hosting API
//!
//! Two endpoints are involved: the hosting API lists an organization's
//! repositories (paginated), and the raw-content host serves each
//! repository's manifest file from its default branch. Both bases are
//! overridable through product-specific environment variables, which is also
//! how the tests point the fetcher at a mock server.

use super::error::{CatalogError, Result};
use crate::product::ProductConfig;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Page size for repository listing requests.
pub const LISTING_PAGE_SIZE: usize = 100;

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Well-known manifest path within each module repository.
pub const MANIFEST_FILE: &str = "bower.json";

/// Branch the manifest is read from.
pub const MANIFEST_BRANCH: &str = "master";

/// Where a catalog is discovered from.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    /// Hosting API base, e.g. `https://api.github.com`.
    pub api_base: Url,
    /// Raw-content base, e.g. `https://raw.githubusercontent.com`.
    pub raw_base: Url,
    /// Organization whose repositories form the catalog.
    pub organization: String,
}

impl CatalogSource {
    /// Build the source for a product, honoring its env-var overrides.
    pub fn from_config<C: ProductConfig>(config: &C) -> anyhow::Result<Self> {
        let api_str = std::env::var(config.api_url_env())
            .unwrap_or_else(|_| config.default_api_url().to_string());
        let raw_str = std::env::var(config.raw_url_env())
            .unwrap_or_else(|_| config.default_raw_url().to_string());
        Ok(Self {
            api_base: Url::parse(&api_str)
                .map_err(|e| anyhow::anyhow!("Invalid API URL '{}': {}", api_str, e))?,
            raw_base: Url::parse(&raw_str)
                .map_err(|e| anyhow::anyhow!("Invalid raw content URL '{}': {}", raw_str, e))?,
            organization: config.organization().to_string(),
        })
    }
}

/// One repository record from the organization listing. Only the field the
/// resolver needs is kept; the API sends plenty more.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoRecord {
    pub full_name: String,
}

/// A module manifest exactly as the repository declares it. All fields are
/// optional at this stage; validation happens in the resolver.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub main: Option<String>,
}

/// Catalog fetcher - lists repositories and retrieves per-repository
/// manifests. Cheap to clone; resolver tasks each carry their own copy.
#[derive(Clone)]
pub struct CatalogFetcher {
    source: CatalogSource,
    client: reqwest::Client,
}

impl CatalogFetcher {
    /// Create a new fetcher with a custom user agent.
    pub fn new(source: CatalogSource, user_agent: &str) -> Self {
        Self {
            source,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create a fetcher from a product config.
    pub fn from_config<C: ProductConfig>(config: &C) -> anyhow::Result<Self> {
        let source = CatalogSource::from_config(config)?;
        Ok(Self::new(source, config.user_agent()))
    }

    /// Build a URL by appending path segments, preserving the base path.
    fn build_url(base: &Url, segments: &[&str]) -> std::result::Result<Url, String> {
        let mut url = base.clone();
        {
            let mut parts = url
                .path_segments_mut()
                .map_err(|_| format!("URL cannot have path segments: {}", base))?;
            parts.pop_if_empty();
            for segment in segments {
                parts.push(segment);
            }
        }
        Ok(url)
    }

    /// List every repository in the organization, following pagination until
    /// the API returns a short page.
    pub async fn list_repositories(&self) -> Result<Vec<RepoRecord>> {
        let mut repos = Vec::new();
        let mut page = 1usize;

        loop {
            let mut url =
                Self::build_url(&self.source.api_base, &["orgs", &self.source.organization, "repos"])
                    .map_err(CatalogError::CatalogUnavailable)?;
            url.query_pairs_mut()
                .append_pair("per_page", &LISTING_PAGE_SIZE.to_string())
                .append_pair("page", &page.to_string());

            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| CatalogError::CatalogUnavailable(e.to_string()))?;

            if !response.status().is_success() {
                return Err(CatalogError::CatalogUnavailable(format!(
                    "HTTP {} from repository listing",
                    response.status()
                )));
            }

            let batch: Vec<RepoRecord> = response
                .json()
                .await
                .map_err(|e| CatalogError::CatalogUnavailable(format!("malformed listing: {e}")))?;

            let short_page = batch.len() < LISTING_PAGE_SIZE;
            repos.extend(batch);
            if short_page {
                break;
            }
            page += 1;
        }

        Ok(repos)
    }

    /// Fetch and parse one repository's manifest from the raw-content host.
    ///
    /// Any failure here condemns this repository only; the resolver treats
    /// the error as a skip signal.
    pub async fn fetch_manifest(&self, full_name: &str) -> Result<ModuleManifest> {
        let mut segments: Vec<&str> = full_name.split('/').collect();
        segments.push(MANIFEST_BRANCH);
        segments.push(MANIFEST_FILE);

        let url = Self::build_url(&self.source.raw_base, &segments)
            .map_err(|reason| CatalogError::invalid(full_name, reason))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::invalid(full_name, e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::invalid(
                full_name,
                format!("HTTP {}", response.status()),
            ));
        }

        response
            .json::<ModuleManifest>()
            .await
            .map_err(|e| CatalogError::invalid(full_name, format!("unparsable manifest: {e}")))
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_appends_segments() {
        let base = Url::parse("https://api.github.com").unwrap();
        let url = CatalogFetcher::build_url(&base, &["orgs", "inuitcss", "repos"]).unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/orgs/inuitcss/repos");
    }

    #[test]
    fn build_url_keeps_base_path() {
        let base = Url::parse("http://127.0.0.1:8080/mock/").unwrap();
        let url = CatalogFetcher::build_url(&base, &["owner", "repo", "master", "bower.json"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8080/mock/owner/repo/master/bower.json"
        );
    }
}
