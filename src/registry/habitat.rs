//! Habitat depot adapter
//!
//! Fetches every published version of a package from the depot.
//! API endpoint: {base_url}/pkgs/{origin}/{name}?range={offset}

use crate::domain::PackagePage;
use crate::error::RegistryError;
use crate::registry::{Depot, HttpClient};
use async_trait::async_trait;
use tracing::debug;

/// Public Habitat depot base URL
pub const HAB_DEPOT_URL: &str = "https://willem.habitat.sh/v1/depot";

/// Habitat depot adapter
pub struct HabitatDepot {
    client: HttpClient,
    base_url: String,
}

impl HabitatDepot {
    /// Create an adapter for the public depot
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, HAB_DEPOT_URL)
    }

    /// Create an adapter for a custom depot URL
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL for one page of a package listing
    fn build_url(&self, package: &str, offset: i64) -> String {
        format!("{}/pkgs/{}?range={}", self.base_url, package, offset)
    }

    /// Fetch the page that starts at `offset`
    pub async fn fetch_page(
        &self,
        package: &str,
        offset: i64,
    ) -> Result<PackagePage, RegistryError> {
        let url = self.build_url(package, offset);
        self.client.get_json(&url, package).await
    }
}

#[async_trait]
impl Depot for HabitatDepot {
    fn depot_name(&self) -> &'static str {
        "habitat"
    }

    async fn fetch_versions(&self, package: &str) -> Result<Vec<String>, RegistryError> {
        let mut versions = Vec::new();
        let mut offset = 0;

        loop {
            let page = self.fetch_page(package, offset).await?;
            debug!(
                package,
                offset,
                range_start = page.range_start,
                range_end = page.range_end,
                total_count = page.total_count,
                records = page.package_list.len(),
                "fetched depot page"
            );

            versions.extend(page.versions().map(str::to_string));

            match page.next_offset(offset) {
                Some(next) => offset = next,
                None => break,
            }
        }

        debug!(package, count = versions.len(), "collected package versions");
        Ok(versions)
    }
}
