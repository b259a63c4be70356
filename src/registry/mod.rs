//! Depot adapters for fetching package version information
//!
//! This module provides:
//! - HTTP client shared foundation with status mapping
//! - Habitat depot adapter with paginated version listing

mod client;
mod habitat;

pub use client::{HttpClient, DEFAULT_TIMEOUT};
pub use habitat::{HabitatDepot, HAB_DEPOT_URL};

use crate::error::RegistryError;
use async_trait::async_trait;

/// Trait for depots that list published package versions
#[async_trait]
pub trait Depot: Send + Sync {
    /// Get the depot name
    fn depot_name(&self) -> &'static str;

    /// Fetch every published version of a package, in depot order, duplicates included
    async fn fetch_versions(&self, package: &str) -> Result<Vec<String>, RegistryError>;
}
