//! Step orchestrator for the exec workflow
//!
//! This module provides:
//! - Workflow coordination: resolve version → install → exec
//! - Skipping the depot entirely when no selector is given
//! - Progress display while the depot is queried

use crate::config::Settings;
use crate::error::AppError;
use crate::package_manager::{run_step, HabRunner, PackageRunner};
use crate::progress::Progress;
use crate::registry::{Depot, HabitatDepot, HttpClient};
use crate::resolver::VersionResolver;
use tracing::debug;

/// Orchestrator for one `exec` invocation
pub struct Orchestrator<D, R> {
    /// Resolver backed by the depot
    resolver: VersionResolver<D>,
    /// Runner for install and exec
    runner: R,
    /// Whether to show the spinner
    show_progress: bool,
}

impl Orchestrator<HabitatDepot, HabRunner> {
    /// Create an orchestrator talking to the configured depot and hab binary
    pub fn from_settings(settings: &Settings) -> Result<Self, AppError> {
        let client = HttpClient::with_timeout(settings.timeout)?;
        let timeout = client.timeout();
        let depot = HabitatDepot::with_base_url(client, &settings.depot_url);
        let runner = HabRunner::new(&settings.hab_path);
        debug!(
            depot = depot.base_url(),
            ?timeout,
            hab = %runner.hab_path().display(),
            "configured exec step"
        );

        Ok(Self::new(depot, runner).with_progress(settings.show_progress))
    }
}

impl<D: Depot, R: PackageRunner> Orchestrator<D, R> {
    /// Create an orchestrator with a custom depot and runner (for testing)
    pub fn new(depot: D, runner: R) -> Self {
        Self {
            resolver: VersionResolver::new(depot),
            runner,
            show_progress: false,
        }
    }

    /// Enable or disable the spinner
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Get the runner
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Resolve the version to install; an empty selector means latest
    pub async fn resolve_version(
        &self,
        pkg_name: &str,
        selector: &str,
    ) -> Result<String, AppError> {
        if selector.is_empty() {
            debug!(pkg_name, "no version selector, installing latest");
            return Ok(String::new());
        }

        let mut progress = Progress::new(self.show_progress);
        progress.spinner(&format!("Resolving {} {}", pkg_name, selector));
        let resolved = self.resolver.resolve(pkg_name, selector).await;
        progress.finish_and_clear();

        Ok(resolved?)
    }

    /// Resolve the version, install the package and run `command` inside it
    pub async fn exec(
        &self,
        pkg_name: &str,
        selector: &str,
        command: &[String],
    ) -> Result<(), AppError> {
        let version = self.resolve_version(pkg_name, selector).await?;
        run_step(&self.runner, pkg_name, &version, command)?;
        Ok(())
    }
}
