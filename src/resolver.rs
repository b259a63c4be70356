//! Version resolution against the depot
//!
//! Turns a selector into the single version handed to the package runner:
//! - non-range selectors are returned unchanged without touching the depot
//! - a published version equal to the selector wins immediately
//! - otherwise the highest published version satisfying the range is chosen

use crate::domain::{parse_version, VersionRange, VersionSelector};
use crate::error::ResolveError;
use crate::registry::Depot;
use semver::Version;
use tracing::{debug, trace};

/// Resolves selectors for packages of one depot
pub struct VersionResolver<D> {
    depot: D,
}

impl<D: Depot> VersionResolver<D> {
    /// Create a resolver backed by the given depot
    pub fn new(depot: D) -> Self {
        Self { depot }
    }

    /// Get the underlying depot
    pub fn depot(&self) -> &D {
        &self.depot
    }

    /// Resolve `selector` for `package` into a version string
    pub async fn resolve(&self, package: &str, selector: &str) -> Result<String, ResolveError> {
        let range = match VersionSelector::parse(selector) {
            VersionSelector::Range(range) => range,
            other => {
                debug!(package, selector, kind = ?other.kind(), "selector used verbatim");
                return Ok(other.as_str().to_string());
            }
        };

        let versions = self
            .depot
            .fetch_versions(package)
            .await
            .map_err(ResolveError::FetchVersions)?;

        let resolved = select_version(&versions, selector, &range)
            .ok_or_else(|| ResolveError::version_not_found(package, selector))?;

        debug!(
            package,
            selector,
            resolved,
            depot = self.depot.depot_name(),
            "resolved version"
        );
        Ok(resolved.to_string())
    }
}

/// Pick a version from `versions` for `selector`.
///
/// Scans in order. An entry equal to `selector` is returned as soon as it is
/// seen. Entries that are not versions are skipped. Among entries satisfying
/// `range` the highest wins; on equal precedence the first one seen is kept.
/// The returned string is the entry as published, not a normalized form.
pub fn select_version<'a>(
    versions: &'a [String],
    selector: &str,
    range: &VersionRange,
) -> Option<&'a str> {
    let mut best: Option<(Version, &'a str)> = None;

    for raw in versions.iter().map(String::as_str) {
        if raw == selector {
            return Some(raw);
        }

        let Some(version) = parse_version(raw) else {
            trace!(version = %raw, "skipping unparsable version");
            continue;
        };

        if !range.matches(&version) {
            continue;
        }

        if best.as_ref().map_or(true, |(current, _)| version.cmp_precedence(current).is_gt()) {
            best = Some((version, raw));
        }
    }

    best.map(|(_, raw)| raw)
}
