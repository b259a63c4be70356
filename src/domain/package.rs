//! Depot page structures
//!
//! The depot answers `GET /pkgs/<name>?range=<offset>` with one window of
//! results. `range_end` is inclusive.

use serde::{Deserialize, Serialize};

/// One page of depot results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagePage {
    /// Offset of the first record in this page
    pub range_start: i64,
    /// Offset of the last record in this page (inclusive)
    pub range_end: i64,
    /// Number of records across all pages
    pub total_count: i64,
    /// Records in this window
    #[serde(default)]
    pub package_list: Vec<PackageRecord>,
}

/// A single published package release
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub release: String,
}

impl PackagePage {
    /// Returns true if this page reaches the end of the result set
    pub fn is_last(&self) -> bool {
        self.range_end.saturating_add(1) >= self.total_count
    }

    /// Page width as the depot reports it (`range_end - range_start`)
    pub fn width(&self) -> i64 {
        self.range_end.saturating_sub(self.range_start)
    }

    /// Offset of the page to request after this one, or None when done.
    ///
    /// The offset advances by the page width. A zero-width page still moves
    /// forward by one so the loop is bounded by `total_count`.
    pub fn next_offset(&self, current: i64) -> Option<i64> {
        if self.is_last() {
            return None;
        }

        let next = current.saturating_add(self.width().max(1));
        if next >= self.total_count {
            return None;
        }

        Some(next)
    }

    /// Version strings of this page, in depot order
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.package_list.iter().map(|p| p.version.as_str())
    }
}

impl PackageRecord {
    /// Creates a new record
    #[cfg(test)]
    pub fn new(origin: &str, name: &str, version: &str, release: &str) -> Self {
        Self {
            origin: origin.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            release: release.to_string(),
        }
    }

    /// Fully qualified identifier `origin/name/version/release`
    #[cfg(test)]
    pub fn ident(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.origin, self.name, self.version, self.release
        )
    }
}
