//! Core domain models for sd-step
//!
//! This module contains the fundamental types used throughout the application:
//! - Depot page and package record structures
//! - Semantic-version range expressions and lenient version parsing
//! - Version selector classification

mod package;
mod selector;
mod version_range;

pub use package::{PackagePage, PackageRecord};
pub use selector::{SelectorKind, VersionSelector};
pub use version_range::{parse_version, VersionRange};
