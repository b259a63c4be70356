//! Version selector supplied with `--pkg-version`
//!
//! A selector takes one of three forms:
//! - empty: no constraint, the depot's latest release is installed
//! - a range expression (`^1.2.0`, `>=2.0.0 <3.0.0`): resolved against the depot
//! - anything else: passed through untouched

use super::VersionRange;
use std::fmt;
use tracing::trace;

/// The kind of version selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorKind {
    /// Empty selector
    Latest,
    /// Not a range expression
    Literal,
    /// Range expression
    Range,
}

/// A parsed version selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSelector {
    /// No constraint
    Latest,
    /// A token that is not a range expression, used verbatim
    Literal(String),
    /// A range expression that needs the depot's version list
    Range(VersionRange),
}

impl VersionSelector {
    /// Classify a raw selector string
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return VersionSelector::Latest;
        }

        match VersionRange::parse(raw) {
            Ok(range) => VersionSelector::Range(range),
            Err(e) => {
                trace!(selector = raw, reason = %e, "selector is not a range expression");
                VersionSelector::Literal(raw.to_string())
            }
        }
    }

    /// Returns the kind of this selector
    pub fn kind(&self) -> SelectorKind {
        match self {
            VersionSelector::Latest => SelectorKind::Latest,
            VersionSelector::Literal(_) => SelectorKind::Literal,
            VersionSelector::Range(_) => SelectorKind::Range,
        }
    }

    /// The selector exactly as supplied
    pub fn as_str(&self) -> &str {
        match self {
            VersionSelector::Latest => "",
            VersionSelector::Literal(raw) => raw,
            VersionSelector::Range(range) => range.as_str(),
        }
    }

    /// Returns true if resolving this selector requires the depot
    pub fn needs_resolution(&self) -> bool {
        matches!(self, VersionSelector::Range(_))
    }
}

impl fmt::Display for VersionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selector_is_latest() {
        let selector = VersionSelector::parse("");
        assert_eq!(selector, VersionSelector::Latest);
        assert_eq!(selector.kind(), SelectorKind::Latest);
        assert_eq!(selector.as_str(), "");
        assert!(!selector.needs_resolution());
    }

    #[test]
    fn test_range_selector() {
        let selector = VersionSelector::parse("^1.2.0");
        assert_eq!(selector.kind(), SelectorKind::Range);
        assert_eq!(selector.as_str(), "^1.2.0");
        assert!(selector.needs_resolution());
    }

    #[test]
    fn test_tilde_arrow_selector_is_a_range() {
        assert_eq!(VersionSelector::parse("~>1.2").kind(), SelectorKind::Range);
        assert_eq!(VersionSelector::parse("~> 1.2.0").kind(), SelectorKind::Range);
    }

    #[test]
    fn test_exact_version_is_a_range() {
        let selector = VersionSelector::parse("2.18.0");
        assert_eq!(selector.kind(), SelectorKind::Range);
    }

    #[test]
    fn test_literal_selector() {
        let selector = VersionSelector::parse("not-a-range");
        assert_eq!(
            selector,
            VersionSelector::Literal("not-a-range".to_string())
        );
        assert_eq!(selector.kind(), SelectorKind::Literal);
        assert!(!selector.needs_resolution());
    }

    #[test]
    fn test_whitespace_only_selector_is_literal() {
        let selector = VersionSelector::parse("  ");
        assert_eq!(selector.kind(), SelectorKind::Literal);
        assert_eq!(selector.as_str(), "  ");
    }

    #[test]
    fn test_display_trait() {
        let selector = VersionSelector::parse(">=2.0.0 <3.0.0");
        assert_eq!(format!("{}", selector), ">=2.0.0 <3.0.0");
    }
}
