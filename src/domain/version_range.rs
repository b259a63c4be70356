//! Semantic-version range expressions
//!
//! Accepts the constraint syntax users type on the command line and maps it
//! onto `semver::VersionReq`:
//! - `^1.2.3`, `~1.2.3` - caret and tilde ranges
//! - `>=1.0.0 <2.0.0`, `>= 1.0, < 2.0` - comparators joined by spaces or commas (AND)
//! - `^1.0.0 || ^3.0.0` - alternatives (OR)
//! - `1.2.0 - 1.4.5` - inclusive hyphen range
//! - `1.2.x`, `1.*`, `*` - wildcards
//! - `1.2.3` - a bare version is an exact match, not a caret range
//! - `!=1.2.3` - excludes a single version

use crate::error::SelectorError;
use semver::{BuildMetadata, Prerelease, Version, VersionReq};
use std::fmt;

/// Characters that may start a comparator
const OPERATOR_CHARS: &[char] = &['=', '!', '<', '>', '~', '^'];

/// A parsed range expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    raw: String,
    alternatives: Vec<Alternative>,
}

/// One `||` branch: every comparator must hold
#[derive(Debug, Clone, PartialEq, Eq)]
struct Alternative {
    req: VersionReq,
    excluded: Vec<Version>,
}

enum Comparator {
    Require(String),
    Exclude(Version),
}

impl VersionRange {
    /// Parse a range expression
    pub fn parse(expr: &str) -> Result<Self, SelectorError> {
        if expr.trim().is_empty() {
            return Err(SelectorError::Empty);
        }

        let alternatives = expr
            .split("||")
            .map(|alt| parse_alternative(expr, alt))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            raw: expr.to_string(),
            alternatives,
        })
    }

    /// The expression exactly as the user wrote it
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Check whether a version satisfies this range
    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives
            .iter()
            .any(|alt| alt.req.matches(version) && !alt.excluded.contains(version))
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

fn parse_alternative(expr: &str, alt: &str) -> Result<Alternative, SelectorError> {
    let words: Vec<&str> = alt.split_whitespace().collect();

    let comparators = match words.as_slice() {
        [] => return Err(SelectorError::invalid_range(expr, "empty alternative")),
        [low, "-", high] => vec![
            Comparator::Require(format!(">={}", strip_v(low))),
            Comparator::Require(format!("<={}", strip_v(high))),
        ],
        _ => split_comparators(alt)
            .iter()
            .map(|c| normalize_comparator(expr, c))
            .collect::<Result<Vec<_>, _>>()?,
    };

    let mut required = Vec::new();
    let mut excluded = Vec::new();
    for comparator in comparators {
        match comparator {
            Comparator::Require(c) => required.push(c),
            Comparator::Exclude(v) => excluded.push(v),
        }
    }

    let req = if required.is_empty() {
        VersionReq::STAR
    } else {
        VersionReq::parse(&required.join(", "))
            .map_err(|e| SelectorError::invalid_range(expr, e.to_string()))?
    };

    Ok(Alternative { req, excluded })
}

/// Split an AND-group into comparators, gluing detached operators (`>= 1.0`) to their version
fn split_comparators(alt: &str) -> Vec<String> {
    let mut comparators = Vec::new();
    let mut pending_op = String::new();

    for token in alt
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        if token.chars().all(|c| OPERATOR_CHARS.contains(&c)) {
            pending_op.push_str(token);
        } else {
            comparators.push(format!("{}{}", pending_op, token));
            pending_op.clear();
        }
    }

    // A dangling operator is kept so that it fails normalization
    if !pending_op.is_empty() {
        comparators.push(pending_op);
    }

    comparators
}

fn normalize_comparator(expr: &str, comparator: &str) -> Result<Comparator, SelectorError> {
    let split = comparator
        .find(|c: char| !OPERATOR_CHARS.contains(&c))
        .unwrap_or(comparator.len());
    let (op, version) = comparator.split_at(split);
    let version = strip_v(version);

    if version.is_empty() {
        return Err(SelectorError::invalid_comparator(expr, comparator));
    }

    match op {
        "" if is_wildcard(version) => Ok(Comparator::Require(version.to_string())),
        "" | "=" | "==" => Ok(Comparator::Require(format!("={}", version))),
        ">" | ">=" | "<" | "<=" | "~" | "^" => {
            Ok(Comparator::Require(format!("{}{}", op, version)))
        }
        "~>" => Ok(Comparator::Require(format!("~{}", version))),
        "=>" => Ok(Comparator::Require(format!(">={}", version))),
        "=<" => Ok(Comparator::Require(format!("<={}", version))),
        "!=" => parse_version(version)
            .map(Comparator::Exclude)
            .ok_or_else(|| SelectorError::invalid_comparator(expr, comparator)),
        _ => Err(SelectorError::invalid_comparator(expr, comparator)),
    }
}

fn is_wildcard(version: &str) -> bool {
    version
        .split('.')
        .any(|part| matches!(part, "*" | "x" | "X"))
}

fn strip_v(version: &str) -> &str {
    version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version)
}

/// Parse a published version string, tolerating the shapes depots actually carry.
///
/// Accepts a leading `v`, partial versions (`1`, `1.2`) padded with zeros and
/// numeric parts with leading zeros (`2017.05.01`). Pre-release and build
/// suffixes must be valid semver.
///
/// Examples:
/// - "1.2" -> Version(1, 2, 0)
/// - "v2.0.0-rc.1" -> Version(2, 0, 0, pre "rc.1")
/// - "not-a-version" -> None
pub fn parse_version(raw: &str) -> Option<Version> {
    let trimmed = strip_v(raw.trim());

    let (rest, build) = match trimmed.split_once('+') {
        Some((rest, build)) => (rest, Some(build)),
        None => (trimmed, None),
    };
    let (core, pre) = match rest.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (rest, None),
    };

    let parts: Vec<&str> = core.split('.').collect();
    if parts.len() > 3 {
        return None;
    }

    let mut numbers = [0u64; 3];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *slot = part.parse().ok()?;
    }

    let mut version = Version::new(numbers[0], numbers[1], numbers[2]);
    if let Some(pre) = pre {
        if pre.is_empty() {
            return None;
        }
        version.pre = Prerelease::new(pre).ok()?;
    }
    if let Some(build) = build {
        if build.is_empty() {
            return None;
        }
        version.build = BuildMetadata::new(build).ok()?;
    }

    Some(version)
}
