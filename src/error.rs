//! Application error types using thiserror
//!
//! Error hierarchy:
//! - RegistryError: Issues with depot communication
//! - SelectorError: Issues with parsing a range expression
//! - ResolveError: Issues with selecting a version for a selector
//! - RunnerError: Issues with installing or executing the package
//! - ConfigError: Issues with CLI configuration

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Depot related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Version resolution errors
    #[error("failed to get package version: {0}")]
    Resolve(#[from] ResolveError),

    /// Package runner errors
    #[error(transparent)]
    Runner(#[from] RunnerError),
}

/// Errors related to depot communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Connection failure or timeout while reaching the depot
    #[error("failed to reach depot for '{package}': {source}")]
    Transport {
        package: String,
        #[source]
        source: reqwest::Error,
    },

    /// Depot answered 404
    #[error("package '{package}' not found")]
    PackageNotFound { package: String },

    /// Depot answered with a status other than 200 or 404
    #[error("unexpected status code: {status}")]
    UnexpectedStatus { package: String, status: u16 },

    /// Body does not match the page shape
    #[error("invalid response from depot for '{package}': {message}")]
    Decode { package: String, message: String },

    /// HTTP client could not be constructed
    #[error("failed to create HTTP client: {message}")]
    Client { message: String },
}

/// Errors related to parsing a version range expression
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// Nothing to parse
    #[error("empty range expression")]
    Empty,

    /// A single comparator could not be understood
    #[error("invalid comparator '{comparator}' in '{expr}'")]
    InvalidComparator { expr: String, comparator: String },

    /// The normalized expression was rejected by the semver parser
    #[error("invalid range '{expr}': {message}")]
    InvalidRange { expr: String, message: String },
}

/// Errors related to resolving a selector into a version
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Version list could not be fetched
    #[error("failed to fetch package versions: {0}")]
    FetchVersions(#[source] RegistryError),

    /// No published version satisfies the range
    #[error("the specified version '{selector}' not found for '{package}'")]
    VersionNotFound { package: String, selector: String },
}

/// Errors related to the package runner
#[derive(Error, Debug)]
pub enum RunnerError {
    /// Version is not a dotted numeric version
    #[error("{version} is invalid version")]
    InvalidVersion { version: String },

    /// Command could not be started
    #[error("failed to execute '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Command exited unsuccessfully
    #[error("command '{command}' failed with {}", exit_description(.code))]
    CommandFailed { command: String, code: Option<i32> },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Depot URL is not an http(s) URL
    #[error("invalid depot URL '{value}': expected an http:// or https:// URL")]
    InvalidDepotUrl { value: String },

    /// Zero timeout
    #[error("invalid timeout '{value}': must be greater than zero seconds")]
    InvalidTimeout { value: u64 },
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl RegistryError {
    /// Creates a new Transport error
    pub fn transport(package: impl Into<String>, source: reqwest::Error) -> Self {
        RegistryError::Transport {
            package: package.into(),
            source,
        }
    }

    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
        }
    }

    /// Creates a new UnexpectedStatus error
    pub fn unexpected_status(package: impl Into<String>, status: u16) -> Self {
        RegistryError::UnexpectedStatus {
            package: package.into(),
            status,
        }
    }

    /// Creates a new Decode error
    pub fn decode(package: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::Decode {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Returns true if the depot reported the package as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::PackageNotFound { .. })
    }

    /// Returns the HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            RegistryError::PackageNotFound { .. } => Some(404),
            RegistryError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl SelectorError {
    /// Creates a new InvalidComparator error
    pub fn invalid_comparator(expr: impl Into<String>, comparator: impl Into<String>) -> Self {
        SelectorError::InvalidComparator {
            expr: expr.into(),
            comparator: comparator.into(),
        }
    }

    /// Creates a new InvalidRange error
    pub fn invalid_range(expr: impl Into<String>, message: impl Into<String>) -> Self {
        SelectorError::InvalidRange {
            expr: expr.into(),
            message: message.into(),
        }
    }
}

impl ResolveError {
    /// Creates a new VersionNotFound error
    pub fn version_not_found(package: impl Into<String>, selector: impl Into<String>) -> Self {
        ResolveError::VersionNotFound {
            package: package.into(),
            selector: selector.into(),
        }
    }
}

impl RunnerError {
    /// Creates a new InvalidVersion error
    pub fn invalid_version(version: impl Into<String>) -> Self {
        RunnerError::InvalidVersion {
            version: version.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_package_not_found() {
        let err = RegistryError::package_not_found("core/git");
        let msg = format!("{}", err);
        assert!(msg.contains("package 'core/git' not found"));
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_registry_error_unexpected_status() {
        let err = RegistryError::unexpected_status("core/git", 500);
        let msg = format!("{}", err);
        assert_eq!(msg, "unexpected status code: 500");
        assert!(!err.is_not_found());
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_registry_error_decode() {
        let err = RegistryError::decode("core/git", "expected value at line 1");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid response"));
        assert!(msg.contains("expected value"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_selector_error_invalid_comparator() {
        let err = SelectorError::invalid_comparator(">=1.0 ?2", "?2");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid comparator '?2'"));
    }

    #[test]
    fn test_resolve_error_version_not_found() {
        let err = ResolveError::version_not_found("core/git", "^9.0.0");
        let msg = format!("{}", err);
        assert!(msg.contains("not found"));
        assert!(msg.contains("^9.0.0"));
    }

    #[test]
    fn test_resolve_error_fetch_versions_keeps_cause() {
        let err = ResolveError::FetchVersions(RegistryError::unexpected_status("core/git", 503));
        let msg = format!("{}", err);
        assert_eq!(
            msg,
            "failed to fetch package versions: unexpected status code: 503"
        );
    }

    #[test]
    fn test_runner_error_invalid_version() {
        let err = RunnerError::invalid_version("not-a-range");
        assert_eq!(format!("{}", err), "not-a-range is invalid version");
    }

    #[test]
    fn test_runner_error_command_failed() {
        let err = RunnerError::CommandFailed {
            command: "hab pkg install core/git".to_string(),
            code: Some(2),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("exit code 2"));

        let err = RunnerError::CommandFailed {
            command: "hab pkg exec core/git".to_string(),
            code: None,
        };
        assert!(format!("{}", err).contains("terminated by signal"));
    }

    #[test]
    fn test_config_error_invalid_depot_url() {
        let err = ConfigError::InvalidDepotUrl {
            value: "ftp://depot".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("invalid depot URL"));
        assert!(msg.contains("ftp://depot"));
    }

    #[test]
    fn test_app_error_from_resolve_error() {
        let app_err: AppError = ResolveError::version_not_found("core/git", "^9").into();
        let msg = format!("{}", app_err);
        assert!(msg.starts_with("failed to get package version: "));
    }

    #[test]
    fn test_app_error_from_runner_error() {
        let app_err: AppError = RunnerError::invalid_version("abc").into();
        assert_eq!(format!("{}", app_err), "abc is invalid version");
    }
}
