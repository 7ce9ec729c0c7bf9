//! Error types for installation discovery.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can stop a discovery request.
///
/// A missing installation is not an error; the locator reports it as `None`.
#[derive(Debug, Error)]
pub enum LocateError {
    /// The host platform has no search policy.
    #[error("OS not supported: {platform}")]
    UnsupportedPlatform {
        /// The raw platform identifier that failed to match.
        platform: String,
    },

    /// No home directory could be determined for the current user.
    #[error("could not determine the user home directory")]
    HomeDirUnavailable,

    /// The configuration file exists but could not be used.
    #[error("invalid config file at {path}: {message}")]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, LocateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_platform_message_carries_raw_name() {
        let err = LocateError::UnsupportedPlatform {
            platform: "Linux".to_string(),
        };
        assert_eq!(err.to_string(), "OS not supported: Linux");
    }

    #[test]
    fn test_config_message_names_path() {
        let err = LocateError::Config {
            path: PathBuf::from("/etc/fusion-locate/config.toml"),
            message: "expected a table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config file at /etc/fusion-locate/config.toml: expected a table"
        );
    }
}
