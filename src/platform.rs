//! Host operating system resolution.
//!
//! Every platform-name comparison in the crate lives here. Callers resolve a
//! [`HostOs`] once and match on the enum afterwards.

use std::fmt::{Display, Formatter, Result};

use serde::Serialize;

/// Operating system family that installation discovery runs under.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HostOs {
    /// Microsoft Windows (any edition)
    Windows,

    /// Apple macOS
    #[serde(rename = "macos")]
    MacOs,

    /// Anything else; keeps the raw identifier for error reporting
    Unsupported(String),
}

impl HostOs {
    /// Map a platform identifier to a `HostOs`.
    ///
    /// Accepts both the long marketing-style names reported by some runtimes
    /// (`"Windows 10"`, `"Mac OS X"`) and Rust's `std::env::consts::OS`
    /// spellings (`"windows"`, `"macos"`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fusion_locate::HostOs;
    /// assert_eq!(HostOs::from_platform_name("Windows 11"), HostOs::Windows);
    /// assert_eq!(HostOs::from_platform_name("macos"), HostOs::MacOs);
    /// ```
    #[must_use]
    pub fn from_platform_name(name: &str) -> Self {
        let lower = name.trim().to_ascii_lowercase();

        if lower.contains("windows") {
            Self::Windows
        } else if lower.contains("mac") || lower == "darwin" {
            Self::MacOs
        } else {
            Self::Unsupported(name.to_string())
        }
    }

    /// Resolve the OS of the running process.
    #[must_use]
    pub fn current() -> Self {
        Self::from_platform_name(std::env::consts::OS)
    }

    #[must_use]
    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl Display for HostOs {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Windows => write!(f, "Windows"),
            Self::MacOs => write!(f, "macOS"),
            Self::Unsupported(raw) => write!(f, "{raw} (unsupported)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_names() {
        for name in ["Windows 10", "Windows Server 2019", "windows", "WINDOWS"] {
            assert_eq!(HostOs::from_platform_name(name), HostOs::Windows, "{name}");
        }
    }

    #[test]
    fn test_mac_names() {
        for name in ["Mac OS X", "macos", "Darwin", "darwin"] {
            assert_eq!(HostOs::from_platform_name(name), HostOs::MacOs, "{name}");
        }
    }

    #[test]
    fn test_unsupported_keeps_raw_name() {
        assert_eq!(
            HostOs::from_platform_name("Linux"),
            HostOs::Unsupported("Linux".to_string())
        );
        assert!(!HostOs::from_platform_name("FreeBSD").is_supported());
    }

    #[test]
    fn test_current_matches_build_target() {
        let os = HostOs::current();
        if cfg!(windows) {
            assert_eq!(os, HostOs::Windows);
        } else if cfg!(target_os = "macos") {
            assert_eq!(os, HostOs::MacOs);
        } else {
            assert!(!os.is_supported());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(HostOs::Windows.to_string(), "Windows");
        assert_eq!(HostOs::MacOs.to_string(), "macOS");
        assert_eq!(
            HostOs::Unsupported("Linux".to_string()).to_string(),
            "Linux (unsupported)"
        );
    }
}
