//! Configuration file support for persistent settings.
//!
//! This module loads overrides from a TOML file located at
//! `~/.config/fusion-locate/config.toml` (or the platform-specific
//! equivalent). Values in the file act as defaults that CLI arguments can
//! override.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > built-in default**.
//!
//! # Example config
//!
//! ```toml
//! # Look somewhere other than the real home directory
//! home = "~/sandbox"
//!
//! # Pretend to run on another platform
//! platform = "Windows 10"
//!
//! [windows]
//! relative_root = "AppData/Local/Autodesk/webdeploy/production"
//! executable_name = "Fusion360.exe"
//!
//! [macos]
//! executable_name = "Autodesk Fusion 360.app"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::{LocateError, Result},
    platform::HostOs,
};

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so present values can be told apart from
/// missing ones when layering CLI > config file > defaults.
#[derive(Deserialize, Serialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Home directory to search under instead of the user's real one
    pub home: Option<PathBuf>,

    /// Platform identifier to use instead of the running OS
    pub platform: Option<String>,

    /// Search policy overrides for Windows
    #[serde(default)]
    pub windows: PolicyOverride,

    /// Search policy overrides for macOS
    #[serde(default)]
    pub macos: PolicyOverride,
}

/// Field-by-field replacement for a built-in search policy.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PolicyOverride {
    /// Search root relative to the home directory
    pub relative_root: Option<PathBuf>,

    /// Executable or bundle name expected inside each build directory
    pub executable_name: Option<String>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The file lives at `<config_dir>/fusion-locate/config.toml`, where
    /// `<config_dir>` is the platform configuration directory (`~/.config`
    /// on Linux, `~/Library/Application Support` on macOS, `%APPDATA%` on
    /// Windows).
    ///
    /// Returns `None` if the config directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fusion-locate").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// A missing file yields the default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::Config`] if the file exists but cannot be read,
    /// contains invalid TOML or unknown fields, or sets a policy field to an
    /// empty value.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Same as [`FileConfig::load`].
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| LocateError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| LocateError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        config.validate().map_err(|message| LocateError::Config {
            path: path.to_path_buf(),
            message,
        })?;

        Ok(config)
    }

    /// Reject policy overrides that are present but empty.
    fn validate(&self) -> std::result::Result<(), String> {
        for (section, overrides) in [("windows", &self.windows), ("macos", &self.macos)] {
            if overrides
                .relative_root
                .as_ref()
                .is_some_and(|root| root.as_os_str().is_empty())
            {
                return Err(format!("[{section}] relative_root must not be empty"));
            }
            if overrides
                .executable_name
                .as_ref()
                .is_some_and(String::is_empty)
            {
                return Err(format!("[{section}] executable_name must not be empty"));
            }
        }
        Ok(())
    }

    /// The policy override that applies to `host_os`, if the OS has one.
    #[must_use]
    pub const fn override_for(&self, host_os: &HostOs) -> Option<&PolicyOverride> {
        match host_os {
            HostOs::Windows => Some(&self.windows),
            HostOs::MacOs => Some(&self.macos),
            HostOs::Unsupported(_) => None,
        }
    }

    /// Home directory from the file, with `~` expanded.
    #[must_use]
    pub fn home_dir(&self) -> Option<PathBuf> {
        self.home.as_deref().map(expand_tilde)
    }

    /// Home directory to search: the configured one, else the user's own.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::HomeDirUnavailable`] when neither is known.
    pub fn resolve_home(&self) -> Result<PathBuf> {
        self.home_dir()
            .or_else(dirs::home_dir)
            .ok_or(LocateError::HomeDirUnavailable)
    }

    /// Host OS to search for: the configured platform, else the running OS.
    #[must_use]
    pub fn host_os(&self) -> HostOs {
        self.platform
            .as_deref()
            .map_or_else(HostOs::current, HostOs::from_platform_name)
    }
}
