//! Per-OS search policies.
//!
//! Fusion 360 installs through Autodesk's web deployer, which puts each build
//! in its own hash-named directory under a fixed `webdeploy/production` root
//! inside the user's home directory.

use std::path::PathBuf;

use serde::Serialize;

use crate::{
    config::file::PolicyOverride,
    error::{LocateError, Result},
    platform::HostOs,
};

const WINDOWS_ROOT: &str = "AppData/Local/Autodesk/webdeploy/production";
const WINDOWS_EXECUTABLE: &str = "Fusion360.exe";

const MACOS_ROOT: &str = "Library/Application Support/Autodesk/webdeploy/production";
const MACOS_EXECUTABLE: &str = "Autodesk Fusion 360.app";

/// Where to look for the application and what file to look for.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct SearchPolicy {
    /// Search root, relative to the user's home directory
    pub relative_root: PathBuf,

    /// Name of the executable (or `.app` bundle) inside a build directory
    pub executable_name: String,
}

impl SearchPolicy {
    /// Replace the fields that an override sets, keeping the rest.
    ///
    /// Empty override values are ignored: an empty executable name would
    /// make every build directory match itself.
    #[must_use]
    pub fn with_override(mut self, overrides: &PolicyOverride) -> Self {
        if let Some(root) = overrides
            .relative_root
            .as_ref()
            .filter(|root| !root.as_os_str().is_empty())
        {
            self.relative_root.clone_from(root);
        }
        if let Some(name) = overrides
            .executable_name
            .as_ref()
            .filter(|name| !name.is_empty())
        {
            self.executable_name.clone_from(name);
        }
        self
    }
}

/// Look up the built-in search policy for a host OS.
///
/// # Errors
///
/// Returns [`LocateError::UnsupportedPlatform`] for [`HostOs::Unsupported`].
/// No fallback policy is ever guessed.
pub fn policy_for(host_os: &HostOs) -> Result<SearchPolicy> {
    let (root, executable) = match host_os {
        HostOs::Windows => (WINDOWS_ROOT, WINDOWS_EXECUTABLE),
        HostOs::MacOs => (MACOS_ROOT, MACOS_EXECUTABLE),
        HostOs::Unsupported(raw) => {
            return Err(LocateError::UnsupportedPlatform {
                platform: raw.clone(),
            });
        }
    };

    Ok(SearchPolicy {
        relative_root: PathBuf::from(root),
        executable_name: executable.to_string(),
    })
}
