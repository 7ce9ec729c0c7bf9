//! Facet configuration handed to the IDE project model.
//!
//! The IDE's facet type, editor factories and module-type checks belong to
//! the host. This crate only builds the record the host persists: an
//! optional path to the Fusion 360 executable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    config::{FileConfig, PolicyOverride},
    error::Result,
    locator::locate,
    platform::HostOs,
    policy::policy_for,
};

/// Identifier the facet is registered under.
pub const FACET_ID: &str = "fusion360plugin";

/// Human-readable facet name.
pub const FACET_NAME: &str = "Fusion 360 Support";

/// Per-module settings persisted by the IDE.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct FacetConfiguration {
    /// Absolute path to the Fusion 360 executable, `None` when not installed
    pub fusion_path: Option<PathBuf>,
}

impl FacetConfiguration {
    #[must_use]
    pub const fn new(fusion_path: Option<PathBuf>) -> Self {
        Self { fusion_path }
    }

    /// Build the default configuration by searching `home` for an install.
    ///
    /// `overrides`, when given, replaces fields of the built-in policy for
    /// `host_os`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LocateError::UnsupportedPlatform`] when `host_os` has no
    /// search policy. A missing installation is not an error.
    pub fn new_default(
        home: &Path,
        host_os: &HostOs,
        overrides: Option<&PolicyOverride>,
    ) -> Result<Self> {
        let mut policy = policy_for(host_os)?;
        if let Some(overrides) = overrides {
            policy = policy.with_override(overrides);
        }

        let fusion_path = locate(home, &policy);
        match &fusion_path {
            Some(path) => info!(path = %path.display(), os = %host_os, "found Fusion 360"),
            None => info!(home = %home.display(), os = %host_os, "Fusion 360 not found"),
        }

        Ok(Self { fusion_path })
    }

    /// Build the default configuration for the current user and OS.
    ///
    /// `config.home` and `config.platform` take the place of the real home
    /// directory and running OS when set (see [`FileConfig::resolve_home`]
    /// and [`FileConfig::host_os`]).
    ///
    /// # Errors
    ///
    /// Returns [`crate::LocateError::HomeDirUnavailable`] when no home directory is
    /// known, and [`crate::LocateError::UnsupportedPlatform`] as
    /// [`FacetConfiguration::new_default`] does.
    pub fn detect(config: &FileConfig) -> Result<Self> {
        let home = config.resolve_home()?;
        let host_os = config.host_os();

        Self::new_default(&home, &host_os, config.override_for(&host_os))
    }

    #[must_use]
    pub const fn is_installed(&self) -> bool {
        self.fusion_path.is_some()
    }
}
