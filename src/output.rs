//! Structured JSON output for scripting and piping.
//!
//! When `--json` is passed, the discovery result is printed to stdout as a
//! single JSON object instead of the human-readable message.

use std::path::Path;

use serde::Serialize;

use crate::{
    facet::{FACET_ID, FACET_NAME, FacetConfiguration},
    platform::HostOs,
};

/// Top-level JSON output emitted when `--json` is active.
#[derive(Serialize, Debug)]
pub struct JsonOutput {
    /// Facet identifier (`"fusion360plugin"`)
    pub facet_id: String,

    /// Human-readable facet name
    pub facet_name: String,

    /// Platform the search ran for
    pub platform: HostOs,

    /// Home directory that was searched
    pub home: String,

    /// Whether an installation was found
    pub installed: bool,

    /// The configuration record for the IDE
    pub configuration: FacetConfiguration,
}

impl JsonOutput {
    #[must_use]
    pub fn new(host_os: HostOs, home: &Path, configuration: FacetConfiguration) -> Self {
        Self {
            facet_id: FACET_ID.to_string(),
            facet_name: FACET_NAME.to_string(),
            platform: host_os,
            home: home.display().to_string(),
            installed: configuration.is_installed(),
            configuration,
        }
    }
}
