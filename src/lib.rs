//! # fusion-locate
//!
//! Locates a local Autodesk Fusion 360 installation and produces the facet
//! configuration an IDE consumes to wire up run/debug support for Fusion 360
//! Python scripts.
//!
//! ## Main Parts
//!
//! - [`platform::HostOs`] - the operating system family discovery runs under
//! - [`policy::SearchPolicy`] - where to look and what to look for on each OS
//! - [`locator::locate`] - one-level probe of the install root
//! - [`facet::FacetConfiguration`] - the record handed to the IDE project model
//! - [`config::FileConfig`] - persistent overrides from `config.toml`

pub mod config;
pub mod error;
pub mod facet;
pub mod locator;
pub mod output;
pub mod platform;
pub mod policy;

pub use error::{LocateError, Result};
pub use facet::FacetConfiguration;
pub use locator::locate;
pub use platform::HostOs;
pub use policy::{SearchPolicy, policy_for};
