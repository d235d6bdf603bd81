//! # Domain
//!
//! Core model of an icon bundle build:
//!
//! - [`config`]: themes and the bundle configuration that lists them
//! - [`short_name`]: derivation of the identifier written before each entry
//! - [`resource`]: the per-theme aggregate and its text rendering

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod resource;
pub mod short_name;

pub use config::{BundleConfig, DEFAULT_EXTENSION, ThemeSpec};
pub use resource::{Resource, ResourceEntry};
pub use short_name::{NameStyle, ShortNameRule};
