//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters
//! to implement specific use cases:
//!
//! - [`assemble`]: Folding a theme's files into a resource
//! - [`orchestrator`]: Building every configured theme
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod assemble;
pub mod dto;
pub mod orchestrator;

pub use assemble::assemble_resource;
pub use dto::{BuildReport, ThemeReport};
pub use orchestrator::{BuildBundles, BuildOptions};
