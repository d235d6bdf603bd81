//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: Directory traversal and reading file contents
//! - [`output`]: Writing rendered resources
//! - [`progress`]: Progress reporting for a build run
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod output;
pub mod progress;
