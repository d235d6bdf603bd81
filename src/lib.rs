//! Bundle SVG icon sets into flat, per-theme text resources.
//!
//! The binary wires the filesystem adapters from `svg_bundle_infra` into the
//! [`BuildBundles`] use case. [`run`] is the whole program minus argument
//! parsing and logging setup.

#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod logging;

use svg_bundle_infra::{FsContentReader, FsResourceWriter, LogProgress, WalkFileEnumerator};
use svg_bundle_usecase::{BuildBundles, BuildReport};

pub use cli::Args;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolve the configuration described by `args` and build every theme.
pub fn run(args: &Args) -> anyhow::Result<BuildReport> {
    let config = args.bundle_config()?;

    let enumerator = WalkFileEnumerator::new();
    let report = BuildBundles::new(&enumerator, &FsContentReader, &FsResourceWriter)
        .with_progress(&LogProgress)
        .with_options(args.build_options())
        .run(&config)?;

    tracing::info!(themes = report.themes.len(), entries = report.total_entries(), "bundle complete");
    Ok(report)
}
