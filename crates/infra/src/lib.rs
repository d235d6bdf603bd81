// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod config_loader;
pub mod filesystem;
pub mod persistence;
pub mod progress;

pub use config_loader::{ConfigFormat, load_config};
pub use filesystem::WalkFileEnumerator;
pub use persistence::{FsContentReader, FsResourceWriter};
pub use progress::LogProgress;
