// crates/ports/src/progress.rs
use std::path::Path;

use svg_bundle_shared_kernel::Result;

pub trait ProgressSink: Send + Sync {
    fn on_file(&self, theme: &str, path: &Path) -> Result<()>;
    fn on_assembled(&self, theme: &str, entries: usize) -> Result<()>;
    fn on_written(&self, theme: &str, output: &Path, bytes: usize) -> Result<()>;
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_file(&self, _theme: &str, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn on_assembled(&self, _theme: &str, _entries: usize) -> Result<()> {
        Ok(())
    }

    fn on_written(&self, _theme: &str, _output: &Path, _bytes: usize) -> Result<()> {
        Ok(())
    }
}
