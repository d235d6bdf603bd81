// crates/infra/src/progress.rs
use std::path::Path;

use svg_bundle_ports::progress::ProgressSink;
use svg_bundle_shared_kernel::Result;

/// Progress sink that reports build events through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn on_file(&self, theme: &str, path: &Path) -> Result<()> {
        tracing::trace!(theme, path = %path.display(), "bundling file");
        Ok(())
    }

    fn on_assembled(&self, theme: &str, entries: usize) -> Result<()> {
        tracing::debug!(theme, entries, "resource assembled");
        Ok(())
    }

    fn on_written(&self, theme: &str, output: &Path, bytes: usize) -> Result<()> {
        tracing::info!(theme, output = %output.display(), bytes, "resource written");
        Ok(())
    }
}
