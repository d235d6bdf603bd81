// crates/ports/src/output.rs
use std::path::Path;

use svg_bundle_shared_kernel::Result;

/// Port for persisting a rendered resource.
///
/// Writing replaces any existing content at `path`.
pub trait ResourceWriter: Send + Sync {
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}
