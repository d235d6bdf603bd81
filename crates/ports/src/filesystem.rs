// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use svg_bundle_shared_kernel::Result;

/// Input parameters controlling a single theme scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPlan {
    pub root: PathBuf,
    /// Extension without the leading dot, matched case-sensitively.
    pub extension: String,
    pub include_hidden: bool,
    pub follow_links: bool,
}

impl ScanPlan {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self { root: root.into(), extension: extension.into(), include_hidden: false, follow_links: false }
    }
}

/// Port for enumerating the files of a theme.
///
/// Implementations return absolute paths in a stable order and fail on the
/// first traversal error.
pub trait FileEnumerator: Send + Sync {
    fn enumerate(&self, plan: &ScanPlan) -> Result<Vec<PathBuf>>;
}

/// Port for reading a file as text.
pub trait ContentReader: Send + Sync {
    fn read_text(&self, path: &Path) -> Result<String>;
}
