// crates/infra/src/filesystem.rs
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use ignore::{DirEntry, Walk, WalkBuilder};
use svg_bundle_ports::filesystem::{FileEnumerator, ScanPlan};
use svg_bundle_shared_kernel::{InfrastructureError, Result, path::logical_absolute};

/// Filesystem adapter implementing the `FileEnumerator` port with a sequential `ignore` walk.
///
/// Ignore files are not consulted: every matching file under the root is
/// returned. Entries of each directory are visited in file-name order so the
/// result is stable for an unchanged tree.
#[derive(Debug, Default)]
pub struct WalkFileEnumerator;

impl WalkFileEnumerator {
    pub fn new() -> Self {
        Self
    }

    pub fn scan(plan: &ScanPlan) -> Result<Vec<PathBuf>> {
        enumerate_plan(plan)
    }
}

impl FileEnumerator for WalkFileEnumerator {
    fn enumerate(&self, plan: &ScanPlan) -> Result<Vec<PathBuf>> {
        Self::scan(plan)
    }
}

fn enumerate_plan(plan: &ScanPlan) -> Result<Vec<PathBuf>> {
    let root = logical_absolute(&plan.root);
    ensure_root_dir(&root)?;

    let mut files = Vec::new();
    for result in build_walker(&root, plan) {
        let entry = result.map_err(|err| traversal(&root, err.to_string()))?;
        if is_regular_file(&entry) && has_extension(entry.path(), &plan.extension) {
            files.push(entry.into_path());
        }
    }

    tracing::debug!(root = %root.display(), files = files.len(), "scan complete");
    Ok(files)
}

fn build_walker(root: &Path, plan: &ScanPlan) -> Walk {
    let mut builder = WalkBuilder::new(root);
    // Turn off gitignore/.ignore handling, then re-enable only hidden-file
    // skipping when the plan asks for it.
    builder
        .standard_filters(false)
        .hidden(!plan.include_hidden)
        .follow_links(plan.follow_links)
        .sort_by_file_name(|a, b| a.cmp(b));
    builder.build()
}

fn ensure_root_dir(root: &Path) -> Result<()> {
    let metadata = std::fs::metadata(root).map_err(|err| traversal(root, err.to_string()))?;
    if !metadata.is_dir() {
        return Err(traversal(root, "not a directory".to_string()));
    }
    Ok(())
}

// With follow_links the walker already reports the target's file type.
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_file())
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension() == Some(OsStr::new(extension))
}

fn traversal(root: &Path, details: String) -> svg_bundle_shared_kernel::BundleError {
    InfrastructureError::Traversal { root: root.to_path_buf(), details }.into()
}
