use std::path::PathBuf;

use svg_bundle_domain::{Resource, ResourceEntry, ShortNameRule};
use svg_bundle_ports::{filesystem::ContentReader, progress::ProgressSink};
use svg_bundle_shared_kernel::Result;

/// Fold `paths` into a resource for `theme`, in the given order.
///
/// Stops at the first file whose short name cannot be derived or whose
/// content cannot be read; nothing assembled so far is returned.
pub fn assemble_resource(
    theme: &str,
    rule: &ShortNameRule,
    paths: &[PathBuf],
    reader: &dyn ContentReader,
    progress: &dyn ProgressSink,
) -> Result<Resource> {
    let mut resource = Resource::new();
    for path in paths {
        progress.on_file(theme, path)?;
        let short_name = rule.derive(path)?;
        let content = reader.read_text(path)?;
        resource.push(ResourceEntry { short_name, content });
    }
    progress.on_assembled(theme, resource.len())?;
    Ok(resource)
}
