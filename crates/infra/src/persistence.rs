// crates/infra/src/persistence.rs
use std::path::Path;

use svg_bundle_ports::{filesystem::ContentReader, output::ResourceWriter};
use svg_bundle_shared_kernel::{InfrastructureError, Result};

mod file_reader;
mod file_writer;

pub use file_reader::FileReader;
pub use file_writer::FileWriter;

/// `ContentReader` backed by the local filesystem; content must be UTF-8.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsContentReader;

impl ContentReader for FsContentReader {
    fn read_text(&self, path: &Path) -> Result<String> {
        FileReader::read_text(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source }.into())
    }
}

/// `ResourceWriter` that truncates and rewrites the target file in place.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsResourceWriter;

impl ResourceWriter for FsResourceWriter {
    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        FileWriter::overwrite(path, contents.as_bytes())
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source }.into())
    }
}
