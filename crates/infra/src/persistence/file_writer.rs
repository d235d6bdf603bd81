// crates/infra/src/persistence/file_writer.rs
use std::{fs::File, io::{BufWriter, Write}, path::Path};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create (or truncate) `path` and return a buffered writer targeting it.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<BufWriter<File>> {
        File::create(path.as_ref()).map(BufWriter::new)
    }

    /// Replace the content of `path` with `data`.
    ///
    /// Not atomic: a failure mid-write leaves a partially written file.
    pub fn overwrite<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let mut w = Self::create(path)?;
        w.write_all(data)?;
        w.flush()
    }
}
