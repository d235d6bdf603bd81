use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use svg_bundle_shared_kernel::{DomainError, DomainResult, path::to_slash};

/// How a short name is built from a file's position under the theme root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameStyle {
    /// File name without extension, ignoring intermediate directories.
    #[default]
    FileStem,
    /// Root-relative path joined with `/`, without extension.
    RelativePath,
}

/// Turns an absolute file path into the identifier written before its content.
///
/// The root is stripped with [`Path::strip_prefix`], then the `.<extension>`
/// suffix, then the optional file-name prefix. Any path that does not fit this
/// shape is rejected instead of being truncated.
#[derive(Debug, Clone)]
pub struct ShortNameRule {
    root: PathBuf,
    suffix: String,
    style: NameStyle,
    strip_prefix: Option<String>,
}

impl ShortNameRule {
    pub fn new(root: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            root: root.into(),
            suffix: format!(".{extension}"),
            style: NameStyle::default(),
            strip_prefix: None,
        }
    }

    pub fn with_style(mut self, style: NameStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_strip_prefix(mut self, prefix: Option<String>) -> Self {
        self.strip_prefix = prefix.filter(|p| !p.is_empty());
        self
    }

    pub fn derive(&self, path: &Path) -> DomainResult<String> {
        let relative = path
            .strip_prefix(&self.root)
            .map_err(|_| self.reject(path, format!("not under root '{}'", self.root.display())))?;

        let file_name = relative
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| self.reject(path, "file name is missing or not valid UTF-8"))?;

        let stem = file_name
            .strip_suffix(self.suffix.as_str())
            .ok_or_else(|| self.reject(path, format!("file name does not end with '{}'", self.suffix)))?;

        let stem = match &self.strip_prefix {
            Some(prefix) => stem
                .strip_prefix(prefix.as_str())
                .ok_or_else(|| self.reject(path, format!("file name does not start with '{prefix}'")))?,
            None => stem,
        };

        if stem.is_empty() {
            return Err(self.reject(path, "short name would be empty"));
        }

        match self.style {
            NameStyle::FileStem => Ok(stem.to_owned()),
            NameStyle::RelativePath => {
                let parent = relative.parent().unwrap_or(Path::new(""));
                let dir = to_slash(parent).ok_or_else(|| self.reject(path, "directory is not valid UTF-8"))?;
                if dir.is_empty() { Ok(stem.to_owned()) } else { Ok(format!("{dir}/{stem}")) }
            }
        }
    }

    fn reject(&self, path: &Path, reason: impl Into<String>) -> DomainError {
        DomainError::ShortName { path: path.to_path_buf(), reason: reason.into() }
    }
}
