use std::{path::PathBuf, str::FromStr};

use svg_bundle_shared_kernel::PresentationError;

fn invalid(flag: &str, value: &str, reason: impl Into<String>) -> PresentationError {
    PresentationError::InvalidValue { flag: flag.to_string(), value: value.to_string(), reason: reason.into() }
}

/// Theme names double as output file names.
fn check_theme_name(flag: &str, value: &str, name: &str) -> Result<(), PresentationError> {
    if name.is_empty() {
        return Err(invalid(flag, value, "theme name is empty"));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(invalid(flag, value, "theme name must be a plain file name"));
    }
    Ok(())
}

/// A `NAME=DIR` theme given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeArg {
    pub name: String,
    pub input: PathBuf,
}

impl FromStr for ThemeArg {
    type Err = PresentationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, dir) = s.split_once('=').ok_or_else(|| invalid("--theme", s, "expected NAME=DIR"))?;
        let name = name.trim();
        check_theme_name("--theme", s, name)?;
        if dir.is_empty() {
            return Err(invalid("--theme", s, "theme directory is empty"));
        }
        Ok(Self { name: name.to_string(), input: PathBuf::from(dir) })
    }
}

/// `PREFIX` for every theme, or `NAME=PREFIX` for one. An empty prefix keeps
/// file names as they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripPrefixArg {
    pub theme: Option<String>,
    pub prefix: String,
}

impl FromStr for StripPrefixArg {
    type Err = PresentationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, prefix)) = s.split_once('=') else {
            return Ok(Self { theme: None, prefix: s.to_string() });
        };
        let name = name.trim();
        check_theme_name("--strip-prefix", s, name)?;
        Ok(Self { theme: Some(name.to_string()), prefix: prefix.to_string() })
    }
}

/// Accept `svg` or `.svg`, yielding the bare extension.
pub fn parse_extension(s: &str) -> Result<String, PresentationError> {
    let ext = s.trim().trim_start_matches('.');
    if ext.is_empty() {
        return Err(invalid("--ext", s, "extension must not be empty"));
    }
    if ext.contains(['.', '/', '\\']) {
        return Err(invalid("--ext", s, "extension must be a single component"));
    }
    Ok(ext.to_string())
}
