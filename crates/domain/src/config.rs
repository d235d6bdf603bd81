use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use svg_bundle_shared_kernel::{
    DomainError, DomainResult,
    path::{logical_absolute, resolve_against},
};

use crate::short_name::{NameStyle, ShortNameRule};

pub const DEFAULT_EXTENSION: &str = "svg";

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

/// One icon set: where it is read from and where its resource is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeSpec {
    pub name: String,
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub name_style: NameStyle,
    #[serde(default)]
    pub strip_prefix: Option<String>,
}

impl ThemeSpec {
    pub fn new(name: impl Into<String>, input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
            output: output.into(),
            extension: default_extension(),
            name_style: NameStyle::default(),
            strip_prefix: None,
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_name_style(mut self, style: NameStyle) -> Self {
        self.name_style = style;
        self
    }

    pub fn with_strip_prefix(mut self, prefix: Option<String>) -> Self {
        self.strip_prefix = prefix;
        self
    }

    /// Build the short-name rule for this theme rooted at `root`.
    ///
    /// `root` must be the same (absolute) root the scanner walked, otherwise
    /// every path is rejected as lying outside it.
    pub fn short_name_rule(&self, root: &Path) -> ShortNameRule {
        ShortNameRule::new(root, &self.extension)
            .with_style(self.name_style)
            .with_strip_prefix(self.strip_prefix.clone())
    }

    fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(invalid("theme name must not be empty"));
        }
        let ext = &self.extension;
        if ext.is_empty() || ext.contains(['.', '/', '\\']) {
            return Err(invalid(format!(
                "theme '{}': extension '{ext}' must be a bare extension such as 'svg'",
                self.name
            )));
        }
        if self.input.as_os_str().is_empty() || self.output.as_os_str().is_empty() {
            return Err(invalid(format!("theme '{}': input and output paths are required", self.name)));
        }
        if logical_absolute(&self.input) == logical_absolute(&self.output) {
            return Err(invalid(format!("theme '{}': output must differ from input", self.name)));
        }
        Ok(())
    }
}

/// Ordered list of themes built in one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundleConfig {
    pub themes: Vec<ThemeSpec>,
}

impl BundleConfig {
    pub fn new(themes: Vec<ThemeSpec>) -> Self {
        Self { themes }
    }

    /// The light/dark icon sets bundled when nothing else is configured.
    ///
    /// Their files are named `LM_<icon>.svg` and `DM_<icon>.svg`; the prefix
    /// is not part of the short name.
    pub fn default_themes() -> Self {
        Self::new(vec![
            ThemeSpec::new("light_mode", "Light_mode", "Light_mode.txt").with_strip_prefix(Some("LM_".into())),
            ThemeSpec::new("dark_mode", "Dark_Mode", "Dark_mode.txt").with_strip_prefix(Some("DM_".into())),
        ])
    }

    /// Make every relative input and output path relative to `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        for theme in &mut self.themes {
            theme.input = resolve_against(base, &theme.input);
            theme.output = resolve_against(base, &theme.output);
        }
        self
    }

    pub fn theme(&self, name: &str) -> Option<&ThemeSpec> {
        self.themes.iter().find(|t| t.name == name)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.themes.is_empty() {
            return Err(invalid("at least one theme is required"));
        }
        let mut names = HashSet::new();
        let mut outputs = HashSet::new();
        for theme in &self.themes {
            theme.validate()?;
            if !names.insert(theme.name.as_str()) {
                return Err(invalid(format!("duplicate theme name '{}'", theme.name)));
            }
            if !outputs.insert(logical_absolute(&theme.output)) {
                return Err(invalid(format!(
                    "themes share the output file '{}'",
                    theme.output.display()
                )));
            }
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> DomainError {
    DomainError::InvalidConfiguration { reason: reason.into() }
}
