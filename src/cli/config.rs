// src/cli/config.rs
use svg_bundle_domain::{BundleConfig, NameStyle, ThemeSpec};
use svg_bundle_infra::load_config;
use svg_bundle_shared_kernel::{PresentationError, Result};
use svg_bundle_usecase::BuildOptions;

use super::args::Args;

impl Args {
    /// Themes to build: the config file's, then every `--theme`, or the
    /// default light/dark pair when neither is given.
    ///
    /// Naming flags apply to `--theme` entries and the defaults, never to
    /// themes read from a config file.
    pub fn bundle_config(&self) -> Result<BundleConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => BundleConfig::default(),
        };

        let mut named = Vec::new();
        for theme in &self.themes {
            let output = self.out_dir.join(format!("{}.txt", theme.name));
            named.push(ThemeSpec::new(&theme.name, &theme.input, output));
        }
        if self.config.is_none() && self.themes.is_empty() {
            named = BundleConfig::default_themes().themes;
        }

        self.check_scoped_prefixes(&named)?;
        config.themes.extend(named.into_iter().map(|theme| self.apply_naming(theme)));
        Ok(config)
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions { include_hidden: self.hidden, follow_links: self.follow }
    }

    fn apply_naming(&self, theme: ThemeSpec) -> ThemeSpec {
        let style = if self.relative_names { NameStyle::RelativePath } else { NameStyle::FileStem };
        let prefix = self.prefix_for(&theme.name);
        let theme = theme.with_extension(self.ext.as_str()).with_name_style(style);
        match prefix {
            Some(prefix) => theme.with_strip_prefix(Some(prefix.to_string()).filter(|p| !p.is_empty())),
            None => theme,
        }
    }

    /// The last `NAME=PREFIX` for `theme`, else the last bare `PREFIX`.
    fn prefix_for(&self, theme: &str) -> Option<&str> {
        let last = |scope: Option<&str>| self.strip_prefixes.iter().rev().find(|arg| arg.theme.as_deref() == scope);
        last(Some(theme)).or_else(|| last(None)).map(|arg| arg.prefix.as_str())
    }

    fn check_scoped_prefixes(&self, themes: &[ThemeSpec]) -> Result<()> {
        for arg in &self.strip_prefixes {
            let Some(name) = &arg.theme else { continue };
            if !themes.iter().any(|theme| &theme.name == name) {
                return Err(PresentationError::InvalidValue {
                    flag: "--strip-prefix".to_string(),
                    value: format!("{name}={}", arg.prefix),
                    reason: format!("no theme named '{name}' takes naming flags"),
                }
                .into());
            }
        }
        Ok(())
    }
}
