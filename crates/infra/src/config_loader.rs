// crates/infra/src/config_loader.rs
use std::path::Path;

use svg_bundle_domain::BundleConfig;
use svg_bundle_shared_kernel::{ErrorContext, InfrastructureError, Result, path::logical_absolute};

use crate::persistence::FileReader;

/// Config file syntaxes understood by [`load_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Parse a bundle configuration from text.
pub fn parse_config(text: &str, format: ConfigFormat) -> Result<BundleConfig> {
    let config: BundleConfig = match format {
        ConfigFormat::Json => serde_json::from_str(text)?,
        #[cfg(feature = "yaml")]
        ConfigFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(config)
}

/// Load a bundle configuration from `path`.
///
/// Relative theme paths are resolved against the directory holding the file.
/// The result is not validated; that happens when a build starts.
pub fn load_config(path: &Path) -> Result<BundleConfig> {
    let format = ConfigFormat::from_path(path).ok_or_else(|| InfrastructureError::ConfigLoad {
        path: path.to_path_buf(),
        details: "unsupported config file extension".to_string(),
    })?;

    let text = FileReader::read_text(path)
        .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;

    let config = parse_config(&text, format).with_context(|| format!("Failed to load config '{}'", path.display()))?;

    let absolute = logical_absolute(path);
    let base = absolute.parent().unwrap_or(Path::new("/"));
    tracing::debug!(config = %path.display(), themes = config.themes.len(), "config loaded");
    Ok(config.resolve_paths(base))
}
