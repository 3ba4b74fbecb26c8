mod types;

pub use types::*;

use anyhow::{Context, Result};
use pwa_icons::MAX_ICON_SIZE;
use std::path::{Path, PathBuf};

/// Locations searched when no config path is given, in order.
const DEFAULT_PATHS: [&str; 2] = ["./pwa-devtools.toml", "~/.config/pwa-devtools/config.toml"];

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    expand_paths(&mut config);

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    for path_str in DEFAULT_PATHS {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

fn expand_paths(config: &mut Config) {
    config.server.root = expand(&config.server.root);
    config.icons.dir = expand(&config.icons.dir);
    if let Some(source) = config.icons.source.as_mut() {
        *source = expand(source);
    }
}

fn expand(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}

/// Validate configuration
///
/// Run once, after command-line overrides have been applied.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    if !config.server.root.is_dir() {
        tracing::warn!("Server root is not a directory: {:?}", config.server.root);
    }

    if config.icons.sizes.is_empty() {
        anyhow::bail!("At least one icon size is required");
    }

    if let Some(size) = config.icons.sizes.iter().find(|s| **s == 0) {
        anyhow::bail!("Icon size must be positive, got {}", size);
    }

    if let Some(size) = config.icons.sizes.iter().find(|s| **s > MAX_ICON_SIZE) {
        anyhow::bail!("Icon size {} exceeds maximum {}", size, MAX_ICON_SIZE);
    }

    Ok(())
}
