mod types;

pub use types::*;

use anyhow::{Context, Result};
use nasaview_core::Error;
use std::path::Path;

/// Environment variable that overrides `api.base_url`.
pub const API_BASE_ENV: &str = "NASAVIEW_API_BASE";

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    apply_env_overrides(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./nasaview.toml", "~/.config/nasaview/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    let mut config = Config::default();
    apply_env_overrides(&mut config);
    validate_config(&config)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(base) = std::env::var(API_BASE_ENV) {
        if !base.trim().is_empty() {
            tracing::debug!("{} overrides api.base_url with {}", API_BASE_ENV, base);
            config.api.base_url = base;
        }
    }
}

/// Validate configuration
pub fn validate_config(config: &Config) -> nasaview_core::Result<()> {
    let base = config.api.base_url.trim();
    if base.is_empty() {
        return Err(Error::Config("api.base_url is empty".into()));
    }
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(Error::Config(format!(
            "api.base_url must be an http(s) URL, got {base:?}"
        )));
    }

    Ok(())
}
