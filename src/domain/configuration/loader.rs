use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::configuration::EnhancerConfig;

/// Parse and validate config content.
pub fn parse_config_content(content: &str) -> Result<EnhancerConfig, AppError> {
    let config: EnhancerConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Default config location: `$HOME/.config/penh/config.toml`.
pub fn default_config_path() -> Result<PathBuf, AppError> {
    let home = std::env::var("HOME")
        .map_err(|_| AppError::config_error("HOME environment variable not set"))?;
    Ok(PathBuf::from(home).join(".config").join("penh").join("config.toml"))
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the default location is used and
/// a missing file yields the built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<EnhancerConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let path = default_config_path()?;
            if !path.exists() {
                return Ok(EnhancerConfig::default());
            }
            path
        }
    };

    let content = std::fs::read_to_string(&path)?;
    parse_config_content(&content)
}
