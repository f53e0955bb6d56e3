// Settings service
// Loads runtime configuration from TOML

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::Settings;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config from {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Load settings from an explicit path, or from the platform config
/// directory when none is given. A missing file yields defaults; a file that
/// exists but cannot be read or parsed is an error.
pub fn load(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => {
                log::warn!("no config directory available, using default settings");
                return Ok(Settings::default());
            }
        },
    };

    if !path.exists() {
        log::info!("no config at {}, using default settings", path.display());
        return Ok(Settings::default());
    }

    let data = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let settings: Settings = toml::from_str(&data)?;
    settings.validate().map_err(ConfigError::Invalid)?;

    log::info!("loaded config from {}", path.display());
    Ok(settings)
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "season-countdown")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
