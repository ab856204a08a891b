//! Persisted application settings.
//!
//! Settings live in a TOML file under the `.sentiview` root. Environment
//! variables can override the service endpoint and the input limit at load
//! time without touching the file, matching how a deployment points the app
//! at a staging backend.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default origin of the prediction service.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Default maximum accepted input length, in characters.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 20_000;

/// Environment variable overriding the service base URL.
pub const ENV_API_BASE: &str = "SENTIVIEW_API_BASE";

/// Environment variable overriding the maximum input length.
pub const ENV_MAX_INPUT_CHARS: &str = "SENTIVIEW_MAX_INPUT_CHARS";

/// Persisted theme preference.
///
/// `System` defers to the OS-reported scheme at render time. An explicit
/// toggle always lands on `Light` or `Dark`, never back on `System`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSetting {
    /// Always use the light palette.
    Light,
    /// Always use the dark palette.
    Dark,
    /// Follow the OS-reported color scheme.
    #[default]
    System,
}

/// App settings stored in the TOML config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Origin of the prediction service, without a trailing slash.
    #[serde(default = "default_api_base")]
    pub api_base_url: String,
    /// Maximum accepted input length, in characters.
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
    /// Theme preference applied at startup.
    #[serde(default)]
    pub theme: ThemeSetting,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base(),
            max_input_chars: default_max_input_chars(),
            theme: ThemeSetting::default(),
        }
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_max_input_chars() -> usize {
    DEFAULT_MAX_INPUT_CHARS
}

/// Errors that may occur while loading or saving app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    #[error("No suitable config directory found")]
    NoConfigDir,
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, returning defaults if missing, then apply
/// environment overrides.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    let mut config = load_from_path(&path)?;
    apply_env_overrides(
        &mut config,
        std::env::var(ENV_API_BASE).ok().as_deref(),
        std::env::var(ENV_MAX_INPUT_CHARS).ok().as_deref(),
    );
    Ok(config)
}

/// Persist configuration to disk, overwriting any previous contents.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_path()?;
    save_to_path(config, &path)
}

/// Persist a new theme preference without disturbing other settings.
///
/// Reads the file fresh so environment overrides applied to the running
/// session are not baked into the stored config.
pub fn update_theme(theme: ThemeSetting) -> Result<(), ConfigError> {
    let path = config_path()?;
    let mut config = load_from_path(&path)?;
    config.theme = theme;
    save_to_path(&config, &path)
}

/// Save configuration to a specific path, creating parent directories as needed.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, data).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply environment overrides on top of file-loaded settings.
///
/// An unparsable `SENTIVIEW_MAX_INPUT_CHARS` keeps the file value; a blank
/// override is ignored the same way.
fn apply_env_overrides(
    config: &mut AppConfig,
    api_base: Option<&str>,
    max_input_chars: Option<&str>,
) {
    if let Some(base) = api_base {
        let trimmed = base.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            config.api_base_url = trimmed.to_string();
        }
    }
    if let Some(raw) = max_input_chars {
        match raw.trim().parse::<usize>() {
            Ok(value) if value > 0 => config.max_input_chars = value,
            _ => {
                tracing::warn!("Ignoring invalid {ENV_MAX_INPUT_CHARS} value: {raw:?}");
            }
        }
    }
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}
