//! User configuration
//!
//! Read from `config.toml` in the user config directory. A missing file means
//! defaults; a present file only needs the keys it wants to change.
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. User-level (~/.config/timewarp/config.toml)
//! 4. Default values
//! ```
//!
//! # Usage
//!
//! ```rust
//! use timewarp::util::config::{load_user_config, UserConfig};
//!
//! let config = load_user_config().unwrap_or_default();
//! assert!(config.repl.history_size > 0);
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// User-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UserConfig {
    /// Internationalization settings
    #[serde(default)]
    pub i18n: I18nConfig,
    /// REPL settings
    #[serde(default)]
    pub repl: ReplConfig,
}

/// I18n configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct I18nConfig {
    /// Language for log messages
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Fallback language
    #[serde(default = "default_lang")]
    pub fallback: String,
}

fn default_lang() -> String {
    "en".to_string()
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            fallback: default_lang(),
        }
    }
}

/// REPL configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplConfig {
    /// Prompt string; the classic screen has none
    #[serde(default)]
    pub prompt: String,
    /// History file path
    #[serde(default)]
    pub history_file: Option<PathBuf>,
    /// History size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
    /// Coloured output
    #[serde(default = "default_true")]
    pub colors: bool,
    /// VI editing mode instead of Emacs
    #[serde(default)]
    pub vi_mode: bool,
    /// Show syntax diagnostics before running an immediate statement
    #[serde(default = "default_true")]
    pub validate_immediate: bool,
    /// Show syntax diagnostics before `RUN`
    #[serde(default)]
    pub validate_on_run: bool,
}

fn default_history_size() -> usize {
    1000
}

fn default_true() -> bool {
    true
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            history_file: None,
            history_size: default_history_size(),
            colors: true,
            vi_mode: false,
            validate_immediate: true,
            validate_on_run: false,
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Cannot determine config directory")]
    NoConfigDir,
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join("timewarp"));
    }

    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("timewarp"));
    }

    // Windows
    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("timewarp"));
    }

    None
}

/// Get the user config file path (~/.config/timewarp/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Load user-level configuration, defaults if the file doesn't exist
pub fn load_user_config() -> Result<UserConfig, ConfigError> {
    match get_config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Ok(UserConfig::default()),
    }
}

/// Load configuration from an explicit file
pub fn load_config_from(path: &Path) -> Result<UserConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Save user-level configuration
pub fn save_user_config(config: &UserConfig) -> Result<PathBuf, ConfigError> {
    let dir = get_config_dir().ok_or(ConfigError::NoConfigDir)?;
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    let path = dir.join("config.toml");
    fs::write(&path, toml::to_string_pretty(config)?)?;
    Ok(path)
}
