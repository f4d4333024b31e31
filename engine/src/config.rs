use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use teamsplit_types::ui::{DEFAULT_TOAST_SETTLE, DEFAULT_TOAST_VISIBLE};

#[derive(Debug, Default, Deserialize)]
pub struct TeamsplitConfig {
    pub app: Option<AppConfig>,
    /// Starting roster. When absent the built-in default members are used.
    pub roster: Option<RosterConfig>,
    pub toast: Option<ToastConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and markers.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable the toast entrance animation.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct RosterConfig {
    /// An explicit empty list starts the session with no members.
    #[serde(default)]
    pub members: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ToastConfig {
    /// How long a toast stays on screen. Default: 3000.
    pub visible_ms: Option<u64>,
    /// Gap between a replaced toast and its successor. Default: 300.
    pub settle_ms: Option<u64>,
}

impl ToastConfig {
    #[must_use]
    pub fn visible(&self) -> Duration {
        self.visible_ms
            .map_or(DEFAULT_TOAST_VISIBLE, Duration::from_millis)
    }

    #[must_use]
    pub fn settle(&self) -> Duration {
        self.settle_ms.map_or(DEFAULT_TOAST_SETTLE, Duration::from_millis)
    }
}

impl TeamsplitConfig {
    /// Load from the default location. A missing file is not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".teamsplit").join("config.toml"))
}

/// `1`, `true`, `yes` and `on` (any case) enable a flag.
pub(crate) fn env_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
