use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WarpConfig {
    /// Unix socket of the background process. Defaults to
    /// `~/.config/warp/warp.sock`.
    pub socket_path: Option<PathBuf>,
    pub theme: PaletteType,
    /// Open the overlay immediately at launch (preview mode).
    pub start_open: bool,
    pub toast_duration_ms: u64,
}

impl Default for WarpConfig {
    fn default() -> Self {
        Self {
            socket_path: None,
            theme: PaletteType::CatppuccinMocha,
            start_open: false,
            toast_duration_ms: 2000,
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("warp");
        path
    })
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

impl WarpConfig {
    /// Load from `~/.config/warp/config.toml`; any missing or unreadable
    /// file falls back to defaults.
    #[must_use]
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|error| {
                tracing::warn!(?path, %error, "invalid config, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    #[must_use]
    pub fn resolved_socket_path(&self) -> Option<PathBuf> {
        self.socket_path
            .clone()
            .or_else(|| config_dir().map(|dir| dir.join("warp.sock")))
    }
}
