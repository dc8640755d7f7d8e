// ABOUTME: Configuration loading for the kiosk: tmux program, menu entries, theme and logging

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::app::MenuSettings;

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV: &str = "KIOSK_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub tmux: TmuxConfig,
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TmuxConfig {
    /// Program used for every session operation
    pub program: String,
    /// Session created and attached by "Start Dev Session"
    pub primary_session: String,
}

impl Default for TmuxConfig {
    fn default() -> Self {
        Self {
            program: "tmux".to_string(),
            primary_session: MenuSettings::default().primary_session,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Extra main menu entries that hand off to the caller by name
    pub launchers: Vec<String>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            launchers: MenuSettings::default().launchers,
        }
    }
}

/// Colours as `#rrggbb` or ratatui colour names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub accent: String,
    pub text: String,
    pub cursor: String,
    pub selected: String,
    pub input_background: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "#00d9ff".to_string(),
            text: "#bbbbbb".to_string(),
            cursor: "#00ffd9".to_string(),
            selected: "#c2f0fc".to_string(),
            input_background: "#333333".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for log files, `$HOME/.kiosk/logs` when unset
    pub directory: Option<PathBuf>,
    /// Default filter when `RUST_LOG` is not set
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filter: "kiosk=info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn log_dir(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .map(|home| home.join(".kiosk").join("logs"))
                .unwrap_or_else(|| PathBuf::from(".kiosk/logs"))
        })
    }
}

impl AppConfig {
    /// Load from `KIOSK_CONFIG` or the user config directory. A missing file
    /// yields the defaults.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("kiosk").join("config.toml"))
    }

    pub fn menu_settings(&self) -> MenuSettings {
        MenuSettings {
            primary_session: self.tmux.primary_session.clone(),
            launchers: self.menu.launchers.clone(),
        }
    }
}
