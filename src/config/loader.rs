use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::config::types::{Config, PageConfig, ThemeConfig};
use crate::ui::global_style::GlobalStyle;
use crate::ui::theme::Theme;
use ratatui::style::Color;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/tui-carousel/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("tui-carousel").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks that every color string parses.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.theme.theme()?;
        self.page.global_style()?;
        Ok(())
    }
}

impl ThemeConfig {
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Ok(Theme {
            main: parse_color("theme.main", &self.main)?,
            complementary: parse_color("theme.complementary", &self.complementary)?,
        })
    }
}

impl PageConfig {
    pub fn global_style(&self) -> Result<GlobalStyle, ConfigError> {
        Ok(GlobalStyle {
            foreground: parse_color("page.foreground", &self.foreground)?,
            background: parse_color("page.background", &self.background)?,
            padding: self.padding,
        })
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value).map_err(|_| ConfigError::ValidationError {
        message: format!("{field}: '{value}' is not a color"),
    })
}
