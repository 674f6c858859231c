//! Configuration management for the callout CLI.
//!
//! Parses `callout.toml` files with serde and provides auto-discovery of
//! config files in parent directories. CLI settings can be applied during
//! load via [`CliSettings`] and take precedence over file values.
//!
//! A missing config file is not an error: every option falls back to the
//! transform defaults.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use callout_core::{CalloutOptions, Wrapper};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "callout.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the CSS class prefix.
    pub class_prefix: Option<String>,
    /// Override header rendering.
    pub render_header: Option<bool>,
    /// Override the wrapper tag name.
    pub wrapper: Option<String>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Render options.
    pub render: RenderConfig,
    /// Modifier → icon markup overrides for header icons.
    pub icons: Option<HashMap<String, String>>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Render options as parsed from `callout.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// CSS class prefix for callout elements.
    pub class_prefix: Option<String>,
    /// Whether the icon/label header is rendered.
    pub render_header: Option<bool>,
    /// Wrapper tag name: `div` or `blockquote`.
    pub wrapper: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `callout.toml` in the current directory and parents,
    /// falling back to defaults when nothing is found.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to
    /// take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist or
    /// parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Convert into transform options.
    ///
    /// The wrapper tag name is parsed with its documented fallback: any
    /// value other than `blockquote` maps to `div`.
    #[must_use]
    pub fn into_options(self) -> CalloutOptions {
        CalloutOptions {
            class_prefix: self.render.class_prefix,
            render_header: self.render.render_header,
            wrapper: self
                .render
                .wrapper
                .as_deref()
                .map(Wrapper::parse_or_default),
            icons: self.icons,
        }
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(class_prefix) = &settings.class_prefix {
            self.render.class_prefix = Some(class_prefix.clone());
        }
        if let Some(render_header) = settings.render_header {
            self.render.render_header = Some(render_header);
        }
        if let Some(wrapper) = &settings.wrapper {
            self.render.wrapper = Some(wrapper.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }
}
