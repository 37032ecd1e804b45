//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/orgtree/orgtree.toml`
//! 3. Environment variables: `ORGTREE_*` prefix
//! 4. CLI flags (applied by the caller after loading)

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("config error: {message}")]
pub struct SettingsError {
    pub message: String,
}

/// Unified configuration for the orgtree server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Bind host (default: 127.0.0.1)
    pub host: String,
    /// Bind port (default: 3000)
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Get the XDG config directory for orgtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "orgtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("orgtree.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load() -> Result<Self, SettingsError> {
        let defaults = Settings::default();

        let mut builder = Config::builder()
            .set_default("host", defaults.host.clone())
            .map_err(config_err)?
            .set_default("port", i64::from(defaults.port))
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        builder = builder.add_source(Environment::with_prefix("ORGTREE").try_parsing(true));

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// The `host:port` address the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self).map_err(|e| SettingsError {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> SettingsError {
    SettingsError {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load().expect("load defaults");
        assert!(!settings.host.is_empty());
        assert_ne!(settings.port, 0);
    }

    #[test]
    fn given_default_settings_when_formatting_bind_addr_then_joins_host_and_port() {
        let settings = Settings::default();
        assert_eq!(settings.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn given_settings_when_rendering_toml_then_contains_both_fields() {
        let rendered = Settings::default().to_toml().expect("render toml");
        assert!(rendered.contains("host"));
        assert!(rendered.contains("port"));
    }
}
