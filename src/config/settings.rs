//! Application settings management
//!
//! This module defines the runtime configuration of the console host and
//! provides methods for loading settings from TOML files and environment
//! variables.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::models::PopulationSnapshot;

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub plugin: PluginPaths,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
    pub console: ConsoleConfig,
}

/// Where the plugin keeps its own files
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PluginPaths {
    /// Plugin configuration file (JSON)
    pub config_path: String,
    /// Directory holding `<locale>.json` language files
    pub lang_dir: String,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct I18nConfig {
    pub default_language: String,
    pub supported_languages: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for rolling log files; stdout only when unset
    pub directory: Option<String>,
    pub file_name: String,
}

/// In-memory host used by the console binary
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Player ids holding the host admin role
    pub admins: Vec<String>,
    /// Permissions granted per player id
    pub permissions: HashMap<String, Vec<String>>,
    /// Preferred language per player id
    pub languages: HashMap<String, String>,
    pub population: PopulationSnapshot,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("config")
    }

    /// Load settings from the given file stem (any format the `config` crate detects)
    pub fn from_file(name: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .add_source(
                config::Environment::with_prefix("POPCOMMAND")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("i18n.supported_languages")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::PopCommandError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            plugin: PluginPaths::default(),
            i18n: I18nConfig::default(),
            logging: LoggingConfig::default(),
            console: ConsoleConfig::default(),
        }
    }
}

impl Default for PluginPaths {
    fn default() -> Self {
        Self {
            config_path: "config/PopCommand.json".to_string(),
            lang_dir: "lang".to_string(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            supported_languages: vec!["en".to_string(), "fr".to_string()],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_name: "popcommand.log".to_string(),
        }
    }
}
