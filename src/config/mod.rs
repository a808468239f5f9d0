//! Configuration management module
//!
//! This module handles loading and validation of the host settings (TOML
//! files and environment variables) and of the plugin's own JSON file.

pub mod plugin;
pub mod settings;
pub mod validation;

pub use plugin::{PluginConfig, DisplayOptions, PERMISSION_USE, PERMISSION_ADMIN};
pub use settings::{Settings, PluginPaths, I18nConfig, LoggingConfig, ConsoleConfig};
