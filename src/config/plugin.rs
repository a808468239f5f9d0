//! Plugin configuration file
//!
//! The plugin keeps its own JSON configuration with the human-readable key
//! names server operators are used to editing. Missing files and missing keys
//! fall back to defaults, and the normalized file is written back on load.

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use crate::utils::errors::Result;

/// Permission checked for `/pop` when `use_permission_for_players` is set
pub const PERMISSION_USE: &str = "popcommand.use";

/// Permission required (together with the admin role) for `/apop`
pub const PERMISSION_ADMIN: &str = "popcommand.admin";

/// Plugin configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PluginConfig {
    #[serde(rename = "Use permission for lambda players")]
    pub use_permission_for_players: bool,

    #[serde(rename = "Broadcast to every player on /pop")]
    pub do_broadcast: bool,

    #[serde(rename = "Chat default avatar")]
    pub chat_avatar: u64,

    #[serde(rename = "Display Options")]
    pub display_options: DisplayOptions,
}

/// Which counters `/pop` reports, always in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayOptions {
    #[serde(rename = "Show player count")]
    pub show_player_count: bool,

    #[serde(rename = "Show server slots")]
    pub show_server_slots: bool,

    #[serde(rename = "Show sleepers")]
    pub show_sleepers: bool,

    #[serde(rename = "Show joining players")]
    pub show_joining_players: bool,

    #[serde(rename = "Show players in queue")]
    pub show_players_in_queue: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            use_permission_for_players: false,
            do_broadcast: false,
            chat_avatar: 0,
            display_options: DisplayOptions::default(),
        }
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_player_count: true,
            show_server_slots: true,
            show_sleepers: false,
            show_joining_players: false,
            show_players_in_queue: false,
        }
    }
}

impl DisplayOptions {
    /// Number of counters that will be reported
    pub fn enabled_count(&self) -> usize {
        [
            self.show_player_count,
            self.show_server_slots,
            self.show_sleepers,
            self.show_joining_players,
            self.show_players_in_queue,
        ]
        .iter()
        .filter(|flag| **flag)
        .count()
    }
}

impl PluginConfig {
    /// Parse a configuration document; absent keys take their defaults
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load the configuration file, creating it with defaults when missing,
    /// and write the normalized document back so every key is present
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let config = if path.exists() {
            let content = fs::read_to_string(path)?;
            let config = Self::from_json(&content)?;
            info!(path = %path.display(), "Loaded plugin configuration");
            config
        } else {
            warn!(path = %path.display(), "Plugin configuration not found, using defaults");
            Self::default()
        };

        if config.display_options.enabled_count() == 0 {
            warn!("All display options are disabled, /pop will report no counters");
        }

        config.save(path)?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
