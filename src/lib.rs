//! PopCommand plugin
//!
//! A game-server plugin that reports population statistics (online players,
//! slots, sleepers, joining and queued connections) through the `/pop` and
//! `/apop` chat commands, with English and French messages.

#![allow(non_snake_case)]

pub mod config;
pub mod console;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod models;
pub mod plugin;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::{PluginConfig, Settings};
pub use utils::errors::{PopCommandError, Result};

// Re-export main components for easy access
pub use i18n::{I18n, MessageResolver};
pub use plugin::PopCommandPlugin;
pub use services::HostServices;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
