//! Internationalization module
//!
//! This module handles the English and French message tables, per-player
//! language selection, placeholder validation and message resolution.

pub mod format;
pub mod loader;
pub mod messages;
pub mod resolver;

// Re-export commonly used i18n components
pub use loader::{I18n, TranslationStats, LanguageStats};
pub use messages::MessageKey;
pub use resolver::MessageResolver;
