//! Translation loader and i18n management
//!
//! This module keeps the locale-keyed template tables, the per-player language
//! preferences, and loads operator overrides from `<lang_dir>/<locale>.json`.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use serde_json::Value;
use tokio::fs;
use tracing::{info, warn, debug};
use crate::utils::errors::{PopCommandError, Result};
use crate::config::I18nConfig;
use super::messages;

/// Main internationalization manager
#[derive(Debug, Clone)]
pub struct I18n {
    /// Templates by language code, then message key
    translations: HashMap<String, HashMap<String, String>>,
    /// Default language code
    default_language: String,
    /// Supported language codes
    supported_languages: Vec<String>,
    /// Language preference by player id
    player_languages: HashMap<String, String>,
}

impl I18n {
    /// Create an empty I18n instance
    pub fn new(config: &I18nConfig) -> Self {
        Self {
            translations: HashMap::new(),
            default_language: config.default_language.clone(),
            supported_languages: config.supported_languages.clone(),
            player_languages: HashMap::new(),
        }
    }

    /// Create an instance with the built-in tables registered for every
    /// supported language that ships one
    pub fn with_default_messages(config: &I18nConfig) -> Self {
        let mut i18n = Self::new(config);
        for lang in config.supported_languages.clone() {
            match messages::default_messages(&lang) {
                Some(table) => i18n.register_messages(&lang, table.iter().copied()),
                None => warn!("No built-in messages for language: {}", lang),
            }
        }
        i18n
    }

    /// Register templates for a language, replacing existing keys
    pub fn register_messages<K, V>(&mut self, lang: &str, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let table = self.translations.entry(lang.to_string()).or_default();
        for (key, template) in entries {
            table.insert(key.into(), template.into());
        }
    }

    /// Load language files from `dir`, overriding built-in templates key by
    /// key. Missing files are written out from the registered tables.
    pub async fn load_translations(&mut self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();

        if !dir.exists() {
            warn!("Language directory not found, creating it: {}", dir.display());
            fs::create_dir_all(dir).await?;
        }

        let supported_languages = self.supported_languages.clone();
        for lang_code in &supported_languages {
            let file_path = dir.join(format!("{}.json", lang_code));

            if file_path.exists() {
                self.load_language_file(&file_path, lang_code).await?;
                info!("Loaded translations for language: {}", lang_code);
            } else if let Some(table) = self.translations.get(lang_code) {
                let sorted: BTreeMap<_, _> = table.iter().collect();
                fs::write(&file_path, serde_json::to_string_pretty(&sorted)?).await?;
                info!("Wrote default translations to {}", file_path.display());
            } else {
                warn!("Translation file not found: {}", file_path.display());
            }
        }

        self.check_default_language()
    }

    /// Load a single language file
    async fn load_language_file(&mut self, file_path: &Path, lang_code: &str) -> Result<()> {
        let content = fs::read_to_string(file_path).await?;
        let entries = parse_language_document(&content, lang_code)?;

        debug!("Loaded {} translation keys for {}", entries.len(), lang_code);
        self.register_messages(lang_code, entries);
        Ok(())
    }

    /// Every expected key must exist in the default language, since it is the
    /// last resort of every lookup
    fn check_default_language(&self) -> Result<()> {
        for key in messages::MessageKey::ALL {
            if self.get_template(key, &self.default_language).is_none() {
                return Err(PopCommandError::MissingTranslation { key: key.to_string() });
            }
        }
        Ok(())
    }

    /// Template for a key in a language, falling back to the default language
    pub fn get_template(&self, key: &str, lang: &str) -> Option<&str> {
        self.translations
            .get(lang)
            .and_then(|table| table.get(key))
            .or_else(|| {
                self.translations
                    .get(&self.default_language)
                    .and_then(|table| table.get(key))
            })
            .map(String::as_str)
    }

    /// Check if a language is supported
    pub fn is_language_supported(&self, lang: &str) -> bool {
        self.supported_languages.iter().any(|l| l == lang)
    }

    /// Get the effective language (fallback to default if not supported)
    pub fn get_effective_language(&self, lang: &str) -> String {
        if self.is_language_supported(lang) && self.translations.contains_key(lang) {
            lang.to_string()
        } else {
            self.default_language.clone()
        }
    }

    /// Language to use for a recipient; unknown or absent players get the default
    pub fn language_for(&self, player_id: Option<&str>) -> String {
        match player_id.and_then(|id| self.player_languages.get(id)) {
            Some(lang) => self.get_effective_language(lang),
            None => self.default_language.clone(),
        }
    }

    /// Remember a player's language preference (e.g. "fr", "fr-CA")
    pub fn set_player_language(&mut self, player_id: &str, lang: &str) {
        let lang_code = self.detect_user_language(Some(lang));
        debug!(player_id = player_id, requested = lang, language = %lang_code, "Player language set");
        self.player_languages.insert(player_id.to_string(), lang_code);
    }

    /// Reduce a locale tag to a supported language code
    pub fn detect_user_language(&self, locale: Option<&str>) -> String {
        if let Some(lang) = locale {
            let lang_code = lang.split(['-', '_']).next().unwrap_or(lang).to_ascii_lowercase();

            if self.is_language_supported(&lang_code) {
                return lang_code;
            }
        }

        self.default_language.clone()
    }

    /// Get supported languages
    pub fn supported_languages(&self) -> &[String] {
        &self.supported_languages
    }

    /// Get default language
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Get translation statistics
    pub fn get_stats(&self) -> TranslationStats {
        let mut languages: Vec<LanguageStats> = self
            .translations
            .iter()
            .map(|(code, table)| LanguageStats {
                code: code.clone(),
                key_count: table.len(),
            })
            .collect();
        languages.sort_by(|a, b| a.code.cmp(&b.code));

        let total_keys = self
            .translations
            .get(&self.default_language)
            .map_or(0, HashMap::len);

        TranslationStats { languages, total_keys }
    }
}

/// Parse a flat `{ "key": "template" }` language document
fn parse_language_document(content: &str, lang_code: &str) -> Result<Vec<(String, String)>> {
    let invalid = |reason: String| PopCommandError::InvalidTranslationFile {
        locale: lang_code.to_string(),
        reason,
    };

    let document: Value = serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?;
    let Value::Object(map) = document else {
        return Err(invalid("expected a JSON object".to_string()));
    };

    map.into_iter()
        .map(|(key, value)| match value {
            Value::String(template) => Ok((key, template)),
            other => Err(invalid(format!("value of '{}' must be a string, got {}", key, other))),
        })
        .collect()
}

/// Translation statistics
#[derive(Debug, Clone)]
pub struct TranslationStats {
    pub languages: Vec<LanguageStats>,
    pub total_keys: usize,
}

/// Language-specific statistics
#[derive(Debug, Clone)]
pub struct LanguageStats {
    pub code: String,
    pub key_count: usize,
}
