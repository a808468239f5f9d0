//! Localized message resolution
//!
//! Turns a message key, a recipient and an ordered list of values into the
//! string sent to chat. A template referencing more placeholders than values
//! resolves to the localized `PopCommand.Error` message instead of failing.

use std::fmt::Display;
use std::sync::Arc;
use tracing::error;
use crate::utils::errors::{PopCommandError, Result};
use crate::utils::logging;
use super::format::{count_placeholders, format_template};
use super::{I18n, MessageKey};

/// Resolves localized chat messages for recipients
#[derive(Debug, Clone)]
pub struct MessageResolver {
    i18n: Arc<I18n>,
}

impl MessageResolver {
    pub fn new(i18n: Arc<I18n>) -> Self {
        Self { i18n }
    }

    /// Resolve `key` for `recipient` with positional `values`.
    ///
    /// Errors only when the key exists in no language or a placeholder index
    /// has no value despite passing the occurrence check.
    pub fn resolve<T: Display>(&self, key: &str, recipient: Option<&str>, values: &[T]) -> Result<String> {
        let result = self.try_resolve(key, recipient, values);
        if let Err(e) = &result {
            error!(key = key, recipient = recipient, error = %e, "Failed to resolve message");
        }
        result
    }

    /// Resolve a message that takes no values
    pub fn resolve_plain(&self, key: &str, recipient: Option<&str>) -> Result<String> {
        self.resolve::<&str>(key, recipient, &[])
    }

    fn try_resolve<T: Display>(&self, key: &str, recipient: Option<&str>, values: &[T]) -> Result<String> {
        let lang = self.i18n.language_for(recipient);
        let template = self.template(key, &lang)?;

        let placeholders = count_placeholders(template);
        if placeholders > values.len() {
            logging::log_template_fallback(key, &lang, placeholders, values.len());
            // The error template is sent as written, never formatted
            return self.template(MessageKey::POP_ERROR, &lang).map(str::to_string);
        }

        substitute(key, template, values)
    }

    fn template(&self, key: &str, lang: &str) -> Result<&str> {
        self.i18n
            .get_template(key, lang)
            .ok_or_else(|| PopCommandError::MissingTranslation { key: key.to_string() })
    }
}

fn substitute<T: Display>(key: &str, template: &str, values: &[T]) -> Result<String> {
    format_template(template, values).map_err(|e| PopCommandError::PlaceholderOutOfRange {
        key: key.to_string(),
        index: e.index,
        supplied: values.len(),
    })
}
