//! Positional placeholder validation and substitution
//!
//! Templates use `{N}` placeholders indexing into an ordered list of values.
//! `{{` and `}}` render as literal braces.

use std::fmt::{Display, Write};
use std::sync::OnceLock;
use regex::Regex;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\d+\}").expect("placeholder pattern is valid"))
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{|\}\}|\{(\d+)\}").expect("token pattern is valid"))
}

/// A placeholder referenced an index with no matching value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
}

/// Count `{digits}` occurrences in a template.
///
/// Repeated indices are counted once per occurrence: `{0}{0}` counts as two.
pub fn count_placeholders(template: &str) -> usize {
    placeholder_pattern().find_iter(template).count()
}

/// Whether a template can be formatted with `supplied` values under the
/// occurrence-count rule
pub fn verify_placeholders(template: &str, supplied: usize) -> bool {
    count_placeholders(template) <= supplied
}

/// Substitute every `{i}` with `values[i]`
pub fn format_template<T: Display>(template: &str, values: &[T]) -> Result<String, IndexOutOfRange> {
    let mut output = String::with_capacity(template.len());
    let mut last = 0;

    for caps in token_pattern().captures_iter(template) {
        let Some(token) = caps.get(0) else { continue };
        output.push_str(&template[last..token.start()]);

        match caps.get(1) {
            Some(digits) => {
                // indices too large for usize can never be in range
                let index = digits.as_str().parse::<usize>().unwrap_or(usize::MAX);
                let value = values.get(index).ok_or(IndexOutOfRange { index })?;
                let _ = write!(output, "{}", value);
            }
            None => output.push_str(&token.as_str()[..1]),
        }

        last = token.end();
    }

    output.push_str(&template[last..]);
    Ok(output)
}
