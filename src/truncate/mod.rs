//! Word-boundary truncation.
//!
//! Text that fits the limit is returned untouched. Longer text is cut at the
//! last separator whose character index is at most the limit. A trailing
//! `, ; : -` is dropped from the cut, and an ellipsis is appended unless the
//! cut already ended a sentence with `. ? !`.
//!
//! When no separator occurs within the limit the cut is empty, so the result
//! is a bare ellipsis. There is no hard character cut fallback.

pub mod error;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::utils::{
    char_count, is_sentence_end, is_trailing_punctuation, last_separator_at_or_before,
    DEFAULT_SEPARATOR, ELLIPSIS,
};

pub use self::error::{InvalidArgument, TruncateError};

/// Options for the truncator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruncateOptions {
    /// Character used to find a safe cut point
    pub separator: char,
}

impl Default for TruncateOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl TruncateOptions {
    /// Options with a custom separator
    pub fn with_separator(separator: char) -> Self {
        Self { separator }
    }
}

/// Truncate `text` to `character_limit` characters, cutting on spaces
pub fn truncate(text: &str, character_limit: usize) -> String {
    truncate_with(text, character_limit, DEFAULT_SEPARATOR)
}

/// Truncate `text` to `character_limit` characters, cutting on `separator`
pub fn truncate_with(text: &str, character_limit: usize, separator: char) -> String {
    if char_count(text) <= character_limit {
        return text.to_string();
    }

    let candidate = match last_separator_at_or_before(text, separator, character_limit) {
        Some(offset) => &text[..offset],
        None => {
            trace!(
                character_limit,
                ?separator,
                "no separator within limit, cutting to empty"
            );
            ""
        }
    };

    let last = candidate.chars().next_back();

    let mut result = match last {
        Some(c) if is_trailing_punctuation(c) => {
            candidate[..candidate.len() - c.len_utf8()].to_string()
        }
        _ => candidate.to_string(),
    };

    // Decided on the character before trimming
    if !last.is_some_and(is_sentence_end) {
        result.push(ELLIPSIS);
    }

    debug!(
        character_limit,
        kept = char_count(candidate),
        "truncated text"
    );

    result
}

/// Validate a signed limit coming from an untyped source
pub fn parse_limit(limit: i64) -> Result<usize, TruncateError> {
    if limit < 0 {
        return Err(InvalidArgument::NegativeLimit(limit).into());
    }
    if limit == 0 {
        return Err(InvalidArgument::ZeroLimit.into());
    }
    Ok(usize::try_from(limit).unwrap_or(usize::MAX))
}

/// Validate a separator given as a string
pub fn parse_separator(separator: &str) -> Result<char, TruncateError> {
    let mut chars = separator.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(InvalidArgument::EmptySeparator.into()),
        (Some(c), None) => Ok(c),
        (Some(_), Some(_)) => {
            Err(InvalidArgument::MultiCharSeparator(separator.to_string()).into())
        }
    }
}

/// Validating variant of [`truncate_with`] for untyped arguments
pub fn try_truncate(text: &str, limit: i64, separator: &str) -> Result<String, TruncateError> {
    let limit = parse_limit(limit)?;
    let separator = parse_separator(separator)?;
    Ok(truncate_with(text, limit, separator))
}

/// A character budget paired with truncation options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Truncator {
    limit: usize,
    options: TruncateOptions,
}

impl Truncator {
    /// Create a truncator with the default separator
    pub fn new(limit: usize) -> Self {
        Self::with_options(limit, TruncateOptions::default())
    }

    pub fn with_options(limit: usize, options: TruncateOptions) -> Self {
        Self { limit, options }
    }

    /// Replace the separator
    pub fn with_separator(mut self, separator: char) -> Self {
        self.options.separator = separator;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn options(&self) -> TruncateOptions {
        self.options
    }

    /// Whether `text` would come back unchanged
    pub fn fits(&self, text: &str) -> bool {
        char_count(text) <= self.limit
    }

    pub fn apply(&self, text: &str) -> String {
        truncate_with(text, self.limit, self.options.separator)
    }

    /// Truncate every item with the same budget
    pub fn apply_all<I, S>(&self, texts: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .map(|text| self.apply(text.as_ref()))
            .collect()
    }
}
