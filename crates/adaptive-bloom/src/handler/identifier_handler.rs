//! Identifier handler
//!
//! Normalises and validates identifiers before they reach the service:
//! - Trim surrounding whitespace and lowercase
//! - Reject fewer than 2 or more than 20 characters
//! - Accept only ASCII letters, digits and underscores

use crate::error::IdentifierError;

pub const MIN_IDENTIFIER_LEN: usize = 2;
pub const MAX_IDENTIFIER_LEN: usize = 20;

/// Maximum number of alternatives offered for a taken identifier
pub const MAX_SUGGESTIONS: usize = 5;

const SUGGESTION_PREFIXES: [&str; 5] = ["the", "cool", "new", "super", "real"];
const SUGGESTION_SUFFIXES: [&str; 5] = ["_dev", "_writer", "_blogger", "_pro", "_official"];

/// Validates identifiers and proposes alternatives
#[derive(Clone, Debug)]
pub struct IdentifierHandler {
    min_len: usize,
    max_len: usize,
}

impl Default for IdentifierHandler {
    fn default() -> Self {
        Self {
            min_len: MIN_IDENTIFIER_LEN,
            max_len: MAX_IDENTIFIER_LEN,
        }
    }
}

impl IdentifierHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim and lowercase
    pub fn normalize(&self, raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// Normalise `raw` and check it against the identifier rules
    ///
    /// Returns the normalised identifier.
    pub fn validate(&self, raw: &str) -> Result<String, IdentifierError> {
        let normalized = self.normalize(raw);
        self.check(&normalized)?;
        Ok(normalized)
    }

    fn check(&self, normalized: &str) -> Result<(), IdentifierError> {
        if normalized.is_empty() {
            return Err(IdentifierError::Empty);
        }

        let len = normalized.chars().count();
        if len < self.min_len {
            return Err(IdentifierError::TooShort {
                len,
                min: self.min_len,
            });
        }
        if len > self.max_len {
            return Err(IdentifierError::TooLong {
                len,
                max: self.max_len,
            });
        }

        if let Some(ch) = normalized
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(IdentifierError::InvalidCharacter { ch });
        }

        Ok(())
    }

    /// Propose up to [`MAX_SUGGESTIONS`] alternatives to a taken identifier
    ///
    /// Candidates are tried in order: numeric suffixes 1..=99, then word
    /// prefixes, then word suffixes. A candidate is kept only if it is a valid
    /// identifier and `is_free` accepts it.
    pub fn suggest_alternatives<F>(&self, base: &str, mut is_free: F) -> Vec<String>
    where
        F: FnMut(&str) -> bool,
    {
        let numbered = (1..=99).map(|i| format!("{}{}", base, i));
        let prefixed = SUGGESTION_PREFIXES
            .iter()
            .map(|prefix| format!("{}{}", prefix, base));
        let suffixed = SUGGESTION_SUFFIXES
            .iter()
            .map(|suffix| format!("{}{}", base, suffix));

        numbered
            .chain(prefixed)
            .chain(suffixed)
            .filter(|candidate| candidate.as_str() != base && self.check(candidate).is_ok())
            .filter(|candidate| is_free(candidate.as_str()))
            .take(MAX_SUGGESTIONS)
            .collect()
    }
}
