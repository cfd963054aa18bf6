//! Configuration for a capture session.

use serde::{Deserialize, Serialize};

use crate::{Result, SplitkeyError, constants};

/// Per-session configuration, supplied by the caller at open time and
/// immutable for the session's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Required number of hex characters in the combined secret,
    /// excluding an optional `0x` prefix.
    pub expected_len: usize,
    /// Optional caller context (e.g. the exchange the key belongs to).
    /// Diagnostics only; never rendered by the core itself.
    pub context_label: Option<String>,
    /// Language tag handed through to the label lookup collaborator.
    pub language: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            expected_len: constants::DEFAULT_EXPECTED_HEX_LEN,
            context_label: None,
            language: "en".to_string(),
        }
    }
}

impl SessionConfig {
    /// Config for a secret of `expected_len` hex characters.
    #[must_use]
    pub fn new(expected_len: usize) -> Self {
        Self {
            expected_len,
            ..Self::default()
        }
    }

    /// Attach a caller context label.
    #[must_use]
    pub fn with_context(mut self, label: impl Into<String>) -> Self {
        self.context_label = Some(label.into());
        self
    }

    /// Check the config is usable.
    ///
    /// # Errors
    /// Returns `Configuration` if `expected_len` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.expected_len == 0 {
            return Err(SplitkeyError::Configuration(
                "expected_len must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
