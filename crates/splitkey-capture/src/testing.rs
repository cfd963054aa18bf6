//! Deterministic fakes for the injected capabilities.
//!
//! Used by this crate's own tests and available to downstream crates that
//! want to drive a capture session without a windowing system or a real
//! entropy source.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use splitkey_types::{Result, SplitkeyError, Stage};

use crate::clipboard::Clipboard;
use crate::decoy::EntropySource;
use crate::hooks::SessionHooks;
use crate::labels::{LabelKey, Labels};

// ---------------------------------------------------------------------------
// FixedEntropy
// ---------------------------------------------------------------------------

/// Entropy source that repeats a single byte. `FixedEntropy::new(0xab)`
/// makes every decoy `"abab…ab"`.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy {
    byte: u8,
}

impl FixedEntropy {
    #[must_use]
    pub fn new(byte: u8) -> Self {
        Self { byte }
    }
}

impl EntropySource for FixedEntropy {
    fn fill(&self, buf: &mut [u8]) {
        buf.fill(self.byte);
    }
}

// ---------------------------------------------------------------------------
// FakeClipboard
// ---------------------------------------------------------------------------

/// Clipboard stub that either records writes or refuses them.
#[derive(Debug, Default)]
pub struct FakeClipboard {
    contents: Mutex<Option<String>>,
    failure: Option<String>,
}

impl FakeClipboard {
    /// A clipboard whose writes succeed.
    #[must_use]
    pub fn working() -> Self {
        Self::default()
    }

    /// A clipboard whose writes fail with `reason`.
    #[must_use]
    pub fn broken(reason: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(None),
            failure: Some(reason.into()),
        }
    }

    /// What the last successful write placed on the clipboard.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().expect("clipboard lock").clone()
    }
}

impl Clipboard for FakeClipboard {
    fn set_contents(&self, text: &str) -> Result<()> {
        if let Some(reason) = &self.failure {
            return Err(SplitkeyError::ClipboardWrite {
                reason: reason.clone(),
            });
        }
        *self.contents.lock().expect("clipboard lock") = Some(text.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// RecordingHooks
// ---------------------------------------------------------------------------

/// Hooks that count their invocations.
#[derive(Debug, Default)]
pub struct RecordingHooks {
    focus_events: Mutex<Vec<(Stage, Duration)>>,
    closed_count: AtomicUsize,
}

impl RecordingHooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stages focus was requested for, in order.
    #[must_use]
    pub fn focus_stages(&self) -> Vec<Stage> {
        self.focus_events
            .lock()
            .expect("hooks lock")
            .iter()
            .map(|(stage, _)| *stage)
            .collect()
    }

    /// How many times `closed` has fired.
    #[must_use]
    pub fn closed_count(&self) -> usize {
        self.closed_count.load(Ordering::SeqCst)
    }
}

impl SessionHooks for RecordingHooks {
    fn focus_requested(&self, stage: Stage, delay: Duration) {
        self.focus_events
            .lock()
            .expect("hooks lock")
            .push((stage, delay));
    }

    fn closed(&self) {
        self.closed_count.fetch_add(1, Ordering::SeqCst);
    }
}

// ---------------------------------------------------------------------------
// StaticLabels
// ---------------------------------------------------------------------------

/// Map-backed label lookup. Unknown keys fall back to the key name so
/// tests can spot missing copy.
#[derive(Debug, Default)]
pub struct StaticLabels {
    entries: HashMap<(String, String), String>,
}

impl StaticLabels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template for `(key, language)`.
    #[must_use]
    pub fn with(mut self, key: LabelKey, language: &str, template: &str) -> Self {
        self.entries
            .insert((key.to_string(), language.to_string()), template.to_string());
        self
    }
}

impl Labels for StaticLabels {
    fn lookup(&self, key: LabelKey, language: &str) -> String {
        self.entries
            .get(&(key.to_string(), language.to_string()))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
