//! Clipboard bridge — places the decoy on the system clipboard.
//!
//! The platform clipboard is an injected capability so the core stays
//! testable without a windowing system, and so embedders (native, wasm,
//! terminal) can supply whatever write mechanism their platform offers.
//!
//! Failure is a first-class outcome, not an error path: when the write is
//! refused (permission prompt denied, no document focus, API missing), the
//! decoy is handed back so the caller can render it for the user to copy
//! manually. The obfuscation goal then still partially holds — a decoy on
//! screen is better than nothing on the clipboard.

use splitkey_types::{Result, SplitkeyError};

/// Injected platform clipboard capability.
pub trait Clipboard: Send + Sync {
    /// Write `text` to the system clipboard.
    ///
    /// # Errors
    /// Returns `ClipboardWrite` when the platform refuses the write.
    fn set_contents(&self, text: &str) -> Result<()>;
}

impl Clipboard for Box<dyn Clipboard> {
    fn set_contents(&self, text: &str) -> Result<()> {
        self.as_ref().set_contents(text)
    }
}

/// Outcome of one decoy copy attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The decoy reached the clipboard. The decoy value is deliberately
    /// absent here: once copied it must not be retained anywhere
    /// renderable.
    Copied,
    /// The write failed; the decoy comes back for manual display.
    Failed { decoy: String },
}

/// Attempt to place `decoy` on the clipboard.
///
/// Never fails: every error a `Clipboard` impl produces — including ones
/// it should not, per its contract — is classified into
/// [`CopyOutcome::Failed`] and logged at `warn`.
pub fn try_copy(clipboard: &dyn Clipboard, decoy: &str) -> CopyOutcome {
    match clipboard.set_contents(decoy) {
        Ok(()) => CopyOutcome::Copied,
        Err(err) => {
            let reason = match err {
                SplitkeyError::ClipboardWrite { reason } => reason,
                other => other.to_string(),
            };
            tracing::warn!(%reason, "decoy copy failed, falling back to manual display");
            CopyOutcome::Failed {
                decoy: decoy.to_string(),
            }
        }
    }
}
