//! Input state machine for two-stage secret capture.
//!
//! One [`Session`] is one modal invocation. The caller opens it with the
//! expected secret length, feeds it input edits, and drives transitions:
//!
//! ```text
//! open → CollectingPart1 --advance--> CollectingPart2 --submit--> CapturedSecret
//!              ^                           |
//!              +--------- retreat ---------+        (cancel from anywhere)
//! ```
//!
//! `advance` is the only transition with a side effect: it generates a
//! decoy and hands it to the clipboard bridge. A clipboard failure never
//! blocks the transition — it downgrades to the manual-copy fallback.
//! All state is discarded on every exit path; nothing survives a close.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use splitkey_types::{
    CapturedSecret, ClipboardStatus, Result, SessionConfig, SessionId, SplitkeyError, Stage,
    constants,
};

use crate::clipboard::{Clipboard, CopyOutcome, try_copy};
use crate::decoy::{self, EntropySource, OsEntropy};
use crate::hooks::SessionHooks;
use crate::labels::{LabelKey, Labels, substitute};
use crate::oblog::ObfuscationLog;
use crate::validate::validate;

/// The two-stage capture session.
///
/// Not reentrant: a second `advance`/`submit` while the decoy copy is in
/// flight is rejected with `Busy`, never queued. The part values are owned
/// exclusively by the session and leave it only as the final concatenation
/// inside [`CapturedSecret`].
pub struct Session {
    // Injected capabilities, shared across opens.
    clipboard: Arc<dyn Clipboard>,
    entropy: Arc<dyn EntropySource>,
    hooks: Option<Arc<dyn SessionHooks>>,

    // Per-open state, fully reset on every close.
    id: SessionId,
    config: SessionConfig,
    open: bool,
    stage: Stage,
    part1: String,
    part2: String,
    clipboard_status: ClipboardStatus,
    manual_decoy: Option<String>,
    log: ObfuscationLog,
    processing: bool,
    error: Option<SplitkeyError>,
}

impl Session {
    /// Create a closed session around the given clipboard, drawing decoys
    /// from the OS CSPRNG.
    #[must_use]
    pub fn new(clipboard: Arc<dyn Clipboard>) -> Self {
        Self {
            clipboard,
            entropy: Arc::new(OsEntropy),
            hooks: None,
            id: SessionId::new(),
            config: SessionConfig::default(),
            open: false,
            stage: Stage::CollectingPart1,
            part1: String::new(),
            part2: String::new(),
            clipboard_status: ClipboardStatus::Idle,
            manual_decoy: None,
            log: ObfuscationLog::new(),
            processing: false,
            error: None,
        }
    }

    /// Substitute the entropy source (tests use a fixed-pattern fake).
    #[must_use]
    pub fn with_entropy(mut self, entropy: Arc<dyn EntropySource>) -> Self {
        self.entropy = entropy;
        self
    }

    /// Install focus/teardown hooks for interactive hosts.
    #[must_use]
    pub fn with_hooks(mut self, hooks: Arc<dyn SessionHooks>) -> Self {
        self.hooks = hooks.into();
        self
    }

    // -----------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------

    /// Activate the session at `CollectingPart1` with a fresh identity.
    ///
    /// Opening an already-open session closes it first, so no state ever
    /// leaks from one invocation into the next.
    ///
    /// # Errors
    /// Returns `Configuration` if `config.expected_len` is zero.
    pub fn open(&mut self, config: SessionConfig) -> Result<()> {
        config.validate()?;
        self.close();
        self.id = SessionId::new();
        self.config = config;
        self.open = true;
        tracing::info!(
            session = %self.id,
            expected_len = self.config.expected_len,
            context = self.config.context_label.as_deref().unwrap_or("-"),
            "capture session opened"
        );
        self.request_focus(Stage::CollectingPart1);
        Ok(())
    }

    /// Abort from any stage, including mid-flight. Safe to call on a
    /// closed session (no-op).
    pub fn cancel(&mut self) {
        if self.open {
            tracing::info!(session = %self.id, stage = %self.stage, "capture session cancelled");
        }
        self.close();
    }

    // -----------------------------------------------------------------
    // Input edits
    // -----------------------------------------------------------------

    /// Record an edit to the stage-1 input. Clears the inline error
    /// (editing is a corrective action).
    pub fn set_part1(&mut self, value: impl Into<String>) -> Result<()> {
        self.ensure_open()?;
        self.part1 = value.into();
        self.error = None;
        Ok(())
    }

    /// Record an edit to the stage-2 input. Clears the inline error.
    pub fn set_part2(&mut self, value: impl Into<String>) -> Result<()> {
        self.ensure_open()?;
        self.part2 = value.into();
        self.error = None;
        Ok(())
    }

    // -----------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------

    /// Leave stage 1: generate a decoy, place it on the clipboard, move to
    /// `CollectingPart2`.
    ///
    /// A clipboard failure does not fail the call — the session records
    /// `ClipboardStatus::Failed` and keeps the decoy for manual display.
    ///
    /// # Errors
    /// - `SessionClosed` if the session is not open
    /// - `Busy` if a decoy copy is already in flight
    /// - `WrongStage` outside `CollectingPart1`
    /// - `EmptyInput` if part 1 is blank after trimming (also surfaced inline)
    pub fn advance(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.ensure_idle()?;
        self.ensure_stage(Stage::CollectingPart1)?;
        if self.part1.trim().is_empty() {
            self.error = Some(SplitkeyError::EmptyInput);
            return Err(SplitkeyError::EmptyInput);
        }

        self.processing = true;
        let decoy = decoy::generate(self.entropy.as_ref());
        match try_copy(self.clipboard.as_ref(), &decoy) {
            CopyOutcome::Copied => {
                // Invariant: once the decoy reached the clipboard, it is
                // not retained anywhere renderable.
                self.clipboard_status = ClipboardStatus::Copied;
                self.manual_decoy = None;
            }
            CopyOutcome::Failed { decoy } => {
                self.clipboard_status = ClipboardStatus::Failed;
                self.manual_decoy = Some(decoy);
            }
        }
        self.log.record(Stage::CollectingPart1);
        self.processing = false;
        self.error = None;
        self.stage = Stage::CollectingPart2;
        tracing::debug!(
            session = %self.id,
            clipboard = %self.clipboard_status,
            "advanced to stage 2"
        );
        self.request_focus(Stage::CollectingPart2);
        Ok(())
    }

    /// Return from stage 2 to stage 1, keeping the stage-1 input and the
    /// cumulative obfuscation log. Clears the stage-2 input, the inline
    /// error, and the clipboard state.
    ///
    /// # Errors
    /// `SessionClosed` / `WrongStage`.
    pub fn retreat(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.ensure_stage(Stage::CollectingPart2)?;
        self.part2.clear();
        self.error = None;
        self.clipboard_status = ClipboardStatus::Idle;
        self.manual_decoy = None;
        self.stage = Stage::CollectingPart1;
        tracing::debug!(session = %self.id, "retreated to stage 1");
        self.request_focus(Stage::CollectingPart1);
        Ok(())
    }

    /// Combine the parts and validate. Success closes the session and
    /// yields the secret exactly once; failure keeps stage 2 with the
    /// error surfaced inline.
    ///
    /// The parts are trimmed, concatenated, and stripped of every interior
    /// whitespace character first — tolerating keys pasted with line
    /// breaks or spaces from email/chat sources.
    ///
    /// # Errors
    /// - `SessionClosed` / `Busy` / `WrongStage`
    /// - `FormatValidation` with the expected length on a failed check
    pub fn submit(&mut self) -> Result<CapturedSecret> {
        self.ensure_open()?;
        self.ensure_idle()?;
        self.ensure_stage(Stage::CollectingPart2)?;

        let combined: String = format!("{}{}", self.part1.trim(), self.part2.trim())
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if !validate(&combined, self.config.expected_len) {
            let err = SplitkeyError::FormatValidation {
                expected: self.config.expected_len,
            };
            self.error = Some(err.clone());
            return Err(err);
        }

        self.log.record(Stage::CollectingPart2);
        let secret = CapturedSecret {
            value: combined,
            obfuscation_log: self.log.drain(),
            session_id: self.id,
            captured_at: Utc::now(),
        };
        tracing::info!(
            session = %self.id,
            log_entries = secret.obfuscation_log.len(),
            "capture session completed"
        );
        self.close();
        Ok(secret)
    }

    // -----------------------------------------------------------------
    // Read side
    // -----------------------------------------------------------------

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn clipboard_status(&self) -> ClipboardStatus {
        self.clipboard_status
    }

    /// The decoy to render for manual copying. `Some` only while
    /// `clipboard_status` is `Failed`.
    #[must_use]
    pub fn manual_decoy(&self) -> Option<&str> {
        self.manual_decoy.as_deref()
    }

    /// The error currently surfaced inline, if any.
    #[must_use]
    pub fn inline_error(&self) -> Option<&SplitkeyError> {
        self.error.as_ref()
    }

    /// Render the inline error through the label collaborator, filling the
    /// `{length}` token of the format template.
    #[must_use]
    pub fn inline_error_text(&self, labels: &dyn Labels) -> Option<String> {
        let language = &self.config.language;
        match self.error.as_ref()? {
            SplitkeyError::EmptyInput => {
                Some(labels.lookup(LabelKey::EmptyInputError, language))
            }
            SplitkeyError::FormatValidation { expected } => Some(substitute(
                &labels.lookup(LabelKey::FormatError, language),
                &[("length", expected.to_string())],
            )),
            // Structural rejections are diagnostics, not user copy.
            other => Some(other.to_string()),
        }
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn expected_len(&self) -> usize {
        self.config.expected_len
    }

    /// Stage-transition markers recorded so far (diagnostics only).
    #[must_use]
    pub fn log_entries(&self) -> &[String] {
        self.log.entries()
    }

    // -----------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------

    fn ensure_open(&self) -> Result<()> {
        if self.open {
            Ok(())
        } else {
            Err(SplitkeyError::SessionClosed)
        }
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.processing {
            Err(SplitkeyError::Busy)
        } else {
            Ok(())
        }
    }

    fn ensure_stage(&self, expected: Stage) -> Result<()> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(SplitkeyError::WrongStage {
                expected,
                actual: self.stage,
            })
        }
    }

    fn request_focus(&self, stage: Stage) {
        if let Some(hooks) = &self.hooks {
            hooks.focus_requested(stage, Duration::from_millis(constants::FOCUS_DELAY_MS));
        }
    }

    /// Reset every per-open field and notify the teardown hook. Every
    /// exit path — cancel, completion, reopen, drop — funnels through
    /// here, and the `open` guard keeps the hook from firing twice.
    fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.stage = Stage::CollectingPart1;
        self.part1 = String::new();
        self.part2 = String::new();
        self.clipboard_status = ClipboardStatus::Idle;
        self.manual_decoy = None;
        self.log = ObfuscationLog::new();
        self.processing = false;
        self.error = None;
        if let Some(hooks) = &self.hooks {
            hooks.closed();
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        // Abrupt close (host navigated away) still releases the hooks.
        self.close();
    }
}
