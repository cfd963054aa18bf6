//! Error types for the SplitKey capture core.
//!
//! All errors use the `SK_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Session / input errors
//! - 2xx: Clipboard errors
//! - 3xx: Format validation errors
//! - 9xx: General / internal errors
//!
//! Every variant is recoverable: the session stays usable after any of
//! them, and none is ever allowed to escape as a panic.

use thiserror::Error;

use crate::Stage;

/// Central error enum for all SplitKey operations.
#[derive(Debug, Clone, Error)]
pub enum SplitkeyError {
    // =================================================================
    // Session / Input Errors (1xx)
    // =================================================================
    /// Stage-1 input is blank after trimming; advance is blocked.
    #[error("SK_ERR_100: first key part is empty")]
    EmptyInput,

    /// An operation was attempted in the wrong stage.
    #[error("SK_ERR_101: wrong stage: expected {expected}, got {actual}")]
    WrongStage { expected: Stage, actual: Stage },

    /// A duplicate advance/submit arrived while the decoy copy was in
    /// flight. Rejected, never queued.
    #[error("SK_ERR_102: operation rejected: decoy copy in flight")]
    Busy,

    /// The session is closed; open it before driving transitions.
    #[error("SK_ERR_103: session is closed")]
    SessionClosed,

    // =================================================================
    // Clipboard Errors (2xx)
    // =================================================================
    /// The platform clipboard write failed. Downgraded by the bridge to
    /// the manual-copy fallback; never blocks progress to stage 2.
    #[error("SK_ERR_200: clipboard write failed: {reason}")]
    ClipboardWrite { reason: String },

    // =================================================================
    // Format Validation Errors (3xx)
    // =================================================================
    /// The combined value failed the length/hex check.
    #[error("SK_ERR_300: secret must be exactly {expected} hex characters")]
    FormatValidation { expected: usize },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Configuration error (e.g. a zero expected length).
    #[error("SK_ERR_900: configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SplitkeyError>;
