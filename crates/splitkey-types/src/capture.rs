//! The final product of a successful capture session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::SessionId;

/// A validated secret together with its session diagnostics.
///
/// Produced exactly once per successful session; the session discards all
/// internal state the moment it hands this out. What happens to the value
/// afterwards (storage, transmission, display) is the caller's business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturedSecret {
    /// The combined, whitespace-stripped secret as entered (including a
    /// `0x` prefix if the user typed one).
    pub value: String,
    /// Stage-transition markers (`stage1:<ts>`, `stage2:<ts>`). Local
    /// diagnostics only; must never be transmitted anywhere.
    pub obfuscation_log: Vec<String>,
    /// The session that produced this secret.
    pub session_id: SessionId,
    /// When validation succeeded.
    pub captured_at: DateTime<Utc>,
}
