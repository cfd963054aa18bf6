//! Stage and clipboard lifecycle enums for the capture session.
//!
//! A session cycles through two collection stages:
//! **PART1 → PART2 → terminal** (completed or cancelled).
//!
//! During PART1 the user types the first half of the secret. Advancing
//! places a decoy on the clipboard and moves to PART2, where the second
//! half is typed and the combined value is validated.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants;

/// The two collection stages of a capture session.
///
/// The `Display` form (`stage1` / `stage2`) doubles as the structural
/// marker prefix used in the obfuscation log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Collecting the first half of the secret.
    CollectingPart1,
    /// Decoy placed; collecting the second half.
    CollectingPart2,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CollectingPart1 => write!(f, "{}", constants::STAGE1_MARKER),
            Self::CollectingPart2 => write!(f, "{}", constants::STAGE2_MARKER),
        }
    }
}

impl Stage {
    /// Return the next stage, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::CollectingPart1 => Some(Self::CollectingPart2),
            Self::CollectingPart2 => None,
        }
    }
}

/// Outcome of the decoy copy attempted when stage 1 advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClipboardStatus {
    /// No copy attempted yet (stage 1, or after a retreat).
    Idle,
    /// The decoy reached the system clipboard.
    Copied,
    /// The platform write failed; the decoy is shown for manual copying.
    Failed,
}

impl fmt::Display for ClipboardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "IDLE"),
            Self::Copied => write!(f, "COPIED"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_progression() {
        assert_eq!(
            Stage::CollectingPart1.next(),
            Some(Stage::CollectingPart2)
        );
        assert_eq!(Stage::CollectingPart2.next(), None);
    }

    #[test]
    fn stage_display_matches_log_markers() {
        assert_eq!(format!("{}", Stage::CollectingPart1), "stage1");
        assert_eq!(format!("{}", Stage::CollectingPart2), "stage2");
    }

    #[test]
    fn clipboard_status_display() {
        assert_eq!(format!("{}", ClipboardStatus::Idle), "IDLE");
        assert_eq!(format!("{}", ClipboardStatus::Copied), "COPIED");
        assert_eq!(format!("{}", ClipboardStatus::Failed), "FAILED");
    }

    #[test]
    fn stage_serde_roundtrip() {
        let stage = Stage::CollectingPart2;
        let json = serde_json::to_string(&stage).unwrap();
        let back: Stage = serde_json::from_str(&json).unwrap();
        assert_eq!(stage, back);
    }
}
