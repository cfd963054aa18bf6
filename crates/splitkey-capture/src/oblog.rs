//! Obfuscation log — append-only stage-transition markers.
//!
//! Entries have the shape `<stage>:<RFC 3339 timestamp>` and exist purely
//! for local diagnostics: they travel back to the caller inside the final
//! [`CapturedSecret`](splitkey_types::CapturedSecret) and nowhere else.
//! One log per session; discarded on session reset.

use chrono::{SecondsFormat, Utc};
use splitkey_types::Stage;

/// Ordered, append-only record of stage transitions.
#[derive(Debug, Default, Clone)]
pub struct ObfuscationLog {
    entries: Vec<String>,
}

impl ObfuscationLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a marker for `stage` stamped with the current time.
    pub fn record(&mut self, stage: Stage) {
        let ts = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        self.entries.push(format!("{stage}:{ts}"));
    }

    /// The recorded markers, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hand out the entries and leave the log empty.
    ///
    /// Used when the session produces its final result.
    #[must_use]
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.entries)
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    #[test]
    fn record_appends_in_order() {
        let mut log = ObfuscationLog::new();
        log.record(Stage::CollectingPart1);
        log.record(Stage::CollectingPart2);
        assert_eq!(log.len(), 2);
        assert!(log.entries()[0].starts_with("stage1:"));
        assert!(log.entries()[1].starts_with("stage2:"));
    }

    #[test]
    fn timestamps_parse_as_rfc3339() {
        let mut log = ObfuscationLog::new();
        log.record(Stage::CollectingPart1);
        // split_once cuts at the marker separator, not the timestamp colons.
        let (marker, ts) = log.entries()[0].split_once(':').unwrap();
        assert_eq!(marker, "stage1");
        assert!(DateTime::parse_from_rfc3339(ts).is_ok(), "ts={ts}");
    }

    #[test]
    fn drain_empties_the_log() {
        let mut log = ObfuscationLog::new();
        log.record(Stage::CollectingPart1);
        let entries = log.drain();
        assert_eq!(entries.len(), 1);
        assert!(log.is_empty());
    }
}
