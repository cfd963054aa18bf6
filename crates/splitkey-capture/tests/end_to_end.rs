//! End-to-end tests for the full capture protocol.
//!
//! These drive a `Session` through complete user journeys with the
//! deterministic fakes: type part 1, advance (decoy → clipboard), type
//! part 2, submit — plus the failure and cancellation journeys around it.

use std::sync::Arc;

use splitkey_capture::testing::{FakeClipboard, FixedEntropy, RecordingHooks, StaticLabels};
use splitkey_capture::{Clipboard, LabelKey, Session, SessionHooks};
use splitkey_types::{ClipboardStatus, SessionConfig, SplitkeyError, Stage};

/// Helper: a session wired to a working fake clipboard and fixed entropy.
fn harness() -> (Session, Arc<FakeClipboard>, Arc<RecordingHooks>) {
    let clipboard = Arc::new(FakeClipboard::working());
    let hooks = Arc::new(RecordingHooks::new());
    let session = Session::new(Arc::clone(&clipboard) as Arc<dyn Clipboard>)
        .with_entropy(Arc::new(FixedEntropy::new(0x7e)))
        .with_hooks(Arc::clone(&hooks) as Arc<dyn SessionHooks>);
    (session, clipboard, hooks)
}

// =============================================================================
// Test: the happy path — 32 + 32 hex chars, clipboard write succeeds
// =============================================================================
#[test]
fn e2e_successful_capture() {
    let (mut session, clipboard, hooks) = harness();
    session.open(SessionConfig::new(64)).unwrap();

    let part1 = "1a2b3c4d".repeat(4); // 32 chars
    let part2 = "5e6f7a8b".repeat(4); // 32 chars
    session.set_part1(part1.clone()).unwrap();
    session.advance().unwrap();

    assert_eq!(session.stage(), Stage::CollectingPart2);
    assert_eq!(session.clipboard_status(), ClipboardStatus::Copied);
    // The decoy on the clipboard is unrelated noise, not either part.
    let decoy = clipboard.contents().unwrap();
    assert_eq!(decoy, "7e".repeat(32));
    assert_ne!(decoy, part1);

    session.set_part2(part2.clone()).unwrap();
    let secret = session.submit().unwrap();

    assert_eq!(secret.value, format!("{part1}{part2}"));
    assert_eq!(secret.obfuscation_log.len(), 2);
    assert!(secret.obfuscation_log[0].starts_with("stage1:"));
    assert!(secret.obfuscation_log[1].starts_with("stage2:"));

    // Completion closed the session and released the hooks.
    assert!(!session.is_open());
    assert_eq!(hooks.closed_count(), 1);
}

// =============================================================================
// Test: short part 2 — validation fails, session stays recoverable
// =============================================================================
#[test]
fn e2e_short_part2_fails_validation_then_recovers() {
    let (mut session, _clipboard, _hooks) = harness();
    session.open(SessionConfig::new(64)).unwrap();

    session.set_part1("ab".repeat(16)).unwrap();
    session.advance().unwrap();
    session.set_part2("cd".repeat(15)).unwrap(); // 30 chars — two short

    let err = session.submit().unwrap_err();
    assert!(matches!(err, SplitkeyError::FormatValidation { expected: 64 }));
    assert!(format!("{err}").contains("64"));
    assert_eq!(session.stage(), Stage::CollectingPart2);
    assert!(session.is_open());

    // The user corrects the input and the same session completes.
    session.set_part2("cd".repeat(16)).unwrap();
    let secret = session.submit().unwrap();
    assert_eq!(secret.value.len(), 64);
}

// =============================================================================
// Test: clipboard write refused — manual fallback, progress not blocked
// =============================================================================
#[test]
fn e2e_clipboard_failure_falls_back_to_manual_copy() {
    let hooks = Arc::new(RecordingHooks::new());
    let mut session = Session::new(Arc::new(FakeClipboard::broken("permission denied")))
        .with_entropy(Arc::new(FixedEntropy::new(0x11)))
        .with_hooks(Arc::clone(&hooks) as Arc<dyn SessionHooks>);
    session.open(SessionConfig::new(64)).unwrap();

    session.set_part1("ab".repeat(16)).unwrap();
    session.advance().unwrap();

    assert_eq!(session.stage(), Stage::CollectingPart2);
    assert_eq!(session.clipboard_status(), ClipboardStatus::Failed);
    // The decoy is renderable so the user can copy it by hand.
    assert_eq!(session.manual_decoy(), Some("11".repeat(32).as_str()));

    session.set_part2("cd".repeat(16)).unwrap();
    let secret = session.submit().unwrap();
    assert_eq!(secret.value.len(), 64);
}

// =============================================================================
// Test: whitespace tolerance across both parts
// =============================================================================
#[test]
fn e2e_whitespace_riddled_paste_reconstructs_key() {
    let (mut session, _clipboard, _hooks) = harness();
    session.open(SessionConfig::new(64)).unwrap();

    // A key halved and mangled by an email client.
    session.set_part1("abcd 1234 ef01 2345 6789 abcd ef01 2345").unwrap();
    session.advance().unwrap();
    session
        .set_part2("  6789 abcd\nef01 2345 6789 abcd ef01 2345  ")
        .unwrap();

    let secret = session.submit().unwrap();
    assert_eq!(secret.value.len(), 64);
    assert!(!secret.value.contains(char::is_whitespace));
}

// =============================================================================
// Test: cancel at stage 2, reopen starts from a clean slate
// =============================================================================
#[test]
fn e2e_cancel_then_reopen_is_fresh() {
    let (mut session, _clipboard, hooks) = harness();
    session.open(SessionConfig::new(64)).unwrap();
    session.set_part1("ab".repeat(16)).unwrap();
    session.advance().unwrap();
    session.set_part2("cd".repeat(8)).unwrap();

    session.cancel();
    assert!(!session.is_open());
    assert_eq!(hooks.closed_count(), 1);

    session.open(SessionConfig::new(64)).unwrap();
    assert_eq!(session.stage(), Stage::CollectingPart1);
    assert!(session.log_entries().is_empty());
    assert_eq!(session.clipboard_status(), ClipboardStatus::Idle);
    assert!(matches!(
        session.advance().unwrap_err(),
        SplitkeyError::EmptyInput
    ));
}

// =============================================================================
// Test: inline errors rendered through the translation seam
// =============================================================================
#[test]
fn e2e_inline_error_rendered_via_labels() {
    let labels = StaticLabels::new()
        .with(LabelKey::EmptyInputError, "en", "Enter the first half of your key")
        .with(
            LabelKey::FormatError,
            "en",
            "The key must be exactly {length} hex characters",
        );

    let (mut session, _clipboard, _hooks) = harness();
    session.open(SessionConfig::new(64)).unwrap();

    let _ = session.advance();
    assert_eq!(
        session.inline_error_text(&labels).as_deref(),
        Some("Enter the first half of your key")
    );

    session.set_part1("ab".repeat(16)).unwrap();
    assert!(session.inline_error_text(&labels).is_none());

    session.advance().unwrap();
    session.set_part2("cd".repeat(4)).unwrap();
    let _ = session.submit();
    assert_eq!(
        session.inline_error_text(&labels).as_deref(),
        Some("The key must be exactly 64 hex characters")
    );
}

// =============================================================================
// Test: two independent sessions share nothing
// =============================================================================
#[test]
fn e2e_independent_sessions_do_not_interfere() {
    let (mut a, clipboard_a, _) = harness();
    let clipboard_b = Arc::new(FakeClipboard::working());
    let mut b = Session::new(Arc::clone(&clipboard_b) as Arc<dyn Clipboard>)
        .with_entropy(Arc::new(FixedEntropy::new(0x22)));

    a.open(SessionConfig::new(64)).unwrap();
    b.open(SessionConfig::new(40)).unwrap();
    assert_ne!(a.id(), b.id());

    a.set_part1("ab".repeat(16)).unwrap();
    a.advance().unwrap();
    b.set_part1("ff".repeat(10)).unwrap();
    b.advance().unwrap();

    // Each clipboard saw only its own session's decoy.
    assert_eq!(clipboard_a.contents().unwrap(), "7e".repeat(32));
    assert_eq!(clipboard_b.contents().unwrap(), "22".repeat(32));
    assert_eq!(a.log_entries().len(), 1);
    assert_eq!(b.log_entries().len(), 1);

    a.set_part2("cd".repeat(16)).unwrap();
    b.set_part2("ee".repeat(10)).unwrap();
    assert_eq!(a.submit().unwrap().value.len(), 64);
    assert_eq!(b.submit().unwrap().value.len(), 40);
}
