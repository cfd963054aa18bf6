//! Session hooks — scoped cosmetic/teardown callbacks for embedders.
//!
//! Interactive hosts hang two resources off a session: a short focus timer
//! whenever a stage becomes visible, and a keyboard-interrupt (escape)
//! listener that must live exactly as long as the session is open. Both
//! are modeled here as a capability the session drives, with `closed`
//! guaranteed on every exit path — cancel, completion, or dropping an
//! open session — and never fired twice for one open.
//!
//! Non-interactive embedders simply don't install hooks.

use std::time::Duration;

use splitkey_types::Stage;

/// Callbacks a host can install when opening a session.
pub trait SessionHooks: Send + Sync {
    /// A stage's input control should receive focus after `delay`
    /// (the UI needs a beat to become visible first). Cosmetic.
    fn focus_requested(&self, _stage: Stage, _delay: Duration) {}

    /// The session left the open state: tear down listeners and timers.
    fn closed(&self) {}
}

/// No-op hooks for non-interactive use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl SessionHooks for NoHooks {}
