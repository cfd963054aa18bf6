//! # splitkey-capture
//!
//! **The secret-splitting credential entry protocol.**
//!
//! A guarded two-stage input flow for capturing a long hexadecimal private
//! key while raising the cost of passive clipboard scraping: the user
//! enters the key in two halves, and between them a random decoy shaped
//! like a real key is placed on the system clipboard, so clipboard-history
//! malware that grabs "the last copied key" grabs noise.
//!
//! ## Architecture
//!
//! 1. **Session**: the input state machine — owns the transient part
//!    values and drives the flow
//! 2. **decoy**: 64-char lowercase hex decoys from an injected CSPRNG
//! 3. **clipboard**: bridge over an injected platform clipboard, with a
//!    manual-copy fallback when the write is refused
//! 4. **validate**: pure length/hex-alphabet gate for the combined value
//! 5. **oblog**: append-only stage-transition markers for diagnostics
//! 6. **labels**/**hooks**: seams for the host's translation layer and
//!    focus/teardown behavior
//!
//! ## Flow
//!
//! ```text
//! open → part 1 → advance ─ decoy → clipboard ─→ part 2 → submit → CapturedSecret
//! ```
//!
//! The core performs no encryption, persists nothing, and never logs the
//! secret; what happens to the captured value is the caller's business.

pub mod clipboard;
pub mod decoy;
pub mod hooks;
pub mod labels;
pub mod oblog;
pub mod session;
pub mod testing;
pub mod validate;

pub use clipboard::{Clipboard, CopyOutcome, try_copy};
pub use decoy::{EntropySource, OsEntropy, generate};
pub use hooks::{NoHooks, SessionHooks};
pub use labels::{LabelKey, Labels, substitute};
pub use oblog::ObfuscationLog;
pub use session::Session;
pub use validate::validate;
