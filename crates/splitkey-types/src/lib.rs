//! # splitkey-types
//!
//! Shared types, errors, and configuration for the **SplitKey** credential
//! capture core.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`SessionId`]
//! - **Session lifecycle**: [`Stage`], [`ClipboardStatus`]
//! - **Result model**: [`CapturedSecret`]
//! - **Configuration**: [`SessionConfig`]
//! - **Errors**: [`SplitkeyError`] with `SK_ERR_` prefix codes
//! - **Constants**: decoy sizing, log markers, defaults

pub mod capture;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod stage;

// Re-export all primary types at crate root for ergonomic imports:
//   use splitkey_types::{Stage, SessionConfig, CapturedSecret, ...};

pub use capture::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use stage::*;

// Constants are accessed via `splitkey_types::constants::FOO`
// (not re-exported to avoid name collisions).
