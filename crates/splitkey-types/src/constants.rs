//! System-wide constants for the SplitKey capture core.

/// Number of random bytes drawn for a decoy value.
pub const DECOY_BYTE_LEN: usize = 32;

/// Length of a decoy in lowercase hex characters (`DECOY_BYTE_LEN * 2`).
pub const DECOY_HEX_LEN: usize = 64;

/// Default expected secret length in hex characters (a 256-bit key).
pub const DEFAULT_EXPECTED_HEX_LEN: usize = 64;

/// Optional prefix tolerated (and stripped) by the format validator.
pub const HEX_PREFIX: &str = "0x";

/// Log marker recorded when stage 1 completes (decoy placed).
pub const STAGE1_MARKER: &str = "stage1";

/// Log marker recorded when stage 2 completes (secret validated).
pub const STAGE2_MARKER: &str = "stage2";

/// Delay before requesting focus of a stage's input control, so the
/// surrounding UI has a chance to become visible first (milliseconds).
pub const FOCUS_DELAY_MS: u64 = 100;
