//! Format validator for the combined secret.
//!
//! Pure and total: every string input yields a boolean, never a panic.
//! Whitespace handling is deliberately *not* done here — the session strips
//! whitespace before calling in, and this check stays a strict length/
//! alphabet gate.

use splitkey_types::constants::HEX_PREFIX;

/// Check that `candidate` is a hex string of exactly `expected_len`
/// characters, tolerating (and stripping) a single leading `0x`.
///
/// Both uppercase and lowercase digits are accepted; no other
/// normalization is performed.
#[must_use]
pub fn validate(candidate: &str, expected_len: usize) -> bool {
    let body = candidate.strip_prefix(HEX_PREFIX).unwrap_or(candidate);
    body.len() == expected_len && body.bytes().all(|b| b.is_ascii_hexdigit())
}
