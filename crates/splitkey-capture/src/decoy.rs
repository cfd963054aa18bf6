//! Decoy generator — random hex strings shaped like a real private key.
//!
//! The decoy is what lands on the clipboard instead of the secret, so it
//! must be indistinguishable from a genuine key to anyone scraping
//! clipboard history. That makes unpredictability a security requirement:
//! the source must be a CSPRNG, never a seeded or non-cryptographic PRNG
//! whose output an attacker could recognize as filler.

use rand::RngCore;
use rand::rngs::OsRng;
use splitkey_types::constants::DECOY_BYTE_LEN;

/// Injected randomness capability.
///
/// Production code uses [`OsEntropy`]; tests substitute a fixed-pattern
/// source to make decoys deterministic.
pub trait EntropySource: Send + Sync {
    /// Fill `buf` with random bytes.
    fn fill(&self, buf: &mut [u8]);
}

/// The operating system CSPRNG. Stateless — independent sessions can each
/// hold their own instance without sharing anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) {
        OsRng.fill_bytes(buf);
    }
}

/// Generate a 64-character lowercase hex decoy from 32 random bytes.
#[must_use]
pub fn generate(entropy: &dyn EntropySource) -> String {
    let mut bytes = [0u8; DECOY_BYTE_LEN];
    entropy.fill(&mut bytes);
    hex::encode(bytes)
}
