//! # Hashing Utilities
//!
//! The two hash functions chainvote needs, and not one more:
//!
//! - **SHA-256** — Content fingerprints. Every platform has it, every
//!   language has it, and a verifier written in anything can recompute our
//!   hashes without hunting for an exotic library.
//!
//! - **Keccak-256** — Address derivation and EIP-55 checksums. This is the
//!   pre-standard Keccak that Ethereum uses, *not* FIPS SHA3-256. They differ
//!   in padding, and mixing them up produces addresses that look fine and
//!   belong to nobody.
//!
//! Plus a couple of hex helpers, because every key and address in this crate
//! travels as a `0x`-prefixed hex string at some point.

use sha2::{Digest, Sha256};
use sha3::Keccak256;

use crate::config::HEX_PREFIX;

/// Compute the SHA-256 hash of the input data.
///
/// # Example
///
/// ```
/// use chainvote_protocol::crypto::sha256;
///
/// let hash = sha256(b"chainvote");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let mut output = [0u8; 32];
    output.copy_from_slice(&hasher.finalize());
    output
}

/// SHA-256 rendered as lowercase hex with no prefix. This is the exact string
/// that lands in `ContentHashResult::hash`.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// Compute the Keccak-256 hash (Ethereum flavour) of the input data.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let mut output = [0u8; 32];
    output.copy_from_slice(&hasher.finalize());
    output
}

/// Strip a leading `0x` / `0X` if present. Leaves everything else alone.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix(HEX_PREFIX)
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Lowercase hex with a `0x` prefix.
pub fn to_prefixed_hex(bytes: &[u8]) -> String {
    format!("{}{}", HEX_PREFIX, hex::encode(bytes))
}

/// Decode an optionally `0x`-prefixed hex string into exactly `N` bytes.
///
/// Returns `None` for odd length, non-hex characters, or the wrong size.
/// Callers map that to their own error type; we don't want hex parsing
/// details leaking into key-handling error messages.
pub fn decode_hex_fixed<const N: usize>(s: &str) -> Option<[u8; N]> {
    let mut out = [0u8; N];
    hex::decode_to_slice(strip_hex_prefix(s.trim()), &mut out).ok()?;
    Some(out)
}
