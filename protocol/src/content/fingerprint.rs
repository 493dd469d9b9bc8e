//! # Content Fingerprinting
//!
//! Generate, display, and verify content hashes:
//!
//! ```text
//! HashableContent
//!     -> normalize -> canonical bytes
//!     -> SHA-256 -> lowercase hex               (ContentHashResult::hash)
//!     -> "sha256:" + hex                        (display form)
//! ```
//!
//! Pure and deterministic: no I/O, no clock, no randomness. Same content in,
//! same hash out, on every platform.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{DISPLAY_SEPARATOR, HASH_ALGORITHM, HASH_HEX_LENGTH};
use crate::content::normalize::HashableContent;
use crate::crypto::hash::sha256_hex;

/// Errors from hash generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FingerprintError {
    /// Serializing or digesting the content failed.
    #[error("hash generation failed: {0}")]
    HashGeneration(String),
}

/// The result of hashing a content record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentHashResult {
    /// Lowercase hex digest, no prefix.
    pub hash: String,
    /// Echoed from the input, never recomputed.
    pub timestamp: i64,
    /// Digest identifier. Always [`HASH_ALGORITHM`] for this build.
    pub algorithm: String,
}

impl ContentHashResult {
    /// `"<algorithm>:<hash>"`.
    pub fn to_display(&self) -> String {
        format!("{}{}{}", self.algorithm, DISPLAY_SEPARATOR, self.hash)
    }
}

/// Split a display string into `(algorithm, hex)`.
///
/// A bare hex string has no algorithm tag and yields `(None, hex)`.
pub fn split_display_hash(s: &str) -> (Option<&str>, &str) {
    match s.split_once(DISPLAY_SEPARATOR) {
        Some((algorithm, hex)) => (Some(algorithm), hex),
        None => (None, s),
    }
}

/// Put a hash into display form, leaving it alone if it's already there.
fn to_prefixed(hash: &str) -> String {
    let prefix = format!("{}{}", HASH_ALGORITHM, DISPLAY_SEPARATOR);
    if hash.starts_with(&prefix) {
        hash.to_string()
    } else {
        format!("{}{}", prefix, hash)
    }
}

/// Generates and checks content fingerprints.
///
/// Stateless. One instance can serve any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentFingerprinter;

impl ContentFingerprinter {
    pub fn new() -> Self {
        Self
    }

    /// The digest identifier this fingerprinter stamps on every result.
    pub fn algorithm(&self) -> &'static str {
        HASH_ALGORITHM
    }

    /// Normalize, serialize, and hash `content`.
    pub fn generate_hash(
        &self,
        content: &HashableContent,
    ) -> Result<ContentHashResult, FingerprintError> {
        let normalized = content.normalize();
        let bytes = normalized
            .canonical_bytes()
            .map_err(|e| FingerprintError::HashGeneration(e.to_string()))?;
        let hash = sha256_hex(&bytes);

        debug!(
            hash = %hash,
            timestamp = content.timestamp,
            bytes = bytes.len(),
            "content hash generated"
        );

        Ok(ContentHashResult {
            hash,
            timestamp: content.timestamp,
            algorithm: self.algorithm().to_string(),
        })
    }

    /// `"sha256:<hex>"` for `content`.
    pub fn format_for_display(&self, content: &HashableContent) -> Result<String, FingerprintError> {
        Ok(self.generate_hash(content)?.to_display())
    }

    /// Check `content` against an expected hash, bare or prefixed.
    ///
    /// Both sides are brought to display form and compared exactly; hex case
    /// matters. An expected digest of the wrong length is rejected before
    /// hashing. Never errors: any failure computing the hash is a `false`.
    pub fn verify(&self, content: &HashableContent, expected_hash: &str) -> bool {
        let expected = to_prefixed(expected_hash);
        let (_, expected_hex) = split_display_hash(&expected);
        if expected_hex.len() != HASH_HEX_LENGTH {
            debug!(len = expected_hex.len(), "expected hash has the wrong length");
            return false;
        }

        let actual = match self.format_for_display(content) {
            Ok(actual) => actual,
            Err(e) => {
                warn!(error = %e, "content verification failed to compute hash");
                return false;
            }
        };
        let matches = actual == expected;
        debug!(matches, "content verified");
        matches
    }
}
