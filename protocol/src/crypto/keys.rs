//! # Key Management
//!
//! secp256k1 keypair handling for chainvote identities.
//!
//! The signing algorithm itself is somebody else's problem; all this module
//! promises is the derivation chain the ledger also computes:
//!
//! ```text
//! private key (32-byte scalar)
//!     -> public key (uncompressed SEC1 point, 65 bytes)
//!     -> address (see `crypto::address`)
//! ```
//!
//! ## Security considerations
//!
//! - Secret scalars are zeroized on drop (thanks, `k256`).
//! - Key bytes are never logged and never appear in `Debug` output.
//! - Error messages say *that* a key was rejected, never *which bytes*.

use std::fmt;

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{PublicKey, SecretKey};
use thiserror::Error;

use crate::config::{PRIVATE_KEY_LENGTH, UNCOMPRESSED_PUBLIC_KEY_LENGTH};
use crate::crypto::address::ChainAddress;
use crate::crypto::hash::{decode_hex_fixed, to_prefixed_hex};
use crate::crypto::random::{secure_random_bytes, EntropySource};

/// Errors that can occur during key operations.
///
/// Deliberately vague. A message like "byte 7 is out of range" is a gift to
/// anyone grepping logs for key material.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("invalid private key: expected 32 hex-encoded bytes forming a valid secp256k1 scalar")]
    InvalidPrivateKey,

    #[error("invalid public key: not a valid secp256k1 point")]
    InvalidPublicKey,
}

/// A chainvote keypair wrapping a secp256k1 secret scalar.
///
/// Does not implement `Serialize`. Exporting a private key should be a
/// deliberate call to [`to_hex`](Self::to_hex), not a side effect of
/// dropping a struct into a JSON response.
pub struct ChainKeypair {
    secret: SecretKey,
}

/// The public half of a chainvote identity.
#[derive(Clone, PartialEq, Eq)]
pub struct ChainPublicKey {
    point: PublicKey,
}

impl ChainKeypair {
    /// Generate a fresh keypair from `entropy`.
    ///
    /// Pulls exactly 32 bytes. The chance those bytes are zero or exceed the
    /// curve order is below 2^-127; if it happens anyway the call fails
    /// rather than quietly drawing again.
    pub fn generate(entropy: &dyn EntropySource) -> Result<Self, KeyError> {
        let bytes: [u8; PRIVATE_KEY_LENGTH] = secure_random_bytes(entropy);
        Self::from_bytes(&bytes)
    }

    /// Build a keypair from a raw 32-byte scalar.
    ///
    /// Rejects zero and anything at or above the group order.
    pub fn from_bytes(bytes: &[u8; PRIVATE_KEY_LENGTH]) -> Result<Self, KeyError> {
        let secret = SecretKey::from_slice(bytes).map_err(|_| KeyError::InvalidPrivateKey)?;
        Ok(Self { secret })
    }

    /// Parse a hex-encoded private key, with or without `0x`, any case.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = decode_hex_fixed::<PRIVATE_KEY_LENGTH>(hex_str)
            .ok_or(KeyError::InvalidPrivateKey)?;
        Self::from_bytes(&bytes)
    }

    /// The public key for this keypair.
    pub fn public_key(&self) -> ChainPublicKey {
        ChainPublicKey {
            point: self.secret.public_key(),
        }
    }

    /// Shortcut for `self.public_key().address()`.
    pub fn address(&self) -> ChainAddress {
        self.public_key().address()
    }

    /// Export the secret scalar as `0x`-prefixed lowercase hex.
    ///
    /// **Handle with care.** This string is the identity.
    pub fn to_hex(&self) -> String {
        to_prefixed_hex(&self.secret.to_bytes())
    }
}

impl Clone for ChainKeypair {
    fn clone(&self) -> Self {
        Self {
            secret: self.secret.clone(),
        }
    }
}

impl fmt::Debug for ChainKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChainKeypair(address={})", self.address())
    }
}

impl PartialEq for ChainKeypair {
    /// Compared by public key. No non-constant-time comparisons of secrets.
    fn eq(&self, other: &Self) -> bool {
        self.public_key() == other.public_key()
    }
}

impl Eq for ChainKeypair {}

// ---------------------------------------------------------------------------
// ChainPublicKey
// ---------------------------------------------------------------------------

impl ChainPublicKey {
    /// Parse a SEC1-encoded point (compressed or uncompressed).
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let point = PublicKey::from_sec1_bytes(bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self { point })
    }

    /// Parse a hex-encoded SEC1 point, `0x` optional.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let stripped = crate::crypto::hash::strip_hex_prefix(hex_str.trim());
        let bytes = hex::decode(stripped).map_err(|_| KeyError::InvalidPublicKey)?;
        Self::from_sec1_bytes(&bytes)
    }

    /// Uncompressed SEC1 encoding: `0x04 || X || Y`, 65 bytes.
    pub fn to_uncompressed_bytes(&self) -> [u8; UNCOMPRESSED_PUBLIC_KEY_LENGTH] {
        let encoded = self.point.to_encoded_point(false);
        let mut out = [0u8; UNCOMPRESSED_PUBLIC_KEY_LENGTH];
        out.copy_from_slice(encoded.as_bytes());
        out
    }

    /// `0x04...` lowercase hex, 132 characters including the prefix.
    pub fn to_hex(&self) -> String {
        to_prefixed_hex(&self.to_uncompressed_bytes())
    }

    /// Derive the ledger address for this key.
    pub fn address(&self) -> ChainAddress {
        ChainAddress::from_public_key(self)
    }
}

impl fmt::Display for ChainPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ChainPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChainPublicKey({})", &self.to_hex()[..18])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::random::{OsEntropy, SeededEntropy};

    const KEY_ONE: &str = "0x0000000000000000000000000000000000000000000000000000000000000001";

    // Public key for scalar 1 is the generator point G.
    const GENERATOR_HEX: &str = "0x0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
                                 483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

    #[test]
    fn test_known_generator_vector() {
        let kp = ChainKeypair::from_hex(KEY_ONE).unwrap();
        assert_eq!(kp.public_key().to_hex(), GENERATOR_HEX);
    }

    #[test]
    fn hex_prefix_and_case_are_optional() {
        let a = ChainKeypair::from_hex(KEY_ONE).unwrap();
        let b = ChainKeypair::from_hex(&KEY_ONE[2..]).unwrap();
        let c = ChainKeypair::from_hex(&KEY_ONE.to_uppercase().replace("0X", "0x")).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn to_hex_roundtrip() {
        let kp = ChainKeypair::generate(&OsEntropy).unwrap();
        let restored = ChainKeypair::from_hex(&kp.to_hex()).unwrap();
        assert_eq!(kp, restored);
        assert_eq!(kp.to_hex().len(), 66);
    }

    #[test]
    fn test_invalid_private_keys_rejected() {
        assert_eq!(
            ChainKeypair::from_hex("not-a-key").unwrap_err(),
            KeyError::InvalidPrivateKey
        );
        assert!(ChainKeypair::from_hex("deadbeef").is_err());
        assert!(ChainKeypair::from_hex("").is_err());
        assert!(ChainKeypair::from_hex(&format!("0x{}", KEY_ONE)).is_err());
        // Zero is not a valid scalar.
        assert!(ChainKeypair::from_bytes(&[0u8; 32]).is_err());
        // Neither is anything at or above the group order.
        assert!(ChainKeypair::from_bytes(&[0xff; 32]).is_err());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = ChainKeypair::generate(&SeededEntropy::from_seed(42)).unwrap();
        let b = ChainKeypair::generate(&SeededEntropy::from_seed(42)).unwrap();
        assert_eq!(a.to_hex(), b.to_hex());
    }

    #[test]
    fn test_two_generated_keypairs_are_different() {
        let a = ChainKeypair::generate(&OsEntropy).unwrap();
        let b = ChainKeypair::generate(&OsEntropy).unwrap();
        assert_ne!(a.public_key(), b.public_key());
    }

    #[test]
    fn public_key_hex_roundtrip() {
        let pk = ChainKeypair::generate(&OsEntropy).unwrap().public_key();
        let hex_str = pk.to_hex();
        assert!(hex_str.starts_with("0x04"));
        assert_eq!(hex_str.len(), 2 + 130);
        assert_eq!(ChainPublicKey::from_hex(&hex_str).unwrap(), pk);
    }

    #[test]
    fn public_key_rejects_garbage() {
        assert_eq!(
            ChainPublicKey::from_hex("0x04deadbeef").unwrap_err(),
            KeyError::InvalidPublicKey
        );
        assert!(ChainPublicKey::from_hex("zz").is_err());
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let kp = ChainKeypair::from_hex(KEY_ONE).unwrap();
        let debug_str = format!("{:?}", kp);
        assert!(debug_str.starts_with("ChainKeypair(address="));
        assert!(!debug_str.contains(&KEY_ONE[2..]));
    }
}
