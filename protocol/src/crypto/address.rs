//! # Ledger Addresses
//!
//! Ethereum-style addresses, because the ledger that backs chainvote
//! identities computes them this way and we have to agree byte for byte:
//!
//! ```text
//! public key (65-byte uncompressed point)
//!     -> drop the 0x04 tag
//!     -> Keccak-256 -> 32 bytes
//!     -> last 20 bytes -> 0x<40 lowercase hex>
//! ```
//!
//! The canonical string form is all lowercase. That is what goes into
//! identities and aliases, so two callers that copy the same address with
//! different casing still end up with the same alias. The EIP-55
//! mixed-case checksum form is available for display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ADDRESS_LENGTH;
use crate::crypto::hash::{keccak256, strip_hex_prefix, to_prefixed_hex};
use crate::crypto::keys::ChainPublicKey;

/// Errors from parsing address strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid address: expected 0x followed by {expected} hex characters")]
    Malformed { expected: usize },

    #[error("address checksum mismatch")]
    ChecksumMismatch,
}

/// A 20-byte ledger address.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainAddress([u8; ADDRESS_LENGTH]);

impl ChainAddress {
    /// Derive the address of a public key.
    pub fn from_public_key(public_key: &ChainPublicKey) -> Self {
        let point = public_key.to_uncompressed_bytes();
        let digest = keccak256(&point[1..]);
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes.copy_from_slice(&digest[32 - ADDRESS_LENGTH..]);
        Self(bytes)
    }

    /// Wrap raw address bytes.
    pub fn from_bytes(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Canonical form: `0x` + 40 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        to_prefixed_hex(&self.0)
    }

    /// EIP-55 mixed-case checksum form.
    ///
    /// A hex letter is uppercased when the matching nibble of
    /// `keccak256(lowercase_hex)` is 8 or more.
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0);
        let digest = keccak256(lower.as_bytes());
        let mut out = String::with_capacity(2 + lower.len());
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let byte = digest[i / 2];
            let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Parse an address string.
    ///
    /// All-lowercase and all-uppercase inputs are accepted as-is. Mixed case
    /// is treated as an EIP-55 checksum and must validate, so a single-letter
    /// typo in a checksummed address is caught instead of silently accepted.
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        let trimmed = s.trim();
        let body = strip_hex_prefix(trimmed);
        let mut bytes = [0u8; ADDRESS_LENGTH];
        hex::decode_to_slice(body, &mut bytes).map_err(|_| AddressError::Malformed {
            expected: ADDRESS_LENGTH * 2,
        })?;
        let address = Self(bytes);

        let has_lower = body.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = body.chars().any(|c| c.is_ascii_uppercase());
        if has_lower && has_upper && strip_hex_prefix(&address.to_checksum()) != body {
            return Err(AddressError::ChecksumMismatch);
        }
        Ok(address)
    }
}

impl FromStr for ChainAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ChainAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ChainAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChainAddress({})", self.to_hex())
    }
}

impl Serialize for ChainAddress {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ChainAddress {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ChainAddress::parse(&s).map_err(serde::de::Error::custom)
    }
}
