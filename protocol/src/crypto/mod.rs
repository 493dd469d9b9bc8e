//! # Cryptographic Primitives for chainvote
//!
//! Everything the identity and content layers need from cryptography, and
//! nothing they don't:
//!
//! - **secp256k1** keys via `k256` — private key to public key.
//! - **Keccak-256** addresses — public key to ledger address.
//! - **SHA-256** — content fingerprints.
//! - **Entropy** — an injectable secure random source.
//!
//! ## A note on "rolling your own crypto"
//!
//! We don't. Every function here is a thin, typed wrapper around audited
//! RustCrypto implementations. The only logic we own is glue: hex
//! formatting, byte slicing, and the EIP-55 casing rule.

pub mod address;
pub mod hash;
pub mod keys;
pub mod random;

pub use address::{AddressError, ChainAddress};
pub use hash::{keccak256, sha256, sha256_hex};
pub use keys::{ChainKeypair, ChainPublicKey, KeyError};
pub use random::{secure_random_bytes, EntropySource, OsEntropy, SeededEntropy};
