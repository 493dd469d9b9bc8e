//! # Identity Module
//!
//! Participant identity for chainvote. Every participant is a secp256k1
//! private key; everything else is derived from it:
//!
//! 1. **Keys** — the public key, via [`crate::crypto::keys`].
//! 2. **Address** — Keccak-256 of the public key, last 20 bytes, lowercase.
//! 3. **Alias** — `"<prefix-tag>|<name>"`, where the name is either the
//!    address itself or a caller-chosen display name.
//!
//! ## Design Decisions
//!
//! - Identities are immutable values. To get a different one, use a
//!   different key.
//! - The alias is rebuilt from `(prefix, name)` on demand, never cached, so
//!   it can't disagree with its parts.
//! - Random key generation goes through an injected
//!   [`EntropySource`](crate::crypto::EntropySource), never a global RNG.

pub mod alias;
pub mod deriver;

pub use alias::{format_alias, strip_name_marker, Alias, AliasError, AliasPrefix};
pub use deriver::{Identity, IdentityDeriver, IdentityError, PublicIdentity};
