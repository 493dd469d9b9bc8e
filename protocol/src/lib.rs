// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # chainvote Protocol — Core Library
//!
//! The identity-and-integrity layer behind chainvote submissions. Two jobs,
//! done carefully:
//!
//! 1. Turn a secp256k1 private key (supplied or freshly generated) into a
//!    stable identity: public key, ledger address, and a canonical alias.
//! 2. Turn a content record into a deterministic, tamper-evident fingerprint
//!    that any conforming implementation reproduces byte for byte.
//!
//! Everything else (HTTP, storage, vote tallying, rendering) belongs to the
//! application that calls into this crate.
//!
//! ## Architecture
//!
//! - **config** — Constants: algorithm tags, alias tags, key lengths.
//! - **crypto** — Hashing, secp256k1 key handling, address derivation, and
//!   the injectable entropy source.
//! - **identity** — Aliases and the identity deriver.
//! - **content** — Normalization, canonical serialization, and the
//!   content fingerprinter.
//!
//! ## Design Philosophy
//!
//! 1. Determinism is the product. Same input, same bytes, same hash.
//! 2. Key material never shows up in logs, errors, or `Debug` output.
//! 3. Randomness is injected, never ambient, so tests can pin it down.

pub mod config;
pub mod content;
pub mod crypto;
pub mod identity;

pub use content::{ContentFingerprinter, ContentHashResult, FingerprintError, HashableContent};
pub use identity::{Identity, IdentityDeriver, IdentityError};
