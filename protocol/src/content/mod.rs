//! # Content Module
//!
//! Tamper-evident fingerprints for user submissions. A submission is
//! normalized, serialized to a fixed canonical template, and hashed with
//! SHA-256. The resulting [`ContentHashResult`] travels with the submission;
//! anyone holding the content can recompute it with
//! [`ContentFingerprinter::verify`].

pub mod fingerprint;
pub mod normalize;

pub use fingerprint::{split_display_hash, ContentFingerprinter, ContentHashResult, FingerprintError};
pub use normalize::{trim_portable, HashableContent, NormalizedContent};
