//! # Protocol Configuration & Constants
//!
//! Every magic string and length in chainvote lives here. Identities and
//! content hashes end up on a ledger, so changing any of these after the
//! first submission is published means old records stop verifying. Choose
//! wisely, then never touch them again.

// ---------------------------------------------------------------------------
// Protocol Version
// ---------------------------------------------------------------------------

/// Library version, reported by the CLI alongside its own crate version.
pub const PROTOCOL_VERSION: &str = "0.1.0";

// ---------------------------------------------------------------------------
// Content Fingerprinting
// ---------------------------------------------------------------------------

/// Identifier of the digest used for content fingerprints. Also doubles as
/// the display prefix (`sha256:<hex>`), so it must stay lowercase.
pub const HASH_ALGORITHM: &str = "sha256";

/// Separator between the algorithm tag and the hex digest in display form.
pub const DISPLAY_SEPARATOR: char = ':';

/// Digest length in bytes. SHA-256 produces 32.
pub const HASH_OUTPUT_LENGTH: usize = 32;

/// Hex-encoded digest length. Two characters per byte, no separators.
pub const HASH_HEX_LENGTH: usize = HASH_OUTPUT_LENGTH * 2;

// ---------------------------------------------------------------------------
// Key Material
// ---------------------------------------------------------------------------

/// Secret scalar length in bytes.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Number of random bytes pulled from the entropy source per generated key.
/// Full 256 bits. Anything less is a bug, not a tuning knob.
pub const GENERATED_KEY_BYTES: usize = PRIVATE_KEY_LENGTH;

/// Uncompressed SEC1 point length: `0x04 || X || Y`.
pub const UNCOMPRESSED_PUBLIC_KEY_LENGTH: usize = 65;

/// Address length in bytes (last 20 bytes of the Keccak-256 of the point).
pub const ADDRESS_LENGTH: usize = 20;

/// Prefix for hex-encoded keys and addresses.
pub const HEX_PREFIX: &str = "0x";

// ---------------------------------------------------------------------------
// Aliases
// ---------------------------------------------------------------------------

/// Alias tag for identities named after their own address.
pub const ADDRESS_PREFIX_TAG: &str = "addr";

/// Alias tag for identities carrying a caller-chosen display name.
pub const NAME_PREFIX_TAG: &str = "name";

/// Separator between the prefix tag and the name in an alias.
pub const ALIAS_SEPARATOR: char = '|';
