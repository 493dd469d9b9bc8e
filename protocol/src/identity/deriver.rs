//! # Identity Derivation
//!
//! Turns a private key into everything else a participant is known by:
//!
//! ```text
//! private key -> public key -> address -> (prefix, name) -> alias
//! ```
//!
//! Every step is a pure function of the one before it. The same private key
//! always produces the same identity, and a "new" identity always means a new
//! private key; nothing here mutates an existing [`Identity`].

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::GENERATED_KEY_BYTES;
use crate::crypto::hash::to_prefixed_hex;
use crate::crypto::keys::{ChainKeypair, KeyError};
use crate::crypto::random::{secure_random_bytes, EntropySource, OsEntropy};
use crate::identity::alias::{format_alias, strip_name_marker, Alias, AliasPrefix};

/// Errors from identity derivation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The private key was malformed or not a valid secp256k1 scalar.
    #[error(transparent)]
    InvalidPrivateKey(#[from] KeyError),
}

/// A participant identity. Immutable once built.
///
/// `public_key` and `address` are derived from `private_key`; `alias` is
/// derived from `(prefix, name)` on every call and never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    private_key: String,
    public_key: String,
    address: String,
    prefix: AliasPrefix,
    name: String,
}

/// The shareable half of an [`Identity`]: no private key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicIdentity {
    pub public_key: String,
    pub address: String,
    pub prefix: AliasPrefix,
    pub name: String,
    pub alias: String,
}

impl Identity {
    /// The private key exactly as supplied (or as generated).
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// `0x04...` uncompressed public key.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Lowercase `0x...` address.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn prefix(&self) -> AliasPrefix {
        self.prefix
    }

    /// The lowercase address (address-based) or the stripped display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `"<prefix-tag>|<name>"`.
    pub fn alias(&self) -> String {
        format_alias(self.prefix, &self.name)
    }

    /// The alias in parsed form.
    pub fn to_alias(&self) -> Alias {
        Alias::new(self.prefix, self.name.clone())
    }

    /// Drop the private key and keep everything safe to publish.
    pub fn to_public(&self) -> PublicIdentity {
        PublicIdentity {
            public_key: self.public_key.clone(),
            address: self.address.clone(),
            prefix: self.prefix,
            name: self.name.clone(),
            alias: self.alias(),
        }
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Private key stays out. Not even a prefix of it.
        f.debug_struct("Identity")
            .field("address", &self.address)
            .field("alias", &self.alias())
            .finish_non_exhaustive()
    }
}

/// Derives identities from private keys and mints fresh ones.
///
/// Holds the entropy source used by
/// [`generate_random_identity`](Self::generate_random_identity). Derivation
/// from a supplied key never touches it. Cheap to clone and safe to share
/// across threads.
#[derive(Clone)]
pub struct IdentityDeriver {
    entropy: Arc<dyn EntropySource>,
}

impl IdentityDeriver {
    /// A deriver backed by the operating system's CSPRNG.
    pub fn new() -> Self {
        Self::with_entropy(Arc::new(OsEntropy))
    }

    /// A deriver backed by a caller-provided entropy source.
    pub fn with_entropy(entropy: Arc<dyn EntropySource>) -> Self {
        Self { entropy }
    }

    /// Derive the identity for `private_key`.
    ///
    /// Without a name (or with one that is empty once stripped) the identity
    /// is address-based and named after its own address. With a name it is
    /// name-based, and every embedded `"name|"` marker is removed first so
    /// feeding an alias fragment back in doesn't double the prefix.
    pub fn derive_identity(
        &self,
        private_key: &str,
        name: Option<&str>,
    ) -> Result<Identity, IdentityError> {
        let keypair = ChainKeypair::from_hex(private_key)?;
        let public_key = keypair.public_key();
        let address = public_key.address().to_hex();

        let display_name = name
            .map(strip_name_marker)
            .filter(|n| !n.trim().is_empty());
        let (prefix, name) = match display_name {
            Some(n) => (AliasPrefix::NameBased, n),
            None => (AliasPrefix::AddressBased, address.clone()),
        };

        let identity = Identity {
            private_key: private_key.to_string(),
            public_key: public_key.to_hex(),
            address,
            prefix,
            name,
        };
        debug!(address = %identity.address, alias = %identity.alias(), "identity derived");
        Ok(identity)
    }

    /// Generate a fresh private key and derive its identity.
    ///
    /// Reads exactly 32 bytes from the entropy source per call.
    pub fn generate_random_identity(&self, name: Option<&str>) -> Result<Identity, IdentityError> {
        let bytes: [u8; GENERATED_KEY_BYTES] = secure_random_bytes(self.entropy.as_ref());
        let private_key = to_prefixed_hex(&bytes);
        self.derive_identity(&private_key, name)
    }
}

impl Default for IdentityDeriver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IdentityDeriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IdentityDeriver(..)")
    }
}
