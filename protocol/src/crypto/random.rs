//! # Entropy Sources
//!
//! Key generation is the only place chainvote touches randomness, and it
//! touches it through the [`EntropySource`] trait rather than a global RNG.
//! Production code hands in [`OsEntropy`]; tests hand in [`SeededEntropy`]
//! and get the same "random" key every run, which is the only way to pin
//! down exact output vectors for generation paths.
//!
//! Both implementations are `Send + Sync` and take `&self`, so a single
//! source can sit behind an `Arc` and serve concurrent callers.

use parking_lot::Mutex;
use rand::rngs::{OsRng, StdRng};
use rand::SeedableRng;
use rand_core::RngCore;

/// A cryptographically secure source of random bytes.
///
/// Implementations must deliver full-entropy output and be safe to call from
/// several threads at once. A weak or reused source here means colliding
/// private keys, which is a correctness bug, not a performance one.
pub trait EntropySource: Send + Sync {
    /// Fill `dest` entirely with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]);
}

/// Draw `N` fresh bytes from `source`.
pub fn secure_random_bytes<const N: usize>(source: &dyn EntropySource) -> [u8; N] {
    let mut out = [0u8; N];
    source.fill_bytes(&mut out);
    out
}

/// The operating system's CSPRNG (`getrandom` under the hood).
///
/// Zero-sized and stateless; every call goes straight to the OS, so there is
/// nothing to lock and nothing to reseed.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) {
        OsRng.fill_bytes(dest);
    }
}

/// Deterministic entropy for tests and reproducible fixtures.
///
/// Wraps a seeded `StdRng` behind a mutex. Same seed, same byte stream.
/// **Never** use this for real keys; anyone who knows the seed owns them.
pub struct SeededEntropy {
    rng: Mutex<StdRng>,
}

impl SeededEntropy {
    /// Build a source from a 64-bit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl EntropySource for SeededEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) {
        self.rng.lock().fill_bytes(dest);
    }
}

impl std::fmt::Debug for SeededEntropy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The RNG state is effectively a secret. Keep it out of logs.
        f.write_str("SeededEntropy(..)")
    }
}
