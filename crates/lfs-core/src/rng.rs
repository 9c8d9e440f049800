//! Deterministic RNG wrapper and seed-derivation helpers.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// Source of uniformly distributed integers used to draw queries and random
/// sequences.
pub trait RandomSource {
    /// Returns a value drawn uniformly from the inclusive range `[low, high]`.
    ///
    /// When `high <= low` the range is degenerate and `low` is returned.
    fn next_uniform(&mut self, low: u64, high: u64) -> u64;
}

/// Deterministic RNG handle owned by a single worker.
///
/// The handle is a thin wrapper around `StdRng`. A master `seed: u64` must be
/// provided by the caller. Substreams are derived by hashing
/// `(master_seed, substream_id)` with SipHash-1-3 configured with fixed zero
/// keys, so every shape processed by the benchmark gets an independent and
/// reproducible stream no matter which thread picks it up.
#[derive(Debug, Clone)]
pub struct RngHandle {
    rng: StdRng,
}

impl RngHandle {
    /// Creates a new RNG handle from a master seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates the handle for `substream` of the given master seed.
    pub fn for_substream(master_seed: u64, substream: u64) -> Self {
        Self::from_seed(derive_substream_seed(master_seed, substream))
    }
}

impl RandomSource for RngHandle {
    fn next_uniform(&mut self, low: u64, high: u64) -> u64 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Derives the deterministic seed for a specific substream.
pub fn derive_substream_seed(master_seed: u64, substream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(substream);
    hasher.finish()
}
