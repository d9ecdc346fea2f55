// Seeded shuffle generator.
//
// Deterministic permutation generator over the integer range [1, n],
// parameterized by an externally supplied seed. Each draw comes from the
// keccak256 hash of the seed concatenated with a round counter, so the same
// seed and size always produce the same permutation. Fisher-Yates keeps the
// whole thing O(n); sizes in the thousands are instantaneous.
//
// No uniformity claim is made: the modulo reduction of the draw carries the
// usual slight bias, and callers only rely on permutation-ness and bounds.

use log::trace;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::crypto::keccak256;

/// Shuffle result type
pub type ShuffleResult<T> = Result<T, ShuffleError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShuffleError {
    #[error("Seed has not been set")]
    SeedNotSet,
}

/// Deterministic shuffle generator with an externally supplied seed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeededShuffle {
    // Widened to 32 bytes so the hash input matches the on-chain word size
    seed: Option<[u8; 32]>,
}

impl SeededShuffle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with the seed already set
    pub fn with_seed(seed: u128) -> Self {
        let mut generator = Self::new();
        generator.set_seed(seed);
        generator
    }

    /// Store a deterministic seed. Replaces any previous seed.
    pub fn set_seed(&mut self, seed: u128) {
        let mut bytes = [0u8; 32];
        bytes[16..].copy_from_slice(&seed.to_be_bytes());
        self.seed = Some(bytes);
    }

    pub fn has_seed(&self) -> bool {
        self.seed.is_some()
    }

    /// Produce a permutation of the integers 1..=n inclusive.
    ///
    /// Deterministic for a fixed seed and size; `n = 0` yields an empty
    /// vector.
    pub fn shuffle(&self, n: u64) -> ShuffleResult<Vec<u64>> {
        let seed = self.seed.ok_or(ShuffleError::SeedNotSet)?;
        trace!("shuffling 1..={} with stored seed", n);

        let mut values: Vec<u64> = (1..=n).collect();

        // Fisher-Yates, drawing the swap index for each position from
        // keccak256(seed || round)
        for i in (1..values.len()).rev() {
            let draw = draw_u64(&seed, i as u64);
            let j = (draw % (i as u64 + 1)) as usize;
            values.swap(i, j);
        }

        Ok(values)
    }
}

/// Derive a pseudo-random u64 from the seed and a round counter
fn draw_u64(seed: &[u8; 32], round: u64) -> u64 {
    let mut input = [0u8; 40];
    input[..32].copy_from_slice(seed);
    input[32..].copy_from_slice(&round.to_be_bytes());
    let hash = keccak256(&input);
    let mut word = [0u8; 8];
    word.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_be_bytes(word)
}
