//! Random selection for spawn placement.
//!
//! Spawn points are chosen uniformly at random. The generator sits behind the
//! [`PickRng`] trait so tests and replays can pin the sequence with a seed,
//! while live games seed from entropy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform indices.
pub trait PickRng {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Seeded random number generator for spawn selection.
///
/// The same seed always yields the same placements. Without a seed, uses
/// system entropy.
#[derive(Clone, Debug)]
pub struct SpawnRng {
    rng: StdRng,
    /// The seed used to initialize this RNG (if deterministic)
    pub seed: Option<u64>,
}

impl SpawnRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }
}

impl Default for SpawnRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl PickRng for SpawnRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SpawnRng::from_seed(42);
        let mut b = SpawnRng::from_seed(42);
        for _ in 0..16 {
            assert_eq!(a.pick_index(1_000), b.pick_index(1_000));
        }
    }

    #[test]
    fn pick_index_stays_in_range() {
        let mut rng = SpawnRng::from_seed(7);
        for len in 1..10 {
            for _ in 0..100 {
                assert!(rng.pick_index(len) < len);
            }
        }
    }

    #[test]
    fn pick_index_reaches_every_slot() {
        let mut rng = SpawnRng::from_seed(3);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[rng.pick_index(4)] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn entropy_rng_has_no_seed() {
        assert_eq!(SpawnRng::from_entropy().seed, None);
        assert_eq!(SpawnRng::from_seed(9).seed, Some(9));
    }
}
