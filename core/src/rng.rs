//! Random draws for dataset synthesis.
//!
//! All randomness flows through a DatasetRng instance. The generator
//! never calls a platform RNG directly, so the same code path serves
//! both the interactive "regenerate" action (entropy-seeded) and
//! reproducible runs (fixed seed) used by tests and scripted reports.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

pub struct DatasetRng {
    inner: Pcg64Mcg,
}

impl DatasetRng {
    /// RNG with a fixed seed (same seed = same dataset).
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// RNG seeded from the platform entropy source. Each call starts
    /// a fresh stream; repeated generation yields different datasets.
    pub fn from_entropy() -> Self {
        use rand::RngCore;
        Self::from_seed(rand::thread_rng().next_u64())
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        use rand::RngCore;
        self.inner.next_u64()
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.next_u64() % n
    }

    /// Uniform integer in [lo, hi], inclusive on both ends.
    pub fn int_in(&mut self, lo: u32, hi: u32) -> u32 {
        assert!(lo <= hi, "empty range [{lo}, {hi}]");
        lo + self.next_u64_below((hi - lo + 1) as u64) as u32
    }

    /// Uniform pick from a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_u64_below(items.len() as u64) as usize]
    }
}
