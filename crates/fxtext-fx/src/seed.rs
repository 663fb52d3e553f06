#![forbid(unsafe_code)]

//! Seed sources for shake re-rolls.
//!
//! Shake jitter is drawn from a per-span generator whose seed changes every
//! shake interval. Where that seed comes from is injectable so frames can be
//! reproduced in tests.

/// Supplies fresh seeds.
pub trait SeedSource {
    /// Next seed.
    fn next_seed(&mut self) -> u64;
}

impl SeedSource for fastrand::Rng {
    fn next_seed(&mut self) -> u64 {
        self.u64(..)
    }
}

impl<S: SeedSource + ?Sized> SeedSource for &mut S {
    fn next_seed(&mut self) -> u64 {
        (**self).next_seed()
    }
}

/// Always the same seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedSeed(pub u64);

impl SeedSource for FixedSeed {
    fn next_seed(&mut self) -> u64 {
        self.0
    }
}

/// Cycles through a fixed list of seeds. An empty list yields zeros.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeedSequence {
    seeds: Vec<u64>,
    next: usize,
}

impl SeedSequence {
    pub fn new(seeds: impl IntoIterator<Item = u64>) -> Self {
        Self {
            seeds: seeds.into_iter().collect(),
            next: 0,
        }
    }

    /// How many seeds have been handed out.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl SeedSource for SeedSequence {
    fn next_seed(&mut self) -> u64 {
        if self.seeds.is_empty() {
            return 0;
        }
        let seed = self.seeds[self.next % self.seeds.len()];
        self.next += 1;
        seed
    }
}
