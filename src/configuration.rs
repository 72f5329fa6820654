//! Sources of configuration indices.
//!
//! A configuration index is a `u64` whose bit `i` selects the configuration
//! of stereo element `i`. With `n` elements the space is `[0, 2^n)`.

use std::collections::HashSet;

use rand::RngCore;
use rand_chacha::ChaCha8Rng;

/// Largest number of stereo elements a `u64` index can address.
pub const MAX_STEREO_ELEMENTS: usize = 64;

/// Number of configurations for `n` elements, `2^n`.
pub fn space_size(n: usize) -> u128 {
    debug_assert!(n <= MAX_STEREO_ELEMENTS);
    1u128 << n
}

/// Every index in `[0, 2^n)`, ascending.
#[derive(Debug, Clone)]
pub struct ExhaustiveIndices {
    next: u128,
    end: u128,
}

impl ExhaustiveIndices {
    pub fn new(n: usize) -> Self {
        Self {
            next: 0,
            end: space_size(n),
        }
    }
}

impl Iterator for ExhaustiveIndices {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next as u64;
        self.next += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

/// Distinct indices drawn uniformly from `[0, 2^n)` without replacement.
///
/// Each draw takes one `next_u64` from the generator and keeps its low `n`
/// bits; values already produced are redrawn. The sequence ends on its own
/// once every index has been produced, so a consumer that rejects every
/// candidate still terminates.
#[derive(Debug, Clone)]
pub struct UniqueRandomIndices {
    mask: u64,
    space: u128,
    rng: ChaCha8Rng,
    seen: HashSet<u64>,
}

impl UniqueRandomIndices {
    pub fn new(n: usize, rng: ChaCha8Rng) -> Self {
        let mask = if n >= 64 { u64::MAX } else { (1u64 << n) - 1 };
        Self {
            mask,
            space: space_size(n),
            rng,
            seen: HashSet::new(),
        }
    }

    pub fn produced(&self) -> usize {
        self.seen.len()
    }
}

impl Iterator for UniqueRandomIndices {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.seen.len() as u128 >= self.space {
            return None;
        }
        loop {
            let bits = self.rng.next_u64() & self.mask;
            if self.seen.insert(bits) {
                return Some(bits);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.space - self.seen.len() as u128).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

/// The index strategy chosen for one enumeration.
#[derive(Debug, Clone)]
pub enum ConfigurationSource {
    Exhaustive(ExhaustiveIndices),
    UniqueRandom(UniqueRandomIndices),
}

impl ConfigurationSource {
    /// Walks the whole space when there is no cap or the space fits under
    /// it; otherwise samples with the generator from `rng`, which is only
    /// called in that case.
    pub fn select(n: usize, max_isomers: usize, rng: impl FnOnce() -> ChaCha8Rng) -> Self {
        if max_isomers == 0 || space_size(n) <= max_isomers as u128 {
            Self::Exhaustive(ExhaustiveIndices::new(n))
        } else {
            Self::UniqueRandom(UniqueRandomIndices::new(n, rng()))
        }
    }

    pub fn is_sampling(&self) -> bool {
        matches!(self, Self::UniqueRandom(_))
    }
}

impl Iterator for ConfigurationSource {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        match self {
            Self::Exhaustive(it) => it.next(),
            Self::UniqueRandom(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Exhaustive(it) => it.size_hint(),
            Self::UniqueRandom(it) => it.size_hint(),
        }
    }
}
