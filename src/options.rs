use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::OptionsError;
use crate::mol::Mol;
use crate::symmetry::molecule_seed;
use crate::traits::HasAtomicNum;

pub const DEFAULT_MAX_ISOMERS: usize = 1024;

/// Where the sampling generator comes from when only part of the
/// configuration space is enumerated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RandomSource {
    /// Seed derived from the molecule with
    /// [`molecule_seed`](crate::symmetry::molecule_seed), so repeated runs
    /// on the same structure sample the same configurations regardless of
    /// atom order.
    #[default]
    Derived,
    /// Explicit seed.
    Seed(u64),
    /// Caller-supplied generator, used from its current state. Each
    /// enumeration draws from its own copy, so the stored generator never
    /// advances and reusing the options repeats the same sample.
    #[serde(skip)]
    Generator(ChaCha8Rng),
}

impl RandomSource {
    pub(crate) fn rng_for<A, B>(&self, mol: &Mol<A, B>) -> ChaCha8Rng
    where
        A: HasAtomicNum,
    {
        match self {
            Self::Derived => ChaCha8Rng::seed_from_u64(molecule_seed(mol)),
            Self::Seed(seed) => ChaCha8Rng::seed_from_u64(*seed),
            Self::Generator(rng) => rng.clone(),
        }
    }
}

/// Settings for one stereoisomer enumeration.
///
/// ```
/// use stereocrab::EnumerationOptions;
///
/// let opts = EnumerationOptions::default()
///     .with_max_isomers(16)
///     .with_only_unassigned(false);
/// assert!(!opts.try_embedding);
/// assert_eq!(opts.max_isomers, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct EnumerationOptions {
    /// Keep only isomers the embedder can place in 3-D.
    pub try_embedding: bool,
    /// Leave atoms and bonds that already carry a configuration alone.
    pub only_unassigned: bool,
    /// Upper bound on emitted isomers; `0` means no bound. When the full
    /// space is larger, a random subset is sampled.
    pub max_isomers: usize,
    pub random_source: RandomSource,
    /// Report failed embeddings at `info` level instead of `debug`.
    pub verbose: bool,
}

impl Default for EnumerationOptions {
    fn default() -> Self {
        Self {
            try_embedding: false,
            only_unassigned: true,
            max_isomers: DEFAULT_MAX_ISOMERS,
            random_source: RandomSource::Derived,
            verbose: false,
        }
    }
}

impl EnumerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from JSON with camelCase keys. Missing keys take
    /// their defaults; unknown keys and out-of-range values are rejected.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_try_embedding(mut self, try_embedding: bool) -> Self {
        self.try_embedding = try_embedding;
        self
    }

    pub fn with_only_unassigned(mut self, only_unassigned: bool) -> Self {
        self.only_unassigned = only_unassigned;
        self
    }

    pub fn with_max_isomers(mut self, max_isomers: usize) -> Self {
        self.max_isomers = max_isomers;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_source = RandomSource::Seed(seed);
        self
    }

    /// Samples with a copy of `rng` taken at its current state. `rng` itself
    /// is not advanced by enumeration; to draw a different subset on the next
    /// run, pass a generator in a different state.
    pub fn with_rng(mut self, rng: ChaCha8Rng) -> Self {
        self.random_source = RandomSource::Generator(rng);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn defaults() {
        let opts = EnumerationOptions::default();
        assert!(!opts.try_embedding);
        assert!(opts.only_unassigned);
        assert_eq!(opts.max_isomers, 1024);
        assert_eq!(opts.random_source, RandomSource::Derived);
        assert!(!opts.verbose);
    }

    #[test]
    fn json_partial_document_keeps_defaults() {
        let opts = EnumerationOptions::from_json(r#"{"maxIsomers": 0, "tryEmbedding": true}"#)
            .unwrap();
        assert_eq!(opts.max_isomers, 0);
        assert!(opts.try_embedding);
        assert!(opts.only_unassigned);
    }

    #[test]
    fn json_seed() {
        let opts = EnumerationOptions::from_json(r#"{"randomSource": {"seed": 7}}"#).unwrap();
        assert_eq!(opts.random_source, RandomSource::Seed(7));
    }

    #[test]
    fn json_rejects_negative_cap() {
        assert!(EnumerationOptions::from_json(r#"{"maxIsomers": -1}"#).is_err());
    }

    #[test]
    fn json_rejects_unknown_key() {
        assert!(EnumerationOptions::from_json(r#"{"maxIsomer": 3}"#).is_err());
    }

    #[test]
    fn injected_generator_is_used_from_current_state() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        rng.next_u64();
        let source = RandomSource::Generator(rng.clone());
        let mut resolved = source.rng_for(&Mol::<crate::Atom, crate::Bond>::new());
        assert_eq!(resolved.next_u64(), rng.next_u64());
    }

    #[test]
    fn explicit_seed_ignores_molecule() {
        let empty = Mol::<crate::Atom, crate::Bond>::new();
        let mut one = Mol::<crate::Atom, crate::Bond>::new();
        one.add_atom(crate::Atom {
            atomic_num: 6,
            ..crate::Atom::default()
        });
        let mut a = RandomSource::Seed(5).rng_for(&empty);
        let mut b = RandomSource::Seed(5).rng_for(&one);
        assert_eq!(a.next_u64(), b.next_u64());
    }
}
