//! Lazy stereoisomer enumeration.
//!
//! [`StereoisomerEnumerator`] detects the eligible stereo elements once,
//! picks an index source, and then builds one candidate per pulled index:
//! a fresh copy of the input with the selected configurations applied,
//! optionally checked by an [`Embedder`]. Nothing is computed until the
//! consumer asks for the next isomer, and dropping the enumerator part way
//! through is always safe.
//!
//! ```
//! use stereocrab::{enumerate_stereoisomers, Atom, Bond, EnumerationOptions, Mol};
//! use stereocrab::perception::assign_potential_stereocenters;
//!
//! // CHFClBr
//! let mut mol = Mol::<Atom, Bond>::new();
//! let c = mol.add_atom(Atom { atomic_num: 6, hydrogen_count: 1, ..Atom::default() });
//! for z in [9, 17, 35] {
//!     let x = mol.add_atom(Atom { atomic_num: z, ..Atom::default() });
//!     mol.add_bond(c, x, Bond::single());
//! }
//! assign_potential_stereocenters(&mut mol);
//!
//! let isomers: Vec<_> = enumerate_stereoisomers(&mol, &EnumerationOptions::default())
//!     .unwrap()
//!     .collect();
//! assert_eq!(isomers.len(), 2);
//! ```

use std::iter::FusedIterator;

use log::Level;

use crate::configuration::{ConfigurationSource, MAX_STEREO_ELEMENTS};
use crate::detect::find_stereo_elements;
use crate::embed::{Embedder, NoEmbedder};
use crate::error::EnumerationError;
use crate::mol::Mol;
use crate::options::EnumerationOptions;
use crate::perception::{StereoPerception, SymmetryPerception};
use crate::stereo_element::{apply_configuration, StereoElement};
use crate::traits::{
    HasAtomicNum, HasBondOrder, HasBondStereo, HasBondStereoMut, HasChiralTag, HasChiralTagMut,
    HasFormalCharge, HasHydrogenCount, HasIsotope,
};

/// One emitted isomer: an independent copy of the input molecule and the
/// configuration index it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Stereoisomer<A, B> {
    pub configuration: u64,
    pub mol: Mol<A, B>,
}

impl<A, B> Stereoisomer<A, B> {
    pub fn into_mol(self) -> Mol<A, B> {
        self.mol
    }
}

#[derive(Debug)]
enum State {
    /// No stereo freedom: the unmodified copy is the single result.
    Degenerate,
    Generating(ConfigurationSource),
    Terminated,
}

pub struct StereoisomerEnumerator<A, B, E = NoEmbedder> {
    base: Mol<A, B>,
    elements: Vec<StereoElement>,
    state: State,
    embedder: Option<E>,
    options: EnumerationOptions,
    emitted: usize,
}

impl<A, B, E> StereoisomerEnumerator<A, B, E>
where
    A: HasAtomicNum + HasChiralTag + HasChiralTagMut + Clone,
    B: HasBondStereo + HasBondStereoMut + Clone,
    E: Embedder<A, B>,
{
    /// Copies `mol`, runs detection on the copy and chooses the index
    /// source. Fails before any isomer is built when the input has more
    /// than 64 eligible elements, or when embedding is requested without
    /// an embedder.
    pub fn new<P>(
        mol: &Mol<A, B>,
        options: &EnumerationOptions,
        perception: &P,
        embedder: Option<E>,
    ) -> Result<Self, EnumerationError>
    where
        P: StereoPerception<A, B> + ?Sized,
    {
        if options.try_embedding && embedder.is_none() {
            return Err(EnumerationError::EmbedderRequired);
        }

        let mut base = mol.clone();
        let elements = find_stereo_elements(&mut base, options, perception);
        let n = elements.len();
        if n > MAX_STEREO_ELEMENTS {
            return Err(EnumerationError::too_many(n));
        }

        let state = if n == 0 {
            log::debug!("no eligible stereo elements, yielding input unchanged");
            State::Degenerate
        } else {
            let source = ConfigurationSource::select(n, options.max_isomers, || {
                options.random_source.rng_for(&base)
            });
            log::debug!(
                "{} eligible stereo elements, {} configuration space (max_isomers = {})",
                n,
                if source.is_sampling() {
                    "sampling"
                } else {
                    "enumerating whole"
                },
                options.max_isomers
            );
            State::Generating(source)
        };

        Ok(Self {
            base,
            elements,
            state,
            embedder,
            options: options.clone(),
            emitted: 0,
        })
    }

    /// Attaches a conformer to `candidate` if the embedder can place it.
    fn embed(&self, candidate: &mut Mol<A, B>, index: u64) -> bool {
        let Some(embedder) = self.embedder.as_ref() else {
            return true;
        };
        let level = if self.options.verbose {
            Level::Info
        } else {
            Level::Debug
        };
        let atoms = candidate.atom_count();
        match embedder.embed(candidate, index) {
            Some(mut conformer) if conformer.len() >= atoms => {
                conformer.truncate(atoms);
                candidate.clear_conformers();
                candidate.add_conformer(conformer);
                true
            }
            Some(conformer) => {
                log::log!(
                    level,
                    "configuration {:#x}: embedder returned {} positions for {} atoms",
                    index,
                    conformer.len(),
                    atoms
                );
                false
            }
            None => {
                log::log!(level, "configuration {:#x} failed to embed", index);
                false
            }
        }
    }
}

impl<A, B, E> StereoisomerEnumerator<A, B, E> {
    /// The eligible elements in bit order.
    pub fn stereo_elements(&self) -> &[StereoElement] {
        &self.elements
    }

    pub fn num_stereo_elements(&self) -> usize {
        self.elements.len()
    }

    /// Isomers emitted so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Whether a random subset of the configuration space is being drawn.
    pub fn is_sampling(&self) -> bool {
        matches!(&self.state, State::Generating(source) if source.is_sampling())
    }

    fn remaining_cap(&self) -> Option<usize> {
        match self.options.max_isomers {
            0 => None,
            max => Some(max.saturating_sub(self.emitted)),
        }
    }
}

impl<A, B, E> StereoisomerEnumerator<A, B, E>
where
    Self: Iterator<Item = Stereoisomer<A, B>>,
{
    /// Drops the configuration indices and yields bare molecules.
    pub fn molecules(self) -> impl Iterator<Item = Mol<A, B>> {
        self.map(Stereoisomer::into_mol)
    }
}

impl<A, B, E> Iterator for StereoisomerEnumerator<A, B, E>
where
    A: HasAtomicNum + HasChiralTag + HasChiralTagMut + Clone,
    B: HasBondStereo + HasBondStereoMut + Clone,
    E: Embedder<A, B>,
{
    type Item = Stereoisomer<A, B>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next_index = match &mut self.state {
                State::Terminated => return None,
                State::Degenerate => {
                    self.state = State::Terminated;
                    self.emitted += 1;
                    return Some(Stereoisomer {
                        configuration: 0,
                        mol: self.base.clone(),
                    });
                }
                State::Generating(source) => source.next(),
            };

            let Some(index) = next_index else {
                log::debug!(
                    "configuration space exhausted after {} isomers",
                    self.emitted
                );
                self.state = State::Terminated;
                return None;
            };

            let mut candidate = self.base.clone();
            apply_configuration(&mut candidate, &self.elements, index);
            if self.options.try_embedding && !self.embed(&mut candidate, index) {
                continue;
            }

            self.emitted += 1;
            if self.remaining_cap() == Some(0) {
                self.state = State::Terminated;
            }
            return Some(Stereoisomer {
                configuration: index,
                mol: candidate,
            });
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = match &self.state {
            State::Terminated => return (0, Some(0)),
            State::Degenerate => return (1, Some(1)),
            State::Generating(source) => source.size_hint(),
        };
        let lower = if self.options.try_embedding { 0 } else { lower };
        match self.remaining_cap() {
            Some(cap) => (
                lower.min(cap),
                Some(upper.map_or(cap, |upper| upper.min(cap))),
            ),
            None => (lower, upper),
        }
    }
}

impl<A, B, E> FusedIterator for StereoisomerEnumerator<A, B, E>
where
    A: HasAtomicNum + HasChiralTag + HasChiralTagMut + Clone,
    B: HasBondStereo + HasBondStereoMut + Clone,
    E: Embedder<A, B>,
{
}

/// Enumerates with [`SymmetryPerception`] and no embedding.
///
/// Fails with [`EnumerationError::EmbedderRequired`] if `options` ask for
/// embedding; use [`enumerate_stereoisomers_with_embedder`] for that.
pub fn enumerate_stereoisomers<A, B>(
    mol: &Mol<A, B>,
    options: &EnumerationOptions,
) -> Result<StereoisomerEnumerator<A, B>, EnumerationError>
where
    A: HasAtomicNum
        + HasHydrogenCount
        + HasFormalCharge
        + HasIsotope
        + HasChiralTag
        + HasChiralTagMut
        + Clone,
    B: HasBondOrder + HasBondStereo + HasBondStereoMut + Clone,
{
    StereoisomerEnumerator::new(mol, options, &SymmetryPerception, None)
}

/// Enumerates with [`SymmetryPerception`], checking candidates with
/// `embedder` when `options.try_embedding` is set.
pub fn enumerate_stereoisomers_with_embedder<A, B, E>(
    mol: &Mol<A, B>,
    options: &EnumerationOptions,
    embedder: E,
) -> Result<StereoisomerEnumerator<A, B, E>, EnumerationError>
where
    A: HasAtomicNum
        + HasHydrogenCount
        + HasFormalCharge
        + HasIsotope
        + HasChiralTag
        + HasChiralTagMut
        + Clone,
    B: HasBondOrder + HasBondStereo + HasBondStereoMut + Clone,
    E: Embedder<A, B>,
{
    StereoisomerEnumerator::new(mol, options, &SymmetryPerception, Some(embedder))
}
