//! Topological symmetry classes and order-invariant molecule digests.
//!
//! Symmetry classes start from a per-atom invariant and are refined with
//! the classes of each atom's neighbours (Morgan's algorithm) until no class
//! splits any further. Two atoms share a class when connectivity alone
//! cannot tell them apart, which is what stereo perception needs to decide
//! whether substituents are distinguishable.

use std::hash::Hasher;

use petgraph::graph::NodeIndex;

use crate::bond::BondOrder;
use crate::mol::Mol;
use crate::traits::{HasAtomicNum, HasBondOrder, HasFormalCharge, HasHydrogenCount, HasIsotope};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a. Stable across runs and platforms for explicit byte input,
/// unlike `std`'s randomly keyed `DefaultHasher`.
pub(crate) struct Fnv1aHasher(u64);

impl Fnv1aHasher {
    pub(crate) fn new() -> Self {
        Self(FNV_OFFSET_BASIS)
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 ^= b as u64;
            self.0 = self.0.wrapping_mul(FNV_PRIME);
        }
    }
}

/// Element, charge, isotope, degree, implicit hydrogens and the sum of bond
/// orders in half units (aromatic counts as 3).
type AtomKey = (u8, i8, u16, usize, u8, u32);

fn half_order(order: BondOrder) -> u32 {
    match order {
        BondOrder::Single => 2,
        BondOrder::Aromatic => 3,
        BondOrder::Double => 4,
        BondOrder::Triple => 6,
    }
}

fn atom_key<A, B>(mol: &Mol<A, B>, idx: NodeIndex) -> AtomKey
where
    A: HasAtomicNum + HasHydrogenCount + HasFormalCharge + HasIsotope,
    B: HasBondOrder,
{
    let atom = mol.atom(idx);
    let bond_orders = mol
        .bonds_of(idx)
        .map(|e| half_order(mol.bond(e).bond_order()))
        .sum();
    (
        atom.atomic_num(),
        atom.formal_charge(),
        atom.isotope(),
        mol.degree(idx),
        atom.hydrogen_count(),
        bond_orders,
    )
}

/// Dense ranks of `keys` (equal keys share a rank, ranks follow key order)
/// and the number of distinct ranks.
fn dense_ranks<K: Ord>(keys: &[K]) -> (Vec<usize>, usize) {
    let mut sorted: Vec<&K> = keys.iter().collect();
    sorted.sort_unstable();
    sorted.dedup();
    let ranks = keys
        .iter()
        .map(|k| sorted.binary_search(&k).unwrap_or_default())
        .collect();
    (ranks, sorted.len())
}

/// Symmetry class of every atom, indexed by atom index.
///
/// Class values are ranks: equal values mean topologically equivalent
/// atoms, and a larger value orders after a smaller one. The ordering does
/// not depend on atom numbering.
pub fn symmetry_classes<A, B>(mol: &Mol<A, B>) -> Vec<usize>
where
    A: HasAtomicNum + HasHydrogenCount + HasFormalCharge + HasIsotope,
    B: HasBondOrder,
{
    let keys: Vec<AtomKey> = mol.atoms().map(|idx| atom_key(mol, idx)).collect();
    let (mut classes, mut distinct) = dense_ranks(&keys);

    // Refine by (own class, sorted neighbour classes) until no class splits.
    while distinct < classes.len() {
        let keys: Vec<(usize, Vec<usize>)> = mol
            .atoms()
            .map(|idx| {
                let mut around: Vec<usize> =
                    mol.neighbors(idx).map(|nb| classes[nb.index()]).collect();
                around.sort_unstable();
                (classes[idx.index()], around)
            })
            .collect();
        let (refined, count) = dense_ranks(&keys);
        if count == distinct {
            break;
        }
        classes = refined;
        distinct = count;
    }
    classes
}

/// Digest of the molecule that ignores atom numbering.
///
/// FNV-1a over the sorted `(degree, atomic_num)` pairs of all atoms; each
/// pair is fed as `degree` in four little-endian bytes followed by the
/// atomic number byte. Used as the default sampling seed.
pub fn molecule_seed<A, B>(mol: &Mol<A, B>) -> u64
where
    A: HasAtomicNum,
{
    let mut pairs: Vec<(u32, u8)> = mol
        .atoms()
        .map(|idx| (mol.degree(idx) as u32, mol.atom(idx).atomic_num()))
        .collect();
    pairs.sort_unstable();

    let mut h = Fnv1aHasher::new();
    for (degree, atomic_num) in pairs {
        h.write(&degree.to_le_bytes());
        h.write(&[atomic_num]);
    }
    h.finish()
}
