use std::collections::VecDeque;

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::mol::Mol;
use crate::traits::{HasBondStereo, HasBondStereoMut};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenumberError {
    LengthMismatch { expected: usize, got: usize },
    InvalidPermutation,
    /// A conformer does not hold one position per atom.
    ConformerLength { expected: usize, got: usize },
}

impl std::fmt::Display for RenumberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { expected, got } => {
                write!(f, "new_order length {got} != atom count {expected}")
            }
            Self::InvalidPermutation => write!(f, "new_order is not a valid permutation"),
            Self::ConformerLength { expected, got } => {
                write!(f, "conformer has {got} positions for {expected} atoms")
            }
        }
    }
}

impl std::error::Error for RenumberError {}

fn validate_permutation(new_order: &[usize], n: usize) -> Result<(), RenumberError> {
    if new_order.len() != n {
        return Err(RenumberError::LengthMismatch {
            expected: n,
            got: new_order.len(),
        });
    }
    let mut seen = vec![false; n];
    for &idx in new_order {
        if idx >= n || seen[idx] {
            return Err(RenumberError::InvalidPermutation);
        }
        seen[idx] = true;
    }
    Ok(())
}

/// Copy of `mol` with atoms reordered so that `new_order[new_idx] = old_idx`.
///
/// Bonds keep their relative order. Stereo reference atoms and conformer
/// positions follow their atoms; a conformer without exactly one position
/// per atom is rejected. Each atom sees its neighbours in the same
/// sequence as before, so chiral tags keep their meaning.
pub fn renumber_atoms<A, B>(
    mol: &Mol<A, B>,
    new_order: &[usize],
) -> Result<Mol<A, B>, RenumberError>
where
    A: Clone,
    B: HasBondStereo + HasBondStereoMut + Clone,
{
    let n = mol.atom_count();
    validate_permutation(new_order, n)?;

    let mut new_mol = Mol::new();
    for &old_idx in new_order {
        new_mol.add_atom(mol.atom(NodeIndex::new(old_idx)).clone());
    }

    let mut old_to_new = vec![NodeIndex::new(0); n];
    for (new_idx, &old_idx) in new_order.iter().enumerate() {
        old_to_new[old_idx] = NodeIndex::new(new_idx);
    }

    for edge in mol.bonds() {
        let Some((a, b)) = mol.bond_endpoints(edge) else {
            continue;
        };
        let mut bond = mol.bond(edge).clone();
        if let Some([ra, rb]) = bond.stereo_atoms() {
            bond.set_stereo_atoms(Some([old_to_new[ra.index()], old_to_new[rb.index()]]));
        }
        new_mol.add_bond(old_to_new[a.index()], old_to_new[b.index()], bond);
    }

    for conformer in mol.conformers() {
        let permuted = conformer
            .permuted(new_order)
            .ok_or(RenumberError::ConformerLength {
                expected: n,
                got: conformer.len(),
            })?;
        new_mol.add_conformer(permuted);
    }

    Ok(new_mol)
}

/// Size of the smallest ring containing `edge`, or `None` for chain bonds.
///
/// Breadth-first search from one endpoint to the other that never crosses
/// `edge` itself; the ring size is the number of atoms on that path.
pub fn smallest_ring_through_bond<A, B>(mol: &Mol<A, B>, edge: EdgeIndex) -> Option<usize> {
    let (start, goal) = mol.bond_endpoints(edge)?;
    let mut dist: Vec<Option<usize>> = vec![None; mol.atom_count()];
    dist[start.index()] = Some(0);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        let d = dist[current.index()]?;
        for via in mol.bonds_of(current) {
            if via == edge {
                continue;
            }
            let Some((a, b)) = mol.bond_endpoints(via) else {
                continue;
            };
            let next = if a == current { b } else { a };
            if dist[next.index()].is_some() {
                continue;
            }
            if next == goal {
                return Some(d + 2);
            }
            dist[next.index()] = Some(d + 1);
            queue.push_back(next);
        }
    }
    None
}
