//! Potential stereo perception.
//!
//! Decides which atoms can carry a tetrahedral configuration and which
//! double bonds can carry a cis/trans one, from connectivity alone.
//! Substituents count as distinguishable when they fall into different
//! [symmetry classes](crate::symmetry::symmetry_classes). Ring-induced
//! stereo between topologically equivalent ring branches is not detected.

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::bond::{BondOrder, BondStereo};
use crate::graph_ops::smallest_ring_through_bond;
use crate::mol::Mol;
use crate::symmetry::symmetry_classes;
use crate::traits::{
    HasAtomicNum, HasBondOrder, HasBondStereo, HasBondStereoMut, HasChiralTagMut, HasFormalCharge,
    HasHydrogenCount, HasIsotope,
};

/// Double bonds in rings smaller than this cannot be trans, so they are
/// never stereogenic.
pub const MIN_STEREO_RING_SIZE: usize = 8;

/// The stereo-bond detection step of enumeration.
///
/// Called once per enumeration on the private copy, before eligible
/// elements are collected. Implementations annotate bonds in place, usually
/// by moving candidate double bonds from [`BondStereo::None`] to
/// [`BondStereo::Any`].
pub trait StereoPerception<A, B> {
    fn mark_potential_stereo_bonds(&self, mol: &mut Mol<A, B>);
}

impl<A, B, F> StereoPerception<A, B> for F
where
    F: Fn(&mut Mol<A, B>),
{
    fn mark_potential_stereo_bonds(&self, mol: &mut Mol<A, B>) {
        self(mol)
    }
}

/// Perception based on topological symmetry classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymmetryPerception;

impl<A, B> StereoPerception<A, B> for SymmetryPerception
where
    A: HasAtomicNum + HasHydrogenCount + HasFormalCharge + HasIsotope,
    B: HasBondOrder + HasBondStereo + HasBondStereoMut,
{
    fn mark_potential_stereo_bonds(&self, mol: &mut Mol<A, B>) {
        mark_potential_stereo_bonds(mol);
    }
}

fn has_lone_pair_stereo(atomic_num: u8) -> bool {
    matches!(atomic_num, 15 | 16 | 33 | 34 | 52)
}

fn distinct_classes(classes: &[usize], atoms: impl Iterator<Item = NodeIndex>) -> bool {
    let mut seen: Vec<usize> = atoms.map(|a| classes[a.index()]).collect();
    seen.sort_unstable();
    seen.windows(2).all(|w| w[0] != w[1])
}

/// Implicit hydrogens plus explicit hydrogen neighbours.
fn total_hydrogens<A, B>(mol: &Mol<A, B>, idx: NodeIndex) -> usize
where
    A: HasAtomicNum + HasHydrogenCount,
{
    let explicit = mol
        .neighbors(idx)
        .filter(|&nb| mol.atom(nb).atomic_num() == 1)
        .count();
    mol.atom(idx).hydrogen_count() as usize + explicit
}

fn is_potential_stereocenter<A, B>(mol: &Mol<A, B>, idx: NodeIndex, classes: &[usize]) -> bool
where
    A: HasAtomicNum + HasHydrogenCount,
    B: HasBondOrder,
{
    if total_hydrogens(mol, idx) > 1 {
        return false;
    }
    let atom = mol.atom(idx);
    let hydrogens = atom.hydrogen_count() as usize;

    let lone_pair = has_lone_pair_stereo(atom.atomic_num());
    match mol.degree(idx) + hydrogens {
        4 => {}
        3 if lone_pair => {}
        _ => return false,
    }

    if !lone_pair
        && mol
            .bonds_of(idx)
            .any(|e| mol.bond(e).bond_order() != BondOrder::Single)
    {
        return false;
    }

    distinct_classes(classes, mol.neighbors(idx))
}

/// Flags every atom that could carry a tetrahedral configuration and
/// clears the flag everywhere else.
///
/// A candidate has four substituents (three for P, As, S, Se, Te, whose
/// lone pair acts as the fourth), at most one of them a hydrogen (implicit
/// or explicit), and explicit neighbours in pairwise distinct symmetry classes. Carbon-like
/// centers must have only single bonds.
pub fn assign_potential_stereocenters<A, B>(mol: &mut Mol<A, B>)
where
    A: HasAtomicNum
        + HasHydrogenCount
        + HasFormalCharge
        + HasIsotope
        + HasChiralTagMut,
    B: HasBondOrder,
{
    let classes = symmetry_classes(mol);
    let flags: Vec<(NodeIndex, bool)> = mol
        .atoms()
        .map(|idx| (idx, is_potential_stereocenter(mol, idx, &classes)))
        .collect();
    for (idx, possible) in flags {
        mol.atom_mut(idx).set_chirality_possible(possible);
    }
}

/// Reference substituent for one end of a double bond, or `None` when that
/// end cannot support cis/trans isomerism.
fn double_bond_reference<A, B>(
    mol: &Mol<A, B>,
    end: NodeIndex,
    other: NodeIndex,
    bond: EdgeIndex,
    classes: &[usize],
) -> Option<NodeIndex>
where
    A: HasAtomicNum + HasHydrogenCount,
    B: HasBondOrder,
{
    if total_hydrogens(mol, end) > 1 {
        return None;
    }
    if mol
        .bonds_of(end)
        .any(|e| e != bond && mol.bond(e).bond_order() != BondOrder::Single)
    {
        return None;
    }

    let substituents: Vec<NodeIndex> = mol.neighbors(end).filter(|&nb| nb != other).collect();
    let hydrogens = mol.atom(end).hydrogen_count() as usize;
    if substituents.is_empty() || substituents.len() + hydrogens > 2 {
        return None;
    }
    if substituents.len() == 2 && !distinct_classes(classes, substituents.iter().copied()) {
        return None;
    }

    substituents
        .into_iter()
        .max_by_key(|nb| (classes[nb.index()], std::cmp::Reverse(nb.index())))
}

/// Marks double bonds that could carry a cis/trans configuration.
///
/// Qualifying bonds whose state is [`BondStereo::None`] become
/// [`BondStereo::Any`]. Bonds that already carry a state keep it. Reference
/// atoms are filled in where missing, using the highest-class substituent
/// on each end.
pub fn mark_potential_stereo_bonds<A, B>(mol: &mut Mol<A, B>)
where
    A: HasAtomicNum + HasHydrogenCount + HasFormalCharge + HasIsotope,
    B: HasBondOrder + HasBondStereo + HasBondStereoMut,
{
    let classes = symmetry_classes(mol);
    let mut marks: Vec<(EdgeIndex, [NodeIndex; 2])> = Vec::new();

    for edge in mol.bonds() {
        if mol.bond(edge).bond_order() != BondOrder::Double {
            continue;
        }
        let Some((a, b)) = mol.bond_endpoints(edge) else {
            continue;
        };
        if smallest_ring_through_bond(mol, edge).is_some_and(|size| size < MIN_STEREO_RING_SIZE) {
            continue;
        }
        let refs = double_bond_reference(mol, a, b, edge, &classes)
            .zip(double_bond_reference(mol, b, a, edge, &classes));
        if let Some((ra, rb)) = refs {
            marks.push((edge, [ra, rb]));
        }
    }

    for (edge, refs) in marks {
        let bond = mol.bond_mut(edge);
        if bond.bond_stereo() == BondStereo::None {
            bond.set_bond_stereo(BondStereo::Any);
        }
        if bond.stereo_atoms().is_none() {
            bond.set_stereo_atoms(Some(refs));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::{Atom, ChiralTag};
    use crate::bond::Bond;

    fn element(atomic_num: u8, hydrogen_count: u8) -> Atom {
        Atom {
            atomic_num,
            hydrogen_count,
            ..Atom::default()
        }
    }

    fn star(center: Atom, subs: &[u8]) -> (Mol<Atom, Bond>, NodeIndex) {
        let mut mol = Mol::new();
        let c = mol.add_atom(center);
        for &z in subs {
            let hs = if z == 6 { 3 } else { 0 };
            let s = mol.add_atom(element(z, hs));
            mol.add_bond(c, s, Bond::single());
        }
        (mol, c)
    }

    // X-CH=CH-Y
    fn ethene(x: u8, y: u8) -> (Mol<Atom, Bond>, EdgeIndex) {
        let mut mol = Mol::new();
        let a = mol.add_atom(element(x, 0));
        let c1 = mol.add_atom(element(6, 1));
        let c2 = mol.add_atom(element(6, 1));
        let b = mol.add_atom(element(y, 0));
        mol.add_bond(a, c1, Bond::single());
        let db = mol.add_bond(c1, c2, Bond::double());
        mol.add_bond(c2, b, Bond::single());
        (mol, db)
    }

    #[test]
    fn four_distinct_substituents() {
        let (mut mol, c) = star(element(6, 1), &[9, 17, 35]);
        assign_potential_stereocenters(&mut mol);
        assert!(mol.atom(c).chirality_possible);
    }

    #[test]
    fn repeated_substituent_is_not_a_center() {
        let (mut mol, c) = star(element(6, 1), &[9, 9, 35]);
        assign_potential_stereocenters(&mut mol);
        assert!(!mol.atom(c).chirality_possible);
    }

    #[test]
    fn two_hydrogens_is_not_a_center() {
        let (mut mol, c) = star(element(6, 2), &[9, 17]);
        assign_potential_stereocenters(&mut mol);
        assert!(!mol.atom(c).chirality_possible);
    }

    #[test]
    fn sulfur_lone_pair_counts() {
        // Methyl ethyl sulfoxide: S(=O)(C)CC
        let mut mol = Mol::<Atom, Bond>::new();
        let s = mol.add_atom(element(16, 0));
        let o = mol.add_atom(element(8, 0));
        let me = mol.add_atom(element(6, 3));
        let et1 = mol.add_atom(element(6, 2));
        let et2 = mol.add_atom(element(6, 3));
        mol.add_bond(s, o, Bond::double());
        mol.add_bond(s, me, Bond::single());
        mol.add_bond(s, et1, Bond::single());
        mol.add_bond(et1, et2, Bond::single());
        assign_potential_stereocenters(&mut mol);
        assert!(mol.atom(s).chirality_possible);
        assert!(!mol.atom(me).chirality_possible);
    }

    #[test]
    fn explicit_and_implicit_hydrogen_is_not_a_center() {
        // CH2FCl with one hydrogen as a graph node.
        let (mut mol, c) = star(element(6, 1), &[1, 9, 17]);
        assign_potential_stereocenters(&mut mol);
        assert!(!mol.atom(c).chirality_possible);
    }

    #[test]
    fn single_explicit_hydrogen_still_counts_as_center() {
        let (mut mol, c) = star(element(6, 0), &[1, 9, 17, 35]);
        assign_potential_stereocenters(&mut mol);
        assert!(mol.atom(c).chirality_possible);
    }

    #[test]
    fn nitrogen_is_not_a_center() {
        let (mut mol, n) = star(element(7, 0), &[9, 17, 35]);
        assign_potential_stereocenters(&mut mol);
        assert!(!mol.atom(n).chirality_possible);
    }

    #[test]
    fn stale_flags_are_cleared() {
        let (mut mol, c) = star(element(6, 2), &[9, 17]);
        mol.atom_mut(c).chirality_possible = true;
        assign_potential_stereocenters(&mut mol);
        assert!(!mol.atom(c).chirality_possible);
    }

    #[test]
    fn disubstituted_ethene_is_marked_any() {
        let (mut mol, db) = ethene(9, 35);
        mark_potential_stereo_bonds(&mut mol);
        assert_eq!(mol.bond(db).stereo, BondStereo::Any);
        assert_eq!(
            mol.bond(db).stereo_atoms,
            Some([NodeIndex::new(0), NodeIndex::new(3)])
        );
    }

    #[test]
    fn terminal_methylene_is_not_marked() {
        // F-CH=CH2
        let mut mol = Mol::<Atom, Bond>::new();
        let f = mol.add_atom(element(9, 0));
        let c1 = mol.add_atom(element(6, 1));
        let c2 = mol.add_atom(element(6, 2));
        mol.add_bond(f, c1, Bond::single());
        let db = mol.add_bond(c1, c2, Bond::double());
        mark_potential_stereo_bonds(&mut mol);
        assert_eq!(mol.bond(db).stereo, BondStereo::None);
    }

    #[test]
    fn methylene_with_explicit_hydrogen_is_not_marked() {
        // F-CH=CH2 with one terminal hydrogen as a graph node.
        let mut mol = Mol::<Atom, Bond>::new();
        let f = mol.add_atom(element(9, 0));
        let c1 = mol.add_atom(element(6, 1));
        let c2 = mol.add_atom(element(6, 1));
        let h = mol.add_atom(element(1, 0));
        mol.add_bond(f, c1, Bond::single());
        let db = mol.add_bond(c1, c2, Bond::double());
        mol.add_bond(c2, h, Bond::single());
        mark_potential_stereo_bonds(&mut mol);
        assert_eq!(mol.bond(db).stereo, BondStereo::None);
        assert_eq!(mol.bond(db).stereo_atoms, None);
    }

    #[test]
    fn geminal_twins_are_not_marked() {
        // (F)(F)C=CH-Cl
        let mut mol = Mol::<Atom, Bond>::new();
        let c1 = mol.add_atom(element(6, 0));
        let f1 = mol.add_atom(element(9, 0));
        let f2 = mol.add_atom(element(9, 0));
        let c2 = mol.add_atom(element(6, 1));
        let cl = mol.add_atom(element(17, 0));
        mol.add_bond(c1, f1, Bond::single());
        mol.add_bond(c1, f2, Bond::single());
        let db = mol.add_bond(c1, c2, Bond::double());
        mol.add_bond(c2, cl, Bond::single());
        mark_potential_stereo_bonds(&mut mol);
        assert_eq!(mol.bond(db).stereo, BondStereo::None);
    }

    #[test]
    fn small_ring_double_bond_is_not_marked() {
        // Cyclohexene
        let mut mol = Mol::<Atom, Bond>::new();
        let atoms: Vec<_> = (0..6).map(|_| mol.add_atom(element(6, 2))).collect();
        mol.atom_mut(atoms[0]).hydrogen_count = 1;
        mol.atom_mut(atoms[1]).hydrogen_count = 1;
        let db = mol.add_bond(atoms[0], atoms[1], Bond::double());
        for i in 1..6 {
            mol.add_bond(atoms[i], atoms[(i + 1) % 6], Bond::single());
        }
        mark_potential_stereo_bonds(&mut mol);
        assert_eq!(mol.bond(db).stereo, BondStereo::None);
    }

    #[test]
    fn assigned_bond_keeps_its_state() {
        let (mut mol, db) = ethene(9, 35);
        mol.bond_mut(db).stereo = BondStereo::Trans;
        mark_potential_stereo_bonds(&mut mol);
        assert_eq!(mol.bond(db).stereo, BondStereo::Trans);
        assert!(mol.bond(db).stereo_atoms.is_some());
    }

    #[test]
    fn chiral_tag_is_untouched_by_flagging() {
        let (mut mol, c) = star(
            Atom {
                chiral_tag: ChiralTag::Clockwise,
                ..element(6, 1)
            },
            &[9, 17, 35],
        );
        assign_potential_stereocenters(&mut mol);
        assert_eq!(mol.atom(c).chiral_tag, ChiralTag::Clockwise);
    }

    #[test]
    fn closure_perception() {
        let (mut mol, db) = ethene(9, 35);
        let perception = |m: &mut Mol<Atom, Bond>| {
            let edges: Vec<_> = m.bonds().collect();
            for e in edges {
                m.bond_mut(e).stereo = BondStereo::Cis;
            }
        };
        perception.mark_potential_stereo_bonds(&mut mol);
        assert_eq!(mol.bond(db).stereo, BondStereo::Cis);
    }
}
