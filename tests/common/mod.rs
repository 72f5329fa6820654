#![allow(dead_code)]

use petgraph::graph::NodeIndex;
use stereocrab::perception::assign_potential_stereocenters;
use stereocrab::{Atom, Bond, Mol};

pub fn atom(atomic_num: u8, hydrogen_count: u8) -> Atom {
    Atom {
        atomic_num,
        hydrogen_count,
        ..Atom::default()
    }
}

/// Builds a molecule from `(atomic_num, hydrogens)` pairs and
/// `(a, b, order)` bonds with order 1 or 2, then flags stereocenters.
pub fn build(atoms: &[(u8, u8)], bonds: &[(usize, usize, u8)]) -> Mol<Atom, Bond> {
    let mut mol = Mol::new();
    for &(z, h) in atoms {
        mol.add_atom(atom(z, h));
    }
    for &(a, b, order) in bonds {
        let bond = if order == 2 {
            Bond::double()
        } else {
            Bond::single()
        };
        mol.add_bond(NodeIndex::new(a), NodeIndex::new(b), bond);
    }
    assign_potential_stereocenters(&mut mol);
    mol
}

/// BrC=CC1OC(C2)(F)C2(Cl)C1: three stereocenters (atoms 3, 5, 8) and one
/// stereo double bond (bond 1).
pub fn bromovinyl_bicycle() -> Mol<Atom, Bond> {
    build(
        &[
            (35, 0),
            (6, 1),
            (6, 1),
            (6, 1),
            (8, 0),
            (6, 0),
            (6, 2),
            (9, 0),
            (6, 0),
            (17, 0),
            (6, 2),
        ],
        &[
            (0, 1, 1),
            (1, 2, 2),
            (2, 3, 1),
            (3, 4, 1),
            (4, 5, 1),
            (5, 6, 1),
            (5, 7, 1),
            (5, 8, 1),
            (8, 6, 1),
            (8, 9, 1),
            (8, 10, 1),
            (10, 3, 1),
        ],
    )
}

pub const BICYCLE_CENTERS: [usize; 3] = [3, 5, 8];

/// Br-[CH](Cl)-...-[CH](Cl)-F with `n` stereocenters. Carbon `i` is atom
/// `1 + 2 * i`.
pub fn halo_chain(n: usize) -> Mol<Atom, Bond> {
    let mut atoms = vec![(35, 0)];
    let mut bonds = Vec::new();
    let mut prev = 0;
    for _ in 0..n {
        let c = atoms.len();
        atoms.push((6, 1));
        atoms.push((17, 0));
        bonds.push((prev, c, 1));
        bonds.push((c, c + 1, 1));
        prev = c;
    }
    let f = atoms.len();
    atoms.push((9, 0));
    bonds.push((prev, f, 1));
    build(&atoms, &bonds)
}

/// F-[CH](Cl)-Br
pub fn chfclbr() -> Mol<Atom, Bond> {
    build(
        &[(6, 1), (9, 0), (17, 0), (35, 0)],
        &[(0, 1, 1), (0, 2, 1), (0, 3, 1)],
    )
}
