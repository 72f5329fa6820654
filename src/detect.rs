use crate::atom::ChiralTag;
use crate::bond::BondStereo;
use crate::mol::Mol;
use crate::options::EnumerationOptions;
use crate::perception::StereoPerception;
use crate::stereo_element::StereoElement;
use crate::traits::{HasBondStereo, HasChiralTag};

/// Collects the elements enumeration may set, in bit order: flagged atoms
/// by ascending index, then stereo-capable bonds by ascending index.
///
/// Runs `perception` on `mol` first, so its bond annotations are visible
/// here. With `only_unassigned`, atoms must still be
/// [`Unspecified`](ChiralTag::Unspecified) and bonds [`Any`](BondStereo::Any).
pub fn find_stereo_elements<A, B, P>(
    mol: &mut Mol<A, B>,
    options: &EnumerationOptions,
    perception: &P,
) -> Vec<StereoElement>
where
    A: HasChiralTag,
    B: HasBondStereo,
    P: StereoPerception<A, B> + ?Sized,
{
    perception.mark_potential_stereo_bonds(mol);

    let atoms = mol
        .atoms()
        .filter(|&idx| {
            let atom = mol.atom(idx);
            atom.chirality_possible()
                && (!options.only_unassigned || atom.chiral_tag() == ChiralTag::Unspecified)
        })
        .map(StereoElement::Atom);

    let bonds = mol
        .bonds()
        .filter(|&idx| {
            let stereo = mol.bond(idx).bond_stereo();
            stereo != BondStereo::None
                && (!options.only_unassigned || stereo == BondStereo::Any)
        })
        .map(StereoElement::Bond);

    atoms.chain(bonds).collect()
}
