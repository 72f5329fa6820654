use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::atom::ChiralTag;
use crate::bond::BondStereo;
use crate::mol::Mol;
use crate::traits::{HasBondStereoMut, HasChiralTagMut};

/// One stereogenic element selected for enumeration.
///
/// Each element has two configurations, chosen by a single flag. Setting
/// one element never reads or touches another, so flips commute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StereoElement {
    /// Tetrahedral center: `true` is clockwise, `false` counterclockwise.
    Atom(NodeIndex),
    /// Double bond: `true` is cis, `false` trans.
    Bond(EdgeIndex),
}

impl StereoElement {
    pub fn flip<A, B>(&self, mol: &mut Mol<A, B>, flag: bool)
    where
        A: HasChiralTagMut,
        B: HasBondStereoMut,
    {
        match *self {
            Self::Atom(idx) => {
                let tag = if flag {
                    ChiralTag::Clockwise
                } else {
                    ChiralTag::CounterClockwise
                };
                mol.atom_mut(idx).set_chiral_tag(tag);
            }
            Self::Bond(idx) => {
                let stereo = if flag {
                    BondStereo::Cis
                } else {
                    BondStereo::Trans
                };
                mol.bond_mut(idx).set_bond_stereo(stereo);
            }
        }
    }
}

/// Sets every element to the configuration selected by the matching bit
/// of `index`: bit `i` drives `elements[i]`. Elements past bit 63 get
/// `false`.
pub fn apply_configuration<A, B>(mol: &mut Mol<A, B>, elements: &[StereoElement], index: u64)
where
    A: HasChiralTagMut,
    B: HasBondStereoMut,
{
    for (bit, element) in elements.iter().enumerate() {
        let flag = index.checked_shr(bit as u32).is_some_and(|v| v & 1 == 1);
        element.flip(mol, flag);
    }
}
