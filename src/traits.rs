use petgraph::graph::NodeIndex;

use crate::atom::ChiralTag;
use crate::bond::{BondOrder, BondStereo};

pub trait HasAtomicNum {
    fn atomic_num(&self) -> u8;
}

pub trait HasFormalCharge {
    fn formal_charge(&self) -> i8;
}

pub trait HasIsotope {
    fn isotope(&self) -> u16;
}

pub trait HasHydrogenCount {
    fn hydrogen_count(&self) -> u8;
}

/// Read access to an atom's tetrahedral stereo state.
pub trait HasChiralTag {
    fn chiral_tag(&self) -> ChiralTag;
    /// Whether perception flagged this atom as a potential stereocenter.
    fn chirality_possible(&self) -> bool;
}

pub trait HasChiralTagMut {
    fn set_chiral_tag(&mut self, tag: ChiralTag);
    fn set_chirality_possible(&mut self, possible: bool);
}

pub trait HasBondOrder {
    fn bond_order(&self) -> BondOrder;
}

pub trait HasBondStereo {
    fn bond_stereo(&self) -> BondStereo;
    fn stereo_atoms(&self) -> Option<[NodeIndex; 2]>;
}

pub trait HasBondStereoMut {
    fn set_bond_stereo(&mut self, stereo: BondStereo);
    fn set_stereo_atoms(&mut self, atoms: Option<[NodeIndex; 2]>);
}
