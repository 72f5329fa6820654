use petgraph::graph::NodeIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
    Aromatic,
}

/// Cis/trans state of a double bond.
///
/// `Cis` and `Trans` are read relative to the bond's reference atoms, one
/// substituent on each end. `Any` marks a bond that can carry a
/// configuration but has none assigned yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondStereo {
    #[default]
    None,
    Any,
    Cis,
    Trans,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bond {
    pub order: BondOrder,
    pub stereo: BondStereo,
    /// Reference substituents for `stereo`: one neighbour of each end atom,
    /// in the same order as the bond's endpoints.
    pub stereo_atoms: Option<[NodeIndex; 2]>,
}

impl Bond {
    pub fn single() -> Self {
        Self::default()
    }

    pub fn double() -> Self {
        Self {
            order: BondOrder::Double,
            ..Self::default()
        }
    }
}

impl crate::traits::HasBondOrder for Bond {
    fn bond_order(&self) -> BondOrder {
        self.order
    }
}

impl crate::traits::HasBondStereo for Bond {
    fn bond_stereo(&self) -> BondStereo {
        self.stereo
    }

    fn stereo_atoms(&self) -> Option<[NodeIndex; 2]> {
        self.stereo_atoms
    }
}

impl crate::traits::HasBondStereoMut for Bond {
    fn set_bond_stereo(&mut self, stereo: BondStereo) {
        self.stereo = stereo;
    }

    fn set_stereo_atoms(&mut self, atoms: Option<[NodeIndex; 2]>) {
        self.stereo_atoms = atoms;
    }
}
