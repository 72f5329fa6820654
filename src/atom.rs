/// Tetrahedral configuration of an atom.
///
/// The tag is read relative to the order of the atom's neighbours in the
/// graph, with any implicit hydrogen taking the first position. Enumeration
/// only ever writes [`Clockwise`](ChiralTag::Clockwise) or
/// [`CounterClockwise`](ChiralTag::CounterClockwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChiralTag {
    /// No configuration assigned.
    #[default]
    Unspecified,
    /// Clockwise (@@) arrangement.
    Clockwise,
    /// Counterclockwise (@) arrangement.
    CounterClockwise,
}

impl ChiralTag {
    pub fn is_specified(self) -> bool {
        self != Self::Unspecified
    }
}

/// Default atom type for a molecular graph node.
///
/// `Atom` stores intrinsic atomic properties plus the two pieces of stereo
/// state the enumerator cares about: the current tetrahedral configuration
/// and whether perception judged the atom able to carry one.
///
/// # Examples
///
/// ```
/// use stereocrab::{Atom, ChiralTag};
///
/// let carbon = Atom {
///     atomic_num: 6,
///     hydrogen_count: 1,
///     ..Atom::default()
/// };
/// assert_eq!(carbon.chiral_tag, ChiralTag::Unspecified);
/// assert!(!carbon.chirality_possible);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Atom {
    /// Atomic number (1 = H, 6 = C, 7 = N, …). Identifies the element.
    pub atomic_num: u8,
    /// Formal charge in elementary charge units.
    pub formal_charge: i8,
    /// Mass number. `0` means natural isotopic abundance.
    pub isotope: u16,
    /// Number of implicit hydrogens on this atom.
    ///
    /// These are not graph nodes. They count as substituents when deciding
    /// whether the atom can be a stereocenter.
    pub hydrogen_count: u8,
    /// Current tetrahedral configuration.
    pub chiral_tag: ChiralTag,
    /// Set by stereo perception when the atom is a potential stereocenter.
    pub chirality_possible: bool,
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> u8 {
        self.atomic_num
    }
}

impl crate::traits::HasFormalCharge for Atom {
    fn formal_charge(&self) -> i8 {
        self.formal_charge
    }
}

impl crate::traits::HasIsotope for Atom {
    fn isotope(&self) -> u16 {
        self.isotope
    }
}

impl crate::traits::HasHydrogenCount for Atom {
    fn hydrogen_count(&self) -> u8 {
        self.hydrogen_count
    }
}

impl crate::traits::HasChiralTag for Atom {
    fn chiral_tag(&self) -> ChiralTag {
        self.chiral_tag
    }

    fn chirality_possible(&self) -> bool {
        self.chirality_possible
    }
}

impl crate::traits::HasChiralTagMut for Atom {
    fn set_chiral_tag(&mut self, tag: ChiralTag) {
        self.chiral_tag = tag;
    }

    fn set_chirality_possible(&mut self, possible: bool) {
        self.chirality_possible = possible;
    }
}
