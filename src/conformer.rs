/// One set of 3-D coordinates for the atoms of a [`Mol`](crate::Mol),
/// indexed by atom index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conformer {
    positions: Vec<[f64; 3]>,
}

impl Conformer {
    pub fn new(positions: Vec<[f64; 3]>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[[f64; 3]] {
        &self.positions
    }

    pub fn position(&self, atom: usize) -> Option<[f64; 3]> {
        self.positions.get(atom).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Drops positions past `len`, e.g. explicit hydrogens an embedder
    /// appended after the heavy atoms.
    pub fn truncate(&mut self, len: usize) {
        self.positions.truncate(len);
    }

    /// Positions reordered so that `new_order[new_idx] = old_idx`, or `None`
    /// when the conformer does not hold exactly one position per entry.
    pub(crate) fn permuted(&self, new_order: &[usize]) -> Option<Self> {
        if self.positions.len() != new_order.len() {
            return None;
        }
        let positions = new_order
            .iter()
            .map(|&old| self.positions.get(old).copied())
            .collect::<Option<Vec<_>>>()?;
        Some(Self { positions })
    }
}
