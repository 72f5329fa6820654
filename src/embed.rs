use crate::conformer::Conformer;
use crate::mol::Mol;

/// 3-D embedding oracle.
///
/// Returns a conformer when the candidate's stereo configuration can be
/// realised in space and `None` otherwise. Failure means "not physically
/// realisable", never an error of the run. `seed` is the candidate's
/// configuration index, so repeated runs make the same attempts.
///
/// Positions are indexed by atom. Extra trailing positions (for example
/// explicit hydrogens the embedder added) are dropped when the conformer is
/// attached.
pub trait Embedder<A, B> {
    fn embed(&self, mol: &Mol<A, B>, seed: u64) -> Option<Conformer>;
}

impl<A, B, F> Embedder<A, B> for F
where
    F: Fn(&Mol<A, B>, u64) -> Option<Conformer>,
{
    fn embed(&self, mol: &Mol<A, B>, seed: u64) -> Option<Conformer> {
        self(mol, seed)
    }
}

/// Placeholder embedder for enumerations that never embed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEmbedder;

impl<A, B> Embedder<A, B> for NoEmbedder {
    fn embed(&self, _mol: &Mol<A, B>, _seed: u64) -> Option<Conformer> {
        None
    }
}
