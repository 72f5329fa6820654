pub mod atom;
pub mod bond;
pub mod configuration;
pub mod conformer;
pub mod detect;
pub mod embed;
pub mod enumerate;
pub mod error;
pub mod graph_ops;
pub mod mol;
pub mod options;
pub mod perception;
pub mod stereo_element;
pub mod symmetry;
pub mod traits;

pub use atom::{Atom, ChiralTag};
pub use bond::{Bond, BondOrder, BondStereo};
pub use configuration::{ConfigurationSource, MAX_STEREO_ELEMENTS};
pub use conformer::Conformer;
pub use detect::find_stereo_elements;
pub use embed::{Embedder, NoEmbedder};
pub use enumerate::{
    enumerate_stereoisomers, enumerate_stereoisomers_with_embedder, Stereoisomer,
    StereoisomerEnumerator,
};
pub use error::{EnumerationError, OptionsError};
pub use graph_ops::{renumber_atoms, RenumberError};
pub use mol::Mol;
pub use options::{EnumerationOptions, RandomSource, DEFAULT_MAX_ISOMERS};
pub use perception::{StereoPerception, SymmetryPerception};
pub use stereo_element::{apply_configuration, StereoElement};
pub use traits::{
    HasAtomicNum, HasBondOrder, HasBondStereo, HasBondStereoMut, HasChiralTag, HasChiralTagMut,
    HasFormalCharge, HasHydrogenCount, HasIsotope,
};
