use std::fmt;

use crate::configuration::MAX_STEREO_ELEMENTS;

/// Errors raised before enumeration produces its first result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumerationError {
    /// More eligible stereo elements than a configuration index can address.
    TooManyStereoElements { found: usize, max: usize },
    /// `try_embedding` is set but no embedder was supplied.
    EmbedderRequired,
}

impl EnumerationError {
    pub(crate) fn too_many(found: usize) -> Self {
        Self::TooManyStereoElements {
            found,
            max: MAX_STEREO_ELEMENTS,
        }
    }
}

impl fmt::Display for EnumerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyStereoElements { found, max } => write!(
                f,
                "{} stereo elements found, at most {} can be enumerated",
                found, max
            ),
            Self::EmbedderRequired => {
                write!(f, "embedding was requested but no embedder was supplied")
            }
        }
    }
}

impl std::error::Error for EnumerationError {}

/// Errors from building [`EnumerationOptions`](crate::EnumerationOptions)
/// out of a configuration document.
#[derive(Debug)]
pub enum OptionsError {
    /// The document is not valid JSON or does not match the options schema
    /// (unknown key, negative cap, wrong type).
    Parse(serde_json::Error),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "invalid enumeration options: {}", e),
        }
    }
}

impl std::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for OptionsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
