//! Error types shared across the cutplan crates.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors raised by input validation and internal invariant checks.
///
/// The packing entry point never propagates these to the caller as `Err`;
/// they are rendered into the `errors`/`warnings` lists of the returned
/// layout so the engine degrades instead of aborting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Error {
    /// Stock board dimensions are unusable.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// A settings value is out of range.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// A piece specification is malformed.
    #[error("invalid piece: {0}")]
    InvalidPiece(String),

    /// An internal invariant was violated during packing.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidBoard("width must be positive".into());
        assert_eq!(err.to_string(), "invalid board: width must be positive");

        let err = Error::Internal("split containment failed".into());
        assert_eq!(err.to_string(), "internal error: split containment failed");
    }
}
