//! Error types for vecr

use thiserror::Error;

/// Result type alias using vecr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vecr operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Destination and source byte ranges partially alias
    ///
    /// Identical ranges (in-place operation) are allowed; partial
    /// intersection is rejected before any element is written.
    #[error("buffers overlap: dst {dst:#x} and src {src:#x} alias over {bytes}-byte ranges")]
    Overlap {
        /// Start address of the destination range
        dst: usize,
        /// Start address of the offending source range
        src: usize,
        /// Length of both ranges in bytes
        bytes: usize,
    },

    /// Slice lengths disagree between destination and a source operand
    #[error("length mismatch: dst has {expected} records, src has {got}")]
    LengthMismatch {
        /// Destination length in records
        expected: usize,
        /// Source length in records
        got: usize,
    },

    /// Operation has no constant-broadcast form
    #[error("operation '{op}' is not supported with a constant operand")]
    UnsupportedConstOp {
        /// The operation name
        op: &'static str,
    },
}

impl Error {
    /// Create a length mismatch error
    pub fn length_mismatch(expected: usize, got: usize) -> Self {
        Self::LengthMismatch { expected, got }
    }
}
