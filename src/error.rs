//! Error types for the puzzle engine.

use thiserror::Error;

/// Failures reported by the puzzle engine.
///
/// Only malformed input to the engine produces one of these. Illegal or unrecognized moves are not
/// errors; they leave the board untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PuzzleError {
    /// A grid index handed to the coordinate mapper was outside `0..=4`.
    #[error("index should be between 0 and 4, got {0}")]
    OutOfRange(i32),
    /// A flat index handed to the board was outside `0..=15`.
    #[error("flat index should be between 0 and 15, got {0}")]
    FlatIndexOutOfRange(u8),
    /// A caller-supplied arrangement is not a permutation of `0..=15`.
    #[error("invalid arrangement: {0}")]
    InvalidArrangement(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PuzzleError::OutOfRange(-1).to_string(),
            "index should be between 0 and 4, got -1"
        );
        assert_eq!(
            PuzzleError::FlatIndexOutOfRange(16).to_string(),
            "flat index should be between 0 and 15, got 16"
        );
        assert_eq!(
            PuzzleError::InvalidArrangement("duplicate tile 3".to_owned()).to_string(),
            "invalid arrangement: duplicate tile 3"
        );
    }
}
