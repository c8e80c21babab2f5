//! Error types for tour construction and manipulation.

use thiserror::Error;

/// Result type alias for fallible tour operations.
pub type Result<T> = std::result::Result<T, TourError>;

/// Caller-input errors reported by the tour primitives.
///
/// None of these are recoverable internally; the caller must supply
/// corrected input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TourError {
    /// An index outside `0..size` was supplied.
    #[error("index {index} out of range for {size} points")]
    InvalidIndex {
        /// The offending index.
        index: usize,
        /// Number of points in the instance.
        size: usize,
    },

    /// A sequence is not a permutation of `0..N`.
    #[error("invalid permutation: {reason}")]
    InvalidPermutation {
        /// What is wrong with the sequence.
        reason: String,
    },

    /// An operation needs more elements than it was given.
    #[error("operation requires at least {required} elements, got {len}")]
    DegenerateInput {
        /// Number of elements supplied.
        len: usize,
        /// Minimum number of elements required.
        required: usize,
    },

    /// A coordinate line could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Description of the problem.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_index() {
        let e = TourError::InvalidIndex { index: 7, size: 3 };
        assert_eq!(e.to_string(), "index 7 out of range for 3 points");
    }

    #[test]
    fn test_display_degenerate() {
        let e = TourError::DegenerateInput {
            len: 1,
            required: 2,
        };
        assert_eq!(
            e.to_string(),
            "operation requires at least 2 elements, got 1"
        );
    }
}
