//! Error types for vecly operations.
//!
//! Operators (`/`, indexing) cannot return a `Result`, so they panic with the
//! `Display` text of these errors. Every such operation also has a checked
//! spelling (`get`, `checked_div`, `try_unit`, `angle`) that returns them.

use std::fmt;

/// Errors that can occur during vector operations.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorError {
    /// A component index was outside `[0, size)`.
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of components of the vector or expression.
        size: usize,
    },
    /// A scalar divisor had a magnitude at or below machine epsilon.
    DivisionByZero {
        /// Magnitude of the rejected divisor.
        magnitude: f64,
    },
    /// A direction was requested from a vector with zero norm.
    ZeroNorm {
        /// The operation that needed a direction.
        operation: &'static str,
    },
    /// An external buffer did not have the number of components expected.
    DimensionMismatch {
        /// Components required by the destination.
        expected: usize,
        /// Components found in the source.
        found: usize,
    },
    /// Batch inputs did not have the same number of vectors.
    LengthMismatch {
        /// Length of the left input.
        left: usize,
        /// Length of the right input.
        right: usize,
    },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::IndexOutOfRange { index, size } => write!(
                f,
                "Index out of range: index {} is not below size {}",
                index, size
            ),
            VectorError::DivisionByZero { magnitude } => write!(
                f,
                "Division by zero: divisor magnitude {:e} is not above machine epsilon",
                magnitude
            ),
            VectorError::ZeroNorm { operation } => {
                write!(f, "Zero norm: `{}` is undefined for a zero vector", operation)
            }
            VectorError::DimensionMismatch { expected, found } => write!(
                f,
                "Dimension mismatch: expected {} components, found {}",
                expected, found
            ),
            VectorError::LengthMismatch { left, right } => write!(
                f,
                "Length mismatch: batch inputs hold {} and {} vectors",
                left, right
            ),
        }
    }
}

impl std::error::Error for VectorError {}

/// Result type alias for vecly operations.
pub type Result<T> = std::result::Result<T, VectorError>;

/// Creates an out-of-range index error.
pub fn index_error(index: usize, size: usize) -> VectorError {
    VectorError::IndexOutOfRange { index, size }
}

/// Creates a division-by-zero error.
pub fn division_error(magnitude: f64) -> VectorError {
    VectorError::DivisionByZero { magnitude }
}

/// Creates a zero-norm error for the named operation.
pub fn zero_norm_error(operation: &'static str) -> VectorError {
    VectorError::ZeroNorm { operation }
}

/// Creates a dimension mismatch error.
pub fn dimension_error(expected: usize, found: usize) -> VectorError {
    VectorError::DimensionMismatch { expected, found }
}

/// Creates a batch length mismatch error.
pub fn length_error(left: usize, right: usize) -> VectorError {
    VectorError::LengthMismatch { left, right }
}
