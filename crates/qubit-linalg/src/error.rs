use std::error::Error;
use std::fmt;

/// Errors raised by construction and by every operation in the crate.
///
/// Shape and structure problems are always reported before any arithmetic
/// runs, so a caller never receives a partially computed value.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Operand dimensions are incompatible for `op`.
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A square-only operation received a non-square matrix.
    NonSquareMatrix { rows: usize, cols: usize },
    /// A computed quantity violates a property it must satisfy.
    NumericInconsistency(String),
    /// An iterative routine exhausted its iteration bound.
    DidNotConverge {
        method: &'static str,
        max_iterations: usize,
    },
    /// A container was requested with a zero dimension.
    EmptyShape,
    /// Buffer length does not match `rows * cols`.
    InvalidShape { rows: usize, cols: usize, len: usize },
    /// Row `row` has `found` entries where `expected` were required.
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Element at flat index `index` is NaN or infinite.
    NonFinite { index: usize },
    /// A basis label contained something other than `0` and `1`.
    InvalidBasis(String),
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinalgError::ShapeMismatch { op, left, right } => write!(
                f,
                "{}: incompatible shapes {}x{} and {}x{}",
                op, left.0, left.1, right.0, right.1
            ),
            LinalgError::NonSquareMatrix { rows, cols } => {
                write!(f, "expected a square matrix, got {}x{}", rows, cols)
            }
            LinalgError::NumericInconsistency(msg) => write!(f, "numeric inconsistency: {}", msg),
            LinalgError::DidNotConverge {
                method,
                max_iterations,
            } => write!(
                f,
                "{} did not converge within {} iterations",
                method, max_iterations
            ),
            LinalgError::EmptyShape => write!(f, "dimensions must be at least 1"),
            LinalgError::InvalidShape { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            LinalgError::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} entries, expected {}",
                row, found, expected
            ),
            LinalgError::NonFinite { index } => {
                write!(f, "element {} is not a finite complex number", index)
            }
            LinalgError::InvalidBasis(label) => write!(f, "invalid basis label '{}'", label),
        }
    }
}

impl Error for LinalgError {}

pub type Result<T> = std::result::Result<T, LinalgError>;
