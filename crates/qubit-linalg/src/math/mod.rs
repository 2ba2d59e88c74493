//! Dense complex containers used throughout the crate.
//!
//! Provides `Vector` (a column of complex scalars) and `Matrix` (row-major,
//! rectangular). Both capture their shape at construction, reject ragged or
//! non-finite input there, and never hand out mutable views of their storage.
pub mod matrix;
pub mod scalar;
pub mod vector;

pub use matrix::Matrix;
pub use scalar::{c64, imag, real, Complex64};
pub use vector::Vector;

pub(crate) mod sealed {
    /// Witness that a shape and buffer were derived from validated operands.
    ///
    /// It can only be created inside the crate, which keeps
    /// `ComplexArray::from_parts` out of reach of outside callers.
    #[derive(Clone, Copy, Debug)]
    pub struct Internal(());

    pub(crate) const INTERNAL: Internal = Internal(());
}

/// Shape-aware read access shared by `Vector` and `Matrix`.
///
/// A vector reports itself as an `n x 1` column, which is what lets the
/// elementwise operations, `allclose` and `tensor` be written once.
///
/// Values can only be created through the validating constructors on
/// `Vector` and `Matrix`:
///
/// ```compile_fail
/// use qubit_linalg::Vector;
///
/// let empty = Vector::from_parts((0, 1), Vec::new());
/// ```
pub trait ComplexArray: Sized {
    /// `(rows, cols)`; `(len, 1)` for vectors.
    fn dims(&self) -> (usize, usize);

    /// Elements in row-major order.
    fn elements(&self) -> &[Complex64];

    /// Rebuild a value of the same kind from a shape and row-major buffer.
    #[doc(hidden)]
    fn from_parts(token: sealed::Internal, dims: (usize, usize), data: Vec<Complex64>) -> Self;

    fn map_elements<F>(&self, f: F) -> Self
    where
        F: FnMut(&Complex64) -> Complex64,
    {
        Self::from_parts(
            sealed::INTERNAL,
            self.dims(),
            self.elements().iter().map(f).collect(),
        )
    }
}
