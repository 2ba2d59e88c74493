//! Conversions between the crate containers and `ndarray` / `nalgebra`.
//!
//! Conversions into the crate go through the normal constructors, so empty
//! or non-finite input is rejected the same way as anywhere else.

use nalgebra::{DMatrix, DVector};

use crate::error::{LinalgError, Result};
use crate::math::{Complex64, ComplexArray, Matrix, Vector};

impl From<&Matrix> for ndarray::Array2<Complex64> {
    fn from(value: &Matrix) -> Self {
        ndarray::Array2::from_shape_fn(value.shape(), |(r, c)| value[(r, c)])
    }
}

impl TryFrom<&ndarray::Array2<Complex64>> for Matrix {
    type Error = LinalgError;

    fn try_from(value: &ndarray::Array2<Complex64>) -> Result<Self> {
        let (rows, cols) = value.dim();
        Matrix::from_shape_vec((rows, cols), value.iter().copied().collect())
    }
}

impl From<&Vector> for ndarray::Array1<Complex64> {
    fn from(value: &Vector) -> Self {
        ndarray::Array1::from_vec(value.to_vec())
    }
}

impl TryFrom<&ndarray::Array1<Complex64>> for Vector {
    type Error = LinalgError;

    fn try_from(value: &ndarray::Array1<Complex64>) -> Result<Self> {
        Vector::new(value.iter().copied().collect())
    }
}

impl From<&Matrix> for DMatrix<Complex64> {
    fn from(value: &Matrix) -> Self {
        DMatrix::from_row_slice(value.nrows(), value.ncols(), value.as_slice())
    }
}

impl TryFrom<&DMatrix<Complex64>> for Matrix {
    type Error = LinalgError;

    fn try_from(value: &DMatrix<Complex64>) -> Result<Self> {
        let (rows, cols) = value.shape();
        // nalgebra stores column-major
        let data = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .map(|(r, c)| value[(r, c)])
            .collect();
        Matrix::from_shape_vec((rows, cols), data)
    }
}

impl From<&Vector> for DVector<Complex64> {
    fn from(value: &Vector) -> Self {
        DVector::from_column_slice(value.elements())
    }
}

impl TryFrom<&DVector<Complex64>> for Vector {
    type Error = LinalgError;

    fn try_from(value: &DVector<Complex64>) -> Result<Self> {
        Vector::new(value.iter().copied().collect())
    }
}
