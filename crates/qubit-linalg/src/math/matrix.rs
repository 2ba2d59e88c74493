use std::fmt;
use std::ops::Index;

use num_traits::{One, Zero};
use rand::Rng;

use crate::error::{LinalgError, Result};
use crate::math::scalar::{c64, is_finite, real, Complex64};
use crate::math::vector::Vector;
use crate::math::sealed::Internal;
use crate::math::ComplexArray;

/// Row-major `rows x cols` matrix of complex scalars, both dimensions at least one.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<Complex64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<Complex64>) -> Result<Self> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(LinalgError::EmptyShape);
        }
        if data.len() != rows * cols {
            return Err(LinalgError::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        if let Some(index) = data.iter().position(|z| !is_finite(*z)) {
            return Err(LinalgError::NonFinite { index });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn new(rows: usize, cols: usize, data: Vec<Complex64>) -> Result<Self> {
        Self::from_shape_vec((rows, cols), data)
    }

    /// Build from a rectangular collection of rows; ragged input is rejected here.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[Complex64]>,
    {
        let first = rows.first().ok_or(LinalgError::EmptyShape)?;
        let cols = first.as_ref().len();
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(LinalgError::RaggedRows {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            data.extend_from_slice(values);
        }
        Self::from_shape_vec((rows.len(), cols), data)
    }

    pub fn from_real_rows<R>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[f64]>,
    {
        let complex_rows: Vec<Vec<Complex64>> = rows
            .iter()
            .map(|r| r.as_ref().iter().map(|&v| real(v)).collect())
            .collect();
        Self::from_rows(&complex_rows)
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::from_shape_vec((rows, cols), vec![Complex64::zero(); rows * cols])
    }

    pub fn identity(n: usize) -> Result<Self> {
        let mut data = vec![Complex64::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = Complex64::one();
        }
        Self::from_shape_vec((n, n), data)
    }

    /// Random matrix with real and imaginary parts drawn from `[-1, 1)`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        let data = (0..rows * cols)
            .map(|_| c64(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect();
        Self::from_shape_vec((rows, cols), data)
    }

    /// Random Hermitian matrix `(A + A†) / 2` for a random square `A`.
    pub fn random_hermitian<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Self> {
        let a = Self::random(n, n, rng)?;
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push((a[(i, j)] + a[(j, i)].conj()) * 0.5);
            }
        }
        Self::from_shape_vec((n, n), data)
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row(&self, row: usize) -> &[Complex64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn column(&self, col: usize) -> Vector {
        assert!(col < self.cols, "column index out of bounds");
        let values = (0..self.rows).map(|row| self[(row, col)]).collect();
        Vector::from_parts((self.rows, 1), values)
    }

    pub fn diagonal(&self) -> Vector {
        let n = self.rows.min(self.cols);
        Vector::from_parts((n, 1), (0..n).map(|i| self[(i, i)]).collect())
    }

    pub fn mapv<F>(&self, f: F) -> Matrix
    where
        F: FnMut(&Complex64) -> Complex64,
    {
        self.map_elements(f)
    }

    pub fn to_vec(&self) -> Vec<Complex64> {
        self.data.clone()
    }

    /// Unchecked constructor for buffers computed from validated operands.
    pub(crate) fn from_parts(dims: (usize, usize), data: Vec<Complex64>) -> Self {
        debug_assert_eq!(dims.0 * dims.1, data.len());
        debug_assert!(dims.0 > 0 && dims.1 > 0);
        Matrix {
            data,
            rows: dims.0,
            cols: dims.1,
        }
    }
}

impl ComplexArray for Matrix {
    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn elements(&self) -> &[Complex64] {
        &self.data
    }

    fn from_parts(_: Internal, dims: (usize, usize), data: Vec<Complex64>) -> Self {
        Matrix::from_parts(dims, data)
    }
}

/// A vector of length `n` becomes an `n x 1` column matrix.
impl From<Vector> for Matrix {
    fn from(value: Vector) -> Self {
        let rows = value.len();
        Matrix {
            data: value.into(),
            rows,
            cols: 1,
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Complex64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for r in 0..self.rows {
            write!(f, "[")?;
            for (idx, value) in self.row(r).iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if r + 1 != self.rows {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
