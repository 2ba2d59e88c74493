use std::fmt;
use std::ops::Index;
use std::slice::Iter;

use num_traits::{One, Zero};
use rand::Rng;

use crate::error::{LinalgError, Result};
use crate::math::scalar::{c64, is_finite, real, Complex64};
use crate::math::sealed::Internal;
use crate::math::{ComplexArray, Matrix};

/// Column vector of complex scalars with a fixed length of at least one.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    data: Vec<Complex64>,
}

#[allow(clippy::len_without_is_empty)]
impl Vector {
    pub fn new(data: Vec<Complex64>) -> Result<Self> {
        if data.is_empty() {
            return Err(LinalgError::EmptyShape);
        }
        if let Some(index) = data.iter().position(|z| !is_finite(*z)) {
            return Err(LinalgError::NonFinite { index });
        }
        Ok(Self { data })
    }

    /// Build from `(re, im)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        Self::new(pairs.iter().map(|&(re, im)| c64(re, im)).collect())
    }

    pub fn from_real(values: &[f64]) -> Result<Self> {
        Self::new(values.iter().map(|&v| real(v)).collect())
    }

    pub fn try_from_iter<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = Complex64>,
    {
        Self::new(iter.into_iter().collect())
    }

    pub fn zeros(len: usize) -> Result<Self> {
        Self::new(vec![Complex64::zero(); len])
    }

    /// Standard basis vector `e_index` of length `len`.
    pub fn basis(len: usize, index: usize) -> Result<Self> {
        if index >= len {
            return Err(LinalgError::ShapeMismatch {
                op: "basis",
                left: (len, 1),
                right: (index + 1, 1),
            });
        }
        let mut data = vec![Complex64::zero(); len];
        data[index] = Complex64::one();
        Self::new(data)
    }

    /// Random vector with real and imaginary parts drawn from `[-1, 1)`.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<Self> {
        Self::new(
            (0..len)
                .map(|_| c64(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn iter(&self) -> Iter<'_, Complex64> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    pub fn shape(&self) -> (usize,) {
        (self.len(),)
    }

    pub fn mapv<F>(&self, f: F) -> Vector
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
        debug_assert_eq!(dims, (data.len(), 1));
        debug_assert!(!data.is_empty());
        Vector { data }
    }
}

impl ComplexArray for Vector {
    fn dims(&self) -> (usize, usize) {
        (self.data.len(), 1)
    }

    fn elements(&self) -> &[Complex64] {
        &self.data
    }

    fn from_parts(_: Internal, dims: (usize, usize), data: Vec<Complex64>) -> Self {
        Vector::from_parts(dims, data)
    }
}

impl From<Vector> for Vec<Complex64> {
    fn from(value: Vector) -> Self {
        value.data
    }
}

/// A single-column matrix is the same thing as a vector.
impl TryFrom<Matrix> for Vector {
    type Error = LinalgError;

    fn try_from(value: Matrix) -> Result<Self> {
        if value.ncols() != 1 {
            return Err(LinalgError::ShapeMismatch {
                op: "matrix to vector",
                left: value.shape(),
                right: (value.nrows(), 1),
            });
        }
        Ok(Vector {
            data: value.to_vec(),
        })
    }
}

impl Index<usize> for Vector {
    type Output = Complex64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Complex64;
    type IntoIter = Iter<'a, Complex64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
