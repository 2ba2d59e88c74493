//! Elementwise and linear-algebra operations on `Vector` and `Matrix`.
//!
//! Every function takes its operands by reference and returns a freshly
//! allocated value. Shape compatibility is checked before any arithmetic.

use num_traits::Zero;

use crate::config::Tolerance;
use crate::error::{LinalgError, Result};
use crate::math::sealed::INTERNAL;
use crate::math::{Complex64, ComplexArray, Matrix, Vector};

fn ensure_same_shape<A: ComplexArray>(op: &'static str, a: &A, b: &A) -> Result<()> {
    if a.dims() != b.dims() {
        return Err(LinalgError::ShapeMismatch {
            op,
            left: a.dims(),
            right: b.dims(),
        });
    }
    Ok(())
}

fn zip_with<A, F>(op: &'static str, a: &A, b: &A, f: F) -> Result<A>
where
    A: ComplexArray,
    F: Fn(Complex64, Complex64) -> Complex64,
{
    ensure_same_shape(op, a, b)?;
    let data = a
        .elements()
        .iter()
        .zip(b.elements())
        .map(|(x, y)| f(*x, *y))
        .collect();
    Ok(A::from_parts(INTERNAL, a.dims(), data))
}

/// Elementwise sum.
pub fn add<A: ComplexArray>(a: &A, b: &A) -> Result<A> {
    zip_with("add", a, b, |x, y| x + y)
}

/// Elementwise difference `a - b`.
pub fn subtract<A: ComplexArray>(a: &A, b: &A) -> Result<A> {
    zip_with("subtract", a, b, |x, y| x - y)
}

/// Additive inverse.
pub fn negate<A: ComplexArray>(a: &A) -> A {
    a.map_elements(|x| -x)
}

/// Multiply every element by `k`.
pub fn scale<A: ComplexArray>(k: Complex64, a: &A) -> A {
    a.map_elements(|x| k * x)
}

/// Elementwise complex conjugate.
pub fn conjugate<A: ComplexArray>(a: &A) -> A {
    a.map_elements(|x| x.conj())
}

/// Swap row and column indices without conjugating.
pub fn transpose(m: &Matrix) -> Matrix {
    let (rows, cols) = m.shape();
    let mut data = Vec::with_capacity(rows * cols);
    for c in 0..cols {
        for r in 0..rows {
            data.push(m[(r, c)]);
        }
    }
    Matrix::from_parts((cols, rows), data)
}

/// Conjugate transpose (the dagger operator).
pub fn adjoint(m: &Matrix) -> Matrix {
    let (rows, cols) = m.shape();
    let mut data = Vec::with_capacity(rows * cols);
    for c in 0..cols {
        for r in 0..rows {
            data.push(m[(r, c)].conj());
        }
    }
    Matrix::from_parts((cols, rows), data)
}

/// Matrix product of an `R x K` and a `K x C` matrix.
pub fn matmul(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.ncols() != b.nrows() {
        return Err(LinalgError::ShapeMismatch {
            op: "matmul",
            left: a.shape(),
            right: b.shape(),
        });
    }
    let (rows, cols) = (a.nrows(), b.ncols());
    let mut data = vec![Complex64::zero(); rows * cols];
    for r in 0..rows {
        let a_row = a.row(r);
        for (k, a_rk) in a_row.iter().enumerate() {
            let b_row = b.row(k);
            let out = &mut data[r * cols..(r + 1) * cols];
            for (o, b_kc) in out.iter_mut().zip(b_row) {
                *o += a_rk * b_kc;
            }
        }
    }
    Ok(Matrix::from_parts((rows, cols), data))
}

/// Apply `m` to the column vector `v`.
pub fn act(m: &Matrix, v: &Vector) -> Result<Vector> {
    if m.ncols() != v.len() {
        return Err(LinalgError::ShapeMismatch {
            op: "act",
            left: m.shape(),
            right: v.dims(),
        });
    }
    let data = (0..m.nrows())
        .map(|r| {
            m.row(r)
                .iter()
                .zip(v.iter())
                .fold(Complex64::zero(), |acc, (a, b)| acc + a * b)
        })
        .collect();
    Ok(Vector::from_parts((m.nrows(), 1), data))
}

/// `<u|v>`: conjugate-linear in `u`, linear in `v`.
pub fn inner(u: &Vector, v: &Vector) -> Result<Complex64> {
    ensure_same_shape("inner", u, v)?;
    Ok(u
        .iter()
        .zip(v.iter())
        .fold(Complex64::zero(), |acc, (a, b)| acc + a.conj() * b))
}

/// Euclidean norm with the default tolerance.
pub fn norm(v: &Vector) -> Result<f64> {
    norm_with(v, Tolerance::default())
}

/// `sqrt(Re <v|v>)`.
///
/// The imaginary part of `<v|v>` must vanish within `tol`; a NaN or a
/// non-negligible value (overflowed components, for instance) is reported as
/// `NumericInconsistency` rather than dropped.
pub fn norm_with(v: &Vector, tol: Tolerance) -> Result<f64> {
    let self_inner = inner(v, v)?;
    let imaginary_vanishes = self_inner.im.abs() <= tol.atol;
    if !imaginary_vanishes || !self_inner.re.is_finite() {
        return Err(LinalgError::NumericInconsistency(format!(
            "self inner product {} is not a finite real number",
            self_inner
        )));
    }
    Ok(self_inner.re.max(0.0).sqrt())
}

/// Induced metric `norm(u - v)`.
pub fn distance(u: &Vector, v: &Vector) -> Result<f64> {
    norm(&subtract(u, v)?)
}

/// Rescale `v` to unit norm.
pub fn normalize(v: &Vector) -> Result<Vector> {
    let n = norm(v)?;
    if n == 0.0 {
        return Err(LinalgError::NumericInconsistency(
            "cannot normalize the zero vector".to_string(),
        ));
    }
    Ok(scale(Complex64::new(1.0 / n, 0.0), v))
}

/// Sum of the diagonal of a square matrix.
pub fn trace(m: &Matrix) -> Result<Complex64> {
    if !m.is_square() {
        return Err(LinalgError::NonSquareMatrix {
            rows: m.nrows(),
            cols: m.ncols(),
        });
    }
    Ok(m.diagonal().iter().sum())
}

/// `|u><v|`, a `len(u) x len(v)` matrix.
pub fn outer(u: &Vector, v: &Vector) -> Matrix {
    let mut data = Vec::with_capacity(u.len() * v.len());
    for a in u.iter() {
        for b in v.iter() {
            data.push(a * b.conj());
        }
    }
    Matrix::from_parts((u.len(), v.len()), data)
}
