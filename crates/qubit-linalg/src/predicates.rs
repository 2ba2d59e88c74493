//! Tolerance-based equality and the Hermitian / unitary structure tests.

use num_traits::{One, Zero};

use crate::config::Tolerance;
use crate::math::scalar::is_close;
use crate::math::{Complex64, ComplexArray, Matrix};
use crate::ops::adjoint;

/// True when `a` and `b` have the same shape and every pair of elements
/// differs by at most `tol.atol`.
pub fn allclose<A: ComplexArray>(a: &A, b: &A, tol: Tolerance) -> bool {
    a.dims() == b.dims()
        && a
            .elements()
            .iter()
            .zip(b.elements())
            .all(|(x, y)| is_close(*x, *y, tol))
}

pub fn is_hermitian(m: &Matrix) -> bool {
    is_hermitian_with(m, Tolerance::default())
}

/// `m` is square and `m† ≈ m`. Non-square input is simply not Hermitian.
pub fn is_hermitian_with(m: &Matrix, tol: Tolerance) -> bool {
    m.is_square() && allclose(&adjoint(m), m, tol)
}

pub fn is_unitary(m: &Matrix) -> bool {
    is_unitary_with(m, Tolerance::default())
}

/// `m` is square and `m m† ≈ I`. Non-square input is simply not unitary.
pub fn is_unitary_with(m: &Matrix, tol: Tolerance) -> bool {
    if !m.is_square() {
        return false;
    }
    let n = m.nrows();
    // (m m†)[i, j] is row i dotted with the conjugate of row j
    (0..n).all(|i| {
        (0..n).all(|j| {
            let entry = m
                .row(i)
                .iter()
                .zip(m.row(j))
                .fold(Complex64::zero(), |acc, (a, b)| acc + a * b.conj());
            let expected = if i == j {
                Complex64::one()
            } else {
                Complex64::zero()
            };
            is_close(entry, expected, tol)
        })
    })
}
