//! Kronecker product of vectors and matrices.
//!
//! Vectors are treated as `n x 1` columns, so one routine covers both cases:
//! output element `(i * r2 + p, j * c2 + q)` is `a[i, j] * b[p, q]`. For two
//! vectors this reduces to flat index `i * len(b) + j`, the ordering that
//! makes `|ab> = |a> ⊗ |b>`.

use crate::error::{LinalgError, Result};
use crate::math::sealed::INTERNAL;
use crate::math::ComplexArray;

/// `a ⊗ b`.
pub fn tensor<A: ComplexArray>(a: &A, b: &A) -> A {
    let (r1, c1) = a.dims();
    let (r2, c2) = b.dims();
    let (rows, cols) = (r1 * r2, c1 * c2);
    let (lhs, rhs) = (a.elements(), b.elements());

    let mut data = Vec::with_capacity(rows * cols);
    for i in 0..r1 {
        for p in 0..r2 {
            for j in 0..c1 {
                let a_ij = lhs[i * c1 + j];
                data.extend(rhs[p * c2..(p + 1) * c2].iter().map(|b_pq| a_ij * b_pq));
            }
        }
    }
    A::from_parts(INTERNAL, (rows, cols), data)
}

/// Left fold of `tensor`: `items[0] ⊗ items[1] ⊗ ...`.
pub fn tensor_all<'a, A, I>(items: I) -> Result<A>
where
    A: ComplexArray + Clone + 'a,
    I: IntoIterator<Item = &'a A>,
{
    let mut iter = items.into_iter();
    let first = iter.next().ok_or(LinalgError::EmptyShape)?.clone();
    Ok(iter.fold(first, |acc, next| tensor(&acc, next)))
}
