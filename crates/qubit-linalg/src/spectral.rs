//! Eigen-decomposition of square complex matrices.
//!
//! Hermitian input goes through `nalgebra`'s symmetric eigensolver, which
//! yields real eigenvalues, returned in ascending order. Everything else goes
//! through the complex Schur form `m = Q T Q†`: the eigenvalues are the
//! diagonal of the upper-triangular `T`, and each eigenvector is recovered by
//! back-substitution on `T - λI` and mapped back through `Q`. General-path
//! results are ordered by real part, then imaginary part.

use log::{debug, log_enabled, trace, warn, Level};
use nalgebra::linalg::{Schur, SymmetricEigen};
use nalgebra::{DMatrix, DVector};
use num_traits::{One, Zero};

use crate::config::{EigenConfig, EigenStrategy, Tolerance};
use crate::error::{LinalgError, Result};
use crate::math::{Complex64, Matrix, Vector};
use crate::ops::{act, normalize, scale, subtract};
use crate::predicates::is_hermitian_with;

/// Back-substitution rescales its work vector once an entry grows past this.
const RESCALE_THRESHOLD: f64 = 1e100;

/// One eigenvalue and a unit-norm eigenvector for it.
#[derive(Clone, Debug, PartialEq)]
pub struct EigenPair {
    pub value: Complex64,
    pub vector: Vector,
}

/// Eigenpairs of `m` using `EigenConfig::default()`.
pub fn eigen(m: &Matrix) -> Result<Vec<EigenPair>> {
    eigen_with(m, &EigenConfig::default())
}

/// Eigenpairs of `m`.
///
/// # Errors
///
/// * `NonSquareMatrix` when `m` is not square (checked before anything else).
/// * `NumericInconsistency` when `EigenStrategy::Hermitian` is forced on a
///   non-Hermitian matrix, or the Schur factor is not triangular.
/// * `DidNotConverge` when the underlying iteration exceeds
///   `config.max_iterations` (`0` lets `nalgebra` iterate without bound).
pub fn eigen_with(m: &Matrix, config: &EigenConfig) -> Result<Vec<EigenPair>> {
    if !m.is_square() {
        return Err(LinalgError::NonSquareMatrix {
            rows: m.nrows(),
            cols: m.ncols(),
        });
    }
    let n = m.nrows();
    let hermitian = is_hermitian_with(m, config.tolerance);
    let use_hermitian = match config.strategy {
        EigenStrategy::Auto => hermitian,
        EigenStrategy::General => false,
        EigenStrategy::Hermitian => {
            if !hermitian {
                warn!("Hermitian eigensolver requested for a non-Hermitian {}x{} matrix", n, n);
                return Err(LinalgError::NumericInconsistency(
                    "Hermitian eigensolver requires a Hermitian matrix".to_string(),
                ));
            }
            true
        }
    };

    debug!(
        "eigen: {}x{} matrix, {} path",
        n,
        n,
        if use_hermitian { "hermitian" } else { "general" }
    );

    let pairs = if n == 1 {
        let value = if use_hermitian {
            Complex64::new(m[(0, 0)].re, 0.0)
        } else {
            m[(0, 0)]
        };
        vec![EigenPair {
            value,
            vector: Vector::basis(1, 0)?,
        }]
    } else if use_hermitian {
        hermitian_eigen(m, config)?
    } else {
        general_eigen(m, config)?
    };

    if log_enabled!(Level::Trace) {
        for pair in &pairs {
            let lhs = act(m, &pair.vector)?;
            let rhs = scale(pair.value, &pair.vector);
            let residual = subtract(&lhs, &rhs)?.iter().map(|z| z.norm()).fold(0.0, f64::max);
            trace!("eigenvalue {} residual {:e}", pair.value, residual);
        }
    }

    Ok(pairs)
}

fn hermitian_eigen(m: &Matrix, config: &EigenConfig) -> Result<Vec<EigenPair>> {
    let a: DMatrix<Complex64> = m.into();
    let decomposition = SymmetricEigen::try_new(a, f64::EPSILON, config.max_iterations).ok_or(
        LinalgError::DidNotConverge {
            method: "hermitian eigendecomposition",
            max_iterations: config.max_iterations,
        },
    )?;

    let mut pairs = Vec::with_capacity(m.nrows());
    for (k, &value) in decomposition.eigenvalues.iter().enumerate() {
        let column: DVector<Complex64> = decomposition.eigenvectors.column(k).into_owned();
        let vector = Vector::try_from(&column)?;
        pairs.push(EigenPair {
            value: Complex64::new(value, 0.0),
            vector: canonical_phase(&normalize(&vector)?, config.tolerance),
        });
    }
    pairs.sort_by(|a, b| a.value.re.total_cmp(&b.value.re));
    Ok(pairs)
}

fn general_eigen(m: &Matrix, config: &EigenConfig) -> Result<Vec<EigenPair>> {
    let n = m.nrows();
    let a: DMatrix<Complex64> = m.into();
    let magnitude = a.iter().map(|z| z.norm()).fold(0.0, f64::max);

    let (q, t) = Schur::try_new(a, f64::EPSILON, config.max_iterations)
        .ok_or(LinalgError::DidNotConverge {
            method: "complex Schur decomposition",
            max_iterations: config.max_iterations,
        })?
        .unpack();

    let subdiagonal_limit = config.tolerance.atol * magnitude.max(1.0);
    for c in 0..n {
        for r in c + 1..n {
            if t[(r, c)].norm() > subdiagonal_limit {
                return Err(LinalgError::NumericInconsistency(format!(
                    "Schur factor has non-zero entry {} below the diagonal at ({}, {})",
                    t[(r, c)],
                    r,
                    c
                )));
            }
        }
    }

    let smin = (f64::EPSILON * magnitude).max(f64::MIN_POSITIVE);
    let mut pairs = Vec::with_capacity(n);
    for k in 0..n {
        let value = t[(k, k)];
        let y = triangular_eigenvector(&t, k, smin);
        let x = &q * y;
        let vector = Vector::try_from(&x)?;
        pairs.push(EigenPair {
            value,
            vector: canonical_phase(&normalize(&vector)?, config.tolerance),
        });
    }
    pairs.sort_by(|a, b| {
        a.value
            .re
            .total_cmp(&b.value.re)
            .then(a.value.im.total_cmp(&b.value.im))
    });
    Ok(pairs)
}

/// Solve `(T - t_kk I) y = 0` with `y_k = 1` and `y_j = 0` for `j > k`.
///
/// Near-zero pivots (repeated eigenvalues) are replaced by `smin`.
fn triangular_eigenvector(t: &DMatrix<Complex64>, k: usize, smin: f64) -> DVector<Complex64> {
    let n = t.nrows();
    let lambda = t[(k, k)];
    let mut y = DVector::from_element(n, Complex64::zero());
    y[k] = Complex64::one();

    for i in (0..k).rev() {
        let mut acc = Complex64::zero();
        for j in i + 1..=k {
            acc += t[(i, j)] * y[j];
        }
        let mut pivot = t[(i, i)] - lambda;
        if pivot.norm() < smin {
            pivot = Complex64::new(smin, 0.0);
        }
        y[i] = -acc / pivot;

        let largest = y.iter().map(|z| z.norm()).fold(0.0, f64::max);
        if largest > RESCALE_THRESHOLD {
            y.iter_mut().for_each(|z| *z /= largest);
        }
    }
    y
}

/// Rotate a unit vector so its first non-negligible component is real and positive.
fn canonical_phase(v: &Vector, tol: Tolerance) -> Vector {
    match v.iter().find(|z| z.norm() > tol.atol) {
        Some(&pivot) => scale(pivot.conj() / pivot.norm(), v),
        None => v.clone(),
    }
}
