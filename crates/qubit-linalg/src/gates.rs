//! Standard qubit gates and computational-basis states.
//!
//! Multi-qubit kets use the same Kronecker ordering as `tensor`: the first
//! character of a label is the most significant qubit, so
//! `ket("01") == tensor(&ket_zero(), &ket_one())`.

use std::f64::consts::FRAC_1_SQRT_2;

use crate::error::{LinalgError, Result};
use crate::math::{imag, real, Complex64, Matrix, Vector};
use crate::ops::act;

pub fn identity(n: usize) -> Result<Matrix> {
    Matrix::identity(n)
}

/// Pauli X (NOT).
pub fn pauli_x() -> Matrix {
    two_by_two([real(0.0), real(1.0)], [real(1.0), real(0.0)])
}

pub fn pauli_y() -> Matrix {
    two_by_two([real(0.0), imag(-1.0)], [imag(1.0), real(0.0)])
}

pub fn pauli_z() -> Matrix {
    two_by_two([real(1.0), real(0.0)], [real(0.0), real(-1.0)])
}

/// `(1/√2) [[1, 1], [1, -1]]`.
pub fn hadamard() -> Matrix {
    let h = FRAC_1_SQRT_2;
    two_by_two([real(h), real(h)], [real(h), real(-h)])
}

/// `diag(1, e^{iθ})`.
pub fn phase(theta: f64) -> Matrix {
    two_by_two(
        [real(1.0), real(0.0)],
        [real(0.0), Complex64::from_polar(1.0, theta)],
    )
}

/// Controlled NOT with the first qubit as control.
pub fn cnot() -> Matrix {
    permutation(&[0, 1, 3, 2])
}

pub fn swap() -> Matrix {
    permutation(&[0, 2, 1, 3])
}

fn two_by_two(top: [Complex64; 2], bottom: [Complex64; 2]) -> Matrix {
    Matrix::from_parts((2, 2), vec![top[0], top[1], bottom[0], bottom[1]])
}

/// Matrix sending basis state `j` to basis state `targets[j]`.
fn permutation(targets: &[usize]) -> Matrix {
    let n = targets.len();
    let mut data = vec![real(0.0); n * n];
    for (col, &row) in targets.iter().enumerate() {
        data[row * n + col] = real(1.0);
    }
    Matrix::from_parts((n, n), data)
}

/// Longest label `ket` accepts; a 30-qubit state already holds 2^30 amplitudes.
pub const MAX_KET_QUBITS: usize = 30;

/// Computational-basis ket for a label such as `"01"`.
pub fn ket(bits: &str) -> Result<Vector> {
    if bits.is_empty() || bits.len() > MAX_KET_QUBITS {
        return Err(LinalgError::InvalidBasis(bits.to_string()));
    }
    let mut index = 0usize;
    for ch in bits.chars() {
        index = match ch {
            '0' => index << 1,
            '1' => (index << 1) | 1,
            _ => return Err(LinalgError::InvalidBasis(bits.to_string())),
        };
    }
    Vector::basis(1 << bits.len(), index)
}

pub fn ket_zero() -> Vector {
    single_qubit(real(1.0), real(0.0))
}

pub fn ket_one() -> Vector {
    single_qubit(real(0.0), real(1.0))
}

/// `(|0> + |1>) / √2`.
pub fn ket_plus() -> Vector {
    single_qubit(real(FRAC_1_SQRT_2), real(FRAC_1_SQRT_2))
}

/// `(|0> - |1>) / √2`.
pub fn ket_minus() -> Vector {
    single_qubit(real(FRAC_1_SQRT_2), real(-FRAC_1_SQRT_2))
}

fn single_qubit(zero: Complex64, one: Complex64) -> Vector {
    Vector::from_parts((2, 1), vec![zero, one])
}

/// Apply `gates` in order (the first gate acts first) to `state`.
pub fn apply_all<'a, I>(gates: I, state: &Vector) -> Result<Vector>
where
    I: IntoIterator<Item = &'a Matrix>,
{
    gates
        .into_iter()
        .try_fold(state.clone(), |current, gate| act(gate, &current))
}

