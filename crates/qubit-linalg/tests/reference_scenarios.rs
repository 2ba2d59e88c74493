//! Worked examples that must reproduce within 1e-6 absolute tolerance.

use std::f64::consts::FRAC_1_SQRT_2;

use qubit_linalg::gates::{hadamard, pauli_x};
use qubit_linalg::math::{c64, Matrix, Vector};
use qubit_linalg::ops::{act, adjoint, matmul, scale};
use qubit_linalg::{allclose, eigen, is_hermitian, is_unitary, tensor, Tolerance};

fn tol() -> Tolerance {
    Tolerance::new(1e-6)
}

#[test]
fn hermitian_check_and_spectrum() {
    let m = Matrix::from_rows(&[
        [c64(3.0, 0.0), c64(2.0, 1.0)],
        [c64(2.0, -1.0), c64(1.0, 0.0)],
    ])
    .unwrap();
    assert!(is_hermitian(&m));

    let values: Vec<f64> = eigen(&m).unwrap().iter().map(|p| p.value.re).collect();
    assert!((values[0] + 0.44948974).abs() < 1e-6, "got {:?}", values);
    assert!((values[1] - 4.44948974).abs() < 1e-6, "got {:?}", values);
}

#[test]
fn unitary_check() {
    let u = Matrix::from_rows(&[
        [c64(1.0, 0.0), c64(0.0, 1.0)],
        [c64(0.0, 1.0), c64(1.0, 0.0)],
    ])
    .unwrap();
    let expected = Matrix::from_real_rows(&[[2.0, 0.0], [0.0, 2.0]]).unwrap();
    assert!(allclose(&matmul(&u, &adjoint(&u)).unwrap(), &expected, tol()));

    let normalized = scale(c64(1.0 / 2f64.sqrt(), 0.0), &u);
    assert!(is_unitary(&normalized));
}

#[test]
fn vector_tensor_product() {
    let v = Vector::from_pairs(&[(1.0, 1.0), (2.0, -1.0)]).unwrap();
    let w = Vector::from_pairs(&[(1.0, -2.0), (3.0, 0.0)]).unwrap();
    let expected =
        Vector::from_pairs(&[(3.0, -1.0), (3.0, 3.0), (0.0, -5.0), (6.0, -3.0)]).unwrap();
    assert!(allclose(&tensor(&v, &w), &expected, tol()));
}

#[test]
fn matrix_tensor_product() {
    let m1 = Matrix::from_real_rows(&[[0.0, 1.0], [1.0, 0.0]]).unwrap();
    let m2 = Matrix::from_rows(&[
        [c64(0.0, 1.0), c64(0.0, 0.0)],
        [c64(0.0, 0.0), c64(0.0, -1.0)],
    ])
    .unwrap();
    let (o, i, mi) = (c64(0.0, 0.0), c64(0.0, 1.0), c64(0.0, -1.0));
    let expected = Matrix::from_rows(&[[o, o, i, o], [o, o, o, mi], [i, o, o, o], [o, mi, o, o]])
        .unwrap();
    let product = tensor(&m1, &m2);
    assert_eq!(product.shape(), (4, 4));
    assert!(allclose(&product, &expected, tol()));
}

#[test]
fn two_gate_circuit() {
    let v0 = Vector::from_real(&[1.0, 0.0]).unwrap();
    let h = hadamard();
    let x = pauli_x();

    let after_h = act(&h, &v0).unwrap();
    let plus = Vector::from_real(&[0.70710678, 0.70710678]).unwrap();
    assert!(allclose(&after_h, &plus, tol()));

    let after_x = act(&x, &after_h).unwrap();
    assert!(allclose(&after_x, &plus, tol()));

    let back = act(&h, &after_x).unwrap();
    assert!(allclose(&back, &v0, tol()));
    assert!(back[1].norm() < 1e-15);

    // same circuit with H written out explicitly
    let explicit_h = scale(
        c64(FRAC_1_SQRT_2, 0.0),
        &Matrix::from_real_rows(&[[1.0, 1.0], [1.0, -1.0]]).unwrap(),
    );
    assert!(allclose(&explicit_h, &h, Tolerance::default()));
}
