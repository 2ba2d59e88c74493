//! Integration tests for the gate/state helpers, configuration types and
//! ndarray/nalgebra conversions.

use std::f64::consts::PI;

use nalgebra::DMatrix;

use qubit_linalg::config::{EigenConfig, EigenStrategy, Tolerance};
use qubit_linalg::gates::{
    apply_all, cnot, hadamard, identity, ket, ket_minus, ket_one, ket_plus, ket_zero, pauli_x,
    pauli_y, pauli_z, phase, swap, MAX_KET_QUBITS,
};
use qubit_linalg::math::{c64, Complex64, Matrix, Vector};
use qubit_linalg::ops::{act, inner, matmul, scale};
use qubit_linalg::{allclose, is_unitary, tensor, LinalgError};

// ---------------------------------------------------------------------------
// Kets
// ---------------------------------------------------------------------------

#[test]
fn ket_labels_map_to_basis_indices() {
    assert_eq!(ket("0").unwrap(), ket_zero());
    assert_eq!(ket("1").unwrap(), ket_one());
    assert_eq!(ket("10").unwrap(), Vector::basis(4, 2).unwrap());
    assert_eq!(ket("111").unwrap(), Vector::basis(8, 7).unwrap());
}

#[test]
fn ket_rejects_bad_labels() {
    assert_eq!(ket("").unwrap_err(), LinalgError::InvalidBasis(String::new()));
    assert_eq!(
        ket("012").unwrap_err(),
        LinalgError::InvalidBasis("012".to_string())
    );
}

#[test]
fn ket_rejects_labels_beyond_qubit_limit() {
    let too_long = "0".repeat(MAX_KET_QUBITS + 1);
    assert_eq!(
        ket(&too_long).unwrap_err(),
        LinalgError::InvalidBasis(too_long.clone())
    );
    let word_sized = "1".repeat(64);
    assert!(matches!(ket(&word_sized), Err(LinalgError::InvalidBasis(_))));
}

#[test]
fn plus_and_minus_are_orthonormal() {
    let plus = ket_plus();
    let minus = ket_minus();
    assert!((inner(&plus, &plus).unwrap() - c64(1.0, 0.0)).norm() < 1e-12);
    assert!(inner(&plus, &minus).unwrap().norm() < 1e-12);
    assert!(allclose(&act(&hadamard(), &ket_zero()).unwrap(), &plus, Tolerance::default()));
}

// ---------------------------------------------------------------------------
// Gates
// ---------------------------------------------------------------------------

#[test]
fn standard_gates_are_unitary() {
    for gate in [
        identity(4).unwrap(),
        pauli_x(),
        pauli_y(),
        pauli_z(),
        hadamard(),
        phase(PI / 4.0),
        cnot(),
        swap(),
    ] {
        assert!(is_unitary(&gate), "{} should be unitary", gate);
    }
}

#[test]
fn pauli_algebra() {
    // XY = iZ
    let xy = matmul(&pauli_x(), &pauli_y()).unwrap();
    assert!(allclose(&xy, &scale(c64(0.0, 1.0), &pauli_z()), Tolerance::default()));
}

#[test]
fn cnot_flips_target_when_control_set() {
    assert_eq!(act(&cnot(), &ket("10").unwrap()).unwrap(), ket("11").unwrap());
    assert_eq!(act(&cnot(), &ket("11").unwrap()).unwrap(), ket("10").unwrap());
    assert_eq!(act(&cnot(), &ket("01").unwrap()).unwrap(), ket("01").unwrap());
}

#[test]
fn swap_exchanges_qubits() {
    assert_eq!(act(&swap(), &ket("01").unwrap()).unwrap(), ket("10").unwrap());
}

#[test]
fn bell_state_from_hadamard_and_cnot() {
    let h_on_first = tensor(&hadamard(), &identity(2).unwrap());
    let bell = apply_all([&h_on_first, &cnot()], &ket("00").unwrap()).unwrap();
    let s = std::f64::consts::FRAC_1_SQRT_2;
    let expected = Vector::from_real(&[s, 0.0, 0.0, s]).unwrap();
    assert!(allclose(&bell, &expected, Tolerance::default()));
}

#[test]
fn apply_all_propagates_shape_errors() {
    let result = apply_all([&cnot()], &ket_zero());
    assert!(matches!(result, Err(LinalgError::ShapeMismatch { op: "act", .. })));
}

#[test]
fn phase_gate_multiplies_one_component() {
    let rotated = act(&phase(PI / 2.0), &ket_one()).unwrap();
    assert!((rotated[1] - c64(0.0, 1.0)).norm() < 1e-12);
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[test]
fn tolerance_default() {
    assert_eq!(Tolerance::default().atol, 1e-8);
    assert_eq!(Tolerance::default().atol, Tolerance::DEFAULT_ATOL);
}

#[test]
fn eigen_config_defaults() {
    let config = EigenConfig::default();
    assert_eq!(config.strategy, EigenStrategy::Auto);
    assert_eq!(config.max_iterations, EigenConfig::DEFAULT_MAX_ITERATIONS);
    assert_eq!(config.tolerance, Tolerance::default());
}

#[test]
fn eigen_strategy_from_str() {
    assert_eq!("AUTO".parse::<EigenStrategy>().unwrap(), EigenStrategy::Auto);
    assert_eq!(
        "hermitian".parse::<EigenStrategy>().unwrap(),
        EigenStrategy::Hermitian
    );
    assert_eq!("General".parse::<EigenStrategy>().unwrap(), EigenStrategy::General);
    assert!("jacobi".parse::<EigenStrategy>().is_err());
}

#[test]
fn eigen_config_deserializes_from_json() {
    let json = r#"{"tolerance":{"atol":1e-6},"max_iterations":50,"strategy":"General"}"#;
    let config: EigenConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config, EigenConfig::new(Tolerance::new(1e-6), 50, EigenStrategy::General));
}

// ---------------------------------------------------------------------------
// Interop
// ---------------------------------------------------------------------------

#[test]
fn ndarray_conversion_preserves_layout() {
    let m = Matrix::from_rows(&[
        [c64(1.0, 0.0), c64(2.0, 1.0), c64(3.0, 0.0)],
        [c64(4.0, 0.0), c64(5.0, 0.0), c64(6.0, -1.0)],
    ])
    .unwrap();
    let arr: ndarray::Array2<Complex64> = (&m).into();
    assert_eq!(arr.dim(), (2, 3));
    assert_eq!(arr[[0, 1]], c64(2.0, 1.0));
    assert_eq!(arr[[1, 2]], c64(6.0, -1.0));
    assert_eq!(Matrix::try_from(&arr).unwrap(), m);

    let v = Vector::from_real(&[1.0, 2.0]).unwrap();
    let arr1: ndarray::Array1<Complex64> = (&v).into();
    assert_eq!(Vector::try_from(&arr1).unwrap(), v);
}

#[test]
fn ndarray_empty_input_is_rejected() {
    let arr = ndarray::Array2::<Complex64>::zeros((0, 3));
    assert_eq!(Matrix::try_from(&arr).unwrap_err(), LinalgError::EmptyShape);
}

#[test]
fn nalgebra_conversion_preserves_layout() {
    let m = Matrix::from_real_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    let dm: DMatrix<Complex64> = (&m).into();
    assert_eq!(dm.shape(), (3, 2));
    assert_eq!(dm[(2, 1)], c64(6.0, 0.0));
    assert_eq!(Matrix::try_from(&dm).unwrap(), m);
}
