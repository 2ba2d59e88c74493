//! qubit-linalg: dense complex linear algebra for modelling qubits.
//!
//! This crate provides immutable `Vector`/`Matrix` containers of complex
//! scalars, the elementwise and linear-algebra operations on them (adjoint,
//! products, inner product, norm), Hermitian/unitary predicates, an
//! eigensolver and the Kronecker tensor product used to compose multi-qubit
//! states and gates.
//!
//! Operations are pure functions returning new values. Shape problems are
//! reported as `LinalgError` before any arithmetic happens, and every
//! closeness check takes an explicit `Tolerance` (default `1e-8`).
pub mod config;
pub mod error;
pub mod gates;
pub mod interop;
pub mod math;
pub mod ops;
pub mod predicates;
pub mod spectral;
pub mod tensor;

pub use config::{EigenConfig, EigenStrategy, Tolerance};
pub use error::{LinalgError, Result};
pub use math::{c64, Complex64, ComplexArray, Matrix, Vector};
pub use predicates::{allclose, is_hermitian, is_unitary};
pub use spectral::{eigen, eigen_with, EigenPair};
pub use tensor::{tensor, tensor_all};
