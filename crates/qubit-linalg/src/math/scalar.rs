pub use num_complex::Complex64;

use crate::config::Tolerance;

/// Shorthand constructor for a complex scalar.
#[inline]
pub fn c64(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// Purely real complex scalar.
#[inline]
pub fn real(re: f64) -> Complex64 {
    Complex64::new(re, 0.0)
}

/// Purely imaginary complex scalar.
#[inline]
pub fn imag(im: f64) -> Complex64 {
    Complex64::new(0.0, im)
}

#[inline]
pub fn is_finite(z: Complex64) -> bool {
    z.re.is_finite() && z.im.is_finite()
}

/// `|a - b| <= tol.atol`. NaN never compares close.
#[inline]
pub fn is_close(a: Complex64, b: Complex64, tol: Tolerance) -> bool {
    (a - b).norm() <= tol.atol
}
