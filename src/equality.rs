//! NaN-aware and tolerance-aware equality
//!
//! The oracle used both for guard-sentinel comparison and for comparing
//! kernel output against an expected result.
//!
//! # Examples
//!
//! ```
//! use num_complex::Complex32;
//! use trueno_guard::{approx_equal, exact_equal};
//!
//! assert!(exact_equal(f32::NAN, f32::NAN));
//! assert!(!exact_equal(f32::NAN, 1.0));
//! assert!(approx_equal(1.0f32, 1.0 + 1e-7, 1e-6));
//!
//! let cnan = Complex32::new(f32::NAN, f32::NAN);
//! assert!(exact_equal(cnan, cnan));
//! ```

use crate::element::Element;

/// `a == b`, or both NaN
#[inline]
pub fn exact_equal<T: Element>(a: T, b: T) -> bool {
    T::exact_eq(a, b)
}

/// Exact equality, or within `tol` under the absolute-or-relative rule
///
/// `tol` serves as both the absolute and the relative bound.
#[inline]
pub fn approx_equal<T: Element>(a: T, b: T, tol: f32) -> bool {
    let tol = f64::from(tol);
    exact_equal(a, b) || T::within_abs_or_rel(a, b, tol, tol)
}

/// Element-wise [`exact_equal`]; slices of different length are unequal
pub fn slices_equal<T: Element>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| exact_equal(x, y))
}

/// Element-wise [`approx_equal`]; slices of different length are unequal
pub fn slices_approx_equal<T: Element>(a: &[T], b: &[T], tol: f32) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| approx_equal(x, y, tol))
}
