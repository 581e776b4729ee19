//! Scalar element primitives
//!
//! NaN and infinity predicates plus the absolute-or-relative comparators that
//! the equality oracle builds on. Implemented for the two element types the
//! harness checks: `f32` and [`Complex32`].
//!
//! All tolerance arithmetic is carried out in `f64` so that rounding in the
//! comparison itself never masks a single-precision discrepancy.

use std::fmt::{Debug, Display};

use num_complex::{Complex32, Complex64};

/// Smallest positive normal `f64`; differences below it use the scaled bound
const MIN_NORMAL: f64 = f64::MIN_POSITIVE;

/// Element type stored in guarded buffers
///
/// The set of implementors is closed (`f32`, `Complex32`) and every
/// operation is statically dispatched.
pub trait Element: Copy + PartialEq + Debug + Display + Send + Sync + 'static {
    /// Canonical NaN value, the usual sentinel
    fn nan() -> Self;

    /// Canonical positive infinity
    fn inf() -> Self;

    /// NaN predicate
    fn is_nan(self) -> bool;

    /// Infinity predicate
    fn is_inf(self) -> bool;

    /// Absolute-or-relative tolerance comparison
    fn within_abs_or_rel(a: Self, b: Self, abs_tol: f64, rel_tol: f64) -> bool;

    /// NaN-aware exact equality
    #[inline]
    fn exact_eq(a: Self, b: Self) -> bool {
        a == b || (a.is_nan() && b.is_nan())
    }
}

impl Element for f32 {
    #[inline]
    fn nan() -> Self {
        f32::NAN
    }

    #[inline]
    fn inf() -> Self {
        f32::INFINITY
    }

    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }

    #[inline]
    fn is_inf(self) -> bool {
        self.is_infinite()
    }

    #[inline]
    fn within_abs_or_rel(a: Self, b: Self, abs_tol: f64, rel_tol: f64) -> bool {
        real_within_abs_or_rel(f64::from(a), f64::from(b), abs_tol, rel_tol)
    }
}

impl Element for Complex32 {
    #[inline]
    fn nan() -> Self {
        Complex32::new(f32::NAN, f32::NAN)
    }

    #[inline]
    fn inf() -> Self {
        Complex32::new(f32::INFINITY, f32::INFINITY)
    }

    /// Either part is NaN and neither part is infinite.
    ///
    /// A value such as `Inf+NaNi` is an infinity, not a NaN.
    #[inline]
    fn is_nan(self) -> bool {
        if Element::is_inf(self) {
            return false;
        }
        self.re.is_nan() || self.im.is_nan()
    }

    #[inline]
    fn is_inf(self) -> bool {
        self.re.is_infinite() || self.im.is_infinite()
    }

    #[inline]
    fn within_abs_or_rel(a: Self, b: Self, abs_tol: f64, rel_tol: f64) -> bool {
        complex_within_abs_or_rel(widen(a), widen(b), abs_tol, rel_tol)
    }
}

#[inline]
fn widen(z: Complex32) -> Complex64 {
    Complex64::new(f64::from(z.re), f64::from(z.im))
}

/// `|a - b| <= tol`
pub fn real_within_abs(a: f64, b: f64, tol: f64) -> bool {
    a == b || (a - b).abs() <= tol
}

/// Relative comparison scaled by the larger magnitude
///
/// Infinite operands fall out of the division (`Inf / Inf` is NaN).
pub fn real_within_rel(a: f64, b: f64, tol: f64) -> bool {
    if a == b {
        return true;
    }
    let delta = (a - b).abs();
    if delta <= MIN_NORMAL {
        return delta <= tol * MIN_NORMAL;
    }
    delta / a.abs().max(b.abs()) <= tol
}

/// Accept when either the absolute or the relative bound holds
pub fn real_within_abs_or_rel(a: f64, b: f64, abs_tol: f64, rel_tol: f64) -> bool {
    real_within_abs(a, b, abs_tol) || real_within_rel(a, b, rel_tol)
}

/// Complex absolute comparison on the modulus of the difference
pub fn complex_within_abs(a: Complex64, b: Complex64, tol: f64) -> bool {
    a == b || (a - b).norm() <= tol
}

/// Complex relative comparison on moduli
pub fn complex_within_rel(a: Complex64, b: Complex64, tol: f64) -> bool {
    if a == b {
        return true;
    }
    let delta = (a - b).norm();
    if delta <= MIN_NORMAL {
        return delta <= tol * MIN_NORMAL;
    }
    delta / a.norm().max(b.norm()) <= tol
}

/// Complex counterpart of [`real_within_abs_or_rel`]
pub fn complex_within_abs_or_rel(a: Complex64, b: Complex64, abs_tol: f64, rel_tol: f64) -> bool {
    complex_within_abs(a, b, abs_tol) || complex_within_rel(a, b, rel_tol)
}
