//! Pass/fail helpers for kernel tests
//!
//! These turn the oracle and validators into [`Result`]s carrying enough
//! context to locate the failure. Formatting and reporting stay with the
//! test runner.

use crate::element::Element;
use crate::equality::approx_equal;
use crate::error::{HarnessError, Result};
use crate::guard::GuardedBuffer;
use crate::strided::render_slice;

/// Compare kernel output with the expected logical result
///
/// Fails on the first element outside `tol`, or on a length difference.
///
/// # Examples
///
/// ```
/// use trueno_guard::check_values;
///
/// assert!(check_values("scal", &[1.0f32, 2.0], &[1.0, 2.0], 0.0).is_ok());
/// let err = check_values("scal", &[1.0f32, 2.5], &[1.0, 2.0], 1e-6).unwrap_err();
/// assert_eq!(err.to_string(), "scal: unexpected value at 1 Got: 2.5 Expected: 2");
/// ```
pub fn check_values<T: Element>(name: &str, got: &[T], want: &[T], tol: f32) -> Result<()> {
    if got.len() != want.len() {
        return Err(HarnessError::LengthMismatch {
            name: name.to_string(),
            expected: want.len(),
            actual: got.len(),
        });
    }
    match got
        .iter()
        .zip(want)
        .position(|(&g, &w)| !approx_equal(g, w, tol))
    {
        Some(index) => Err(HarnessError::UnexpectedValue {
            name: name.to_string(),
            index,
            got: got[index].to_string(),
            expected: want[index].to_string(),
        }),
        None => Ok(()),
    }
}

/// Compare a single scalar result, e.g. a dot product
pub fn check_scalar<T: Element>(name: &str, got: T, want: T, tol: f32) -> Result<()> {
    if approx_equal(got, want, tol) {
        Ok(())
    } else {
        Err(HarnessError::UnexpectedValue {
            name: name.to_string(),
            index: 0,
            got: got.to_string(),
            expected: want.to_string(),
        })
    }
}

/// Verify that a kernel left the sentinels of `buf` untouched
///
/// Unit-stride buffers report only that a guard was hit, with both guards
/// rendered. Strided buffers report the zone and offset of the first
/// corrupted slot.
pub fn check_guard<T: Element>(name: &str, which: &str, buf: &GuardedBuffer<T>) -> Result<()> {
    if buf.inc() == 1 {
        if buf.is_valid() {
            return Ok(());
        }
        return Err(HarnessError::GuardViolated {
            name: name.to_string(),
            which: which.to_string(),
            front: render_slice(buf.front_guard()),
            back: render_slice(buf.back_guard()),
        });
    }
    match buf.violations().into_iter().next() {
        Some(v) => Err(HarnessError::StridedGuardViolated {
            name: name.to_string(),
            which: which.to_string(),
            zone: v.zone,
            index: v.index,
        }),
        None => Ok(()),
    }
}
