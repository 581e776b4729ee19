//! Reference complex kernels driven by the integration suites
//!
//! Plain loops over `Complex32`, written the way a portable scalar backend
//! would be. Strided variants take the starting index of each operand so
//! negative increments walk the buffer backwards, BLAS style.

#![allow(dead_code)]

use num_complex::Complex32;

/// x[i] *= alpha
pub fn scal_unitary(alpha: Complex32, x: &mut [Complex32]) {
    for v in x.iter_mut() {
        *v *= alpha;
    }
}

/// x[i*inc] *= alpha for i in 0..n
pub fn scal_inc(alpha: Complex32, x: &mut [Complex32], n: usize, inc: usize) {
    let mut ix = 0;
    for _ in 0..n {
        x[ix] *= alpha;
        ix += inc;
    }
}

/// y[i] += alpha * x[i]
pub fn axpy_unitary(alpha: Complex32, x: &[Complex32], y: &mut [Complex32]) {
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi += alpha * xi;
    }
}

/// Strided axpy starting at `ix`, `iy`
#[allow(clippy::too_many_arguments)]
pub fn axpy_inc(
    alpha: Complex32,
    x: &[Complex32],
    y: &mut [Complex32],
    n: usize,
    inc_x: isize,
    inc_y: isize,
    ix: usize,
    iy: usize,
) {
    let (mut ix, mut iy) = (ix as isize, iy as isize);
    for _ in 0..n {
        y[iy as usize] += alpha * x[ix as usize];
        ix += inc_x;
        iy += inc_y;
    }
}

/// sum(conj(x[i]) * y[i])
pub fn dotc_unitary(x: &[Complex32], y: &[Complex32]) -> Complex32 {
    x.iter()
        .zip(y)
        .fold(Complex32::new(0.0, 0.0), |acc, (xi, yi)| acc + xi.conj() * yi)
}

/// sum(x[i] * y[i])
pub fn dotu_unitary(x: &[Complex32], y: &[Complex32]) -> Complex32 {
    x.iter()
        .zip(y)
        .fold(Complex32::new(0.0, 0.0), |acc, (xi, yi)| acc + xi * yi)
}

/// Strided conjugated dot product
pub fn dotc_inc(
    x: &[Complex32],
    y: &[Complex32],
    n: usize,
    inc_x: isize,
    inc_y: isize,
    ix: usize,
    iy: usize,
) -> Complex32 {
    let (mut ix, mut iy) = (ix as isize, iy as isize);
    let mut sum = Complex32::new(0.0, 0.0);
    for _ in 0..n {
        sum += x[ix as usize].conj() * y[iy as usize];
        ix += inc_x;
        iy += inc_y;
    }
    sum
}

/// Starting index for a strided walk of `n` elements
pub fn start_index(n: usize, inc: isize) -> usize {
    if inc < 0 && n > 0 {
        (n - 1) * inc.unsigned_abs()
    } else {
        0
    }
}

/// Copy that writes one element past the end of `dst`'s logical range
///
/// `dst` must be the whole guarded buffer; `start` is the payload offset.
pub fn copy_overrun(src: &[Complex32], dst: &mut [Complex32], start: usize) {
    for (i, &v) in src.iter().enumerate() {
        dst[start + i] = v;
    }
    dst[start + src.len()] = Complex32::new(0.0, 0.0);
}

/// Copy that writes one element before the start of `dst`'s logical range
pub fn copy_underrun(src: &[Complex32], dst: &mut [Complex32], start: usize) {
    dst[start - 1] = Complex32::new(0.0, 0.0);
    for (i, &v) in src.iter().enumerate() {
        dst[start + i] = v;
    }
}

/// Strided scale that steps with `inc - 1` instead of `inc`
pub fn scal_wrong_stride(alpha: Complex32, x: &mut [Complex32], n: usize, inc: usize) {
    scal_inc(alpha, x, n, inc - 1);
}
