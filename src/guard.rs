//! Contiguous guarded buffers and the owning [`GuardedBuffer`] wrapper

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::element::Element;
use crate::equality::exact_equal;
use crate::strided::{build_strided_guarded_buffer, check_strided_guard, normalize_stride, GuardViolation};

/// Copy `vec` into a new buffer with `guard_len` sentinels at each end
///
/// Layout: `[0, G)` sentinel, `[G, G + N)` the input in order,
/// `[G + N, 2G + N)` sentinel.
///
/// # Examples
///
/// ```
/// use trueno_guard::build_guarded_buffer;
///
/// let buf = build_guarded_buffer(&[1.0f32, 2.0], 0.0, 1);
/// assert_eq!(buf, vec![0.0, 1.0, 2.0, 0.0]);
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "debug", skip(vec, sentinel), fields(len = vec.len())))]
pub fn build_guarded_buffer<T: Element>(vec: &[T], sentinel: T, guard_len: usize) -> Vec<T> {
    let mut guarded = Vec::with_capacity(vec.len() + 2 * guard_len);
    guarded.resize(guard_len, sentinel);
    guarded.extend_from_slice(vec);
    guarded.resize(vec.len() + 2 * guard_len, sentinel);
    guarded
}

/// True iff the first and last `guard_len` elements still equal `sentinel`
///
/// Comparison is NaN-aware and exact. A buffer too short to hold both guards
/// is reported invalid.
#[cfg_attr(feature = "tracing", instrument(level = "debug", skip(buf, sentinel), fields(len = buf.len())))]
pub fn is_valid_guard<T: Element>(buf: &[T], sentinel: T, guard_len: usize) -> bool {
    if buf.len() < 2 * guard_len {
        return false;
    }
    let n = buf.len();
    let valid = (0..guard_len)
        .all(|i| exact_equal(buf[i], sentinel) && exact_equal(buf[n - 1 - i], sentinel));
    #[cfg(feature = "tracing")]
    {
        if !valid {
            tracing::warn!(guard_len, "contiguous guard violated");
        }
    }
    valid
}

/// A test buffer owned by exactly one test case
///
/// Holds the physical sentinel-padded buffer together with its layout so the
/// payload can be handed to a kernel and the guards re-checked afterwards.
///
/// # Examples
///
/// ```
/// use trueno_guard::GuardedBuffer;
///
/// let mut buf = GuardedBuffer::strided(&[1.0f32, 2.0], f32::NAN, 2, 4);
/// for x in buf.payload_mut().iter_mut().step_by(2) {
///     *x *= 10.0;
/// }
/// assert!(buf.is_valid());
/// assert_eq!(buf.logical(), vec![10.0, 20.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GuardedBuffer<T> {
    data: Vec<T>,
    sentinel: T,
    inc: usize,
    guard_len: usize,
    len: usize,
}

impl<T: Element> GuardedBuffer<T> {
    /// Unit-stride buffer
    pub fn contiguous(vec: &[T], sentinel: T, guard_len: usize) -> Self {
        Self {
            data: build_guarded_buffer(vec, sentinel, guard_len),
            sentinel,
            inc: 1,
            guard_len,
            len: vec.len(),
        }
    }

    /// Buffer with stride `|inc|` and sentinel gaps
    pub fn strided(vec: &[T], sentinel: T, inc: isize, guard_len: usize) -> Self {
        Self {
            data: build_strided_guarded_buffer(vec, sentinel, inc, guard_len),
            sentinel,
            inc: normalize_stride(inc),
            guard_len,
            len: vec.len(),
        }
    }

    /// The region a kernel may touch
    ///
    /// Spans `len * inc` elements, so for strided buffers it includes the
    /// trailing gap after the last logical element.
    pub fn payload(&self) -> &[T] {
        &self.data[self.guard_len..self.guard_len + self.len * self.inc]
    }

    /// Mutable view of the payload, for kernels that write
    pub fn payload_mut(&mut self) -> &mut [T] {
        let start = self.guard_len;
        &mut self.data[start..start + self.len * self.inc]
    }

    /// Whole physical buffer, guards included
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable whole buffer; lets tests inject faults into the guards
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Stride-aligned payload values, in physical order
    pub fn logical(&self) -> Vec<T> {
        self.payload().iter().step_by(self.inc).copied().collect()
    }

    /// Number of logical elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the buffer carries no logical elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Physical stride between logical elements
    pub fn inc(&self) -> usize {
        self.inc
    }

    /// Length of each end guard
    pub fn guard_len(&self) -> usize {
        self.guard_len
    }

    /// Sentinel value filling guards and gaps
    pub fn sentinel(&self) -> T {
        self.sentinel
    }

    /// True when no sentinel slot was overwritten
    ///
    /// Unit-stride buffers only have end guards to check; strided buffers
    /// also check their gaps.
    pub fn is_valid(&self) -> bool {
        if self.inc == 1 {
            is_valid_guard(&self.data, self.sentinel, self.guard_len)
        } else {
            self.violations().is_empty()
        }
    }

    /// Every corrupted sentinel slot, zoned
    pub fn violations(&self) -> Vec<GuardViolation<T>> {
        // The stride is already normalized and fits in isize by construction.
        check_strided_guard(&self.data, self.sentinel, self.inc as isize, self.guard_len)
    }

    /// Front guard contents
    pub fn front_guard(&self) -> &[T] {
        &self.data[..self.guard_len]
    }

    /// Back guard contents
    pub fn back_guard(&self) -> &[T] {
        &self.data[self.data.len() - self.guard_len..]
    }

    /// Release the physical buffer
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}
