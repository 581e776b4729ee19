//! Strided ("incremented") guarded buffers
//!
//! A strided buffer interleaves logical elements with sentinel gaps so that a
//! kernel stepping with the wrong increment is caught as well as one that runs
//! past either end:
//!
//! ```text
//!  front guard     payload (N * inc)                back guard
//! [S S ... S | v0 S S v1 S S ... v(N-1) S S | S S ... S]
//!   G elems    ^ G + i*inc holds v[i]          G elems
//! ```
//!
//! Negative increments share the physical layout of their absolute value;
//! only the traversal order differs, and that is the kernel's business.

use std::fmt;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::element::Element;
use crate::equality::exact_equal;

/// Region of a guarded buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardZone {
    /// Padding before the payload
    Front,
    /// Padding after the payload
    Back,
    /// Gap between stride-aligned payload elements
    Internal,
}

impl fmt::Display for GuardZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GuardZone::Front => "Front",
            GuardZone::Back => "Back",
            GuardZone::Internal => "Internal",
        };
        f.write_str(name)
    }
}

/// A sentinel slot that no longer holds the sentinel
#[derive(Debug, Clone, PartialEq)]
pub struct GuardViolation<T> {
    /// Zone the offending slot belongs to
    pub zone: GuardZone,
    /// Offset relative to the start of `zone`
    pub index: usize,
    /// Snapshot of the whole zone, for diagnosis
    pub contents: Vec<T>,
}

impl<T: Element> fmt::Display for GuardViolation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} guard violated at {} {}",
            self.zone,
            self.index,
            render_slice(&self.contents)
        )
    }
}

/// Render a slice as `[a b c]`
pub(crate) fn render_slice<T: fmt::Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(" "))
}

/// Physical spacing for a signed increment
///
/// The sign is dropped and a zero increment is treated as unit stride.
#[inline]
pub fn normalize_stride(inc: isize) -> usize {
    inc.unsigned_abs().max(1)
}

/// Copy `vec` into a new sentinel-filled buffer with stride `inc` and
/// `guard_len` guards at each end
///
/// The result has length `vec.len() * |inc| + 2 * guard_len`; element `i` of
/// `vec` lands at `guard_len + i * |inc|` and every other slot holds
/// `sentinel`. With `inc == 1` this matches
/// [`build_guarded_buffer`](crate::guard::build_guarded_buffer).
///
/// # Examples
///
/// ```
/// use trueno_guard::build_strided_guarded_buffer;
///
/// let buf = build_strided_guarded_buffer(&[1.0f32, 2.0], -1.0, 3, 2);
/// assert_eq!(buf, vec![-1.0, -1.0, 1.0, -1.0, -1.0, 2.0, -1.0, -1.0, -1.0, -1.0]);
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "debug", skip(vec, sentinel), fields(len = vec.len())))]
pub fn build_strided_guarded_buffer<T: Element>(
    vec: &[T],
    sentinel: T,
    inc: isize,
    guard_len: usize,
) -> Vec<T> {
    let inc = normalize_stride(inc);
    let mut guarded = vec![sentinel; vec.len() * inc + 2 * guard_len];
    for (i, &v) in vec.iter().enumerate() {
        guarded[guard_len + i * inc] = v;
    }
    guarded
}

/// Report every sentinel slot of a strided buffer that was overwritten
///
/// Each offset is classified in order:
///
/// 1. holds the sentinel: fine (this also hides a payload value that happens
///    to equal the sentinel, even at a gap position)
/// 2. stride-aligned payload slot: data, skipped
/// 3. front guard: [`GuardZone::Front`], absolute index
/// 4. back guard: [`GuardZone::Back`], index relative to the back guard
/// 5. otherwise: [`GuardZone::Internal`], index relative to the payload start
///
/// An empty result means the buffer is intact.
#[cfg_attr(feature = "tracing", instrument(level = "debug", skip(buf, sentinel), fields(len = buf.len())))]
pub fn check_strided_guard<T: Element>(
    buf: &[T],
    sentinel: T,
    inc: isize,
    guard_len: usize,
) -> Vec<GuardViolation<T>> {
    let inc = normalize_stride(inc);
    let front_end = guard_len.min(buf.len());
    let back_start = buf.len().saturating_sub(guard_len).max(front_end);

    let mut violations = Vec::new();
    for (i, &v) in buf.iter().enumerate() {
        if exact_equal(v, sentinel) {
            continue;
        }
        let in_payload = i >= front_end && i < back_start;
        if in_payload && (i - front_end) % inc == 0 {
            continue;
        }
        let violation = if i < front_end {
            GuardViolation {
                zone: GuardZone::Front,
                index: i,
                contents: buf[..front_end].to_vec(),
            }
        } else if i >= back_start {
            GuardViolation {
                zone: GuardZone::Back,
                index: i - back_start,
                contents: buf[back_start..].to_vec(),
            }
        } else {
            GuardViolation {
                zone: GuardZone::Internal,
                index: i - front_end,
                contents: buf[front_end..back_start].to_vec(),
            }
        };
        #[cfg(feature = "tracing")]
        tracing::warn!(zone = %violation.zone, index = violation.index, "guard violated");
        violations.push(violation);
    }
    violations
}
