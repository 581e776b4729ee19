//! Alignment offset matrices
//!
//! Each entry is the number of leading elements to skip in an operand before
//! the kernel's logical input starts. Running every case once per entry puts
//! the kernel on both naturally aligned and shifted starts.
//!
//! # Examples
//!
//! ```
//! use trueno_guard::align::{for_each_offset, ALIGN1};
//!
//! let mut seen = Vec::new();
//! for_each_offset(&ALIGN1, |&off| {
//!     seen.push(off);
//!     Ok(())
//! })
//! .unwrap();
//! assert_eq!(seen, vec![0, 1]);
//! ```

use crate::error::{HarnessError, Result};

/// Offsets for single-operand kernels
pub const ALIGN1: [usize; 2] = [0, 1];

/// Offset pairs for two-operand kernels
pub const ALIGN2: [[usize; 2]; 4] = [[0, 0], [0, 1], [1, 0], [3, 1]];

/// Offset triples for three-operand kernels
pub const ALIGN3: [[usize; 3]; 4] = [[0, 0, 0], [0, 1, 1], [1, 1, 0], [3, 1, 2]];

/// An entry of an offset matrix
pub trait Offsets {
    /// Offsets as a slice, one per operand
    fn as_offsets(&self) -> Vec<usize>;
}

impl Offsets for usize {
    fn as_offsets(&self) -> Vec<usize> {
        vec![*self]
    }
}

impl<const N: usize> Offsets for [usize; N] {
    fn as_offsets(&self) -> Vec<usize> {
        self.to_vec()
    }
}

/// Run `case` once per entry of `offsets`
///
/// Stops at the first failure and wraps it in [`HarnessError::AtOffset`].
pub fn for_each_offset<O, F>(offsets: &[O], mut case: F) -> Result<()>
where
    O: Offsets,
    F: FnMut(&O) -> Result<()>,
{
    for offset in offsets {
        #[cfg(feature = "tracing")]
        tracing::trace!(offset = ?offset.as_offsets(), "running alignment case");
        case(offset).map_err(|source| HarnessError::AtOffset {
            offset: offset.as_offsets(),
            source: Box::new(source),
        })?;
    }
    Ok(())
}
