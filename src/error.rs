//! Error types for guard-check failures

use thiserror::Error;

use crate::strided::GuardZone;

/// Result type for harness checks
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Failures surfaced by the checking helpers
///
/// Buffer builders and validators never return errors; these variants are
/// produced only when a caller asks for a pass/fail verdict.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// Kernel output differs from the expected logical result
    #[error("{name}: unexpected value at {index} Got: {got} Expected: {expected}")]
    UnexpectedValue {
        /// Test case name
        name: String,
        /// Logical index of the first mismatch
        index: usize,
        /// Value produced by the kernel
        got: String,
        /// Value the test expected
        expected: String,
    },

    /// Sentinel padding of a contiguous buffer was overwritten
    #[error("{name}: Guard violated in {which} vector {front} {back}")]
    GuardViolated {
        /// Test case name
        name: String,
        /// Which operand (e.g. "x", "y")
        which: String,
        /// Rendered front guard contents
        front: String,
        /// Rendered back guard contents
        back: String,
    },

    /// Sentinel of a strided buffer was overwritten
    #[error("{name}: {zone} guard violated in {which} vector at {index}")]
    StridedGuardViolated {
        /// Test case name
        name: String,
        /// Which operand
        which: String,
        /// Zone that was corrupted
        zone: GuardZone,
        /// Zone-relative offset of the first violation
        index: usize,
    },

    /// Output length differs from the expected length
    #[error("{name}: length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Test case name
        name: String,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// A failure raised while running at a specific alignment offset
    #[error("offset {offset:?}: {source}")]
    AtOffset {
        /// Offsets in effect when the failure happened
        offset: Vec<usize>,
        /// Underlying failure
        #[source]
        source: Box<HarnessError>,
    },
}
