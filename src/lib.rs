//! Trueno Guard: Guard-Buffer Harness for Complex SIMD Kernels
//!
//! Hand-tuned kernels read and write raw memory with explicit strides and
//! alignment assumptions. A one-element overrun or an off-by-stride store
//! corrupts memory without crashing. **Trueno Guard** catches these by
//! surrounding every test operand with sentinel values and checking them
//! after the kernel has run.
//!
//! 1. **Guarded buffers** - contiguous and strided layouts with sentinel
//!    padding and sentinel gaps
//! 2. **Validators** - a boolean check for contiguous guards, and a zoned
//!    violation report (front/back/internal) for strided buffers
//! 3. **Equality oracle** - NaN-aware exact and absolute-or-relative
//!    comparison for `f32` and `Complex32`
//! 4. **Test vectors** - seeded random complex vectors and alignment offset
//!    matrices
//!
//! # Quick Start
//!
//! ```rust
//! use num_complex::Complex32;
//! use trueno_guard::{check_guard, check_values, GuardedBuffer, HarnessConfig};
//!
//! let config = HarnessConfig::quick();
//! let x = config.generator().complex(4, 1);
//!
//! let mut buf = config.guarded(&x, 1);
//! // kernel under test: scale by 2
//! for v in buf.payload_mut() {
//!     *v *= Complex32::new(2.0, 0.0);
//! }
//!
//! let want: Vec<Complex32> = x.iter().map(|&v| v * 2.0).collect();
//! check_values("scal", &buf.logical(), &want, config.tolerance).unwrap();
//! check_guard("scal", "x", &buf).unwrap();
//! ```
//!
//! # Known gap
//!
//! A stored value that compares equal to the sentinel is indistinguishable
//! from the sentinel, so the strided validator cannot flag it even at a gap
//! position. Use a sentinel the kernel cannot produce (NaN by default).

pub mod align;
pub mod check;
pub mod config;
pub mod element;
pub mod equality;
pub mod error;
pub mod guard;
pub mod random;
pub mod strided;

pub use align::{for_each_offset, ALIGN1, ALIGN2, ALIGN3};
pub use check::{check_guard, check_scalar, check_values};
pub use config::HarnessConfig;
pub use element::Element;
pub use equality::{approx_equal, exact_equal, slices_approx_equal, slices_equal};
pub use error::{HarnessError, Result};
pub use guard::{build_guarded_buffer, is_valid_guard, GuardedBuffer};
pub use random::{random_real_vector, random_vector, VectorGenerator};
pub use strided::{build_strided_guarded_buffer, check_strided_guard, GuardViolation, GuardZone};
