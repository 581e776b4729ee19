//! Harness configuration
//!
//! Collects the knobs a kernel test suite shares across its cases: guard
//! length, sentinels, tolerance and the random seed. Each test case builds
//! its own buffers from the config; nothing here is global.
//!
//! # Examples
//!
//! ```
//! use trueno_guard::HarnessConfig;
//!
//! let config = HarnessConfig::new()
//!     .with_guard_len(8)
//!     .with_tolerance(1e-5)
//!     .with_seed(42)
//!     .build();
//!
//! let x = config.generator().complex(16, 1);
//! let buf = config.guarded(&x, -2);
//! assert!(buf.is_valid());
//! ```

use num_complex::Complex32;

use crate::element::Element;
use crate::guard::GuardedBuffer;
use crate::random::VectorGenerator;

/// Shared settings for a suite of kernel checks
#[derive(Debug, Clone, PartialEq)]
pub struct HarnessConfig {
    /// Sentinel elements on each side of a payload
    pub guard_len: usize,
    /// Sentinel for complex buffers
    pub sentinel: Complex32,
    /// Sentinel for real buffers
    pub real_sentinel: f32,
    /// Tolerance for approximate comparisons (absolute and relative)
    pub tolerance: f32,
    /// Seed for test vectors; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            guard_len: 4,
            sentinel: <Complex32 as Element>::nan(),
            real_sentinel: f32::NAN,
            tolerance: 1e-6,
            seed: None,
        }
    }
}

impl HarnessConfig {
    /// Default configuration: 4-element NaN guards, 1e-6 tolerance, OS seed
    pub fn new() -> Self {
        Self::default()
    }

    /// Set guard length
    ///
    /// # Examples
    ///
    /// ```
    /// use trueno_guard::HarnessConfig;
    ///
    /// let config = HarnessConfig::new().with_guard_len(16);
    /// assert_eq!(config.guard_len, 16);
    /// ```
    pub fn with_guard_len(mut self, guard_len: usize) -> Self {
        self.guard_len = guard_len;
        self
    }

    /// Set complex sentinel
    pub fn with_sentinel(mut self, sentinel: Complex32) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Set real sentinel
    pub fn with_real_sentinel(mut self, sentinel: f32) -> Self {
        self.real_sentinel = sentinel;
        self
    }

    /// Set comparison tolerance
    ///
    /// Negative and NaN values are clamped to 0 (exact comparison).
    ///
    /// # Examples
    ///
    /// ```
    /// use trueno_guard::HarnessConfig;
    ///
    /// assert_eq!(HarnessConfig::new().with_tolerance(-1.0).tolerance, 0.0);
    /// ```
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = if tolerance > 0.0 { tolerance } else { 0.0 };
        self
    }

    /// Fix the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Finalize configuration (no-op, for builder pattern consistency)
    pub fn build(self) -> Self {
        self
    }

    /// Small guards and a fixed seed, for fast CI runs
    ///
    /// - 2-element guards
    /// - 1e-6 tolerance
    /// - seed 1
    pub fn quick() -> Self {
        Self::new().with_guard_len(2).with_seed(1)
    }

    /// Wide guards for catching long overruns
    ///
    /// - 64-element guards, wider than any vector register
    /// - 1e-6 tolerance
    /// - OS seed
    pub fn thorough() -> Self {
        Self::new().with_guard_len(64)
    }

    /// Vector generator honoring `seed`
    pub fn generator(&self) -> VectorGenerator {
        match self.seed {
            Some(seed) => VectorGenerator::seeded(seed),
            None => VectorGenerator::from_entropy(),
        }
    }

    /// Complex buffer guarded with this config's sentinel and guard length
    pub fn guarded(&self, vec: &[Complex32], inc: isize) -> GuardedBuffer<Complex32> {
        GuardedBuffer::strided(vec, self.sentinel, inc, self.guard_len)
    }

    /// Real buffer guarded with this config's real sentinel and guard length
    pub fn guarded_real(&self, vec: &[f32], inc: isize) -> GuardedBuffer<f32> {
        GuardedBuffer::strided(vec, self.real_sentinel, inc, self.guard_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equality::exact_equal;

    #[test]
    fn test_default_config() {
        let config = HarnessConfig::default();
        assert_eq!(config.guard_len, 4);
        assert!(exact_equal(config.sentinel, <Complex32 as Element>::nan()));
        assert!(config.real_sentinel.is_nan());
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = HarnessConfig::new()
            .with_guard_len(3)
            .with_sentinel(Complex32::new(-1.0, -1.0))
            .with_real_sentinel(-1.0)
            .with_tolerance(1e-3)
            .with_seed(9)
            .build();

        assert_eq!(config.guard_len, 3);
        assert_eq!(config.sentinel, Complex32::new(-1.0, -1.0));
        assert_eq!(config.real_sentinel, -1.0);
        assert_eq!(config.tolerance, 1e-3);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_tolerance_clamping() {
        assert_eq!(HarnessConfig::new().with_tolerance(-0.5).tolerance, 0.0);
        assert_eq!(HarnessConfig::new().with_tolerance(f32::NAN).tolerance, 0.0);
        assert_eq!(HarnessConfig::new().with_tolerance(0.25).tolerance, 0.25);
    }

    #[test]
    fn test_presets() {
        let quick = HarnessConfig::quick();
        assert_eq!(quick.guard_len, 2);
        assert_eq!(quick.seed, Some(1));

        let thorough = HarnessConfig::thorough();
        assert_eq!(thorough.guard_len, 64);
        assert_eq!(thorough.seed, None);
    }

    #[test]
    fn test_seeded_generator_matches_config() {
        let config = HarnessConfig::quick();
        assert_eq!(config.generator().real(8, 1), config.generator().real(8, 1));
    }

    #[test]
    fn test_guarded_uses_config() {
        let config = HarnessConfig::new().with_guard_len(3).with_real_sentinel(-7.0);
        let buf = config.guarded_real(&[1.0, 2.0], 2);
        assert_eq!(buf.guard_len(), 3);
        assert_eq!(buf.front_guard(), &[-7.0, -7.0, -7.0]);
        assert_eq!(buf.as_slice().len(), 2 * 2 + 6);

        let cbuf = config.guarded(&[Complex32::new(1.0, 0.0)], 1);
        assert!(cbuf.is_valid());
    }
}
