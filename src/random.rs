//! Pseudo-random test vectors
//!
//! Vectors produced here are raw strided carriers: every slot, including the
//! ones between logical elements, holds a random value. Wrap the result with
//! [`GuardedBuffer`](crate::GuardedBuffer) when guards are needed too.

use num_complex::Complex32;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Physical length of a strided carrier for `n` logical elements
#[inline]
pub fn strided_len(n: usize, inc: isize) -> usize {
    if n == 0 {
        return 0;
    }
    (n - 1) * inc.unsigned_abs().max(1) + 1
}

/// Random complex vector of `(n - 1) * |inc| + 1` elements
///
/// Real and imaginary parts are drawn independently, uniform in `[0, 1)`.
pub fn random_vector<R: Rng + ?Sized>(rng: &mut R, n: usize, inc: isize) -> Vec<Complex32> {
    (0..strided_len(n, inc))
        .map(|_| Complex32::new(rng.gen::<f64>() as f32, rng.gen::<f64>() as f32))
        .collect()
}

/// Real-valued counterpart of [`random_vector`]
pub fn random_real_vector<R: Rng + ?Sized>(rng: &mut R, n: usize, inc: isize) -> Vec<f32> {
    (0..strided_len(n, inc))
        .map(|_| rng.gen::<f64>() as f32)
        .collect()
}

/// Owning generator for test vectors
///
/// Seeded generators reproduce the same sequence of vectors, which keeps a
/// failing case replayable.
///
/// # Examples
///
/// ```
/// use trueno_guard::VectorGenerator;
///
/// let a = VectorGenerator::seeded(42).complex(8, -2);
/// let b = VectorGenerator::seeded(42).complex(8, -2);
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 15);
/// ```
#[derive(Debug, Clone)]
pub struct VectorGenerator {
    rng: ChaCha8Rng,
}

impl VectorGenerator {
    /// Deterministic generator
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Next uniform value in `[0, 1)`
    pub fn next_float(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// See [`random_vector`]
    pub fn complex(&mut self, n: usize, inc: isize) -> Vec<Complex32> {
        random_vector(&mut self.rng, n, inc)
    }

    /// See [`random_real_vector`]
    pub fn real(&mut self, n: usize, inc: isize) -> Vec<f32> {
        random_real_vector(&mut self.rng, n, inc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strided_len() {
        assert_eq!(strided_len(0, 3), 0);
        assert_eq!(strided_len(1, 7), 1);
        assert_eq!(strided_len(4, 1), 4);
        assert_eq!(strided_len(4, 3), 10);
        assert_eq!(strided_len(4, -3), 10);
        assert_eq!(strided_len(4, 0), 4);
    }

    #[test]
    fn test_random_vector_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let v = random_vector(&mut rng, 100, 2);
        assert_eq!(v.len(), 199);
        for z in &v {
            assert!((0.0..=1.0).contains(&z.re), "re out of range: {}", z.re);
            assert!((0.0..=1.0).contains(&z.im), "im out of range: {}", z.im);
        }
    }

    #[test]
    fn test_parts_are_independent() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let v = random_vector(&mut rng, 64, 1);
        assert!(v.iter().any(|z| z.re != z.im));
    }

    #[test]
    fn test_empty_vector() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(random_vector(&mut rng, 0, 5).is_empty());
        assert!(random_real_vector(&mut rng, 0, -5).is_empty());
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let mut a = VectorGenerator::seeded(3);
        let mut b = VectorGenerator::seeded(3);
        assert_eq!(a.real(10, 1), b.real(10, 1));
        assert_eq!(a.complex(5, 4), b.complex(5, 4));
        assert_eq!(a.next_float(), b.next_float());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = VectorGenerator::seeded(1).real(16, 1);
        let b = VectorGenerator::seeded(2).real(16, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_dyn_rng_is_accepted() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        assert_eq!(random_real_vector(dyn_rng, 3, 2).len(), 5);
    }
}
