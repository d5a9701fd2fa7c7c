//! Simple random number generator for reproducible weight initialization.
//!
//! This module provides a lightweight xorshift-based PRNG so that a network
//! built with a fixed seed always starts from the same weights.

use std::time::{SystemTime, UNIX_EPOCH};

const FALLBACK_SEED: u64 = 0x9e3779b97f4a7c15;

/// Xorshift RNG (not cryptographic).
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a new RNG with explicit seed (if zero, use a fixed value).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { FALLBACK_SEED } else { seed };
        Self { state }
    }

    /// Create an RNG seeded from the current time.
    pub fn from_time() -> Self {
        let mut rng = Self::new(FALLBACK_SEED);
        rng.reseed_from_time();
        rng
    }

    /// Reseed based on the current time.
    pub fn reseed_from_time(&mut self) {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        self.state = if nanos == 0 { FALLBACK_SEED } else { nanos };
    }

    /// Basic xorshift to generate u32.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        (x >> 32) as u32
    }

    /// Convert to [0, 1].
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / u32::MAX as f64
    }

    /// Uniform sample in [low, high].
    pub fn gen_range_f64(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(42);
        let mut rng2 = SimpleRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_uses_fallback() {
        let mut zero = SimpleRng::new(0);
        let mut fallback = SimpleRng::new(FALLBACK_SEED);
        assert_eq!(zero.next_u32(), fallback.next_u32());
    }

    #[test]
    fn test_rng_next_f64_range() {
        let mut rng = SimpleRng::new(12345);

        for _ in 0..1000 {
            let val = rng.next_f64();
            assert!((0.0..=1.0).contains(&val));
        }
    }

    #[test]
    fn test_rng_gen_range_f64() {
        let mut rng = SimpleRng::new(67890);

        for _ in 0..1000 {
            let val = rng.gen_range_f64(-1.0, 1.0);
            assert!((-1.0..=1.0).contains(&val));
        }
    }
}
