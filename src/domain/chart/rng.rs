//! Seeded linear congruential generator.
//!
//! `state' = (state * 1103515245 + 12345) mod (2^31 - 1)`, output `state' / (2^31 - 1)`.
//! The constants are fixed: a pair's chart must look the same on every render.

use rand::{Error, RngCore, SeedableRng};

const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;
const MODULUS: u64 = (1 << 31) - 1;

/// Deterministic pseudo-random source for synthetic charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self {
            state: u64::from(seed) % MODULUS,
        }
    }

    fn step(&mut self) -> u64 {
        // state < 2^31 and MULTIPLIER < 2^31, so the product fits in u64.
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.step() as f64 / MODULUS as f64
    }

    /// Next value in `[-1, 1)`.
    pub fn next_signed(&mut self) -> f64 {
        self.next_f64() * 2.0 - 1.0
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        (self.next_f64() * 4_294_967_296.0) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.next_u32());
        let lo = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 4];

    /// Little-endian `u32` seed; `Lcg::from_seed(n.to_le_bytes()) == Lcg::new(n)`.
    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_known_sequence() {
        let mut rng = Lcg::new(42);
        assert_eq!(rng.step(), 1_250_496_048);
        assert_eq!(rng.step(), 1_310_387_594);
        assert_eq!(rng.step(), 1_622_543_901);
    }

    #[test]
    fn test_zero_seed_advances() {
        let mut rng = Lcg::new(0);
        assert_eq!(rng.step(), INCREMENT);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Lcg::new(7_331);
        let mut b = Lcg::new(7_331);
        for _ in 0..1_000 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a: Vec<f64> = {
            let mut r = Lcg::new(1);
            (0..8).map(|_| r.next_f64()).collect()
        };
        let b: Vec<f64> = {
            let mut r = Lcg::new(2);
            (0..8).map(|_| r.next_f64()).collect()
        };
        assert_ne!(a, b);
    }

    #[test]
    fn test_output_in_unit_interval() {
        let mut rng = Lcg::new(u32::MAX);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn test_seedable_matches_new() {
        let mut a = Lcg::from_seed(99u32.to_le_bytes());
        let mut b = Lcg::new(99);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_rng_helpers_are_deterministic() {
        let mut a = Lcg::new(5);
        let mut b = Lcg::new(5);
        let xs: Vec<bool> = (0..64).map(|_| a.gen_bool(0.2)).collect();
        let ys: Vec<bool> = (0..64).map(|_| b.gen_bool(0.2)).collect();
        assert_eq!(xs, ys);
    }
}
