//! RNG module - deterministic randomness for spawns.
//!
//! A simple LCG is all the game needs: one seed reproduces one game,
//! which keeps tests and replays deterministic. Used for picking the
//! spawn cell and for the 2-vs-4 value draw.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// True with probability `percent` / 100.
    pub fn percent_chance(&mut self, percent: u32) -> bool {
        self.next_range(100) < percent
    }

    /// Get the current RNG state (for restarting with a derived seed)
    pub fn state(&self) -> u32 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        // Different seeds should eventually diverge
        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_guard() {
        let mut rng = SimpleRng::new(0);
        // Must not get stuck at zero.
        assert_ne!(rng.next_u32(), 0u32.wrapping_mul(1664525));
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(16) < 16);
        }
    }

    #[test]
    fn test_percent_chance_extremes() {
        let mut rng = SimpleRng::new(3);
        for _ in 0..100 {
            assert!(!rng.percent_chance(0));
            assert!(rng.percent_chance(100));
        }
    }

    #[test]
    fn test_percent_chance_rough_rate() {
        let mut rng = SimpleRng::new(2024);
        let hits = (0..10_000).filter(|_| rng.percent_chance(10)).count();
        // 10% +- generous slack for a cheap LCG.
        assert!((500..1500).contains(&hits), "hits = {hits}");
    }
}
