//! RNG module - deterministic level randomness
//!
//! Implements Mulberry32, a tiny 32-bit generator whose whole state is one
//! word. The same seed always yields the same `[0, 1)` sequence, so a level is
//! fully reproducible from its seed.
//!
//! Also provides [`pick_unique`] for drawing distinct cell indices.

/// Mulberry32 generator.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero seed is treated as 1.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Generate a value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Generate a value in `[0, max)` as `floor(next_f64() * max)`
    pub fn below(&mut self, max: u32) -> u32 {
        (self.next_f64() * f64::from(max)).floor() as u32
    }
}

/// Draw `count` distinct integers in `[0, max)`, in first-drawn order.
///
/// Samples until enough distinct values have been seen.
///
/// # Panics
///
/// Panics if `count >= max`; callers must size their requests below the range.
pub fn pick_unique(rng: &mut SimpleRng, count: usize, max: usize) -> Vec<usize> {
    assert!(
        count < max,
        "pick_unique: count ({count}) must be smaller than max ({max})"
    );

    let mut picked = Vec::with_capacity(count);
    while picked.len() < count {
        let value = rng.below(max as u32) as usize;
        if !picked.contains(&value) {
            picked.push(value);
        }
    }
    picked
}

/// Draw an inclusive range value, e.g. a goal count.
pub(crate) fn draw_inclusive(rng: &mut SimpleRng, min: u32, max: u32) -> u32 {
    min + rng.below(max - min + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrayvec::ArrayVec;

    fn sample<const N: usize>(rng: &mut SimpleRng) -> ArrayVec<u32, N> {
        (0..N).map(|_| rng.next_u32()).collect()
    }

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        assert_eq!(sample::<100>(&mut rng1), sample::<100>(&mut rng2));
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_matches_one() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(sample::<8>(&mut zero), sample::<8>(&mut one));
    }

    #[test]
    fn test_mulberry32_reference_values() {
        // First outputs of Mulberry32(1).
        let mut rng = SimpleRng::new(1);
        assert_eq!(rng.next_u32(), 2_693_262_067);
        assert_eq!(rng.next_u32(), 11_749_833);
    }

    #[test]
    fn test_floats_stay_in_unit_interval() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_below_stays_in_range() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.below(25) < 25);
        }
        for _ in 0..100 {
            let v = draw_inclusive(&mut rng, 3, 5);
            assert!((3..=5).contains(&v));
        }
    }

    #[test]
    fn test_pick_unique_distinct_and_in_range() {
        let mut rng = SimpleRng::new(42);
        let picked = pick_unique(&mut rng, 5, 25);
        assert_eq!(picked.len(), 5);
        for (i, a) in picked.iter().enumerate() {
            assert!(*a < 25);
            assert!(!picked[i + 1..].contains(a));
        }
    }

    #[test]
    fn test_pick_unique_zero_count() {
        let mut rng = SimpleRng::new(42);
        assert!(pick_unique(&mut rng, 0, 25).is_empty());
    }

    #[test]
    #[should_panic(expected = "must be smaller than max")]
    fn test_pick_unique_rejects_full_range() {
        let mut rng = SimpleRng::new(42);
        let _ = pick_unique(&mut rng, 4, 4);
    }
}
