//! Deterministic randomness primitives
//!
//! Nothing in this crate reads ambient randomness. Every draw flows through
//! an injected [`UnitRandom`] source, so a run replayed from the same seed
//! replays every roll.

use rand::Rng;

/// A source of uniform draws in `[0, 1)`.
///
/// Any `FnMut() -> f64` closure qualifies, which is what tests inject;
/// production code wraps a seeded [`rand::Rng`] in [`RngSource`]. A source
/// returning exactly `1.0` is malformed and not guarded against.
pub trait UnitRandom {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> UnitRandom for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Adapter exposing any [`rand::Rng`] as a [`UnitRandom`] source.
pub struct RngSource<R>(pub R);

impl<R: Rng> UnitRandom for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Uniform integer over the inclusive range `[0, max]`.
///
/// `max = 0` always yields 0 regardless of the draw.
pub fn random_integer(source: &mut impl UnitRandom, max: u32) -> u32 {
    (source.next_unit() * f64::from(max + 1)).floor() as u32
}

/// Fisher–Yates shuffle into a fresh vector; the input is left untouched.
///
/// Replaying the same source state replays the same permutation.
pub fn shuffle<T: Clone>(items: &[T], source: &mut impl UnitRandom) -> Vec<T> {
    let mut copied = items.to_vec();
    let mut m = copied.len();
    while m > 0 {
        let i = (source.next_unit() * m as f64).floor() as usize;
        m -= 1;
        copied.swap(m, i);
    }
    copied
}

/// Weighted choice over `(weight, value)` pairs.
///
/// Draws an integer in `[0, total_weight)` and walks the table, so an entry
/// wins proportionally to its weight. The table must be non-empty with a
/// positive total weight.
pub fn choose_by_ratio<T: Copy>(source: &mut impl UnitRandom, ratios: &[(u32, T)]) -> T {
    let total: u32 = ratios.iter().map(|(weight, _)| weight).sum();
    let mut draw = random_integer(source, total - 1);
    for (weight, value) in ratios {
        if draw < *weight {
            return *value;
        }
        draw -= weight;
    }
    // Only reachable when the source violates its [0, 1) contract.
    ratios[ratios.len() - 1].1
}
