//! Seeded deterministic 2D noise queries.

use std::fmt;

use noise::{NoiseFn, Perlin};

/// Seeded 2D noise source with raw, normalized, and fractal queries.
///
/// A thin layer over a Perlin module. Every query is a pure function of
/// (seed, x, y, scale), so repeated queries with identical arguments return
/// identical values; there is no hidden mutable state beyond the seed.
#[derive(Clone)]
pub struct NoiseField {
    seed: i64,
    source: Perlin,
}

impl NoiseField {
    pub fn new(seed: i64) -> Self {
        Self {
            seed,
            source: Perlin::new(seed as u32),
        }
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Raw noise at (x, y) in [-1, 1].
    pub fn value(&self, x: f64, y: f64, scale: f64) -> f64 {
        self.source.get([x * scale, y * scale])
    }

    /// Noise remapped to [0, 1].
    pub fn normalized(&self, x: f64, y: f64, scale: f64) -> f64 {
        (self.value(x, y, scale) + 1.0) / 2.0
    }

    /// Fractal noise in [0, 1]: `octaves` samples at geometrically doubling
    /// frequency and `persistence`-decaying amplitude, divided by the sum of
    /// amplitudes used. `octaves` must be at least 1.
    pub fn layered(&self, x: f64, y: f64, octaves: u32, persistence: f64, scale: f64) -> f64 {
        let mut total = 0.0;
        let mut frequency = scale;
        let mut amplitude = 1.0;
        let mut max_value = 0.0;

        for _ in 0..octaves {
            total += self.source.get([x * frequency, y * frequency]) * amplitude;
            max_value += amplitude;
            amplitude *= persistence;
            frequency *= 2.0;
        }

        (total / max_value + 1.0) / 2.0
    }

    /// True when the normalized sample exceeds `threshold`.
    pub fn thresholded(&self, x: f64, y: f64, threshold: f64, scale: f64) -> bool {
        self.normalized(x, y, scale) > threshold
    }
}

impl fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseField").field("seed", &self.seed).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_stays_in_range() {
        let noise = NoiseField::new(7);
        for y in 0..40 {
            for x in 0..40 {
                let v = noise.value(x as f64, y as f64, 0.13);
                assert!((-1.0..=1.0).contains(&v), "value {v} out of range at ({x}, {y})");
            }
        }
    }

    #[test]
    fn normalized_stays_in_unit_range() {
        let noise = NoiseField::new(7);
        for y in 0..40 {
            for x in 0..40 {
                let v = noise.normalized(x as f64, y as f64, 0.13);
                assert!((0.0..=1.0).contains(&v), "normalized {v} out of range");
            }
        }
    }

    #[test]
    fn layered_stays_in_unit_range() {
        let noise = NoiseField::new(99);
        for y in 0..40 {
            for x in 0..40 {
                let v = noise.layered(x as f64, y as f64, 3, 0.5, 0.1);
                assert!((0.0..=1.0).contains(&v), "layered {v} out of range");
            }
        }
    }

    #[test]
    fn queries_are_idempotent() {
        let noise = NoiseField::new(42);
        assert_eq!(noise.value(3.7, 8.2, 0.2), noise.value(3.7, 8.2, 0.2));
        assert_eq!(
            noise.layered(3.7, 8.2, 4, 0.5, 0.1),
            noise.layered(3.7, 8.2, 4, 0.5, 0.1)
        );
    }

    #[test]
    fn same_seed_same_field() {
        let a = NoiseField::new(123);
        let b = NoiseField::new(123);
        for i in 0..20 {
            let (x, y) = (i as f64 * 1.3, i as f64 * 0.7);
            assert_eq!(a.value(x, y, 0.3), b.value(x, y, 0.3));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let a = NoiseField::new(1);
        let b = NoiseField::new(2);
        let diverged = (0..50).any(|i| {
            let (x, y) = (i as f64 * 0.9, i as f64 * 1.7);
            a.value(x, y, 0.3) != b.value(x, y, 0.3)
        });
        assert!(diverged, "seeds 1 and 2 produced identical fields");
    }

    #[test]
    fn thresholded_matches_normalized() {
        let noise = NoiseField::new(5);
        for i in 0..30 {
            let (x, y) = (i as f64 * 0.6, i as f64 * 1.1);
            assert_eq!(
                noise.thresholded(x, y, 0.5, 0.2),
                noise.normalized(x, y, 0.2) > 0.5
            );
        }
    }
}
