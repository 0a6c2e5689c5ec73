//! Seeded random point clouds for tests and benchmarks.
//!
//! Determinism: the same `(cfg, seed)` always yields the same points.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;

/// Uniform square cloud configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    /// Coordinates are drawn from `[-half_extent, half_extent]`. Negative values are
    /// treated as their magnitude.
    pub half_extent: i32,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 100,
            half_extent: 1_000,
        }
    }
}

/// Draw `cfg.count` points uniformly from the square.
pub fn draw_points(cfg: CloudCfg, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let r = cfg.half_extent.saturating_abs();
    (0..cfg.count)
        .map(|_| Point::new(rng.gen_range(-r..=r), rng.gen_range(-r..=r)))
        .collect()
}
