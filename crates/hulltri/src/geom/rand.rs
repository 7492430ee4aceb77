//! Random integer scatters (uniform box + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic point-set sampler for the hull/triangle
//!   pipeline. The sampler takes an explicit replay token instead of touching
//!   any process-global source, so draws are reproducible and indexable.
//!
//! Model
//! - Each coordinate is drawn independently and uniformly (with replacement)
//!   from the closed interval `[coord_min, coord_max]`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{GeomError, Point};

/// Uniform-scatter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    /// Number of points to draw. Zero is allowed and yields an empty set.
    pub count: usize,
    /// Inclusive lower coordinate bound.
    pub coord_min: i32,
    /// Inclusive upper coordinate bound. Must be >= `coord_min`.
    pub coord_max: i32,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            count: 20,
            coord_min: -400,
            coord_max: 400,
        }
    }
}

impl ScatterCfg {
    fn validate(&self) -> Result<(), GeomError> {
        if self.coord_min > self.coord_max {
            return Err(GeomError::invalid("coord_min <= coord_max required"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw exactly `cfg.count` points, each coordinate uniform over the closed
/// interval `[cfg.coord_min, cfg.coord_max]`.
pub fn draw_points_uniform(cfg: ScatterCfg, tok: ReplayToken) -> Result<Vec<Point>, GeomError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let pts = (0..cfg.count)
        .map(|_| {
            let x = rng.gen_range(cfg.coord_min..=cfg.coord_max);
            let y = rng.gen_range(cfg.coord_min..=cfg.coord_max);
            Point::new(x, y)
        })
        .collect();
    Ok(pts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = ScatterCfg {
            count: 12,
            coord_min: -50,
            coord_max: 50,
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_points_uniform(cfg, tok).expect("points");
        let p2 = draw_points_uniform(cfg, tok).expect("points");
        assert_eq!(p1, p2);
        let other = draw_points_uniform(cfg, ReplayToken { seed: 42, index: 8 }).expect("points");
        assert_ne!(p1, other);
    }

    #[test]
    fn bounds_are_inclusive_and_respected() {
        let cfg = ScatterCfg {
            count: 64,
            coord_min: -3,
            coord_max: 3,
        };
        let pts = draw_points_uniform(cfg, ReplayToken { seed: 9, index: 0 }).expect("points");
        assert_eq!(pts.len(), 64);
        assert!(pts
            .iter()
            .all(|p| (-3..=3).contains(&p.x) && (-3..=3).contains(&p.y)));
    }

    #[test]
    fn zero_count_yields_empty_set() {
        let cfg = ScatterCfg {
            count: 0,
            ..Default::default()
        };
        let pts = draw_points_uniform(cfg, ReplayToken { seed: 1, index: 0 }).expect("points");
        assert!(pts.is_empty());
    }

    #[test]
    fn single_value_interval_is_allowed() {
        let cfg = ScatterCfg {
            count: 4,
            coord_min: 5,
            coord_max: 5,
        };
        let pts = draw_points_uniform(cfg, ReplayToken { seed: 3, index: 0 }).expect("points");
        assert_eq!(pts, vec![Point::new(5, 5); 4]);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let cfg = ScatterCfg {
            count: 5,
            coord_min: 10,
            coord_max: -10,
        };
        let err = draw_points_uniform(cfg, ReplayToken { seed: 1, index: 0 }).unwrap_err();
        assert!(matches!(err, GeomError::InvalidParams { .. }));
    }
}
