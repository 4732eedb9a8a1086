//! Random points in 2D (replay tokens, box and disk regions).
//!
//! Purpose
//! - Provide a small, deterministic sampler of `Point`s for property tests,
//!   benches and CLI batch runs.
//!
//! Model
//! - Each draw is keyed by a replay token `(seed, index)` mixed into a single RNG,
//!   so the `k`-th batch of a seed can be reproduced without replaying `0..k`.
//! - `draw_points` and `draw_polar_points` consume the RNG identically and
//!   return the same locations; they differ only in which view is
//!   authoritative.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::{to_polar, Point, PointCfg, RhoRule};

/// Sampling region centred at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Region {
    /// Uniform in `[-half_width, half_width]²`.
    Box { half_width: f64 },
    /// Uniform by area in the closed disk of `radius`.
    Disk { radius: f64 },
}

impl Region {
    fn sample<R: Rng>(&self, rng: &mut R) -> Vector2<f64> {
        match *self {
            Region::Box { half_width } => {
                let h = half_width.abs();
                let x = (rng.gen::<f64>() * 2.0 - 1.0) * h;
                let y = (rng.gen::<f64>() * 2.0 - 1.0) * h;
                Vector2::new(x, y)
            }
            Region::Disk { radius } => {
                let r = radius.abs() * rng.gen::<f64>().sqrt();
                let th = rng.gen::<f64>() * std::f64::consts::TAU - std::f64::consts::PI;
                Vector2::new(r * th.cos(), r * th.sin())
            }
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub region: Region,
    pub count: usize,
    /// Configuration copied into every sampled point.
    pub point_cfg: PointCfg,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            region: Region::Disk { radius: 1.0 },
            count: 16,
            point_cfg: PointCfg::default(),
        }
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
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the following batch of the same seed.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
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

fn draw_locations(cfg: &SampleCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    (0..cfg.count).map(|_| cfg.region.sample(&mut rng)).collect()
}

/// Draw `cfg.count` rectangular-authoritative points.
pub fn draw_points(cfg: SampleCfg, tok: ReplayToken) -> Vec<Point> {
    draw_locations(&cfg, tok)
        .into_iter()
        .map(|v| {
            let mut p = Point::with_cfg(cfg.point_cfg);
            p.set_rectangular(v.x, v.y);
            p
        })
        .collect()
}

/// Draw `cfg.count` polar-authoritative points at the same locations as `draw_points`.
///
/// The polar view is seeded with `RhoRule::Hypot` so no sample starts out NaN;
/// later rectangular → polar passes use `cfg.point_cfg`.
pub fn draw_polar_points(cfg: SampleCfg, tok: ReplayToken) -> Vec<Point> {
    draw_locations(&cfg, tok)
        .into_iter()
        .map(|v| {
            let pol = to_polar(v, RhoRule::Hypot);
            let mut p = Point::with_cfg(cfg.point_cfg);
            p.set_polar(pol.theta, pol.rho);
            p
        })
        .collect()
}
