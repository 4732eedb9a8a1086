//! Lazily synchronized rectangular/polar point.
//!
//! Model
//! - A `Point` stores both views plus two validity flags. At least one flag is
//!   always set; the set one is authoritative.
//! - Setters overwrite one view and mark the other stale. Accessors of a stale
//!   view recompute it from the authoritative one (`to_rectangular`,
//!   `to_polar`) and mark it valid.
//! - Accessors therefore take `&mut self`. `Display` renders a synced copy.
//!
//! Numerics
//! - The rectangular → polar pass uses `PointCfg::rho_rule`. The default
//!   `RhoRule::SineQuotient` yields NaN on the non-negative x-axis; see
//!   `RhoRule` for the hardened alternative.

mod convert;
mod types;

use std::fmt;

use nalgebra::Vector2;

pub use convert::{to_polar, to_rectangular};
pub use types::{PointCfg, Polar, RhoRule};

/// 2D point with a rectangular view `(x, y)` and a polar view `(theta, rho)`.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    xy: Vector2<f64>,
    polar: Polar,
    rectangular_valid: bool,
    polar_valid: bool,
    cfg: PointCfg,
}

impl Default for Point {
    fn default() -> Self {
        Self::with_cfg(PointCfg::default())
    }
}

impl Point {
    /// Origin, both views valid.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Origin with an explicit configuration.
    #[inline]
    pub fn with_cfg(cfg: PointCfg) -> Self {
        Self {
            xy: Vector2::zeros(),
            polar: Polar::default(),
            rectangular_valid: true,
            polar_valid: true,
            cfg,
        }
    }

    /// Rectangular-authoritative point (polar view stale).
    pub fn from_rectangular(x: f64, y: f64) -> Self {
        let mut p = Self::new();
        p.set_rectangular(x, y);
        p
    }

    /// Polar-authoritative point (rectangular view stale).
    pub fn from_polar(theta: f64, rho: f64) -> Self {
        let mut p = Self::new();
        p.set_polar(theta, rho);
        p
    }

    #[inline]
    pub fn cfg(&self) -> PointCfg {
        self.cfg
    }

    #[inline]
    pub fn is_rectangular_valid(&self) -> bool {
        self.rectangular_valid
    }

    #[inline]
    pub fn is_polar_valid(&self) -> bool {
        self.polar_valid
    }

    pub fn x(&mut self) -> f64 {
        self.make_rectangular();
        self.xy.x
    }

    pub fn y(&mut self) -> f64 {
        self.make_rectangular();
        self.xy.y
    }

    pub fn theta(&mut self) -> f64 {
        self.make_polar();
        self.polar.theta
    }

    pub fn rho(&mut self) -> f64 {
        self.make_polar();
        self.polar.rho
    }

    /// Synced rectangular view as a vector.
    pub fn rectangular(&mut self) -> Vector2<f64> {
        self.make_rectangular();
        self.xy
    }

    /// Synced polar view.
    pub fn polar(&mut self) -> Polar {
        self.make_polar();
        self.polar
    }

    /// Overwrite `(x, y)`; the polar view becomes stale.
    pub fn set_rectangular(&mut self, x: f64, y: f64) {
        self.xy = Vector2::new(x, y);
        self.rectangular_valid = true;
        self.polar_valid = false;
    }

    /// Overwrite `(theta, rho)`; the rectangular view becomes stale.
    pub fn set_polar(&mut self, theta: f64, rho: f64) {
        self.polar = Polar { theta, rho };
        self.polar_valid = true;
        self.rectangular_valid = false;
    }

    /// Add `angle` to theta. Reads the synced polar view first.
    pub fn rotate(&mut self, angle: f64) {
        let theta = self.theta();
        let rho = self.rho();
        self.set_polar(theta + angle, rho);
    }

    /// Translate by `(dx, dy)`. Reads the synced rectangular view first.
    pub fn offset(&mut self, dx: f64, dy: f64) {
        let x = self.x();
        let y = self.y();
        self.set_rectangular(x + dx, y + dy);
    }

    /// Bring both views up to date.
    pub fn sync(&mut self) {
        self.make_rectangular();
        self.make_polar();
    }

    /// Sync in place and render as `(x, y)[theta : rho]`.
    pub fn render(&mut self) -> String {
        let (x, y, theta, rho) = (self.x(), self.y(), self.theta(), self.rho());
        format!("({x:?}, {y:?})[{theta:?} : {rho:?}]")
    }

    fn make_rectangular(&mut self) {
        if !self.rectangular_valid {
            self.xy = to_rectangular(self.polar);
            self.rectangular_valid = true;
        }
    }

    fn make_polar(&mut self) {
        if !self.polar_valid {
            self.polar = to_polar(self.xy, self.cfg.rho_rule);
            self.polar_valid = true;
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut synced = *self;
        f.write_str(&synced.render())
    }
}
