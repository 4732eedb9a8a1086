//! Dual-representation 2D points.
//!
//! A `Point` carries both a rectangular view `(x, y)` and a polar view
//! `(theta, rho)`. Writes make one view authoritative and mark the other
//! stale; reads of the stale view recompute it on demand.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - `api` is the curated surface for callers; `prelude` covers quick imports.

pub mod api;
pub mod point;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use point::{Point, PointCfg, Polar, RhoRule};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::point::{to_polar, to_rectangular, Point, PointCfg, Polar, RhoRule};
    pub use crate::sample::{draw_points, draw_polar_points, Region, ReplayToken, SampleCfg};
    pub use nalgebra::Vector2 as Vec2;
}
