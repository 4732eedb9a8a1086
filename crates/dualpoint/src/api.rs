//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI,
//!   benches and experiments. Breaking changes are allowed and expected.

// Points and conversions
pub use crate::point::{to_polar, to_rectangular, Point, PointCfg, Polar, RhoRule};
// Replayable samplers
pub use crate::sample::{
    draw_points, draw_polar_points, Region as SampleRegion, ReplayToken as PointReplay, SampleCfg,
};

use nalgebra::{Matrix2, Vector2};

/// Pre: `a`, `b` in any validity state; both end rectangular-synced.
/// Post: returns the signed area of the parallelogram spanned by the
/// rectangular views of `a` and `b`.
pub fn parallelogram_area(a: &mut Point, b: &mut Point) -> f64 {
    // determinant of [a b]
    let m = Matrix2::from_columns(&[a.rectangular(), b.rectangular()]);
    m.determinant()
}

/// Signed angle from `a` to `b` in `(-π, π]`, measured on the rectangular views.
pub fn angle_between(a: &mut Point, b: &mut Point) -> f64 {
    let u: Vector2<f64> = a.rectangular();
    let v: Vector2<f64> = b.rectangular();
    let cross = u.x * v.y - u.y * v.x;
    cross.atan2(u.dot(&v))
}
