use nalgebra::Vector2;

use super::types::{Polar, RhoRule};

/// Polar → rectangular: `(rho cos θ, rho sin θ)`.
#[inline]
pub fn to_rectangular(p: Polar) -> Vector2<f64> {
    let (sin, cos) = p.theta.sin_cos();
    Vector2::new(p.rho * cos, p.rho * sin)
}

/// Rectangular → polar with `theta = atan2(y, x)` and `rho` per `rule`.
#[inline]
pub fn to_polar(v: Vector2<f64>, rule: RhoRule) -> Polar {
    let theta = v.y.atan2(v.x);
    let rho = match rule {
        RhoRule::SineQuotient => v.y / theta.sin(),
        RhoRule::Hypot => v.x.hypot(v.y),
    };
    Polar { theta, rho }
}
