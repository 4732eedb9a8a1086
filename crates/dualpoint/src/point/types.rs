//! Value types and configuration for dual-representation points.
//!
//! - `Polar`: angle/radius pair `(theta, rho)`.
//! - `RhoRule`: how rho is recovered from a rectangular `(x, y)`.
//! - `PointCfg`: per-point configuration, copied into each `Point`.

/// Polar coordinates: angle `theta` (radians) and radius `rho`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Polar {
    pub theta: f64,
    pub rho: f64,
}

impl Polar {
    #[inline]
    pub fn new(theta: f64, rho: f64) -> Self {
        Self { theta, rho }
    }
}

/// Rule for recovering `rho` during a rectangular → polar pass.
///
/// `theta` is always `atan2(y, x)`; the rules differ only in `rho`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RhoRule {
    /// `rho = y / sin(theta)`.
    ///
    /// Degenerate on the non-negative x-axis: `theta == 0` gives `0 / 0 = NaN`.
    /// The special value is propagated unchanged.
    #[default]
    SineQuotient,
    /// `rho = hypot(x, y)`; finite for all finite inputs.
    Hypot,
}

/// Point configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointCfg {
    pub rho_rule: RhoRule,
}

impl PointCfg {
    /// Configuration using the `Hypot` rule.
    #[inline]
    pub fn hardened() -> Self {
        Self {
            rho_rule: RhoRule::Hypot,
        }
    }
}
