//! Rho recovery on and near the x-axis, default rule vs `Hypot`.
//!
//! Purpose
//! - Show where the `SineQuotient` rule yields NaN or a collapsed radius, and
//!   what the hardened rule returns for the same inputs.

use dualpoint::{Point, PointCfg};

fn main() {
    let inputs = [
        (5.0, 0.0),
        (-5.0, 0.0),
        (0.0, 0.0),
        (5.0, 1e-300),
        (5.0, 2.0),
    ];
    for (x, y) in inputs {
        let mut faithful = Point::from_rectangular(x, y);
        let mut hardened = Point::with_cfg(PointCfg::hardened());
        hardened.set_rectangular(x, y);
        println!(
            "x={x:?} y={y:?} sine_quotient={} hypot={}",
            faithful.render(),
            hardened.render()
        );
    }
}
