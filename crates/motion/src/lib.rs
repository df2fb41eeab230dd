mod oscillator;
mod tracker;

pub use oscillator::*;
pub use tracker::*;

/// Linear interpolation: `start` at `factor == 0`, `end` at `factor == 1`.
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    (1.0 - factor) * start + factor * end
}

/// Clamps `value` between two bounds given in either order.
pub fn clamp(value: f64, a: f64, b: f64) -> f64 {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    low.max(value.min(high))
}

/// -1, 0 or 1. Unlike `f64::signum`, zero maps to zero.
pub(crate) fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Elapsed time as a usable step. Time never runs backwards.
pub(crate) fn elapsed(delta_ms: f64) -> f64 {
    if delta_ms.is_finite() && delta_ms > 0.0 {
        delta_ms
    } else {
        0.0
    }
}
