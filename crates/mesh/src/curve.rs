use crate::error::{MeshError, Result};
use crate::geometry::{Curve, Vector3};

/// Whether a curve repeats its first point at the end, or a ring of curves wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Closure {
    #[default]
    Open,
    Closed,
}

/// Samples `point_count` points along a circular arc in the z = `center.z` plane.
///
/// The points are spaced at equal angular steps from `start_deg` to `end_deg` inclusive, so a
/// full turn (0 to 360) already ends on top of its first point. `Closure::Closed` appends an
/// exact copy of the first point on top of that.
pub fn arc(
    center: Vector3,
    radius: f64,
    point_count: usize,
    start_deg: f64,
    end_deg: f64,
    closure: Closure,
) -> Result<Curve> {
    if point_count < 2 {
        return Err(MeshError::TooFewPoints(point_count));
    }

    let start = start_deg.to_radians();
    let end = end_deg.to_radians();
    let step = (end - start) / (point_count - 1) as f64;

    let mut points = Curve::with_capacity(point_count + 1);
    for i in 0..point_count {
        let angle = start + i as f64 * step;
        points.push(Vector3 {
            x: angle.cos() * radius + center.x,
            y: angle.sin() * radius + center.y,
            z: center.z,
        });
    }
    if closure == Closure::Closed {
        points.push(points[0]);
    }
    Ok(points)
}

/// A full turn; shorthand for `arc(center, radius, point_count, 0, 360, closure)`.
pub fn circle(center: Vector3, radius: f64, point_count: usize, closure: Closure) -> Result<Curve> {
    arc(center, radius, point_count, 0.0, 360.0, closure)
}
