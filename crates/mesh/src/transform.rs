use cgmath::{Deg, ElementWise, InnerSpace, Matrix3};

use crate::geometry::Vector3;

/// Rotates `point` by `degrees` around the line through `pivot` along `axis`.
///
/// Positive angles turn counter-clockwise when looking down the axis towards the pivot. The
/// axis does not need to be normalized; a zero axis leaves the point where it is.
pub fn rotate_about(point: Vector3, pivot: Vector3, axis: Vector3, degrees: f64) -> Vector3 {
    if axis.magnitude2() == 0.0 {
        return point;
    }
    let rotation = Matrix3::from_axis_angle(axis.normalize(), Deg(degrees));
    rotation * (point - pivot) + pivot
}

/// Uniformly scales `point` away from (or towards) `pivot`.
pub fn scale_about(point: Vector3, pivot: Vector3, factor: f64) -> Vector3 {
    (point - pivot) * factor + pivot
}

/// Scales `point` relative to `pivot` with an independent factor per axis.
pub fn scale_about_by(point: Vector3, pivot: Vector3, factors: Vector3) -> Vector3 {
    (point - pivot).mul_element_wise(factors) + pivot
}
