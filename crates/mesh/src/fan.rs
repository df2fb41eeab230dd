use crate::geometry::{centroid, Triangle, Vector3};

/// Caps a loop of points by fanning triangles out from a center.
///
/// Each triangle is `(points[i], points[i + 1], center)`, and the loop wraps so the last point
/// is joined back to the first. The center defaults to the centroid of the loop; pass one
/// explicitly when the centroid would make the fan fold over itself, for instance on rings
/// that are not convex or not planar.
pub fn triangle_fan(points: &[Vector3], center: Option<Vector3>) -> Vec<Triangle> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    let center = center.unwrap_or_else(|| centroid(points));
    (0..n)
        .map(|i| Triangle::new(points[i], points[(i + 1) % n], center))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> [Vector3; 4] {
        [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(2.0, 2.0, 0.0),
            Vector3::new(0.0, 2.0, 0.0),
        ]
    }

    #[test]
    fn fan_around_centroid() {
        let points = square();
        let fan = triangle_fan(&points, None);
        assert_eq!(fan.len(), 4);
        let center = Vector3::new(1.0, 1.0, 0.0);
        for (i, t) in fan.iter().enumerate() {
            assert_eq!(t.p0, points[i]);
            assert_eq!(t.p1, points[(i + 1) % 4]);
            assert_eq!(t.p2, center);
            // Counter-clockwise loop gives +z facing triangles.
            assert!(t.cross().z > 0.0);
        }
    }

    #[test]
    fn fan_with_explicit_center() {
        let apex = Vector3::new(1.0, 1.0, 3.0);
        let fan = triangle_fan(&square(), Some(apex));
        assert!(fan.iter().all(|t| t.p2 == apex));
    }

    #[test]
    fn too_few_points() {
        assert!(triangle_fan(&[], None).is_empty());
        assert!(triangle_fan(&[Vector3::new(1.0, 0.0, 0.0)], None).is_empty());
    }
}
