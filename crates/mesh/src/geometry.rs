use cgmath::{InnerSpace, Zero};

pub type Vector3 = cgmath::Vector3<f64>;

// We rely on Vector3 being repr(c) so that point buffers can be viewed as flat floats.
static_assertions::assert_eq_size!(Vector3, [f64; 3]);
static_assertions::assert_eq_align!(Vector3, f64);

/// An ordered run of points sampled along an arc or circle.
///
/// Consecutive points are neighbours on the final surface. A curve is only closed (last point
/// equal to the first) when it was generated with [`crate::Closure::Closed`].
pub type Curve = Vec<Vector3>;

#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Triangle {
    pub p0: Vector3,
    pub p1: Vector3,
    pub p2: Vector3,
}

impl Triangle {
    pub fn new(p0: Vector3, p1: Vector3, p2: Vector3) -> Self {
        Self { p0, p1, p2 }
    }

    /// The un-normalized face normal, following the right hand rule over p0 -> p1 -> p2.
    ///
    /// The magnitude is twice the triangle area, so degenerate triangles yield a zero vector.
    pub fn cross(&self) -> Vector3 {
        (self.p1 - self.p0).cross(self.p2 - self.p0)
    }

    pub fn is_degenerate(&self) -> bool {
        self.cross().magnitude2() == 0.0
    }

    pub fn points(&self) -> [Vector3; 3] {
        [self.p0, self.p1, self.p2]
    }
}

/// A single ribbon face.
///
/// The points are stored in winding order:
///
/// ```text
///    p0 ----- p1
///    |      / |
///    |    /   |
///    |  /     |
///    p3 ----- p2
/// ```
///
/// Triangulation always cuts along the p0 -> p2 diagonal.
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Quad {
    pub p0: Vector3,
    pub p1: Vector3,
    pub p2: Vector3,
    pub p3: Vector3,
}

impl Quad {
    pub fn new(p0: Vector3, p1: Vector3, p2: Vector3, p3: Vector3) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Returns the same face with the opposite winding (p3, p2, p1, p0).
    pub fn reversed(&self) -> Self {
        Self {
            p0: self.p3,
            p1: self.p2,
            p2: self.p1,
            p3: self.p0,
        }
    }

    /// Splits the quad into (p0, p1, p2) and (p0, p2, p3), whatever its shape.
    pub fn triangulate(&self) -> [Triangle; 2] {
        [
            Triangle::new(self.p0, self.p1, self.p2),
            Triangle::new(self.p0, self.p2, self.p3),
        ]
    }
}

/// Arithmetic mean of a set of points. The centroid of no points is the origin.
pub fn centroid(points: &[Vector3]) -> Vector3 {
    if points.is_empty() {
        return Vector3::zero();
    }
    let sum = points.iter().fold(Vector3::zero(), |sum, &p| sum + p);
    sum / points.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    #[test]
    fn triangulate_shares_the_p0_p2_diagonal() {
        let quad = Quad::new(
            v(0.0, 0.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(1.0, 1.0, 0.0),
            v(0.0, 1.0, 0.0),
        );
        let [first, second] = quad.triangulate();
        assert_eq!(first, Triangle::new(quad.p0, quad.p1, quad.p2));
        assert_eq!(second, Triangle::new(quad.p0, quad.p2, quad.p3));

        // The only edge the two triangles have in common is p0-p2.
        let shared = first
            .points()
            .into_iter()
            .filter(|p| second.points().contains(p))
            .collect::<Vec<_>>();
        assert_eq!(shared, vec![quad.p0, quad.p2]);
    }

    #[test]
    fn triangulate_keeps_winding() {
        let quad = Quad::new(
            v(0.0, 0.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(1.0, 1.0, 0.0),
            v(0.0, 1.0, 0.0),
        );
        for triangle in quad.triangulate() {
            assert!(triangle.cross().z > 0.0);
        }
        for triangle in quad.reversed().triangulate() {
            assert!(triangle.cross().z < 0.0);
        }
    }

    #[test]
    fn reversed_twice_is_identity() {
        let quad = Quad::new(
            v(0.0, 0.0, 1.0),
            v(2.0, 0.0, 1.0),
            v(2.0, 3.0, 1.0),
            v(0.0, 3.0, 1.0),
        );
        assert_eq!(quad.reversed().p0, quad.p3);
        assert_eq!(quad.reversed().reversed(), quad);
    }

    #[test]
    fn degenerate_triangle() {
        let p = v(1.0, 2.0, 3.0);
        assert!(Triangle::new(p, p, v(0.0, 0.0, 0.0)).is_degenerate());
        assert!(!Triangle::new(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)).is_degenerate());
    }

    #[test]
    fn centroid_of_square() {
        let square = [
            v(0.0, 0.0, 0.0),
            v(2.0, 0.0, 0.0),
            v(2.0, 2.0, 0.0),
            v(0.0, 2.0, 0.0),
        ];
        assert_eq!(centroid(&square), v(1.0, 1.0, 0.0));
        assert_eq!(centroid(&[]), v(0.0, 0.0, 0.0));
    }
}
