use cgmath::{InnerSpace, Zero};

use crate::geometry::{Triangle, Vector3};
use crate::Facets;

/// Smooth per-vertex normals for an indexed triangle list.
///
/// Every triangle adds its unit face normal (right hand rule over the index order) to each of
/// its three vertices, and the sums are normalized. Zero-area triangles and triangles with out
/// of range indices add nothing. A vertex with no usable contribution, or whose contributions
/// cancel out, gets the zero vector.
pub fn vertex_normals(points: &[Vector3], indices: &[u32]) -> Vec<Vector3> {
    let mut normals = vec![Vector3::zero(); points.len()];

    for facet in Facets::new(indices) {
        let (i0, i1, i2) = (facet.p0 as usize, facet.p1 as usize, facet.p2 as usize);
        let (Some(&p0), Some(&p1), Some(&p2)) = (points.get(i0), points.get(i1), points.get(i2))
        else {
            continue;
        };

        let face = Triangle::new(p0, p1, p2).cross();
        let length = face.magnitude();
        if !length.is_finite() || length <= 0.0 {
            continue;
        }
        let unit = face / length;
        normals[i0] += unit;
        normals[i1] += unit;
        normals[i2] += unit;
    }

    for n in &mut normals {
        let length = n.magnitude();
        if length.is_finite() && length > f64::EPSILON {
            *n /= length;
        } else {
            *n = Vector3::zero();
        }
    }
    normals
}
