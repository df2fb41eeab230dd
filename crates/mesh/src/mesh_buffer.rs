use crate::geometry::{Triangle, Vector3};
use crate::normals::vertex_normals;
use crate::vertex_index::{Precision, VertexIndex};
use crate::TriangleMesh;

/// The finished artifact handed to the renderer: unique positions, an index buffer and one
/// normal per position.
///
/// `indices` has one entry per point of the triangle stream the buffer was welded from, and
/// every index is below `points.len()`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshBuffer {
    pub points: Vec<Vector3>,
    pub indices: Vec<u32>,
    pub normals: Vec<Vector3>,
}

impl MeshBuffer {
    pub fn from_vertex_index(index: VertexIndex) -> Self {
        let VertexIndex { points, indices } = index;
        let normals = vertex_normals(&points, &indices);
        MeshBuffer {
            points,
            indices,
            normals,
        }
    }

    /// Positions as `[x0, y0, z0, x1, y1, z1, ...]`, without copying.
    pub fn positions(&self) -> &[f64] {
        flatten(&self.points)
    }

    /// Normals as `[nx0, ny0, nz0, ...]`, without copying.
    pub fn normals_flat(&self) -> &[f64] {
        flatten(&self.normals)
    }

    /// Returns true if every index refers to an existing point and there is a normal for
    /// every point.
    pub fn is_valid(&self) -> bool {
        self.indices.len() % 3 == 0
            && self.normals.len() == self.points.len()
            && self
                .indices
                .iter()
                .all(|&i| (i as usize) < self.points.len())
    }
}

impl TriangleMesh for MeshBuffer {
    fn from_triangles(triangles: &[Triangle], precision: Precision) -> Self {
        MeshBuffer::from_vertex_index(VertexIndex::from_triangles(triangles, precision))
    }

    fn points(&self) -> &[Vector3] {
        &self.points
    }

    fn indices(&self) -> &[u32] {
        &self.indices
    }
}

impl TriangleMesh for VertexIndex {
    fn from_triangles(triangles: &[Triangle], precision: Precision) -> Self {
        VertexIndex::from_triangles(triangles, precision)
    }

    fn points(&self) -> &[Vector3] {
        &self.points
    }

    fn indices(&self) -> &[u32] {
        &self.indices
    }
}

fn flatten(points: &[Vector3]) -> &[f64] {
    // Safety: Vector3 is repr(C) with three f64 fields, and its size and alignment are
    // asserted to match [f64; 3] in geometry.rs. A slice of N vectors is therefore laid out
    // exactly like a slice of 3N floats, and the returned slice borrows from `points`.
    unsafe { std::slice::from_raw_parts(points.as_ptr().cast::<f64>(), points.len() * 3) }
}
