use crate::error::Result;
use crate::fan::triangle_fan;
use crate::geometry::{Curve, Quad, Triangle, Vector3};
use crate::grid::grid_quads;
use crate::mesh_buffer::MeshBuffer;
use crate::ribbon::Winding;
use crate::vertex_index::Precision;
use crate::TriangleMesh;

/// Collects the triangle stream of one part and turns it into a [`MeshBuffer`].
///
/// Part builders push ribbons, fans and lofted grids in emission order; `build` welds the
/// stream at the configured precision and derives the normals.
#[derive(Debug, Clone)]
pub struct MeshBuilder {
    precision: Precision,
    triangles: Vec<Triangle>,
}

impl MeshBuilder {
    pub fn new(precision: Precision) -> Self {
        Self {
            precision,
            triangles: Vec::new(),
        }
    }

    pub fn add_triangles<I: IntoIterator<Item = Triangle>>(&mut self, triangles: I) -> &mut Self {
        self.triangles.extend(triangles);
        self
    }

    /// Adds each quad as its two fixed-diagonal triangles.
    pub fn add_quads<I: IntoIterator<Item = Quad>>(&mut self, quads: I) -> &mut Self {
        self.add_triangles(quads.into_iter().flat_map(|q| q.triangulate()))
    }

    /// Caps a loop of points. See [`triangle_fan`].
    pub fn add_fan(&mut self, points: &[Vector3], center: Option<Vector3>) -> &mut Self {
        self.add_triangles(triangle_fan(points, center))
    }

    /// Adds the quads joining consecutive rows of a lofted grid.
    pub fn add_grid(&mut self, rows: &[Curve], winding: Winding) -> Result<&mut Self> {
        let quads = grid_quads(rows, winding)?;
        Ok(self.add_quads(quads))
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn build(self) -> MeshBuffer {
        let mesh = MeshBuffer::from_triangles(&self.triangles, self.precision);
        log::debug!(
            "built mesh: {} triangles, {} unique points (precision {})",
            self.triangles.len(),
            mesh.points.len(),
            self.precision.get()
        );
        mesh
    }
}
