mod builder;
mod curve;
mod error;
mod fan;
mod geometry;
mod grid;
mod mesh_buffer;
mod normals;
mod ribbon;
mod transform;
mod vertex_index;

pub use builder::*;
pub use curve::*;
pub use error::*;
pub use fan::*;
pub use geometry::*;
pub use grid::*;
pub use mesh_buffer::*;
pub use normals::*;
pub use ribbon::*;
pub use transform::*;
pub use vertex_index::*;

pub trait TriangleMesh: Sized {
    /// Creates a TriangleMesh by welding a list of triangles.
    ///
    /// # Arguments
    ///
    /// * `triangles` - The triangles of the mesh, in emission order.
    /// * `precision` - Decimal places points are rounded to before they are merged.
    fn from_triangles(triangles: &[Triangle], precision: Precision) -> Self;

    /// The unique points of the mesh.
    fn points(&self) -> &[Vector3];

    /// Three indices into `points` per triangle.
    fn indices(&self) -> &[u32];

    /// Returns the number of triangles that comprises this mesh.
    fn triangle_count(&self) -> usize {
        self.indices().len() / 3
    }

    /// Resolves the triangle at `index` back to positions.
    ///
    /// Returns `None` past the last triangle or if the triangle refers to a missing point.
    fn triangle(&self, index: usize) -> Option<Triangle> {
        if index >= self.triangle_count() {
            return None;
        }
        let facet = &self.indices()[index * 3..index * 3 + 3];
        let points = self.points();
        Some(Triangle::new(
            *points.get(facet[0] as usize)?,
            *points.get(facet[1] as usize)?,
            *points.get(facet[2] as usize)?,
        ))
    }

    fn facets(&self) -> Facets<'_> {
        Facets::new(self.indices())
    }

    fn triangles(&self) -> Triangles<'_, Self> {
        Triangles {
            mesh: self,
            next: 0,
        }
    }
}

pub struct Facets<'a> {
    indices: std::slice::ChunksExact<'a, u32>,
}

impl<'a> Facets<'a> {
    /// Walks a flat index buffer three indices at a time. A trailing partial facet is skipped.
    pub fn new(indices: &'a [u32]) -> Self {
        Self {
            indices: indices.chunks_exact(3),
        }
    }
}

impl<'a> Iterator for Facets<'a> {
    type Item = Facet;

    fn next(&mut self) -> Option<Self::Item> {
        self.indices.next().map(|f| Facet {
            p0: f[0],
            p1: f[1],
            p2: f[2],
        })
    }
}

pub struct Triangles<'a, M> {
    mesh: &'a M,
    next: usize,
}

impl<'a, M: TriangleMesh> Iterator for Triangles<'a, M> {
    type Item = Triangle;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.mesh.triangle_count() {
            return None;
        }
        let triangle = self.mesh.triangle(self.next);
        self.next += 1;
        triangle
    }
}
