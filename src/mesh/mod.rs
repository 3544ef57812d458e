//! Indexed triangle meshes.
//!
//! Both outputs of the pipeline, the floor and the walls, are plain
//! [`Mesh`] values: a vertex-position buffer and a triangle buffer whose
//! entries index into it.
//!
//! # Index Types
//!
//! - [`NodeId`] - a node of the marching-squares grid
//! - [`VertexId`] - a vertex of a mesh
//! - [`TriangleId`] - a triangle of a mesh
//!
//! # Example
//!
//! ```
//! use grotto::mesh::{Mesh, Triangle, VertexId};
//! use nalgebra::Point3;
//!
//! let mut mesh = Mesh::new();
//! let a = mesh.add_vertex(Point3::new(0.0, 0.0, 1.0));
//! let b = mesh.add_vertex(Point3::new(1.0, 0.0, 1.0));
//! let c = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
//! mesh.add_triangle(Triangle::new(a, b, c));
//!
//! assert_eq!(mesh.indices(), vec![0, 1, 2]);
//! assert!(mesh.face_normal(grotto::mesh::TriangleId::new(0)).y > 0.0);
//! ```

mod adjacency;
mod index;
mod triangle;

use nalgebra::{Point3, Vector3};

pub use adjacency::AdjacencyIndex;
pub use index::{NodeId, TriangleId, VertexId};
pub use triangle::Triangle;

/// A triangle mesh stored as vertex positions plus index triples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub(crate) vertices: Vec<Point3<f64>>,
    pub(crate) triangles: Vec<Triangle>,
}

impl Mesh {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh with pre-allocated capacity.
    pub fn with_capacity(num_vertices: usize, num_triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(num_vertices),
            triangles: Vec::with_capacity(num_triangles),
        }
    }

    // ==================== Accessors ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// All vertex positions, in index order.
    #[inline]
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// All triangles, in creation order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Position of a vertex.
    #[inline]
    pub fn position(&self, v: VertexId) -> &Point3<f64> {
        &self.vertices[v.index()]
    }

    /// Get a triangle by ID.
    #[inline]
    pub fn triangle(&self, t: TriangleId) -> &Triangle {
        &self.triangles[t.index()]
    }

    /// Flat index buffer, three entries per triangle.
    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flat_map(|t| t.indices()).collect()
    }

    // ==================== Construction ====================

    /// Append a vertex and return its index.
    pub fn add_vertex(&mut self, position: Point3<f64>) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(position);
        id
    }

    /// Append a triangle and return its index.
    pub fn add_triangle(&mut self, triangle: Triangle) -> TriangleId {
        debug_assert!(
            triangle.vertices().iter().all(|v| v.index() < self.vertices.len()),
            "triangle {:?} references a vertex past the end of the buffer",
            triangle
        );
        let id = TriangleId::new(self.triangles.len());
        self.triangles.push(triangle);
        id
    }

    // ==================== Geometry ====================

    /// Unit normal of a triangle, following its winding.
    ///
    /// Degenerate triangles return the zero vector.
    pub fn face_normal(&self, t: TriangleId) -> Vector3<f64> {
        let [a, b, c] = self.triangle(t).vertices();
        let (p0, p1, p2) = (self.position(a), self.position(b), self.position(c));
        let n = (p1 - p0).cross(&(p2 - p0));
        n.try_normalize(f64::EPSILON).unwrap_or_else(Vector3::zeros)
    }

    /// Area of a triangle.
    pub fn face_area(&self, t: TriangleId) -> f64 {
        let [a, b, c] = self.triangle(t).vertices();
        let (p0, p1, p2) = (self.position(a), self.position(b), self.position(c));
        (p1 - p0).cross(&(p2 - p0)).norm() * 0.5
    }

    /// Total area of all triangles.
    pub fn surface_area(&self) -> f64 {
        (0..self.num_triangles())
            .map(|i| self.face_area(TriangleId::new(i)))
            .sum()
    }

    /// Axis-aligned bounding box as `(min, max)`, or `None` without vertices.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = *self.vertices.first()?;
        let (mut min, mut max) = (first, first);
        for p in &self.vertices[1..] {
            min = min.inf(p);
            max = max.sup(p);
        }
        Some((min, max))
    }
}
