use super::index::VertexId;

/// A triangle given by three vertex-buffer indices.
///
/// Triangles are plain values: two triangles with the same index triple are
/// interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    vertices: [VertexId; 3],
}

impl Triangle {
    /// Create a triangle from its three corners, in winding order.
    #[inline]
    pub fn new(a: VertexId, b: VertexId, c: VertexId) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// The three corners in winding order.
    #[inline]
    pub fn vertices(&self) -> [VertexId; 3] {
        self.vertices
    }

    /// Whether `v` is one of the corners.
    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        self.vertices.contains(&v)
    }

    /// Corners as raw `u32` indices, for index buffers.
    #[inline]
    pub fn indices(&self) -> [u32; 3] {
        self.vertices.map(VertexId::raw)
    }
}
