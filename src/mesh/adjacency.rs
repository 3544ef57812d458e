//! Vertex-to-triangle adjacency.

use super::index::VertexId;
use super::triangle::Triangle;

/// Maps every vertex index to the triangles that contain it.
///
/// The index is filled incrementally while triangles are created and only
/// read afterwards. Lists keep insertion order, which makes the outline walk
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    by_vertex: Vec<Vec<Triangle>>,
}

impl AdjacencyIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `triangle` under each of its three vertices.
    pub fn insert(&mut self, triangle: Triangle) {
        for v in triangle.vertices() {
            let i = v.index();
            if i >= self.by_vertex.len() {
                self.by_vertex.resize_with(i + 1, Vec::new);
            }
            self.by_vertex[i].push(triangle);
        }
    }

    /// Number of vertex slots (one past the highest registered vertex).
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.by_vertex.len()
    }

    /// Triangles containing `v`, in insertion order.
    ///
    /// # Panics
    /// Panics if `v` was never part of a triangle. Every vertex of a
    /// triangulation is created by a triangle, so a miss means the index and
    /// the vertex buffer are out of sync.
    pub fn triangles_containing(&self, v: VertexId) -> &[Triangle] {
        match self.by_vertex.get(v.index()) {
            Some(list) if !list.is_empty() => list,
            _ => panic!("vertex {:?} is missing from the adjacency index", v),
        }
    }

    /// Number of triangles that contain both `a` and `b`.
    pub fn shared_triangle_count(&self, a: VertexId, b: VertexId) -> usize {
        self.triangles_containing(a)
            .iter()
            .filter(|t| t.contains(b))
            .count()
    }

    /// An edge is on the boundary when exactly one triangle contains it.
    #[inline]
    pub fn is_boundary_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.shared_triangle_count(a, b) == 1
    }

    /// All boundary edges, each reported once as `(low, high)`.
    pub fn boundary_edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut edges = Vec::new();
        for (i, triangles) in self.by_vertex.iter().enumerate() {
            let a = VertexId::new(i);
            for t in triangles {
                for b in t.vertices() {
                    // A boundary edge has exactly one triangle, so it is seen once here.
                    if b > a && self.is_boundary_edge(a, b) {
                        edges.push((a, b));
                    }
                }
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> VertexId {
        VertexId::new(i)
    }

    /// Two triangles sharing the diagonal 0-2 of a quad.
    fn quad() -> AdjacencyIndex {
        let mut adj = AdjacencyIndex::new();
        adj.insert(Triangle::new(v(0), v(1), v(2)));
        adj.insert(Triangle::new(v(0), v(2), v(3)));
        adj
    }

    #[test]
    fn test_shared_diagonal_is_interior() {
        let adj = quad();
        assert_eq!(adj.shared_triangle_count(v(0), v(2)), 2);
        assert!(!adj.is_boundary_edge(v(0), v(2)));
        assert!(adj.is_boundary_edge(v(0), v(1)));
        assert!(adj.is_boundary_edge(v(2), v(3)));
    }

    #[test]
    fn test_boundary_edges_of_quad() {
        let adj = quad();
        let mut edges = adj.boundary_edges();
        edges.sort();
        assert_eq!(
            edges,
            vec![(v(0), v(1)), (v(0), v(3)), (v(1), v(2)), (v(2), v(3))]
        );
    }

    #[test]
    fn test_triangles_keep_insertion_order() {
        let adj = quad();
        let list = adj.triangles_containing(v(0));
        assert_eq!(list.len(), 2);
        assert!(list[0].contains(v(1)));
        assert!(list[1].contains(v(3)));
    }

    #[test]
    #[should_panic(expected = "missing from the adjacency index")]
    fn test_missing_vertex_panics() {
        let adj = quad();
        adj.triangles_containing(v(17));
    }
}
