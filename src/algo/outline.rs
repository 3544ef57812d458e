//! Boundary-loop extraction from a triangulated floor.
//!
//! An edge `(a, b)` is on the boundary when exactly one triangle contains
//! both endpoints. Outlines are recovered by walking such edges vertex to
//! vertex: every vertex is visited in ascending order, and an unchecked
//! vertex with an unchecked boundary neighbour starts a new loop that is
//! followed until it runs out of unchecked neighbours.
//!
//! Vertices in the [`CheckedVertices`] set passed in are never part of an
//! outline. The triangulator seeds the set with the corners of fully walled
//! squares, which keeps walls from being raised inside solid rock.
//!
//! # Example
//!
//! ```
//! use grotto::algo::outline::extract_outlines;
//! use grotto::algo::triangulate::triangulate;
//! use grotto::field::BinaryField;
//! use grotto::grid::SquareGrid;
//!
//! let field = BinaryField::from_ascii(&["#####", "#...#", "#...#", "#...#", "#####"]);
//! let grid = SquareGrid::build(&field, 1.0).unwrap();
//! let floor = triangulate(&grid);
//!
//! let outlines = extract_outlines(floor.mesh.vertices(), &floor.adjacency, floor.interior);
//! assert_eq!(outlines.len(), 2);
//! assert!(outlines.iter().all(|o| o.is_closed()));
//! ```

use std::collections::HashSet;

use nalgebra::Point3;

use crate::mesh::{AdjacencyIndex, VertexId};

/// Vertices that may not start or extend an outline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedVertices(HashSet<VertexId>);

impl CheckedVertices {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `v` as checked. Returns `false` if it already was.
    #[inline]
    pub fn insert(&mut self, v: VertexId) -> bool {
        self.0.insert(v)
    }

    /// Whether `v` is checked.
    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        self.0.contains(&v)
    }

    /// Number of checked vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no vertex is checked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A closed boundary loop of floor vertices.
///
/// The first vertex is repeated as the last one, so an outline through `k`
/// distinct vertices has `k + 1` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    vertices: Vec<VertexId>,
}

impl Outline {
    /// Wrap a vertex sequence. The caller is responsible for closing it.
    pub fn new(vertices: Vec<VertexId>) -> Self {
        Self { vertices }
    }

    /// The vertex sequence, closing duplicate included.
    #[inline]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Number of entries, closing duplicate included.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the outline has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of distinct vertices on the loop.
    #[inline]
    pub fn num_distinct(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Whether the last entry repeats the first.
    pub fn is_closed(&self) -> bool {
        self.vertices.len() >= 2 && self.vertices.first() == self.vertices.last()
    }

    /// Consecutive vertex pairs along the loop.
    pub fn segments(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Recover every outline of a triangulated floor.
///
/// `vertices` is the floor's vertex buffer; only its length is read. The
/// `checked` set is consumed: the tracer extends its own copy as it walks.
///
/// # Panics
/// Panics if a vertex below `vertices.len()` has no entry in `adjacency`.
pub fn extract_outlines(
    vertices: &[Point3<f64>],
    adjacency: &AdjacencyIndex,
    mut checked: CheckedVertices,
) -> Vec<Outline> {
    let mut outlines = Vec::new();

    for i in 0..vertices.len() {
        let start = VertexId::new(i);
        if checked.contains(start) {
            continue;
        }

        let Some(mut next) = connected_outline_neighbor(adjacency, &checked, start) else {
            checked.insert(start);
            continue;
        };

        checked.insert(start);
        let mut loop_vertices = vec![start];
        loop {
            loop_vertices.push(next);
            checked.insert(next);
            match connected_outline_neighbor(adjacency, &checked, next) {
                Some(v) => next = v,
                None => break,
            }
        }
        loop_vertices.push(start);

        outlines.push(Outline::new(loop_vertices));
    }

    log::debug!(
        "traced {} outlines over {} vertices",
        outlines.len(),
        vertices.len()
    );
    outlines
}

/// First unchecked vertex joined to `v` by a boundary edge.
///
/// Candidates are the vertices of the triangles containing `v`, in insertion
/// order and then in winding order.
pub fn connected_outline_neighbor(
    adjacency: &AdjacencyIndex,
    checked: &CheckedVertices,
    v: VertexId,
) -> Option<VertexId> {
    adjacency
        .triangles_containing(v)
        .iter()
        .flat_map(|t| t.vertices())
        .find(|&w| w != v && !checked.contains(w) && adjacency.is_boundary_edge(v, w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::triangulate::{triangulate, Triangulation};
    use crate::field::BinaryField;
    use crate::grid::SquareGrid;
    use crate::mesh::Triangle;

    fn floor(rows: &[&str]) -> Triangulation {
        let field = BinaryField::from_ascii(rows);
        floor_of(&field)
    }

    fn floor_of(field: &BinaryField) -> Triangulation {
        let grid = SquareGrid::build(field, 1.0).unwrap();
        triangulate(&grid)
    }

    fn outlines_of(t: &Triangulation) -> Vec<Outline> {
        extract_outlines(t.mesh.vertices(), &t.adjacency, t.interior.clone())
    }

    fn undirected(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
        if a < b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Boundary edges with no endpoint in the interior set must each show up
    /// in exactly one outline segment, and outlines use nothing else.
    fn assert_boundary_covered_once(t: &Triangulation, outlines: &[Outline]) {
        let traceable: HashSet<_> = t
            .adjacency
            .boundary_edges()
            .into_iter()
            .filter(|&(a, b)| !t.interior.contains(a) && !t.interior.contains(b))
            .collect();

        let mut seen = HashSet::new();
        for outline in outlines {
            for (a, b) in outline.segments() {
                let edge = undirected(a, b);
                assert!(traceable.contains(&edge), "{:?} is not a boundary edge", edge);
                assert!(seen.insert(edge), "{:?} traced twice", edge);
            }
        }
        assert_eq!(seen, traceable);
    }

    #[test]
    fn test_ring_has_frame_and_contour() {
        let t = floor(&["#####", "#...#", "#...#", "#...#", "#####"]);
        let outlines = outlines_of(&t);

        assert_eq!(outlines.len(), 2);
        let lens: Vec<_> = outlines.iter().map(Outline::len).collect();
        assert_eq!(lens, vec![17, 13]);
        assert!(outlines.iter().all(Outline::is_closed));

        // Vertex 0 is a corner of the first square, so the frame comes first.
        assert_eq!(outlines[0].vertices()[0], VertexId::new(0));
        assert_boundary_covered_once(&t, &outlines);
    }

    #[test]
    fn test_distinct_vertices_per_loop() {
        let t = floor(&["#####", "#...#", "#...#", "#...#", "#####"]);
        for outline in outlines_of(&t) {
            let distinct: HashSet<_> = outline.vertices().iter().copied().collect();
            assert_eq!(distinct.len(), outline.num_distinct());
        }
    }

    #[test]
    fn test_solid_field_has_no_outlines() {
        let t = floor(&["####", "####", "####", "####"]);
        assert!(outlines_of(&t).is_empty());
    }

    #[test]
    fn test_thick_border_traces_only_contours() {
        let field = BinaryField::from_fn(14, 12, |x, y| {
            let border = x < 2 || y < 2 || x >= 12 || y >= 10;
            let pillar = (6..8).contains(&x) && (5..7).contains(&y);
            border || pillar
        });
        let t = floor_of(&field);
        let outlines = outlines_of(&t);

        // Room contour and pillar contour; the frame is buried in rock.
        assert_eq!(outlines.len(), 2);
        for outline in &outlines {
            assert!(outline.is_closed());
            for &v in outline.vertices() {
                assert!(!t.interior.contains(v));
            }
        }
        assert_boundary_covered_once(&t, &outlines);
    }

    #[test]
    fn test_generated_cave_with_thick_border() {
        let base = crate::field::generate_seeded(40, 32, 46, 5, 2024, false);
        let field = BinaryField::from_fn(40, 32, |x, y| {
            x < 2 || y < 2 || x >= 38 || y >= 30 || base.is_wall(x, y)
        });
        let t = floor_of(&field);
        let outlines = outlines_of(&t);
        assert!(outlines.iter().all(Outline::is_closed));
        assert_boundary_covered_once(&t, &outlines);
    }

    #[test]
    fn test_caller_set_is_untouched() {
        let t = floor(&["#####", "#...#", "#...#", "#...#", "#####"]);
        let checked = t.interior.clone();
        let _ = extract_outlines(t.mesh.vertices(), &t.adjacency, checked.clone());
        assert_eq!(checked, t.interior);
    }

    #[test]
    fn test_neighbor_skips_checked_and_interior_edges() {
        let v = VertexId::new;
        let mut adj = AdjacencyIndex::new();
        adj.insert(Triangle::new(v(0), v(1), v(2)));
        adj.insert(Triangle::new(v(0), v(2), v(3)));

        let mut checked = CheckedVertices::new();
        // 0-1 is the first boundary edge in insertion order; 0-2 is shared.
        assert_eq!(connected_outline_neighbor(&adj, &checked, v(0)), Some(v(1)));
        checked.insert(v(1));
        assert_eq!(connected_outline_neighbor(&adj, &checked, v(0)), Some(v(3)));
        checked.insert(v(3));
        assert_eq!(connected_outline_neighbor(&adj, &checked, v(0)), None);
    }

    #[test]
    fn test_outline_accessors() {
        let v = VertexId::new;
        let outline = Outline::new(vec![v(4), v(5), v(6), v(4)]);
        assert!(outline.is_closed());
        assert_eq!(outline.num_distinct(), 3);
        let segments: Vec<_> = outline.segments().collect();
        assert_eq!(segments, vec![(v(4), v(5)), (v(5), v(6)), (v(6), v(4))]);
        assert!(!Outline::new(vec![v(1)]).is_closed());
    }
}
