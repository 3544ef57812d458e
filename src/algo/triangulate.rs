//! Marching-squares triangulation of a [`SquareGrid`].
//!
//! Each square contributes the polygon from the [case table](super::cases),
//! split into a triangle fan around its first point. Grid nodes become mesh
//! vertices lazily: a node receives a vertex index the first time any square
//! emits it, and every later square that references the same node reuses
//! that index. Since neighbouring squares share midpoint and corner nodes,
//! the floor mesh has exactly one vertex per position.
//!
//! Vertex assignment is a read-then-write on a shared counter, so this stage
//! runs on a single thread.
//!
//! # Example
//!
//! ```
//! use grotto::algo::triangulate::triangulate;
//! use grotto::field::BinaryField;
//! use grotto::grid::SquareGrid;
//!
//! let field = BinaryField::from_ascii(&["###", "#.#", "###"]);
//! let grid = SquareGrid::build(&field, 1.0).unwrap();
//! let result = triangulate(&grid);
//!
//! // Four corner squares with three walls each: 3 triangles apiece.
//! assert_eq!(result.mesh.num_triangles(), 12);
//! ```

use crate::grid::{Configuration, Square, SquareGrid};
use crate::mesh::{AdjacencyIndex, Mesh, Triangle, VertexId};

use super::cases::case_points;
use super::outline::CheckedVertices;
use super::Progress;

/// Output of [`triangulate`].
#[derive(Debug, Clone, Default)]
pub struct Triangulation {
    /// The floor mesh.
    pub mesh: Mesh,

    /// Triangles containing each vertex.
    pub adjacency: AdjacencyIndex,

    /// Corners of fully walled squares. No contour passes through them, so
    /// they can never start or extend an outline.
    pub interior: CheckedVertices,
}

/// Triangulate every square of `grid`.
pub fn triangulate(grid: &SquareGrid) -> Triangulation {
    triangulate_with_progress(grid, &Progress::none())
}

/// Triangulate every square of `grid`, reporting progress once per column.
pub fn triangulate_with_progress(grid: &SquareGrid, progress: &Progress) -> Triangulation {
    let mut state = Triangulator::new(grid);
    let columns = grid.width() - 1;
    let rows = grid.height() - 1;

    for (i, square) in grid.squares().iter().enumerate() {
        state.triangulate_square(square);
        if (i + 1) % rows == 0 {
            progress.report((i + 1) / rows, columns, "Triangulating");
        }
    }

    let result = state.finish();
    log::debug!(
        "triangulated {} squares: {} vertices, {} triangles, {} interior vertices",
        grid.num_squares(),
        result.mesh.num_vertices(),
        result.mesh.num_triangles(),
        result.interior.len()
    );
    result
}

/// Per-call mutable state of the triangulation.
struct Triangulator<'a> {
    grid: &'a SquareGrid,
    /// Vertex assigned to each grid node, invalid until first use.
    vertex_of_node: Vec<VertexId>,
    mesh: Mesh,
    adjacency: AdjacencyIndex,
    interior: CheckedVertices,
}

impl<'a> Triangulator<'a> {
    fn new(grid: &'a SquareGrid) -> Self {
        Self {
            grid,
            vertex_of_node: vec![VertexId::invalid(); grid.num_nodes()],
            mesh: Mesh::new(),
            adjacency: AdjacencyIndex::new(),
            interior: CheckedVertices::new(),
        }
    }

    fn triangulate_square(&mut self, square: &Square) {
        let points = case_points(square.configuration);
        if points.is_empty() {
            return;
        }

        // Every point gets its vertex before any triangle is emitted.
        let mut ids = [VertexId::invalid(); 6];
        for (slot, &point) in ids.iter_mut().zip(points) {
            *slot = self.vertex_for(square, point);
        }
        let ids = &ids[..points.len()];

        for i in 1..ids.len() - 1 {
            self.add_triangle(Triangle::new(ids[0], ids[i], ids[i + 1]));
        }

        if square.configuration == Configuration::FULL {
            for &v in ids {
                self.interior.insert(v);
            }
        }
    }

    fn vertex_for(&mut self, square: &Square, point: crate::grid::SquarePoint) -> VertexId {
        let node = square.node(point);
        let slot = &mut self.vertex_of_node[node.index()];
        if !slot.is_valid() {
            *slot = self.mesh.add_vertex(*self.grid.position(node));
        }
        *slot
    }

    fn add_triangle(&mut self, triangle: Triangle) {
        self.mesh.add_triangle(triangle);
        self.adjacency.insert(triangle);
    }

    fn finish(self) -> Triangulation {
        Triangulation {
            mesh: self.mesh,
            adjacency: self.adjacency,
            interior: self.interior,
        }
    }
}
