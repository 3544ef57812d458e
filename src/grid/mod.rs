//! The shared-node grid used by marching squares.
//!
//! Every field cell becomes a *corner node* that carries the cell's
//! wall flag. Each corner also owns two *midpoint nodes*: one half a cell
//! toward the next row ("above", +Z) and one half a cell toward the next
//! column ("right", +X). A square between four corners reuses the midpoints
//! its neighbours already own, so the node on a shared edge is the same arena
//! slot for both squares. The triangulator relies on that to produce a mesh
//! without duplicate seam vertices.
//!
//! # Layout
//!
//! Nodes live in one flat arena. The node in slot `k` of cell `(x, y)` has
//! id `3 * (y * width + x) + k`, where [`NodeSlot`] numbers the corner, above
//! and right slots 0, 1 and 2.
//!
//! The grid lies in the XZ plane at `y = 0`, centred on the origin.

mod square;

use nalgebra::{Point3, Vector3};

pub use square::{Configuration, Square, SquarePoint};

use crate::error::{CaveError, Result};
use crate::field::BinaryField;
use crate::mesh::NodeId;

/// What a node of the arena represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A field cell; `active` is true for walls.
    Corner {
        /// Whether the cell is a wall.
        active: bool,
    },
    /// Midpoint between a corner and the corner in the next row.
    Above,
    /// Midpoint between a corner and the corner in the next column.
    Right,
}

impl NodeKind {
    /// The arena slot this kind occupies within its cell.
    #[inline]
    pub fn slot(self) -> NodeSlot {
        match self {
            NodeKind::Corner { .. } => NodeSlot::Corner,
            NodeKind::Above => NodeSlot::Above,
            NodeKind::Right => NodeSlot::Right,
        }
    }
}

/// Which of a cell's three nodes to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeSlot {
    /// The cell's corner.
    Corner = 0,
    /// The midpoint toward the next row.
    Above = 1,
    /// The midpoint toward the next column.
    Right = 2,
}

/// A node of the grid: a position and what it stands for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// World-space position.
    pub position: Point3<f64>,
    /// Corner or midpoint.
    pub kind: NodeKind,
}

impl Node {
    /// Whether this is a corner of a wall cell.
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self.kind, NodeKind::Corner { active: true })
    }
}

const NODES_PER_CELL: usize = 3;

/// Corner and midpoint nodes of a field plus the squares between them.
#[derive(Debug, Clone)]
pub struct SquareGrid {
    width: usize,
    height: usize,
    cell_size: f64,
    nodes: Vec<Node>,
    squares: Vec<Square>,
}

impl SquareGrid {
    /// Build the grid for `field` with squares of side `cell_size`.
    ///
    /// Fails if `cell_size` is not a positive finite number, or the field has
    /// fewer than 2 rows or columns.
    pub fn build(field: &BinaryField, cell_size: f64) -> Result<Self> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(CaveError::invalid_param(
                "cell_size",
                cell_size,
                "must be a positive finite number",
            ));
        }
        let (width, height) = (field.width(), field.height());
        if width <= 1 || height <= 1 {
            return Err(CaveError::invalid_param(
                "field",
                format!("{}x{}", width, height),
                "needs at least 2 rows and 2 columns",
            ));
        }

        let half = cell_size / 2.0;
        let origin = Vector3::new(
            -(width as f64) * cell_size / 2.0 + half,
            0.0,
            -(height as f64) * cell_size / 2.0 + half,
        );

        let mut nodes = Vec::with_capacity(width * height * NODES_PER_CELL);
        for y in 0..height {
            for x in 0..width {
                let corner =
                    Point3::new(x as f64 * cell_size, 0.0, y as f64 * cell_size) + origin;
                nodes.push(Node {
                    position: corner,
                    kind: NodeKind::Corner {
                        active: field.is_wall(x, y),
                    },
                });
                nodes.push(Node {
                    position: corner + Vector3::z() * half,
                    kind: NodeKind::Above,
                });
                nodes.push(Node {
                    position: corner + Vector3::x() * half,
                    kind: NodeKind::Right,
                });
            }
        }

        let mut grid = Self {
            width,
            height,
            cell_size,
            nodes,
            squares: Vec::with_capacity((width - 1) * (height - 1)),
        };

        for x in 0..width - 1 {
            for y in 0..height - 1 {
                let square = grid.make_square(x, y);
                grid.squares.push(square);
            }
        }

        log::debug!(
            "built {}x{} grid: {} nodes, {} squares",
            width,
            height,
            grid.nodes.len(),
            grid.squares.len()
        );
        Ok(grid)
    }

    fn make_square(&self, x: usize, y: usize) -> Square {
        let top_left = self.node_id(x, y + 1, NodeSlot::Corner);
        let top_right = self.node_id(x + 1, y + 1, NodeSlot::Corner);
        let bottom_right = self.node_id(x + 1, y, NodeSlot::Corner);
        let bottom_left = self.node_id(x, y, NodeSlot::Corner);

        Square {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
            top: self.node_id(x, y + 1, NodeSlot::Right),
            right: self.node_id(x + 1, y, NodeSlot::Above),
            bottom: self.node_id(x, y, NodeSlot::Right),
            left: self.node_id(x, y, NodeSlot::Above),
            configuration: Configuration::from_corners(
                self.node(top_left).is_active(),
                self.node(top_right).is_active(),
                self.node(bottom_right).is_active(),
                self.node(bottom_left).is_active(),
            ),
        }
    }

    // ==================== Accessors ====================

    /// Number of corner columns (the field width).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of corner rows (the field height).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Side length of a square.
    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of nodes in the arena.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Id of the node in `slot` owned by cell `(x, y)`.
    #[inline]
    pub fn node_id(&self, x: usize, y: usize, slot: NodeSlot) -> NodeId {
        debug_assert!(x < self.width && y < self.height);
        NodeId::new((y * self.width + x) * NODES_PER_CELL + slot as usize)
    }

    /// Get a node by ID.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Position of a node.
    #[inline]
    pub fn position(&self, id: NodeId) -> &Point3<f64> {
        &self.node(id).position
    }

    /// Number of squares, `(width - 1) * (height - 1)`.
    #[inline]
    pub fn num_squares(&self) -> usize {
        self.squares.len()
    }

    /// All squares, `x` outer and `y` inner.
    #[inline]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// The square whose bottom-left corner is cell `(x, y)`.
    #[inline]
    pub fn square(&self, x: usize, y: usize) -> &Square {
        debug_assert!(x + 1 < self.width && y + 1 < self.height);
        &self.squares[x * (self.height - 1) + y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_5x5() -> SquareGrid {
        let field = BinaryField::from_ascii(&["#####", "#...#", "#...#", "#...#", "#####"]);
        SquareGrid::build(&field, 1.0).unwrap()
    }

    #[test]
    fn test_counts() {
        let grid = ring_5x5();
        assert_eq!(grid.num_nodes(), 75);
        assert_eq!(grid.num_squares(), 16);
    }

    #[test]
    fn test_neighbours_share_midpoints() {
        let grid = ring_5x5();
        for x in 0..3 {
            for y in 0..4 {
                // Right edge of one square is the left edge of the next.
                assert_eq!(grid.square(x, y).right, grid.square(x + 1, y).left);
            }
        }
        for x in 0..4 {
            for y in 0..3 {
                // Top edge of one square is the bottom edge of the one above.
                assert_eq!(grid.square(x, y).top, grid.square(x, y + 1).bottom);
                assert_eq!(grid.square(x, y).top_left, grid.square(x, y + 1).bottom_left);
            }
        }
    }

    #[test]
    fn test_midpoints_sit_between_corners() {
        let grid = ring_5x5();
        let sq = grid.square(1, 2);
        let mid = |a: NodeId, b: NodeId| {
            Point3::from((grid.position(a).coords + grid.position(b).coords) / 2.0)
        };
        assert_eq!(*grid.position(sq.top), mid(sq.top_left, sq.top_right));
        assert_eq!(*grid.position(sq.right), mid(sq.top_right, sq.bottom_right));
        assert_eq!(*grid.position(sq.bottom), mid(sq.bottom_left, sq.bottom_right));
        assert_eq!(*grid.position(sq.left), mid(sq.top_left, sq.bottom_left));
    }

    #[test]
    fn test_grid_is_centred() {
        let field = BinaryField::filled(4, 2, 1);
        let grid = SquareGrid::build(&field, 2.0).unwrap();
        let first = grid.position(grid.node_id(0, 0, NodeSlot::Corner));
        let last = grid.position(grid.node_id(3, 1, NodeSlot::Corner));
        assert_eq!(*first, Point3::new(-3.0, 0.0, -1.0));
        assert_eq!(*last, Point3::new(3.0, 0.0, 1.0));
    }

    #[test]
    fn test_node_ids_address_their_slot() {
        let grid = ring_5x5();
        for y in 0..5 {
            for x in 0..5 {
                for slot in [NodeSlot::Corner, NodeSlot::Above, NodeSlot::Right] {
                    let node = grid.node(grid.node_id(x, y, slot));
                    assert_eq!(node.kind.slot(), slot);
                }
                let corner = grid.node(grid.node_id(x, y, NodeSlot::Corner));
                let on_border = x == 0 || y == 0 || x == 4 || y == 4;
                assert_eq!(corner.is_active(), on_border);
            }
        }
    }

    #[test]
    fn test_configurations_of_ring() {
        let grid = ring_5x5();
        // Corner squares see three walls, edge squares two, inner squares none.
        assert_eq!(grid.square(0, 0).configuration.index(), 11);
        assert_eq!(grid.square(3, 0).configuration.index(), 7);
        assert_eq!(grid.square(3, 3).configuration.index(), 14);
        assert_eq!(grid.square(0, 3).configuration.index(), 13);
        assert_eq!(grid.square(1, 0).configuration.index(), 3);
        assert_eq!(grid.square(0, 1).configuration.index(), 9);
        assert_eq!(grid.square(1, 1).configuration.index(), 0);
    }

    #[test]
    fn test_rejects_bad_cell_size() {
        let field = BinaryField::filled(3, 3, 1);
        for size in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = SquareGrid::build(&field, size).unwrap_err();
            assert!(matches!(err, CaveError::InvalidParameter { name: "cell_size", .. }));
        }
    }

    #[test]
    fn test_rejects_degenerate_field() {
        let field = BinaryField::filled(1, 5, 1);
        assert!(SquareGrid::build(&field, 1.0).is_err());
    }
}
