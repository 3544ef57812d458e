//! # Grotto
//!
//! Procedural cave meshes from random binary fields.
//!
//! Grotto fills a grid with walls at random, relaxes it with a cellular
//! automaton into cave-like blobs, and turns the result into geometry:
//!
//! - a **floor** mesh, triangulated with marching squares over a grid whose
//!   edge midpoints are shared between neighbouring squares, so the surface
//!   has no duplicate seam vertices
//! - the **outlines** of that floor, recovered by walking the edges that
//!   belong to a single triangle
//! - a **wall** mesh of vertical quads hanging below every outline
//!
//! ## Quick Start
//!
//! ```
//! use grotto::prelude::*;
//!
//! let config = CaveConfig::new(64, 48)
//!     .with_fill_percent(47)
//!     .with_seed(Seed::text("first light"));
//! let cave = generate(&config).unwrap();
//!
//! println!("{}", cave.field());
//! println!("floor: {} triangles", cave.floor().num_triangles());
//! println!("walls: {} triangles", cave.walls().num_triangles());
//!
//! // Same configuration, same cave.
//! assert_eq!(cave.walls(), generate(&config).unwrap().walls());
//! ```
//!
//! ## Running Stages by Hand
//!
//! Every stage is public, so a field can come from anywhere:
//!
//! ```
//! use grotto::algo::{extrude::extrude_walls, outline::extract_outlines, triangulate::triangulate};
//! use grotto::field::BinaryField;
//! use grotto::grid::SquareGrid;
//!
//! let field = BinaryField::from_ascii(&[
//!     "########",
//!     "#..##..#",
//!     "#......#",
//!     "########",
//! ]);
//! let grid = SquareGrid::build(&field, 1.0).unwrap();
//! let floor = triangulate(&grid);
//! let outlines = extract_outlines(floor.mesh.vertices(), &floor.adjacency, floor.interior);
//! let walls = extrude_walls(&outlines, floor.mesh.vertices(), 2.0);
//!
//! assert!(outlines.iter().all(|o| o.is_closed()));
//! let quads: usize = outlines.iter().map(|o| o.len() - 1).sum();
//! assert_eq!(walls.num_triangles(), 2 * quads);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod cave;
pub mod error;
pub mod field;
pub mod grid;
pub mod io;
pub mod mesh;

pub use cave::{generate, generate_with_progress, Cave, CaveConfig};

/// Prelude module for convenient imports.
///
/// ```
/// use grotto::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::outline::Outline;
    pub use crate::algo::Progress;
    pub use crate::cave::{generate, generate_with_progress, Cave, CaveConfig};
    pub use crate::error::{CaveError, Result};
    pub use crate::field::{BinaryField, Seed};
    pub use crate::mesh::{Mesh, Triangle, TriangleId, VertexId};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
