//! The marching-squares stages of the pipeline.
//!
//! - [`cases`]: the 16-entry triangulation table
//! - [`triangulate`]: square grid to floor mesh, adjacency index and interior set
//! - [`outline`]: boundary loops of the floor
//! - [`extrude`]: vertical walls below the loops
//!
//! Each stage is a plain function from the previous stage's output to a
//! freshly allocated value; [`crate::cave::generate`] chains them.

pub mod cases;
pub mod extrude;
pub mod outline;
pub mod progress;
pub mod triangulate;

pub use progress::Progress;
