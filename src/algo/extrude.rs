//! Vertical wall extrusion along outlines.

use nalgebra::{Point3, Vector3};

use crate::mesh::{Mesh, Triangle};

use super::outline::Outline;

/// Extrude a wall of height `wall_height` below every outline segment.
///
/// Each segment `(a, b)` becomes a quad of four new vertices: `a` and `b` on
/// top, and the same points moved down by `wall_height` along -Y. The quad is
/// split into `(top_left, bottom_left, bottom_right)` and
/// `(bottom_right, top_right, top_left)`. Vertices are never shared between
/// quads or with the floor, so an outline of `n` entries yields `4 * (n - 1)`
/// vertices and `2 * (n - 1)` triangles.
///
/// `vertices` is the floor's vertex buffer the outlines index into.
///
/// # Example
///
/// ```
/// use grotto::algo::extrude::extrude_walls;
/// use grotto::algo::outline::Outline;
/// use grotto::mesh::VertexId;
/// use nalgebra::Point3;
///
/// let floor = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 0.0, 1.0),
/// ];
/// let outline = Outline::new([0, 1, 2, 0].map(VertexId::new).to_vec());
/// let walls = extrude_walls(&[outline], &floor, 2.0);
///
/// assert_eq!(walls.num_vertices(), 12);
/// assert_eq!(walls.num_triangles(), 6);
/// ```
pub fn extrude_walls(outlines: &[Outline], vertices: &[Point3<f64>], wall_height: f64) -> Mesh {
    let segments: usize = outlines.iter().map(|o| o.len().saturating_sub(1)).sum();
    let mut walls = Mesh::with_capacity(4 * segments, 2 * segments);
    let down = Vector3::y() * wall_height;

    for outline in outlines {
        for (a, b) in outline.segments() {
            let top_left = vertices[a.index()];
            let top_right = vertices[b.index()];

            let tl = walls.add_vertex(top_left);
            let tr = walls.add_vertex(top_right);
            let bl = walls.add_vertex(top_left - down);
            let br = walls.add_vertex(top_right - down);

            walls.add_triangle(Triangle::new(tl, bl, br));
            walls.add_triangle(Triangle::new(br, tr, tl));
        }
    }

    log::debug!(
        "extruded {} wall quads from {} outlines",
        segments,
        outlines.len()
    );
    walls
}
