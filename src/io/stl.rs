//! Binary STL export.
//!
//! STL has no shared vertices, so every triangle is written with its own
//! three corners and the face normal implied by its winding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{CaveError, Result};
use crate::mesh::{Mesh, TriangleId};

/// Save a mesh to a binary STL file.
///
/// # Example
///
/// ```no_run
/// use grotto::io::stl;
/// use grotto::mesh::Mesh;
///
/// stl::save(&Mesh::new(), "output.stl").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let triangles: Vec<stl_io::Triangle> = (0..mesh.num_triangles())
        .map(|i| {
            let t = TriangleId::new(i);
            let [a, b, c] = mesh.triangle(t).vertices();
            let n = mesh.face_normal(t);
            let vertex = |p: &nalgebra::Point3<f64>| {
                stl_io::Vertex::new([p.x as f32, p.y as f32, p.z as f32])
            };

            stl_io::Triangle {
                normal: stl_io::Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: [
                    vertex(mesh.position(a)),
                    vertex(mesh.position(b)),
                    vertex(mesh.position(c)),
                ],
            }
        })
        .collect();

    stl_io::write_stl(&mut writer, triangles.iter()).map_err(|e| CaveError::SaveError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    writer.flush()?;

    Ok(())
}
