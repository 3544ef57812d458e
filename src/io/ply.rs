//! PLY (Stanford polygon) export, ASCII flavour.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::mesh::Mesh;

/// Save a mesh to a PLY file (ASCII format).
///
/// # Example
///
/// ```no_run
/// use grotto::io::ply;
/// use grotto::mesh::Mesh;
///
/// ply::save(&Mesh::new(), "output.ply").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    // Write header
    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "comment Generated by grotto")?;
    writeln!(writer, "element vertex {}", mesh.num_vertices())?;
    writeln!(writer, "property float x")?;
    writeln!(writer, "property float y")?;
    writeln!(writer, "property float z")?;
    writeln!(writer, "element face {}", mesh.num_triangles())?;
    writeln!(writer, "property list uchar int vertex_indices")?;
    writeln!(writer, "end_header")?;

    for v in mesh.vertices() {
        writeln!(writer, "{} {} {}", v.x, v.y, v.z)?;
    }

    for t in mesh.triangles() {
        let [a, b, c] = t.indices();
        writeln!(writer, "3 {} {} {}", a, b, c)?;
    }

    writer.flush()?;
    Ok(())
}
