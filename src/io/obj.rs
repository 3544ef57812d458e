//! Wavefront OBJ export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::mesh::Mesh;

/// Save a mesh to an OBJ file.
///
/// Vertices are written as `v x y z` and triangles as `f a b c` with
/// 1-based indices, in the mesh's own order and winding.
///
/// # Example
///
/// ```no_run
/// use grotto::io::obj;
/// use grotto::mesh::Mesh;
///
/// obj::save(&Mesh::new(), "output.obj").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write(mesh, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a mesh as OBJ text to any writer.
pub fn write<W: Write>(mesh: &Mesh, writer: &mut W) -> Result<()> {
    writeln!(writer, "# Generated by grotto")?;
    writeln!(
        writer,
        "# {} vertices, {} triangles",
        mesh.num_vertices(),
        mesh.num_triangles()
    )?;

    for p in mesh.vertices() {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }

    for t in mesh.triangles() {
        let [a, b, c] = t.indices();
        writeln!(writer, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Triangle;
    use nalgebra::Point3;

    fn triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(Point3::new(0.0, 0.0, 1.0));
        let b = mesh.add_vertex(Point3::new(1.5, 0.0, 1.0));
        let c = mesh.add_vertex(Point3::new(1.5, -2.0, 0.0));
        mesh.add_triangle(Triangle::new(a, b, c));
        mesh
    }

    #[test]
    fn test_write_text() {
        let mut out = Vec::new();
        write(&triangle_mesh(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let body: Vec<&str> = text.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(body, vec!["v 0 0 1", "v 1.5 0 1", "v 1.5 -2 0", "f 1 2 3"]);
    }

    #[test]
    fn test_save_counts_lines() {
        let cave = crate::generate(&crate::CaveConfig::new(20, 16)).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("floor.obj");
        save(cave.floor(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let vertices = text.lines().filter(|l| l.starts_with("v ")).count();
        let faces = text.lines().filter(|l| l.starts_with("f ")).count();
        assert_eq!(vertices, cave.floor().num_vertices());
        assert_eq!(faces, cave.floor().num_triangles());
    }
}
