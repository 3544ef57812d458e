//! Mesh export.
//!
//! Generated meshes are handed to renderers and modelling tools as files.
//!
//! # Supported Formats
//!
//! | Format | Extension | Notes |
//! |--------|-----------|-------|
//! | Wavefront OBJ | `.obj` | Positions and faces only |
//! | STL | `.stl` | Binary, with face normals |
//! | PLY | `.ply` | ASCII Stanford polygon format |
//!
//! # Usage
//!
//! ```no_run
//! use grotto::{generate, CaveConfig};
//!
//! let cave = generate(&CaveConfig::default()).unwrap();
//! grotto::io::save(cave.floor(), "floor.obj").unwrap();
//! grotto::io::stl::save(cave.walls(), "walls.stl").unwrap();
//! ```

pub mod obj;
pub mod ply;
pub mod stl;

use std::path::Path;

use crate::error::{CaveError, Result};
use crate::mesh::Mesh;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Wavefront OBJ format.
    Obj,
    /// STL (stereolithography) format.
    Stl,
    /// PLY (Stanford polygon) format.
    Ply,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "obj" => Some(Format::Obj),
            "stl" => Some(Format::Stl),
            "ply" => Some(Format::Ply),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }
}

/// Save a mesh to a file, picking the format from the extension.
pub fn save<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| CaveError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })?;

    log::debug!(
        "saving {} triangles to {} as {:?}",
        mesh.num_triangles(),
        path.display(),
        format
    );
    match format {
        Format::Obj => obj::save(mesh, path),
        Format::Stl => stl::save(mesh, path),
        Format::Ply => ply::save(mesh, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_path("cave.OBJ"), Some(Format::Obj));
        assert_eq!(Format::from_path("a/b/walls.stl"), Some(Format::Stl));
        assert_eq!(Format::from_extension("Ply"), Some(Format::Ply));
        assert_eq!(Format::from_path("cave.gltf"), None);
        assert_eq!(Format::from_path("cave"), None);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = save(&Mesh::new(), dir.path().join("cave.fbx")).unwrap_err();
        match err {
            CaveError::UnsupportedFormat { extension } => assert_eq!(extension, "fbx"),
            other => panic!("unexpected error {:?}", other),
        }

        let err = save(&Mesh::new(), dir.path().join("cave")).unwrap_err();
        assert!(matches!(err, CaveError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_dispatch_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["floor.obj", "floor.stl", "floor.ply"] {
            let path = dir.path().join(name);
            save(&Mesh::new(), &path).unwrap();
            assert!(path.exists(), "{} was not written", name);
        }
    }
}
