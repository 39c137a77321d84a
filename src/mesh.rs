//! Triangle mesh data.
//!
//! A mesh is a flat list of vertex positions, three per triangle, with no
//! shared-vertex indexing and no attributes beyond position. The on-disk
//! `.tri` format is exactly that: consecutive little-endian `f32` triples,
//! nine floats per triangle, no header.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::math::vec3::Vec3;

/// Bytes per triangle record in a `.tri` file: 3 vertices x 3 f32 components.
pub const TRIANGLE_STRIDE: usize = 9 * std::mem::size_of::<f32>();

/// Built-in demo geometry: a unit quad in the xy-plane, split into two
/// triangles wound clockwise-front for the projected (y-down) screen space.
pub const QUAD_VERTICES: [Vec3; 6] = [
    Vec3::new(-1.0, -1.0, 0.0),
    Vec3::new(-1.0, 1.0, 0.0),
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(-1.0, -1.0, 0.0),
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(1.0, -1.0, 0.0),
];

/// Errors loading a `.tri` mesh file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file holds zero complete triangles: empty, or its length is not a
    /// multiple of [`TRIANGLE_STRIDE`]. A trailing partial record makes the
    /// whole mesh empty rather than a partial load.
    EmptyMesh,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "failed to read mesh file: {err}"),
            LoadError::EmptyMesh => write!(f, "empty mesh"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::EmptyMesh => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

/// A triangle list: vertex positions, three per triangle.
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vec3>,
}

impl Mesh {
    /// Builds a mesh from a flat vertex list. Any trailing vertices beyond
    /// the last complete triangle are dropped.
    pub fn from_vertices(mut vertices: Vec<Vec3>) -> Self {
        vertices.truncate(vertices.len() - vertices.len() % 3);
        Self { vertices }
    }

    /// Loads a `.tri` file.
    ///
    /// Returns [`LoadError::EmptyMesh`] when the byte length is zero or not
    /// an exact multiple of the per-triangle stride.
    pub fn from_tri_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let bytes = fs::read(path)?;
        Self::from_tri_bytes(&bytes)
    }

    /// Parses raw `.tri` bytes (little-endian f32 triples).
    pub fn from_tri_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        if bytes.is_empty() || bytes.len() % TRIANGLE_STRIDE != 0 {
            return Err(LoadError::EmptyMesh);
        }

        let vertices = bytes
            .chunks_exact(3 * std::mem::size_of::<f32>())
            .map(|chunk| {
                let component = |i: usize| {
                    f32::from_le_bytes([
                        chunk[4 * i],
                        chunk[4 * i + 1],
                        chunk[4 * i + 2],
                        chunk[4 * i + 3],
                    ])
                };
                Vec3::new(component(0), component(1), component(2))
            })
            .collect();

        Ok(Self { vertices })
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// The flat vertex list, three entries per triangle.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }
}
