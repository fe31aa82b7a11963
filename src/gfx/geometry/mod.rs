//! # Geometry
//!
//! CPU-side surface data and the processing steps that prepare it for the
//! wireframe pipeline: index flattening, draw-mode conversion, barycentric
//! tagging, and procedural primitives.

pub mod barycentric;
pub mod primitives;

pub use barycentric::{assign_barycentric, flatten, normalize, normalize_surfaces, to_triangle_list};
pub use primitives::generate_cube;

use thiserror::Error;

use crate::gfx::scene::vertex::Vertex3D;

/// Errors produced while preparing geometry for the wireframe pipeline.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// The surface still shares vertices through an index list and cannot
    /// carry per-triangle attributes.
    #[error("surface is not triangle-flattened: {index_count} indices still reference shared vertices")]
    StillIndexed { index_count: usize },

    /// The flattened surface does not decompose into whole triangles.
    #[error("surface is not triangle-flattened: {vertex_count} vertices is not a multiple of 3")]
    NotTriangulated { vertex_count: usize },
}

/// How a surface's vertices are assembled into triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    TriangleList,
    TriangleStrip,
    TriangleFan,
}

/// A drawable surface: vertex positions plus optional per-vertex attributes
/// and optional shared-vertex indexing.
///
/// After [`normalize`] the surface is guaranteed to be an unindexed
/// triangle list whose vertex count is a multiple of 3, carrying one
/// barycentric tag per vertex.
#[derive(Debug, Clone)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub positions: Vec<[f32; 3]>,
    /// Normal vectors, one per vertex
    pub normals: Vec<[f32; 3]>,
    /// Shared-vertex index list, if the surface is indexed
    pub indices: Option<Vec<u32>>,
    /// Per-vertex barycentric tags, present once the surface is tagged
    pub barycentric: Option<Vec<[f32; 3]>>,
    /// Primitive assembly mode
    pub mode: DrawMode,
}

impl GeometryData {
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            indices: None,
            barycentric: None,
            mode: DrawMode::TriangleList,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len() / 3,
            None => self.positions.len() / 3,
        }
    }

    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    /// Builds smooth per-vertex normals by averaging the face normals of
    /// every triangle touching each vertex. Used when a loaded mesh does
    /// not ship its own normals.
    pub fn compute_vertex_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
        let mut normals = vec![[0.0f32; 3]; positions.len()];

        for triangle in indices.chunks_exact(3) {
            let [i0, i1, i2] = [
                triangle[0] as usize,
                triangle[1] as usize,
                triangle[2] as usize,
            ];
            let (v0, v1, v2) = (positions[i0], positions[i1], positions[i2]);

            let edge1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
            let edge2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];
            let face = [
                edge1[1] * edge2[2] - edge1[2] * edge2[1],
                edge1[2] * edge2[0] - edge1[0] * edge2[2],
                edge1[0] * edge2[1] - edge1[1] * edge2[0],
            ];

            for &i in &[i0, i1, i2] {
                normals[i][0] += face[0];
                normals[i][1] += face[1];
                normals[i][2] += face[2];
            }
        }

        for n in normals.iter_mut() {
            let length = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            if length > 0.0 {
                n[0] /= length;
                n[1] /= length;
                n[2] /= length;
            }
        }

        normals
    }

    /// Interleaves the surface into the GPU vertex format. The surface must
    /// already be normalized; untagged vertices would read an unbound
    /// attribute in the fragment stage.
    pub fn to_vertices(&self) -> Result<Vec<Vertex3D>, GeometryError> {
        if let Some(indices) = &self.indices {
            return Err(GeometryError::StillIndexed {
                index_count: indices.len(),
            });
        }
        let barycentric = match &self.barycentric {
            Some(tags) => tags,
            None => {
                return Err(GeometryError::NotTriangulated {
                    vertex_count: self.positions.len(),
                })
            }
        };

        Ok((0..self.positions.len())
            .map(|i| Vertex3D {
                position: self.positions[i],
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
                barycentric: barycentric[i],
            })
            .collect())
    }
}

impl Default for GeometryData {
    fn default() -> Self {
        Self::new()
    }
}
