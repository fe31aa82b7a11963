//! # Barycentric Tagging and Surface Normalization
//!
//! The wireframe shader derives distance-to-edge from a per-vertex
//! barycentric attribute. Each triangle's three vertices are tagged with
//! the unit basis vectors in a fixed order; the fragment stage then uses
//! screen-space derivatives of the interpolated tag to find the nearest
//! edge. The tags are per-triangle, so a surface must be expanded into an
//! unindexed triangle list before tagging.

use log::error;

use super::{DrawMode, GeometryData, GeometryError};

/// The tag assigned to the first, second, and third vertex of every
/// triangle. The order is load-bearing: the fragment shader's edge-factor
/// computation assumes it.
const TRIANGLE_TAGS: [[f32; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Attaches the barycentric tag attribute to a triangle-flattened surface.
///
/// Precondition: the surface is unindexed and its vertex count is a
/// multiple of 3. On violation the surface is left untagged and the error
/// describes the failed precondition.
pub fn assign_barycentric(geometry: &mut GeometryData) -> Result<(), GeometryError> {
    if let Some(indices) = &geometry.indices {
        return Err(GeometryError::StillIndexed {
            index_count: indices.len(),
        });
    }

    let count = geometry.positions.len();
    if count % 3 != 0 {
        return Err(GeometryError::NotTriangulated {
            vertex_count: count,
        });
    }

    let mut tags = Vec::with_capacity(count);
    for _ in 0..count / 3 {
        tags.extend_from_slice(&TRIANGLE_TAGS);
    }
    geometry.barycentric = Some(tags);

    Ok(())
}

/// Expands shared-vertex indexing into an unindexed surface where every
/// triangle owns independent copies of its three vertices.
///
/// Unindexed surfaces are returned unchanged. Any existing barycentric
/// attribute is dropped; tags are only meaningful on the flat layout.
pub fn flatten(geometry: &GeometryData) -> GeometryData {
    let indices = match &geometry.indices {
        Some(indices) => indices,
        None => return geometry.clone(),
    };

    let mut positions = Vec::with_capacity(indices.len());
    let mut normals = Vec::with_capacity(indices.len());
    for &i in indices {
        let i = i as usize;
        positions.push(geometry.positions[i]);
        // Keep positions and normals index-aligned even when the source
        // normals array is short.
        normals.push(geometry.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]));
    }

    GeometryData {
        positions,
        normals,
        indices: None,
        barycentric: None,
        mode: geometry.mode,
    }
}

/// Converts a triangle-strip or triangle-fan surface into a triangle list.
///
/// Strips alternate winding every primitive, so odd triangles swap their
/// first two vertices to keep a consistent front face. Expects an
/// unindexed surface (run [`flatten`] first).
pub fn to_triangle_list(geometry: &GeometryData) -> GeometryData {
    if geometry.mode == DrawMode::TriangleList {
        return geometry.clone();
    }

    let count = geometry.positions.len();
    let mut out = GeometryData::new();
    if count < 3 {
        return out;
    }

    let triangles: Vec<[usize; 3]> = match geometry.mode {
        DrawMode::TriangleStrip => (0..count - 2)
            .map(|i| {
                if i % 2 == 0 {
                    [i, i + 1, i + 2]
                } else {
                    [i + 1, i, i + 2]
                }
            })
            .collect(),
        DrawMode::TriangleFan => (1..count - 1).map(|i| [0, i, i + 1]).collect(),
        DrawMode::TriangleList => unreachable!(),
    };

    for [a, b, c] in triangles {
        for i in [a, b, c] {
            out.positions.push(geometry.positions[i]);
            out.normals
                .push(geometry.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]));
        }
    }

    out
}

/// Normalizes a surface for the wireframe pipeline.
///
/// Steps run in a fixed order per surface: expand shared-vertex indexing,
/// convert non-triangle draw modes to a triangle list, then attach the
/// barycentric tags. The result upholds the post-normalization invariant:
/// unindexed, triangle-list mode, vertex count a multiple of 3, tagged.
pub fn normalize(geometry: GeometryData) -> Result<GeometryData, GeometryError> {
    let mut geometry = if geometry.is_indexed() {
        flatten(&geometry)
    } else {
        geometry
    };

    if geometry.mode != DrawMode::TriangleList {
        geometry = to_triangle_list(&geometry);
    }

    assign_barycentric(&mut geometry)?;
    Ok(geometry)
}

/// Normalizes every surface of a loaded model, dropping surfaces that
/// cannot be tagged.
///
/// A failed surface is reported and skipped; the remaining surfaces are
/// still processed. Skipping is deliberate: a surface without tags fed to
/// the wireframe program would read an unbound vertex attribute.
pub fn normalize_surfaces(surfaces: Vec<GeometryData>) -> Vec<GeometryData> {
    surfaces
        .into_iter()
        .enumerate()
        .filter_map(|(i, surface)| match normalize(surface) {
            Ok(normalized) => Some(normalized),
            Err(e) => {
                error!("skipping surface {i}: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::generate_cube;

    fn triangle_soup(triangles: usize) -> GeometryData {
        let mut g = GeometryData::new();
        for i in 0..triangles * 3 {
            g.positions.push([i as f32, 0.0, 0.0]);
            g.normals.push([0.0, 1.0, 0.0]);
        }
        g
    }

    fn indexed_quad() -> GeometryData {
        let mut g = GeometryData::new();
        g.positions = vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ];
        g.normals = vec![[0.0, 0.0, 1.0]; 4];
        g.indices = Some(vec![0, 1, 2, 2, 3, 0]);
        g
    }

    #[test]
    fn tags_cycle_basis_vectors_in_vertex_order() {
        let mut g = triangle_soup(4);
        assign_barycentric(&mut g).unwrap();

        let tags = g.barycentric.as_ref().unwrap();
        assert_eq!(tags.len(), 12);
        for triangle in tags.chunks_exact(3) {
            assert_eq!(triangle[0], [1.0, 0.0, 0.0]);
            assert_eq!(triangle[1], [0.0, 1.0, 0.0]);
            assert_eq!(triangle[2], [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn rejects_vertex_count_not_multiple_of_three() {
        let mut g = triangle_soup(2);
        g.positions.pop();
        g.normals.pop();

        let err = assign_barycentric(&mut g).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::NotTriangulated { vertex_count: 5 }
        ));
        assert!(g.barycentric.is_none(), "failed tagging must leave no tags");
    }

    #[test]
    fn rejects_indexed_surface() {
        let mut g = indexed_quad();
        let err = assign_barycentric(&mut g).unwrap_err();
        assert!(matches!(err, GeometryError::StillIndexed { index_count: 6 }));
        assert!(g.barycentric.is_none());
    }

    #[test]
    fn flatten_expands_shared_vertices() {
        let flat = flatten(&indexed_quad());
        assert!(!flat.is_indexed());
        assert_eq!(flat.vertex_count(), 6);
        // Both triangles of the quad share the diagonal; after flattening
        // each owns its copy.
        assert_eq!(flat.positions[2], flat.positions[3]);
        assert_eq!(flat.positions[5], flat.positions[0]);
    }

    #[test]
    fn normalize_indexed_quad_yields_tagged_triangles() {
        let normalized = normalize(indexed_quad()).unwrap();
        assert!(!normalized.is_indexed());
        assert_eq!(normalized.vertex_count(), 6);
        assert_eq!(normalized.barycentric.as_ref().unwrap().len(), 6);
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize(indexed_quad()).unwrap();
        let twice = normalize(once.clone()).unwrap();

        assert_eq!(once.positions, twice.positions);
        assert_eq!(once.barycentric, twice.barycentric);
    }

    #[test]
    fn normalize_cube_yields_36_tagged_vertices() {
        let cube = generate_cube();
        assert!(cube.is_indexed());

        let normalized = normalize(cube).unwrap();
        assert_eq!(normalized.vertex_count(), 36);

        let tags = normalized.barycentric.as_ref().unwrap();
        assert_eq!(tags.len(), 36);
        for triangle in tags.chunks_exact(3) {
            assert_eq!(triangle[0], [1.0, 0.0, 0.0]);
            assert_eq!(triangle[1], [0.0, 1.0, 0.0]);
            assert_eq!(triangle[2], [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn strip_converts_to_triangle_list_with_consistent_winding() {
        let mut g = GeometryData::new();
        // Strip of 2 triangles over 4 vertices in the XY plane.
        g.positions = vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
        ];
        g.normals = vec![[0.0, 0.0, 1.0]; 4];
        g.mode = DrawMode::TriangleStrip;

        let list = to_triangle_list(&g);
        assert_eq!(list.mode, DrawMode::TriangleList);
        assert_eq!(list.vertex_count(), 6);
        // Odd strip triangle swaps its first two vertices.
        assert_eq!(list.positions[3], g.positions[2]);
        assert_eq!(list.positions[4], g.positions[1]);
        assert_eq!(list.positions[5], g.positions[3]);

        let normalized = normalize(list).unwrap();
        assert_eq!(normalized.barycentric.as_ref().unwrap().len(), 6);
    }

    #[test]
    fn fan_converts_to_triangle_list() {
        let mut g = GeometryData::new();
        // Quad as a 4-vertex fan around vertex 0.
        g.positions = vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ];
        g.normals = vec![[0.0, 0.0, 1.0]; 4];
        g.mode = DrawMode::TriangleFan;

        let list = to_triangle_list(&g);
        assert_eq!(list.vertex_count(), 6);
        assert_eq!(list.positions[0], g.positions[0]);
        assert_eq!(list.positions[3], g.positions[0]);
    }

    #[test]
    fn flatten_keeps_normals_aligned_when_source_normals_are_short() {
        let mut g = indexed_quad();
        g.normals.truncate(2);

        let flat = flatten(&g);
        assert_eq!(flat.normals.len(), flat.positions.len());
        // Vertex 2 has no source normal; its slot gets the default so the
        // later vertices stay paired with their own normals.
        assert_eq!(flat.normals[2], [0.0, 1.0, 0.0]);
        assert_eq!(flat.normals[5], g.normals[0]);
    }

    #[test]
    fn mode_conversion_keeps_normals_aligned_when_source_normals_are_short() {
        let mut g = GeometryData::new();
        g.positions = vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ];
        g.normals = vec![[1.0, 0.0, 0.0]];
        g.mode = DrawMode::TriangleFan;

        let list = to_triangle_list(&g);
        assert_eq!(list.normals.len(), list.positions.len());
        assert_eq!(list.normals[0], [1.0, 0.0, 0.0]);
        assert_eq!(list.normals[1], [0.0, 1.0, 0.0]);
    }

    #[test]
    fn normalize_surfaces_skips_untaggable_surface() {
        let mut broken = triangle_soup(1);
        broken.positions.pop();
        broken.normals.pop();

        let surfaces = vec![indexed_quad(), broken, triangle_soup(2)];
        let normalized = normalize_surfaces(surfaces);

        assert_eq!(normalized.len(), 2);
        assert!(normalized.iter().all(|g| g.barycentric.is_some()));
    }
}
