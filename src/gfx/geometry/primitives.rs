//! # Primitive Shape Generation
//!
//! Procedural shapes used by the viewer. Primitives come out indexed; run
//! them through [`normalize`](super::normalize) before rendering.

use super::GeometryData;

/// Generate a unit cube centered at the origin.
///
/// The cube shares its 8 corner vertices between faces and indexes 12
/// triangles (36 indices). Corner normals point outward along the corner
/// diagonal; the wireframe shader only shades edges, so per-face normals
/// are not needed.
pub fn generate_cube() -> GeometryData {
    let mut data = GeometryData::new();

    let corners = [
        [-0.5, -0.5, -0.5],
        [0.5, -0.5, -0.5],
        [0.5, 0.5, -0.5],
        [-0.5, 0.5, -0.5],
        [-0.5, -0.5, 0.5],
        [0.5, -0.5, 0.5],
        [0.5, 0.5, 0.5],
        [-0.5, 0.5, 0.5],
    ];

    let inv_sqrt3 = 1.0 / 3.0f32.sqrt();
    for corner in corners {
        data.positions.push(corner);
        data.normals.push([
            corner[0].signum() * inv_sqrt3,
            corner[1].signum() * inv_sqrt3,
            corner[2].signum() * inv_sqrt3,
        ]);
    }

    // 2 triangles per face, counter-clockwise when seen from outside.
    data.indices = Some(vec![
        // Back face (negative Z)
        0, 2, 1, 0, 3, 2, //
        // Front face (positive Z)
        4, 5, 6, 4, 6, 7, //
        // Left face (negative X)
        0, 4, 7, 0, 7, 3, //
        // Right face (positive X)
        1, 2, 6, 1, 6, 5, //
        // Top face (positive Y)
        3, 7, 6, 3, 6, 2, //
        // Bottom face (negative Y)
        0, 1, 5, 0, 5, 4,
    ]);

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_generation() {
        let cube = generate_cube();
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.indices.as_ref().unwrap().len(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.positions.len(), cube.normals.len());
    }
}
