//! # Vertex Data Structures
//!
//! GPU-compatible vertex format for the wireframe pipeline.

/// A 3D vertex with position, normal, and barycentric tag.
///
/// The barycentric tag identifies the vertex's slot within its triangle
/// ((1,0,0), (0,1,0), or (0,0,1)); the fragment stage uses its screen-space
/// derivatives to estimate distance to the nearest triangle edge.
///
/// `#[repr(C)]` keeps the layout compatible with the GPU vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// Normal vector [nx, ny, nz]
    pub normal: [f32; 3],
    /// Barycentric tag, one of the three unit basis vectors
    pub barycentric: [f32; 3],
}

impl Vertex3D {
    /// Vertex buffer layout for the wireframe render pipeline.
    ///
    /// - Attribute 0: position (Float32x3)
    /// - Attribute 1: normal (Float32x3)
    /// - Attribute 2: barycentric (Float32x3)
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex3D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}
