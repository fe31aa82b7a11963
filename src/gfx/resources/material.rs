//! The shared wireframe material.
//!
//! One material instance drives every object in the scene. It exposes the
//! three tunable parameters of the wireframe program: line color, line
//! thickness (edge half-width in screen-derivative units), and face color.

use wgpu::Device;

use crate::wgpu_utils::{
    binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
    binding_types,
    uniform_buffer::UniformBuffer,
};

/// GPU uniform data for the wireframe program.
///
/// Must match the `WireframeUniform` struct in `wireframe.wgsl` exactly;
/// vec3 fields are padded to 16-byte alignment.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WireframeUniform {
    pub line_color: [f32; 3],
    pub line_thickness: f32,
    pub face_color: [f32; 3],
    _padding: f32,
}

type WireframeUBO = UniformBuffer<WireframeUniform>;

/// Bind group management for the wireframe material (group 2).
pub struct MaterialBindings {
    bind_group_layout: BindGroupLayoutWithDesc,
    bind_group: Option<wgpu::BindGroup>,
}

impl MaterialBindings {
    pub fn new(device: &Device) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_fragment(binding_types::uniform())
            .create(device, "Material Bind Group Layout");

        MaterialBindings {
            bind_group_layout,
            bind_group: None,
        }
    }

    pub fn create_bind_group(&mut self, device: &Device, ubo: &WireframeUBO) {
        self.bind_group = Some(
            BindGroupBuilder::new(&self.bind_group_layout)
                .resource(ubo.binding_resource())
                .create(device, "Material Bind Group"),
        );
    }

    pub fn bind_group_layouts(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }

    pub fn bind_groups(&self) -> &wgpu::BindGroup {
        self.bind_group
            .as_ref()
            .expect("Bind group has not been created yet!")
    }
}

/// The wireframe shading parameters plus their GPU resources.
pub struct WireframeMaterial {
    pub line_color: [f32; 3],
    pub line_thickness: f32,
    pub face_color: [f32; 3],

    material_ubo: Option<WireframeUBO>,
    material_bindings: Option<MaterialBindings>,
}

impl Default for WireframeMaterial {
    fn default() -> Self {
        Self {
            // 0xffbbff lines over 0xff0000 faces
            line_color: [1.0, 0.733, 1.0],
            line_thickness: 2.5,
            face_color: [1.0, 0.0, 0.0],
            material_ubo: None,
            material_bindings: None,
        }
    }
}

impl WireframeMaterial {
    pub fn new(line_color: [f32; 3], line_thickness: f32, face_color: [f32; 3]) -> Self {
        Self {
            line_color,
            line_thickness,
            face_color,
            ..Default::default()
        }
    }

    fn to_uniform(&self) -> WireframeUniform {
        WireframeUniform {
            line_color: self.line_color,
            line_thickness: self.line_thickness,
            face_color: self.face_color,
            _padding: 0.0,
        }
    }

    /// Creates the uniform buffer and bind group.
    pub fn init_gpu_resources(&mut self, device: &Device, _queue: &wgpu::Queue) {
        let ubo = WireframeUBO::new_with_data(device, &self.to_uniform());
        let mut bindings = MaterialBindings::new(device);
        bindings.create_bind_group(device, &ubo);

        self.material_ubo = Some(ubo);
        self.material_bindings = Some(bindings);
    }

    /// Writes parameter changes to the GPU. No-op until initialized.
    pub fn update_gpu_resources(&mut self, queue: &wgpu::Queue) {
        let uniform = self.to_uniform();
        if let Some(ubo) = &mut self.material_ubo {
            ubo.update_content(queue, uniform);
        }
    }

    pub fn get_bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.material_bindings.as_ref().map(|b| b.bind_groups())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_layout_is_32_bytes() {
        assert_eq!(std::mem::size_of::<WireframeUniform>(), 32);
    }

    #[test]
    fn default_matches_reference_palette() {
        let material = WireframeMaterial::default();
        assert_eq!(material.line_thickness, 2.5);
        assert_eq!(material.face_color, [1.0, 0.0, 0.0]);
    }
}
