//! Scene container: objects, the shared wireframe material, and the camera.

use cgmath::Vector3;
use log::{error, info};
use wgpu::Device;

use crate::gfx::{
    camera::camera_utils::CameraManager,
    geometry::{self, GeometryData},
    resources::material::WireframeMaterial,
    scene::object::Mesh,
};

use super::object::Object;

/// Main scene containing objects, the wireframe material, and camera.
///
/// Every object in the scene is rendered with the single shared wireframe
/// program; there is no per-object material assignment.
pub struct Scene {
    pub camera_manager: CameraManager,
    pub objects: Vec<Object>,
    pub material: WireframeMaterial,
}

impl Scene {
    pub fn new(camera_manager: CameraManager) -> Self {
        Self {
            camera_manager,
            objects: Vec::new(),
            material: WireframeMaterial::default(),
        }
    }

    /// Updates per-frame scene state (camera matrices).
    pub fn update(&mut self) {
        self.camera_manager.camera.update_view_proj();
    }

    /// Loads a model from an OBJ file, normalizes every surface for the
    /// wireframe pipeline, and adds it to the scene.
    ///
    /// A load failure is reported and leaves the scene unchanged. A surface
    /// that cannot be tagged is reported and skipped without affecting its
    /// siblings.
    pub fn add_object(&mut self, object_path: &str) {
        let load_result = tobj::load_obj(
            object_path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        );

        let (models, _materials) = match load_result {
            Ok(loaded) => loaded,
            Err(e) => {
                error!("failed to load model '{object_path}': {e}");
                return;
            }
        };

        let surfaces: Vec<GeometryData> = models
            .iter()
            .map(|m| {
                let mesh = &m.mesh;
                let positions: Vec<[f32; 3]> = mesh
                    .positions
                    .chunks_exact(3)
                    .map(|p| [p[0], p[1], p[2]])
                    .collect();

                // Use normals from the OBJ if present, otherwise compute them.
                let normals: Vec<[f32; 3]> =
                    if !mesh.normals.is_empty() && mesh.normals.len() == mesh.positions.len() {
                        mesh.normals
                            .chunks_exact(3)
                            .map(|n| [n[0], n[1], n[2]])
                            .collect()
                    } else {
                        GeometryData::compute_vertex_normals(&positions, &mesh.indices)
                    };

                GeometryData {
                    positions,
                    normals,
                    indices: Some(mesh.indices.clone()),
                    barycentric: None,
                    mode: crate::gfx::geometry::DrawMode::TriangleList,
                }
            })
            .collect();

        let meshes: Vec<Mesh> = geometry::normalize_surfaces(surfaces)
            .iter()
            .filter_map(|surface| match Mesh::from_geometry(surface) {
                Ok(mesh) => Some(mesh),
                Err(e) => {
                    error!("skipping surface of '{object_path}': {e}");
                    None
                }
            })
            .collect();

        if meshes.is_empty() {
            error!("model '{object_path}' contained no drawable surfaces");
            return;
        }

        let triangles: u32 = meshes.iter().map(Mesh::triangle_count).sum();
        info!(
            "loaded '{object_path}': {} surface(s), {triangles} triangles",
            meshes.len()
        );

        let mut object = Object::new(meshes);
        if let Some(first_model) = models.first() {
            if !first_model.name.is_empty() {
                object.set_name(first_model.name.clone());
            }
        }

        self.objects.push(object);
    }

    /// Adds a wireframe-tagged unit cube at the given position.
    pub fn add_cube(&mut self, translation: Vector3<f32>) {
        let cube = geometry::normalize(geometry::generate_cube())
            .expect("cube primitive is always triangulated");
        let mesh = Mesh::from_geometry(&cube).expect("normalized cube is always tagged");

        let mut object = Object::new(vec![mesh]);
        object.set_name("cube");
        object.set_translation(translation);
        self.objects.push(object);
    }

    /// Creates GPU resources for all objects and the material.
    ///
    /// Must be called after the GPU context is available and before
    /// rendering.
    pub fn init_gpu_resources(&mut self, device: &Device, queue: &wgpu::Queue) {
        for object in self.objects.iter_mut() {
            object.init_gpu_resources(device);
        }
        self.material.init_gpu_resources(device, queue);
    }

    /// Syncs wireframe parameter changes (e.g. from the UI) to the GPU.
    pub fn update_material(&mut self, queue: &wgpu::Queue) {
        self.material.update_gpu_resources(queue);
    }

    pub fn get_object_names(&self) -> Vec<String> {
        self.objects.iter().map(|obj| obj.name.clone()).collect()
    }

    pub fn get_object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn get_object_mut(&mut self, index: usize) -> Option<&mut Object> {
        self.objects.get_mut(index)
    }

    /// Total triangle count across all objects, for UI display.
    pub fn total_triangles(&self) -> u32 {
        self.objects
            .iter()
            .map(|obj| obj.meshes.iter().map(Mesh::triangle_count).sum::<u32>())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::{camera_controller::CameraController, orbit_camera::OrbitCamera};

    fn test_scene() -> Scene {
        let camera = OrbitCamera::new(5.0, 0.0, 0.0, Vector3::new(0.0, 0.0, 0.0), 1.0);
        let controller = CameraController::new(0.005, 0.1);
        Scene::new(CameraManager::new(camera, controller))
    }

    #[test]
    fn missing_model_leaves_scene_unchanged() {
        let mut scene = test_scene();
        scene.add_object("does/not/exist.obj");
        assert_eq!(scene.get_object_count(), 0);
    }

    #[test]
    fn wellformed_model_attaches_fully_tagged_object() {
        let mut scene = test_scene();
        scene.add_object("assets/gem.obj");

        assert_eq!(scene.get_object_count(), 1);
        let basis = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        for mesh in &scene.objects[0].meshes {
            assert!(mesh.vertex_count() > 0);
            assert_eq!(mesh.vertex_count() % 3, 0);
            for (i, vertex) in mesh.vertices().iter().enumerate() {
                assert_eq!(vertex.barycentric, basis[i % 3]);
            }
        }
    }

    #[test]
    fn cube_object_is_flattened_and_tagged() {
        let mut scene = test_scene();
        scene.add_cube(Vector3::new(0.7, 0.0, 0.0));

        assert_eq!(scene.get_object_count(), 1);
        let mesh = &scene.objects[0].meshes[0];
        assert_eq!(mesh.vertex_count(), 36);

        let basis = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        for (i, vertex) in mesh.vertices().iter().enumerate() {
            assert_eq!(vertex.barycentric, basis[i % 3]);
        }
    }
}
