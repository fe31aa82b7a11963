// src/ui/panel.rs
//! Default UI panels
//!
//! Pre-built panel exposing the wireframe material parameters and basic
//! scene information.

use crate::gfx::scene::scene::Scene;

/// Settings panel for the shared wireframe material.
///
/// Exposes the three tunable parameters of the shading program (line
/// color, line thickness, face color) plus per-object visibility.
/// Parameter changes are synced to the GPU by the app after the UI pass.
pub fn wireframe_settings_panel(ui: &imgui::Ui, scene: &mut Scene) {
    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return;
    }

    ui.window("Wireframe")
        .size([300.0, 280.0], imgui::Condition::FirstUseEver)
        .position([20.0, 20.0], imgui::Condition::FirstUseEver)
        .resizable(true)
        .collapsible(true)
        .build(|| {
            ui.text("Material");
            ui.separator();

            ui.color_edit3("Line color", &mut scene.material.line_color);
            ui.color_edit3("Face color", &mut scene.material.face_color);
            ui.slider("Line thickness", 0.5, 10.0, &mut scene.material.line_thickness);

            ui.spacing();
            ui.text("Objects");
            ui.separator();

            for object in scene.objects.iter_mut() {
                let label = if object.name.is_empty() {
                    "unnamed".to_string()
                } else {
                    object.name.clone()
                };
                ui.checkbox(&label, &mut object.visible);
            }

            ui.spacing();
            ui.text(format!("{} triangles", scene.total_triangles()));
        });
}
