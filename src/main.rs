use cgmath::Vector3;

use filigree::ui::wireframe_settings_panel;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let model_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/gem.obj".to_string());

    let mut app = filigree::default();

    app.add_cube(Vector3::new(0.7, 0.0, 0.0));
    app.add_model(&model_path);
    if let Some(model) = app.scene_mut().objects.last_mut() {
        model.set_translation(Vector3::new(0.5, -0.5, 0.0));
    }

    app.set_ui(wireframe_settings_panel);
    app.run()
}
