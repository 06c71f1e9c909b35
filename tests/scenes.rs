use ::{
    approx::assert_relative_eq,
    glfw::{Action, Key, Modifiers, WindowEvent},
    nalgebra::Vector4,
};
use vk_scenes::{
    camera::{new_camera, Camera},
    config::{AppConfig, CameraKind},
    input::InputMapper,
    scene::{Mesh, SceneUniforms, Vertex},
};

fn clip_position(uniforms: &SceneUniforms, vertex: &Vertex) -> Vector4<f32> {
    let [x, y, z] = vertex.position;
    let position = Vector4::new(x, y, z, 1.0);
    uniforms.projection * uniforms.view * uniforms.model * position
}

fn is_visible(clip: &Vector4<f32>) -> bool {
    let w = clip.w;
    w > 0.0
        && clip.x.abs() <= w
        && clip.y.abs() <= w
        && clip.z >= 0.0
        && clip.z <= w
}

fn configured_camera(config: &AppConfig) -> Box<dyn Camera> {
    let mut camera = new_camera(config.camera);
    camera.set_perspective(
        config.field_of_view,
        config.window_width as f32 / config.window_height as f32,
        config.near_plane,
        config.far_plane,
    );
    camera
}

#[test]
fn the_default_scene_centers_the_origin() {
    let config = AppConfig::default();
    let camera = configured_camera(&config);
    let uniforms = SceneUniforms::from_camera(camera.as_ref());

    let origin = clip_position(&uniforms, &Vertex::default());
    assert!(is_visible(&origin));
    assert_relative_eq!(origin.x / origin.w, 0.0, epsilon = 1e-5);
    assert_relative_eq!(origin.y / origin.w, 0.0, epsilon = 1e-5);

    let visible = Mesh::cube()
        .vertices
        .iter()
        .filter(|vertex| is_visible(&clip_position(&uniforms, vertex)))
        .count();
    assert!(visible >= 30, "only {} cube vertices are visible", visible);
}

#[test]
fn the_grid_plane_is_below_the_orbit_camera() {
    let config = AppConfig::default();
    let camera = configured_camera(&config);
    let uniforms = SceneUniforms::from_camera(camera.as_ref());

    // The camera sits at y = 2 with world up pointing along -y, so points on
    // the grid between the camera and the origin are below the screen
    // center. Vulkan clip space y grows downward.
    let near_corner = Vertex::new([1.0, 0.0, -2.0], [0.0; 3]);
    let clip = clip_position(&uniforms, &near_corner);
    assert!(clip.y / clip.w > 0.0);
}

#[test]
fn window_events_drive_the_configured_camera() {
    let config = AppConfig::from_toml_str(r#"camera = "free""#).unwrap();
    assert_eq!(config.camera, CameraKind::Free);
    let mut camera = configured_camera(&config);
    let start = camera.position();

    let mut mapper = InputMapper::new();
    let press = WindowEvent::Key(Key::W, 17, Action::Press, Modifiers::empty());
    if let Some(event) = mapper.map(&press) {
        camera.handle_event(&event);
    }
    camera.update(0.25);
    assert_relative_eq!(camera.position().z, start.z + 0.25, epsilon = 1e-5);

    let release =
        WindowEvent::Key(Key::W, 17, Action::Release, Modifiers::empty());
    if let Some(event) = mapper.map(&release) {
        camera.handle_event(&event);
    }
    let after_release = camera.position();
    camera.update(0.25);
    assert_relative_eq!(camera.position(), after_release);
}

#[test]
fn grid_size_follows_the_config() {
    let config = AppConfig::from_toml_str("grid_half_size = 3").unwrap();
    let grid = Mesh::grid(config.grid_half_size);
    assert_eq!(grid.vertices.len(), 4 * 7);
    assert!(grid.is_line_list());
    assert!(grid
        .vertices
        .iter()
        .all(|v| v.position.iter().all(|c| c.abs() <= 3.0)));
}
