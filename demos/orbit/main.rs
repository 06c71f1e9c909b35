use ::{anyhow::Result, ash::vk};
use vk_scenes::{
    application::{aspect_ratio, Application, Scene, SceneContext},
    camera::{new_camera, Camera},
    config::AppConfig,
    input::InputEvent,
    logging,
    renderer::GpuMesh,
    scene::{Mesh, SceneUniforms},
};

/// A cube resting on a grid. The camera kind comes from the config.
struct OrbitScene {
    camera: Box<dyn Camera>,
    grid: GpuMesh,
    cube: GpuMesh,
}

impl Scene for OrbitScene {
    fn new(context: &SceneContext) -> Result<Self> {
        let mut camera = new_camera(context.config.camera);
        context.configure_camera(camera.as_mut());

        let grid = context
            .upload_mesh(&Mesh::grid(context.config.grid_half_size), "Grid")?;
        let cube = context.upload_mesh(&Mesh::cube(), "Cube")?;
        Ok(Self { camera, grid, cube })
    }

    fn handle_event(&mut self, event: &InputEvent) {
        self.camera.handle_event(event);
    }

    fn update(&mut self, time_step: f32) {
        self.camera.update(time_step);
    }

    fn resize(&mut self, extent: vk::Extent2D) {
        self.camera.set_aspect(aspect_ratio(extent));
    }

    fn uniforms(&self) -> SceneUniforms {
        SceneUniforms::from_camera(self.camera.as_ref())
    }

    fn meshes(&self) -> Vec<&GpuMesh> {
        vec![&self.grid, &self.cube]
    }
}

fn main() -> Result<()> {
    let config = AppConfig::from_env_or_default()?;
    let _logger = logging::setup(&config.log_level)?;
    log::info!("Using the {:?} camera", config.camera);
    Application::<OrbitScene>::new(config)?.run()
}
