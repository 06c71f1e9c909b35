use ::{anyhow::Result, ash::vk};
use vk_scenes::{
    application::{aspect_ratio, Application, Scene, SceneContext},
    camera::{Camera, FreeCamera},
    config::AppConfig,
    input::InputEvent,
    logging,
    renderer::GpuMesh,
    scene::{Mesh, SceneUniforms},
};

struct CubeScene {
    camera: FreeCamera,
    cube: GpuMesh,
}

impl Scene for CubeScene {
    fn new(context: &SceneContext) -> Result<Self> {
        let mut camera = FreeCamera::default();
        context.configure_camera(&mut camera);
        let cube = context.upload_mesh(&Mesh::cube(), "Cube")?;
        Ok(Self { camera, cube })
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
        SceneUniforms::from_camera(&self.camera)
    }

    fn meshes(&self) -> Vec<&GpuMesh> {
        vec![&self.cube]
    }
}

fn main() -> Result<()> {
    let config = AppConfig::from_env_or_default()?;
    let _logger = logging::setup(&config.log_level)?;
    Application::<CubeScene>::new(config)?.run()
}
