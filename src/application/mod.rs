//! The windowed main loop shared by every demo.
//!
//! A demo implements [Scene] and hands it to [Application], which owns the
//! window, the frame pipeline, and the renderer.

mod application;
mod scene_context;

pub use self::scene_context::aspect_ratio;

use ::{anyhow::Result, ash::vk, std::sync::Arc};

use crate::{
    config::AppConfig,
    frame_pipeline::FramePipeline,
    glfw_window::GlfwWindow,
    input::{InputEvent, InputMapper},
    renderer::{GpuMesh, SceneRenderer},
    scene::SceneUniforms,
    timing::{FpsCounter, FrameClock, FrameRateLimit},
    vulkan::{MemoryAllocator, OneTimeSubmitCommandPool, RenderDevice},
};

/// Everything a scene needs to create its GPU resources.
pub struct SceneContext {
    pub config: AppConfig,

    /// The current swapchain extent.
    pub extent: vk::Extent2D,

    /// Used for blocking uploads of mesh data.
    pub upload_pool: OneTimeSubmitCommandPool,

    pub vk_alloc: Arc<dyn MemoryAllocator>,
    pub vk_dev: Arc<RenderDevice>,
}

/// The content rendered by an [Application].
pub trait Scene: Sized {
    /// Create the scene and upload its meshes.
    fn new(context: &SceneContext) -> Result<Self>;

    fn handle_event(&mut self, event: &InputEvent);

    /// Advance the scene by `time_step` seconds.
    fn update(&mut self, time_step: f32);

    /// Called after the swapchain is rebuilt with a new extent.
    fn resize(&mut self, extent: vk::Extent2D);

    fn uniforms(&self) -> SceneUniforms;

    /// The meshes to draw this frame, in draw order.
    fn meshes(&self) -> Vec<&GpuMesh>;
}

/// The application's state.
///
/// Fields are dropped in declaration order, so the scene and renderer are
/// released before the device they were created with, and the window
/// outlives its surface.
pub struct Application<S: Scene> {
    scene: S,
    renderer: SceneRenderer,
    frame_pipeline: FramePipeline,
    context: SceneContext,

    input_mapper: InputMapper,
    frame_rate_limit: FrameRateLimit,
    fps_counter: FpsCounter,
    frame_clock: FrameClock,
    paused: bool,

    window: GlfwWindow,
}
