use ::{
    anyhow::{Context, Result},
    glfw::{Action, Key, WindowEvent},
    std::sync::Arc,
};

use super::{Application, Scene, SceneContext};
use crate::{
    config::AppConfig,
    frame_pipeline::{FramePipeline, FrameStatus},
    glfw_window::GlfwWindow,
    input::InputMapper,
    renderer::SceneRenderer,
    timing::{FpsCounter, FrameClock, FrameRateLimit},
    vulkan::{MemoryAllocator, OneTimeSubmitCommandPool, PassthroughAllocator},
};

/// The number of frames averaged by the frame rate limiter.
const FRAMES_TO_TRACK: usize = 30;

impl<S: Scene> Application<S> {
    /// Create the window, the Vulkan device, and the scene.
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate().context("Invalid application config")?;

        let window = GlfwWindow::new(
            &config.window_title,
            config.window_width,
            config.window_height,
        )
        .context("Unable to create the window")?;
        let vk_dev = window
            .create_render_device(
                &config.window_title,
                config.enable_validation,
            )
            .context("Unable to create the render device")?;
        let vk_alloc: Arc<dyn MemoryAllocator> =
            Arc::new(PassthroughAllocator::new(vk_dev.clone()));

        let frame_pipeline = FramePipeline::new(
            vk_dev.clone(),
            window.framebuffer_size(),
            config.present_mode.to_vk(),
        )
        .context("Unable to create the frame pipeline")?;
        let renderer = SceneRenderer::new(
            vk_dev.clone(),
            vk_alloc.clone(),
            frame_pipeline.swapchain(),
            &config,
        )
        .context("Unable to create the scene renderer")?;

        let upload_pool = OneTimeSubmitCommandPool::new(
            vk_dev.clone(),
            &vk_dev.graphics_queue,
        )
        .context("Unable to create the upload command pool")?;

        let frame_rate_limit =
            FrameRateLimit::new(config.target_fps, FRAMES_TO_TRACK);
        let fps_counter = FpsCounter::new(config.fps_log_interval);
        let context = SceneContext {
            extent: frame_pipeline.swapchain().extent,
            config,
            upload_pool,
            vk_alloc,
            vk_dev,
        };
        let scene = S::new(&context).context("Unable to create the scene")?;

        Ok(Self {
            scene,
            renderer,
            frame_pipeline,
            context,
            input_mapper: InputMapper::new(),
            frame_rate_limit,
            fps_counter,
            frame_clock: FrameClock::new(),
            paused: false,
            window,
        })
    }

    /// Run the application, blocks until the main event loop exits.
    pub fn run(mut self) -> Result<()> {
        let event_receiver = self.window.take_event_receiver()?;

        while !self.window.window.should_close() {
            self.frame_rate_limit.start_frame();

            for (_, window_event) in
                self.window.flush_window_events(&event_receiver)
            {
                self.handle_window_event(window_event);
            }

            if self.paused {
                self.window.wait_for_events();
                continue;
            }

            if self.frame_pipeline.swapchain_needs_rebuild() {
                self.rebuild_swapchain_resources()?;
            }

            let time_step = self.frame_clock.tick();
            self.scene.update(time_step);
            self.render_frame()?;

            if let Some(fps) = self.fps_counter.frame() {
                log::info!("FPS: {:.2}", fps);
            }
            self.frame_rate_limit.sleep_to_limit();
        }

        self.frame_pipeline
            .wait_for_all_frames_to_complete()
            .context("Error while waiting for frames to complete")?;
        Ok(())
    }

    fn handle_window_event(&mut self, window_event: WindowEvent) {
        match window_event {
            WindowEvent::Key(Key::Escape, _, Action::Release, _) => {
                self.window.window.set_should_close(true);
            }
            WindowEvent::FramebufferSize(width, height) => {
                self.paused = width <= 0 || height <= 0;
                self.frame_pipeline.invalidate_swapchain();
            }
            _ => (),
        }

        if let Some(event) = self.input_mapper.map(&window_event) {
            self.scene.handle_event(&event);
        }
    }

    fn render_frame(&mut self) -> Result<()> {
        let frame = match self.frame_pipeline.acquire_frame()? {
            FrameStatus::SwapchainNeedsRebuild => {
                return self.rebuild_swapchain_resources();
            }
            FrameStatus::FrameAcquired(frame) => frame,
        };

        let image_index = frame.swapchain_image_index;
        self.renderer
            .update_uniforms(image_index, &self.scene.uniforms())?;

        // Safe because the frame's command buffer is recording and targets
        // the same swapchain image.
        unsafe {
            self.renderer.draw(
                self.frame_pipeline.frame_command_buffer(&frame),
                image_index,
                &self.scene.meshes(),
            );
        }

        self.frame_pipeline.present_frame(frame)?;
        Ok(())
    }

    fn rebuild_swapchain_resources(&mut self) -> Result<()> {
        let (width, height) = self.window.framebuffer_size();
        if width == 0 || height == 0 {
            // Minimized, the swapchain is rebuilt once the window has a size.
            return Ok(());
        }

        self.frame_pipeline
            .rebuild_swapchain((width, height))
            .context("Unable to rebuild the swapchain")?;

        // Rebuilding the swapchain waited for every frame, so no pending
        // command buffer still uses the renderer's resources.
        let swapchain = self.frame_pipeline.swapchain();
        self.renderer
            .rebuild_swapchain_resources(swapchain)
            .context("Unable to rebuild the renderer")?;

        self.context.extent = swapchain.extent;
        self.scene.resize(swapchain.extent);
        log::info!(
            "Rebuilt swapchain resources at {}x{}",
            swapchain.extent.width,
            swapchain.extent.height
        );
        Ok(())
    }
}

impl<S: Scene> Drop for Application<S> {
    fn drop(&mut self) {
        if let Err(err) = self.context.vk_dev.wait_idle() {
            log::error!("Unable to wait for the device to idle: {}", err);
        }
    }
}
