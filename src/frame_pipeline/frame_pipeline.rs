use ::{ash::vk, std::sync::Arc};

use super::{
    AcquireSemaphores, Frame, FrameError, FramePipeline, FrameStatus, PerFrame,
};
use crate::{
    vulkan::{
        errors::VulkanError, sync::SemaphorePool, CommandBuffer, RenderDevice,
        Swapchain, VulkanDebug,
    },
    vulkan_ext::CommandBufferExt,
};

impl FramePipeline {
    /// Create the swapchain and one set of frame resources per swapchain
    /// image.
    pub fn new(
        vk_dev: Arc<RenderDevice>,
        framebuffer_size: (u32, u32),
        present_mode: vk::PresentModeKHR,
    ) -> Result<Self, FrameError> {
        let swapchain =
            Swapchain::new(vk_dev.clone(), framebuffer_size, present_mode, None)
                .map_err(VulkanError::SwapchainError)?;
        let mut frame_pipeline = Self {
            frames: vec![],
            acquire_semaphores: AcquireSemaphores::new(),
            semaphore_pool: SemaphorePool::new(vk_dev.clone()),
            swapchain,
            present_mode,
            swapchain_needs_rebuild: false,
            vk_dev,
        };
        frame_pipeline.rebuild_frames()?;
        Ok(frame_pipeline)
    }

    /// The swapchain currently used for presentation.
    pub fn swapchain(&self) -> &Swapchain {
        &self.swapchain
    }

    /// The owned command buffer for an acquired frame.
    pub fn frame_command_buffer(&self, frame: &Frame) -> &CommandBuffer {
        &self.frames[frame.swapchain_image_index].command_buffer
    }

    /// Mark the swapchain as out of date. The next call to
    /// [Self::acquire_frame] reports that the swapchain needs to be rebuilt.
    pub fn invalidate_swapchain(&mut self) {
        self.swapchain_needs_rebuild = true;
    }

    pub fn swapchain_needs_rebuild(&self) -> bool {
        self.swapchain_needs_rebuild
    }

    /// Begin rendering a single frame.
    ///
    /// When a frame is acquired its fence has been waited on and reset, its
    /// command pool has been reset, and its command buffer is recording.
    pub fn acquire_frame(&mut self) -> Result<FrameStatus, FrameError> {
        let swapchain = &self.swapchain;
        let acquired = self.acquire_semaphores.acquire(
            &mut self.swapchain_needs_rebuild,
            &mut self.semaphore_pool,
            |semaphore| {
                swapchain
                    .acquire_next_image(semaphore.raw)
                    .map_err(|err| VulkanError::SwapchainError(err).into())
            },
        )?;
        let index = match acquired {
            Some(index) => index,
            None => return Ok(FrameStatus::SwapchainNeedsRebuild),
        };

        let frame = &self.frames[index];

        // Typically a no-op because other frames were rendered since this
        // image was last used.
        frame
            .queue_submit_fence
            .wait_and_reset()
            .map_err(VulkanError::FenceError)?;
        frame
            .command_pool
            .reset()
            .map_err(VulkanError::CommandBufferError)?;
        unsafe {
            frame
                .command_buffer
                .begin_one_time_submit()
                .map_err(|err| FrameError::UnableToBeginFrame(index, err))?;
        }

        Ok(FrameStatus::FrameAcquired(Frame {
            swapchain_image_index: index,
            command_buffer: frame.command_buffer.raw,
        }))
    }

    /// Finish the frame's command buffer, submit it to the graphics queue, and
    /// queue the swapchain image for presentation.
    pub fn present_frame(&mut self, frame: Frame) -> Result<(), FrameError> {
        let index = frame.swapchain_image_index;
        let current_frame = &self.frames[index];
        unsafe {
            current_frame
                .command_buffer
                .end_commands()
                .map_err(|err| FrameError::UnableToEndFrame(index, err))?;
        }

        let acquire_semaphore = self
            .acquire_semaphores
            .get(index)
            .ok_or(FrameError::FrameNotAcquired(index))?;

        let wait_stage = vk::PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT;
        let submit_info = vk::SubmitInfo {
            command_buffer_count: 1,
            p_command_buffers: &current_frame.command_buffer.raw,
            wait_semaphore_count: 1,
            p_wait_semaphores: &acquire_semaphore.raw,
            p_wait_dst_stage_mask: &wait_stage,
            signal_semaphore_count: 1,
            p_signal_semaphores: &current_frame.release_semaphore.raw,
            ..Default::default()
        };
        unsafe {
            self.vk_dev
                .logical_device
                .queue_submit(
                    self.vk_dev.graphics_queue.queue,
                    &[submit_info],
                    current_frame.queue_submit_fence.raw,
                )
                .map_err(|err| FrameError::UnableToSubmitFrame(index, err))?;
        }

        let needs_rebuild = self
            .swapchain
            .present(
                self.vk_dev.present_queue.queue,
                index,
                current_frame.release_semaphore.raw,
            )
            .map_err(VulkanError::SwapchainError)?;
        if needs_rebuild {
            self.invalidate_swapchain();
        }
        Ok(())
    }

    /// Block until every submitted frame has finished executing.
    pub fn wait_for_all_frames_to_complete(&self) -> Result<(), FrameError> {
        for frame in &self.frames {
            frame
                .queue_submit_fence
                .wait()
                .map_err(VulkanError::FenceError)?;
        }
        Ok(())
    }

    /// Replace the swapchain and every per-frame resource.
    ///
    /// The old swapchain is handed to the new one so presentation can
    /// continue while it is retired.
    pub fn rebuild_swapchain(
        &mut self,
        framebuffer_size: (u32, u32),
    ) -> Result<(), FrameError> {
        self.wait_for_all_frames_to_complete()?;
        self.vk_dev
            .wait_idle()
            .map_err(VulkanError::RenderDeviceError)?;

        let swapchain = Swapchain::new(
            self.vk_dev.clone(),
            framebuffer_size,
            self.present_mode,
            Some(&self.swapchain),
        )
        .map_err(VulkanError::SwapchainError)?;
        self.swapchain = swapchain;

        self.rebuild_frames()?;
        self.swapchain_needs_rebuild = false;
        Ok(())
    }

    fn rebuild_frames(&mut self) -> Result<(), FrameError> {
        self.frames.clear();
        self.acquire_semaphores
            .reset(self.swapchain.image_count(), &mut self.semaphore_pool);
        for i in 0..self.swapchain.image_count() {
            let frame = PerFrame::new(self.vk_dev.clone())?;
            frame
                .set_debug_name(format!("Frame {}", i))
                .map_err(VulkanError::VulkanDebugError)?;
            self.frames.push(frame);
        }
        log::debug!(
            "Built {} frames, {} recycled semaphores",
            self.frames.len(),
            self.semaphore_pool.recycled_count()
        );
        Ok(())
    }
}

impl Drop for FramePipeline {
    fn drop(&mut self) {
        if let Err(err) = self.wait_for_all_frames_to_complete() {
            log::error!("Error while waiting for frames to complete: {}", err);
        }
    }
}
