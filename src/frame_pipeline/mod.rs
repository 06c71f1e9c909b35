//! The per-frame acquire, record, submit, and present cycle.
//!
//! Every swapchain image owns a [PerFrame] with its own command pool, fence
//! and semaphores. Acquire semaphores are not tied to an image ahead of time
//! because the image index is only known after acquisition. They come from a
//! [SemaphorePool] and are kept in [AcquireSemaphores] once the index is
//! known.

mod acquire_semaphores;
mod frame_error;
mod frame_pipeline;
mod per_frame;

pub use self::{
    acquire_semaphores::{AcquireSemaphores, SemaphoreSource},
    frame_error::FrameError,
};

use ::{ash::vk, std::sync::Arc};

use crate::vulkan::{
    sync::{Fence, Semaphore, SemaphorePool},
    CommandBuffer, CommandPool, RenderDevice, Swapchain,
};

/// A frame which is ready to receive rendering commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// The index of the swapchain image being targeted. Useful for renderers
    /// with per-image resources.
    pub swapchain_image_index: usize,

    /// The frame's command buffer, already in the recording state.
    pub command_buffer: vk::CommandBuffer,
}

/// The result of trying to start a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    FrameAcquired(Frame),
    SwapchainNeedsRebuild,
}

/// A frame pipeline aids with the swapchain acquire->render->present workflow.
pub struct FramePipeline {
    frames: Vec<PerFrame>,
    acquire_semaphores: AcquireSemaphores<Semaphore>,
    semaphore_pool: SemaphorePool,
    swapchain: Swapchain,
    present_mode: vk::PresentModeKHR,
    swapchain_needs_rebuild: bool,

    /// The device used to create this frame pipeline.
    pub vk_dev: Arc<RenderDevice>,
}

/// All per-frame resources required for coordinating the swapchain with
/// multiple frames in-flight.
pub struct PerFrame {
    /// Signalled when all graphics operations are complete and the frame is
    /// ready for presentation.
    pub release_semaphore: Semaphore,

    /// Signalled when all submitted graphics commands have completed.
    pub queue_submit_fence: Fence,

    /// The command pool for operations in this frame.
    pub command_pool: Arc<CommandPool>,

    /// The command buffer for operations in this frame.
    pub command_buffer: CommandBuffer,
}
