mod command_buffer;
mod command_pool;
mod one_time_submit_command_pool;

use ::{ash::vk, std::sync::Arc, thiserror::Error};

use crate::vulkan::{errors::FenceError, sync::Fence, GpuQueue, RenderDevice};

#[derive(Debug, Error)]
pub enum CommandBufferError {
    #[error("Unable to create a new command buffer pool")]
    UnableToCreateCommandPool(#[source] vk::Result),

    #[error("Unable to allocate a command buffer from the command pool")]
    UnableToAllocateBuffer(#[source] vk::Result),

    #[error("The command pool returned no command buffers")]
    NoBufferAllocated,

    #[error("Unable to reset the command pool")]
    UnableToResetPool(#[source] vk::Result),

    #[error("Unable to begin the command buffer")]
    UnableToBeginCommandBuffer(#[source] vk::Result),

    #[error("Unable to end the command buffer")]
    UnableToEndCommandBuffer(#[source] vk::Result),

    #[error("Unable to submit the command buffer")]
    UnableToSubmitCommandBuffer(#[source] vk::Result),

    #[error("Error while waiting for submitted commands to complete")]
    UnexpectedFenceError(#[from] FenceError),
}

/// An owned command pool which is destroyed when dropped.
pub struct CommandPool {
    pub raw: vk::CommandPool,
    pub vk_dev: Arc<RenderDevice>,
}

/// A command buffer which is freed back to its pool when dropped. The buffer
/// keeps its pool alive.
pub struct CommandBuffer {
    pub raw: vk::CommandBuffer,
    pub pool: Arc<CommandPool>,
    pub vk_dev: Arc<RenderDevice>,
}

/// A pool and command buffer used for blocking, one-off submissions like
/// buffer uploads.
pub struct OneTimeSubmitCommandPool {
    pool: Arc<CommandPool>,
    cmd: CommandBuffer,
    fence: Fence,
    queue: GpuQueue,
    pub vk_dev: Arc<RenderDevice>,
}
