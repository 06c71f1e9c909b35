use ::{ash::vk, thiserror::Error};

use crate::{vulkan::errors::VulkanError, vulkan_ext::CommandBufferExtError};

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("Unable to begin the command buffer for frame {}", .0)]
    UnableToBeginFrame(usize, #[source] CommandBufferExtError),

    #[error("Unable to end the command buffer for frame {}", .0)]
    UnableToEndFrame(usize, #[source] CommandBufferExtError),

    #[error("Unable to submit graphics commands for frame {}", .0)]
    UnableToSubmitFrame(usize, #[source] vk::Result),

    #[error("Frame {} was presented without being acquired", .0)]
    FrameNotAcquired(usize),

    #[error(transparent)]
    UnexpectedVulkanError(#[from] VulkanError),
}
