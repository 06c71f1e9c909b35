use ::{ash::vk, thiserror::Error};

use crate::vulkan::errors::{InstanceError, RenderDeviceError};

/// Window Errors represent things which can go wrong while creating and
/// manipulating GLFW windows.
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("Failed to initialize GLFW")]
    UnableToInitGLFW(#[from] glfw::InitError),

    #[error("Vulkan is not supported on this device")]
    VulkanNotSupported,

    #[error("The GLFW Window could not be created")]
    WindowCreateFailed,

    #[error("The Window's event reciever has already been taken")]
    EventReceiverLost,

    #[error("GLFW is unable to determine the required Vulkan extensions")]
    RequiredExtensionsUnavailable,

    #[error("Unexpected instance error")]
    UnexpectedInstanceError(#[from] InstanceError),

    #[error("Unable to create the Vulkan surface")]
    UnableToCreateSurface(#[source] vk::Result),

    #[error("Unable to create the Vulkan render device")]
    UnexpectedRenderDeviceError(#[from] RenderDeviceError),
}
