mod depth_format;
mod gpu_queue;
mod memory_type;
mod physical_device;
mod queue_family_indices;
mod render_device;

pub use self::{
    depth_format::{is_depth_only, pick_depth_format, DEPTH_FORMAT_CANDIDATES},
    memory_type::find_memory_type_index,
};

use crate::vulkan::{
    errors::{InstanceError, WindowSurfaceError},
    Instance, WindowSurface,
};

use ::{ash::vk, thiserror::Error};

/// This enum represents the errors which can occur while attempting to find
/// a usable physical device for the application.
#[derive(Debug, Error)]
pub enum PhysicalDeviceError {
    #[error("Unable to enumerate physical devices")]
    UnableToEnumerateDevices(#[source] vk::Result),

    #[error("No suitable physical device could be found for this application")]
    NoSuitableDeviceFound,
}

/// This enum represents errors which can occur while attempting to find all of
/// the Vulkan command queues which are required by the application.
#[derive(Debug, Error)]
pub enum QueueSelectionError {
    #[error("Unable to find a suitable graphics queue")]
    UnableToFindGraphicsQueue,

    #[error("Unable to find a suitable presentation queue")]
    UnableToFindPresentQueue,

    #[error(transparent)]
    UnexpectedWindowSurfaceError(#[from] WindowSurfaceError),
}

/// This enum represents errors which can occur while working with the render
/// device.
#[derive(Debug, Error)]
pub enum RenderDeviceError {
    #[error("Unexpected physical device error")]
    UnexpectedPhysicalDeviceError(#[from] PhysicalDeviceError),

    #[error("Unexpected queue selection error")]
    UnexpectedQueueSelectionError(#[from] QueueSelectionError),

    #[error("Unexpected Vulkan instance error")]
    UnexpectedInstanceError(#[from] InstanceError),

    #[error("Unexpected window surface error")]
    UnexpectedWindowSurfaceError(#[from] WindowSurfaceError),

    #[error("Unable to set debug name, {}, for {:?}", .0, .1)]
    UnableToSetDebugName(String, vk::ObjectType, #[source] vk::Result),

    #[error("Unable to wait for the device to become idle")]
    UnableToWaitIdle(#[source] vk::Result),

    #[error("None of the candidate depth formats are supported by the device")]
    NoSupportedDepthFormat,

    #[error("No memory type matches bits {:#b} with properties {:?}", .0, .1)]
    NoSuitableMemoryType(u32, vk::MemoryPropertyFlags),
}

/// This struct bundles a Vulkan queue with related data for easy tracking.
#[derive(Debug, Clone, Copy)]
pub struct GpuQueue {
    pub queue: vk::Queue,
    pub family_id: u32,
    pub index: u32,
}

/// The render device holds the core Vulkan state and devices which are used
/// by all parts of the application.
///
/// Fields are dropped in declaration order after the logical device is
/// destroyed, so the surface goes before the instance.
pub struct RenderDevice {
    /// The physical device used by this application.
    pub physical_device: vk::PhysicalDevice,

    /// The Vulkan logical device used to issue commands to the physical device.
    pub logical_device: ash::Device,

    /// The gpu command queues used by the application for rendering and
    /// presentation. These can be the same queue.
    pub graphics_queue: GpuQueue,
    pub present_queue: GpuQueue,

    /// The Vulkan presentation surface for the current window.
    pub window_surface: WindowSurface,

    /// The Vulkan library instance.
    pub instance: Instance,
}

/// The queue families chosen for graphics and presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFamilyIndices {
    pub graphics_family_index: u32,
    pub present_family_index: u32,
}
