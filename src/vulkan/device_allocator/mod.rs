//! This module defines traits and implementations for managing device (gpu)
//! memory.

mod allocation;
mod passthrough;

pub use self::passthrough::PassthroughAllocator;

use ::{ash::vk, thiserror::Error};

use crate::vulkan::errors::RenderDeviceError;

#[derive(Debug, Error)]
pub enum DeviceAllocatorError {
    #[error("failed to allocate memory using the Vulkan device")]
    LogicalDeviceAllocationFailed(#[source] vk::Result),

    #[error(
        "no memory type could be found for flags {:?} and requirements {:?}",
        .0,
        .1
    )]
    MemoryTypeNotFound(vk::MemoryPropertyFlags, vk::MemoryRequirements),

    #[error(transparent)]
    UnexpectedRenderDeviceError(#[from] RenderDeviceError),
}

/// A single allocated piece of device memory.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct Allocation {
    pub memory: vk::DeviceMemory,
    pub offset: vk::DeviceSize,
    pub byte_size: vk::DeviceSize,
    pub memory_type_index: u32,
}

/// Types which implement this trait can allocate memory when given specific
/// requirements and properties.
pub trait MemoryAllocator {
    /// Allocate a chunk of memory with the given requirements.
    ///
    /// # Safety
    ///
    /// The caller is responsible for freeing the returned memory when it is
    /// no longer in use.
    unsafe fn allocate_memory(
        &self,
        memory_requirements: vk::MemoryRequirements,
        property_flags: vk::MemoryPropertyFlags,
    ) -> Result<Allocation, DeviceAllocatorError>;

    /// Free an allocated piece of device memory.
    ///
    /// # Safety
    ///
    /// The caller must know that the GPU is no longer using the allocation.
    unsafe fn free(&self, allocation: &Allocation);
}
