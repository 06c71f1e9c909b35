mod buffer;

use ::{ash::vk, std::sync::Arc, thiserror::Error};

use crate::vulkan::{
    errors::{CommandBufferError, DeviceAllocatorError},
    Allocation, MemoryAllocator, RenderDevice,
};

#[derive(Debug, Error)]
pub enum BufferError {
    #[error(
        "Unable to create a new device buffer for {} bytes with flags {:?}",
        .size,
        .usage
    )]
    UnableToCreateBuffer {
        size: u64,
        usage: vk::BufferUsageFlags,
        source: vk::Result,
    },

    #[error("Unable to bind device memory to buffer")]
    UnableToBindDeviceMemory(#[source] vk::Result),

    #[error("Unable to map device memory")]
    UnableToMapDeviceMemory(#[source] vk::Result),

    #[error(
        "Device memory pointer was not found, did you try calling .map()?"
    )]
    NoMappedPointerFound,

    #[error("Cannot write {} bytes into a buffer of {} bytes", .0, .1)]
    DataTooLarge(u64, u64),

    #[error("Cannot create a buffer with no data")]
    EmptyData,

    #[error(transparent)]
    UnableToAllocateBuffer(#[from] DeviceAllocatorError),

    #[error("Unable to upload buffer data")]
    UnableToUploadData(#[from] CommandBufferError),
}

/// A Vulkan buffer and its associated device memory.
pub struct Buffer {
    /// The underlying Vulkan buffer type
    pub raw: vk::Buffer,

    /// The actual memory allocation for this buffer
    pub allocation: Allocation,

    /// The buffer's size in bytes as requested at creation.
    pub size_in_bytes: u64,

    pub usage: vk::BufferUsageFlags,

    /// The pointer to the cpu-accessible memory-mapped region of memory for
    /// this buffer. Only valid after a call to map().
    mapped_ptr: Option<*mut std::ffi::c_void>,

    allocator: Arc<dyn MemoryAllocator>,
    pub vk_dev: Arc<RenderDevice>,
}
