use ::{ash::vk, std::sync::Arc};

use super::{Buffer, BufferError};
use crate::vulkan::{
    errors::VulkanDebugError, MemoryAllocator, OneTimeSubmitCommandPool,
    RenderDevice, VulkanDebug,
};

/// The size of a slice in bytes as a Vulkan device size.
pub fn byte_size_of<T>(data: &[T]) -> u64 {
    std::mem::size_of_val(data) as u64
}

impl Buffer {
    /// Create a new buffer and bind it to freshly allocated memory.
    pub fn new(
        vk_dev: Arc<RenderDevice>,
        allocator: Arc<dyn MemoryAllocator>,
        usage: vk::BufferUsageFlags,
        properties: vk::MemoryPropertyFlags,
        size_in_bytes: u64,
    ) -> Result<Self, BufferError> {
        let create_info = vk::BufferCreateInfo {
            size: size_in_bytes,
            usage,
            sharing_mode: vk::SharingMode::EXCLUSIVE,
            ..Default::default()
        };
        let raw = unsafe {
            vk_dev
                .logical_device
                .create_buffer(&create_info, None)
                .map_err(|source| BufferError::UnableToCreateBuffer {
                    size: size_in_bytes,
                    usage,
                    source,
                })?
        };

        let requirements = unsafe {
            vk_dev.logical_device.get_buffer_memory_requirements(raw)
        };
        let allocated =
            unsafe { allocator.allocate_memory(requirements, properties) };
        let allocation = match allocated {
            Ok(allocation) => allocation,
            Err(err) => {
                unsafe { vk_dev.logical_device.destroy_buffer(raw, None) };
                return Err(err.into());
            }
        };

        // From here on Drop cleans up both the buffer and the memory.
        let buffer = Self {
            raw,
            allocation,
            size_in_bytes,
            usage,
            mapped_ptr: None,
            allocator,
            vk_dev,
        };
        unsafe {
            buffer
                .vk_dev
                .logical_device
                .bind_buffer_memory(
                    buffer.raw,
                    buffer.allocation.memory,
                    buffer.allocation.offset,
                )
                .map_err(BufferError::UnableToBindDeviceMemory)?;
        }
        Ok(buffer)
    }

    /// Create a host visible and coherent buffer which stays mapped for its
    /// whole life. Used for per-frame uniform data.
    pub fn new_mapped(
        vk_dev: Arc<RenderDevice>,
        allocator: Arc<dyn MemoryAllocator>,
        usage: vk::BufferUsageFlags,
        size_in_bytes: u64,
    ) -> Result<Self, BufferError> {
        let mut buffer = Self::new(
            vk_dev,
            allocator,
            usage,
            vk::MemoryPropertyFlags::HOST_VISIBLE
                | vk::MemoryPropertyFlags::HOST_COHERENT,
            size_in_bytes,
        )?;
        buffer.map()?;
        Ok(buffer)
    }

    /// Create a DEVICE_LOCAL buffer filled with `data`.
    ///
    /// The data is written to a temporary staging buffer and then copied on
    /// the GPU using the upload pool. This call blocks until the copy is
    /// complete.
    pub fn new_device_local_with_data<T: Copy>(
        vk_dev: Arc<RenderDevice>,
        allocator: Arc<dyn MemoryAllocator>,
        usage: vk::BufferUsageFlags,
        data: &[T],
        upload_pool: &OneTimeSubmitCommandPool,
    ) -> Result<Self, BufferError> {
        let size_in_bytes = byte_size_of(data);
        if size_in_bytes == 0 {
            return Err(BufferError::EmptyData);
        }

        let mut staging = Self::new_mapped(
            vk_dev.clone(),
            allocator.clone(),
            vk::BufferUsageFlags::TRANSFER_SRC,
            size_in_bytes,
        )?;
        staging.write_data(data)?;
        staging.unmap();

        let buffer = Self::new(
            vk_dev,
            allocator,
            usage | vk::BufferUsageFlags::TRANSFER_DST,
            vk::MemoryPropertyFlags::DEVICE_LOCAL,
            size_in_bytes,
        )?;

        upload_pool.submit_sync_commands(|vk_dev, cmd| {
            let region = vk::BufferCopy {
                src_offset: 0,
                dst_offset: 0,
                size: size_in_bytes,
            };
            unsafe {
                vk_dev.logical_device.cmd_copy_buffer(
                    cmd,
                    staging.raw,
                    buffer.raw,
                    &[region],
                );
            }
        })?;

        Ok(buffer)
    }

    /// Acquire a CPU-accessible pointer to the memory used by this buffer.
    /// Mapping an already mapped buffer is a no-op.
    ///
    /// # Errors
    ///
    /// This will fail if the buffer was not created with the HOST_VISIBLE
    /// property.
    pub fn map(&mut self) -> Result<(), BufferError> {
        if self.mapped_ptr.is_some() {
            return Ok(());
        }
        let ptr = unsafe {
            self.vk_dev
                .logical_device
                .map_memory(
                    self.allocation.memory,
                    self.allocation.offset,
                    self.allocation.byte_size,
                    vk::MemoryMapFlags::empty(),
                )
                .map_err(BufferError::UnableToMapDeviceMemory)?
        };
        self.mapped_ptr = Some(ptr);
        Ok(())
    }

    /// Unmap the buffer's memory.
    pub fn unmap(&mut self) {
        if self.mapped_ptr.take().is_some() {
            unsafe {
                self.vk_dev
                    .logical_device
                    .unmap_memory(self.allocation.memory);
            }
        }
    }

    /// Copy `data` to the start of the mapped buffer.
    pub fn write_data<T: Copy>(
        &mut self,
        data: &[T],
    ) -> Result<(), BufferError> {
        let ptr = self.mapped_ptr.ok_or(BufferError::NoMappedPointerFound)?;
        let byte_size = byte_size_of(data);
        if byte_size > self.size_in_bytes {
            return Err(BufferError::DataTooLarge(
                byte_size,
                self.size_in_bytes,
            ));
        }
        unsafe {
            std::ptr::copy_nonoverlapping(
                data.as_ptr(),
                ptr as *mut T,
                data.len(),
            );
        }
        Ok(())
    }
}

impl VulkanDebug for Buffer {
    fn set_debug_name(
        &self,
        debug_name: impl Into<String>,
    ) -> Result<(), VulkanDebugError> {
        self.vk_dev.name_vulkan_object(
            debug_name,
            vk::ObjectType::BUFFER,
            self.raw,
        )?;
        Ok(())
    }
}

impl Drop for Buffer {
    /// # DANGER
    ///
    /// There is no internal synchronization for this type. Unexpected behavior
    /// can occur if this instance is still in-use by the GPU when it is
    /// dropped.
    fn drop(&mut self) {
        self.unmap();
        unsafe {
            self.vk_dev.logical_device.destroy_buffer(self.raw, None);
            self.allocator.free(&self.allocation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_size_accounts_for_the_element_size() {
        assert_eq!(byte_size_of(&[0u32; 6]), 24);
        assert_eq!(byte_size_of(&[[0f32; 3]; 2]), 24);
        assert_eq!(byte_size_of::<u8>(&[]), 0);
    }
}
