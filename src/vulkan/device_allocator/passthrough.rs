use ::{ash::vk, std::sync::Arc};

use super::{Allocation, DeviceAllocatorError, MemoryAllocator};
use crate::vulkan::{errors::RenderDeviceError, RenderDevice};

/// An allocator implementation which directly allocates and frees memory using
/// the vulkan device. Every request becomes its own vk::DeviceMemory.
pub struct PassthroughAllocator {
    vk_dev: Arc<RenderDevice>,
}

impl PassthroughAllocator {
    pub fn new(vk_dev: Arc<RenderDevice>) -> Self {
        Self { vk_dev }
    }
}

impl MemoryAllocator for PassthroughAllocator {
    unsafe fn allocate_memory(
        &self,
        memory_requirements: vk::MemoryRequirements,
        property_flags: vk::MemoryPropertyFlags,
    ) -> Result<Allocation, DeviceAllocatorError> {
        let memory_type_index = self
            .vk_dev
            .memory_type_index(
                memory_requirements.memory_type_bits,
                property_flags,
            )
            .map_err(|err| match err {
                RenderDeviceError::NoSuitableMemoryType(..) => {
                    DeviceAllocatorError::MemoryTypeNotFound(
                        property_flags,
                        memory_requirements,
                    )
                }
                other => other.into(),
            })?;
        let allocate_info = vk::MemoryAllocateInfo {
            memory_type_index,
            allocation_size: memory_requirements.size,
            ..Default::default()
        };

        // Memory from vkAllocateMemory always satisfies the alignment of any
        // resource which can be bound to it.
        let memory = self
            .vk_dev
            .logical_device
            .allocate_memory(&allocate_info, None)
            .map_err(DeviceAllocatorError::LogicalDeviceAllocationFailed)?;

        Ok(Allocation {
            memory,
            offset: 0,
            byte_size: allocate_info.allocation_size,
            memory_type_index,
        })
    }

    unsafe fn free(&self, allocation: &Allocation) {
        if !allocation.is_null() {
            self.vk_dev.logical_device.free_memory(allocation.memory, None);
        }
    }
}
