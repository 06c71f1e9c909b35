use ::{ash::vk, std::sync::Arc};

use super::{
    DescriptorPool, DescriptorSet, DescriptorSetError, DescriptorSetLayout,
};
use crate::vulkan::{errors::VulkanDebugError, RenderDevice, VulkanDebug};

/// Pool sizes for the given number of descriptors of each kind. Kinds with a
/// count of zero are omitted.
pub fn pool_sizes(
    uniform_buffers: u32,
    storage_buffers: u32,
    image_samplers: u32,
) -> Vec<vk::DescriptorPoolSize> {
    [
        (vk::DescriptorType::UNIFORM_BUFFER, uniform_buffers),
        (vk::DescriptorType::STORAGE_BUFFER, storage_buffers),
        (vk::DescriptorType::COMBINED_IMAGE_SAMPLER, image_samplers),
    ]
    .into_iter()
    .filter(|&(_, count)| count > 0)
    .map(|(ty, descriptor_count)| vk::DescriptorPoolSize {
        ty,
        descriptor_count,
    })
    .collect()
}

impl DescriptorPool {
    /// Create a new descriptor pool with capacity for `max_sets` descriptor
    /// sets.
    pub fn new(
        vk_dev: Arc<RenderDevice>,
        max_sets: u32,
        sizes: &[vk::DescriptorPoolSize],
    ) -> Result<Self, DescriptorSetError> {
        let create_info = vk::DescriptorPoolCreateInfo {
            max_sets,
            pool_size_count: sizes.len() as u32,
            p_pool_sizes: sizes.as_ptr(),
            ..Default::default()
        };
        let raw = unsafe {
            vk_dev
                .logical_device
                .create_descriptor_pool(&create_info, None)
                .map_err(DescriptorSetError::UnableToCreatePool)?
        };
        Ok(Self { raw, vk_dev })
    }

    /// A pool with room for `set_count` sets which each hold a single uniform
    /// buffer.
    pub fn for_uniform_buffers(
        vk_dev: Arc<RenderDevice>,
        set_count: u32,
    ) -> Result<Self, DescriptorSetError> {
        Self::new(vk_dev, set_count, &pool_sizes(set_count, 0, 0))
    }

    /// Allocate `count` descriptor sets with the same layout.
    pub fn allocate(
        &self,
        layout: &DescriptorSetLayout,
        count: u32,
    ) -> Result<Vec<DescriptorSet>, DescriptorSetError> {
        let layouts = vec![layout.raw; count as usize];
        let allocate_info = vk::DescriptorSetAllocateInfo {
            descriptor_pool: self.raw,
            descriptor_set_count: layouts.len() as u32,
            p_set_layouts: layouts.as_ptr(),
            ..Default::default()
        };
        let raw_sets = unsafe {
            self.vk_dev
                .logical_device
                .allocate_descriptor_sets(&allocate_info)
                .map_err(DescriptorSetError::UnableToAllocateDescriptors)?
        };
        Ok(raw_sets
            .into_iter()
            .map(|raw| DescriptorSet {
                raw,
                vk_dev: self.vk_dev.clone(),
            })
            .collect())
    }
}

impl VulkanDebug for DescriptorPool {
    fn set_debug_name(
        &self,
        debug_name: impl Into<String>,
    ) -> Result<(), VulkanDebugError> {
        self.vk_dev.name_vulkan_object(
            debug_name,
            vk::ObjectType::DESCRIPTOR_POOL,
            self.raw,
        )?;
        Ok(())
    }
}

impl Drop for DescriptorPool {
    /// # DANGER
    ///
    /// There is no internal synchronization for this type. Unexpected behavior
    /// can occur if this instance is still in-use by the GPU when it is
    /// dropped.
    fn drop(&mut self) {
        unsafe {
            self.vk_dev
                .logical_device
                .destroy_descriptor_pool(self.raw, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_kinds_are_skipped() {
        let sizes = pool_sizes(3, 0, 1);
        assert_eq!(sizes.len(), 2);
        assert_eq!(sizes[0].ty, vk::DescriptorType::UNIFORM_BUFFER);
        assert_eq!(sizes[0].descriptor_count, 3);
        assert_eq!(sizes[1].ty, vk::DescriptorType::COMBINED_IMAGE_SAMPLER);
        assert_eq!(sizes[1].descriptor_count, 1);
    }

    #[test]
    fn no_descriptors_means_no_sizes() {
        assert!(pool_sizes(0, 0, 0).is_empty());
    }
}
