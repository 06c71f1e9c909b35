use ::{ash::vk, std::sync::Arc};

use super::{DescriptorSetError, DescriptorSetLayout};
use crate::vulkan::{errors::VulkanDebugError, RenderDevice, VulkanDebug};

impl DescriptorSetLayout {
    pub fn new(
        vk_dev: Arc<RenderDevice>,
        bindings: &[vk::DescriptorSetLayoutBinding],
    ) -> Result<Self, DescriptorSetError> {
        let create_info = vk::DescriptorSetLayoutCreateInfo {
            p_bindings: bindings.as_ptr(),
            binding_count: bindings.len() as u32,
            ..Default::default()
        };
        let raw = unsafe {
            vk_dev
                .logical_device
                .create_descriptor_set_layout(&create_info, None)
                .map_err(DescriptorSetError::UnableToCreateLayout)?
        };
        Ok(Self { raw, vk_dev })
    }

    /// A layout with a single uniform buffer at binding 0 which is visible to
    /// the given shader stages.
    pub fn single_uniform_buffer(
        vk_dev: Arc<RenderDevice>,
        stage_flags: vk::ShaderStageFlags,
    ) -> Result<Self, DescriptorSetError> {
        let binding = vk::DescriptorSetLayoutBinding {
            binding: 0,
            descriptor_type: vk::DescriptorType::UNIFORM_BUFFER,
            descriptor_count: 1,
            stage_flags,
            ..Default::default()
        };
        Self::new(vk_dev, &[binding])
    }
}

impl VulkanDebug for DescriptorSetLayout {
    fn set_debug_name(
        &self,
        debug_name: impl Into<String>,
    ) -> Result<(), VulkanDebugError> {
        self.vk_dev.name_vulkan_object(
            debug_name,
            vk::ObjectType::DESCRIPTOR_SET_LAYOUT,
            self.raw,
        )?;
        Ok(())
    }
}

impl Drop for DescriptorSetLayout {
    /// # DANGER
    ///
    /// There is no internal synchronization for this type. Unexpected behavior
    /// can occur if this instance is still in-use by the GPU when it is
    /// dropped.
    fn drop(&mut self) {
        unsafe {
            self.vk_dev
                .logical_device
                .destroy_descriptor_set_layout(self.raw, None);
        }
    }
}
