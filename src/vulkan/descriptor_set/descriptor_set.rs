use ::ash::vk;

use super::DescriptorSet;
use crate::vulkan::{errors::VulkanDebugError, Buffer, VulkanDebug};

impl DescriptorSet {
    /// Point a binding in this set at the whole of `buffer`.
    ///
    /// # Safety
    ///
    /// The application must ensure the descriptor set is not in use by the
    /// GPU while it is modified.
    pub unsafe fn bind_buffer(
        &self,
        binding: u32,
        buffer: &Buffer,
        descriptor_type: vk::DescriptorType,
    ) {
        let descriptor_buffer_info = vk::DescriptorBufferInfo {
            buffer: buffer.raw,
            offset: 0,
            range: vk::WHOLE_SIZE,
        };
        let write = vk::WriteDescriptorSet {
            dst_set: self.raw,
            dst_binding: binding,
            dst_array_element: 0,
            descriptor_count: 1,
            descriptor_type,
            p_buffer_info: &descriptor_buffer_info,
            ..Default::default()
        };
        self.vk_dev
            .logical_device
            .update_descriptor_sets(&[write], &[]);
    }
}

impl VulkanDebug for DescriptorSet {
    fn set_debug_name(
        &self,
        debug_name: impl Into<String>,
    ) -> Result<(), VulkanDebugError> {
        self.vk_dev.name_vulkan_object(
            debug_name,
            vk::ObjectType::DESCRIPTOR_SET,
            self.raw,
        )?;
        Ok(())
    }
}
