use ::{ash::vk, std::sync::Arc};

use super::{Image, ImageError};
use crate::vulkan::{
    errors::VulkanDebugError, MemoryAllocator, RenderDevice, VulkanDebug,
};

impl Image {
    /// Create an image and bind it to newly allocated memory with the
    /// requested properties.
    pub fn new(
        vk_dev: Arc<RenderDevice>,
        vk_alloc: Arc<dyn MemoryAllocator>,
        create_info: &vk::ImageCreateInfo,
        memory_property_flags: vk::MemoryPropertyFlags,
    ) -> Result<Self, ImageError> {
        let raw = unsafe {
            vk_dev
                .logical_device
                .create_image(create_info, None)
                .map_err(ImageError::UnableToCreateImage)?
        };
        let memory_requirements =
            unsafe { vk_dev.logical_device.get_image_memory_requirements(raw) };

        let allocation = match unsafe {
            vk_alloc.allocate_memory(memory_requirements, memory_property_flags)
        } {
            Ok(allocation) => allocation,
            Err(err) => {
                unsafe { vk_dev.logical_device.destroy_image(raw, None) };
                return Err(err.into());
            }
        };

        let image = Self {
            raw,
            format: create_info.format,
            extent: create_info.extent,
            allocation,
            vk_alloc,
            vk_dev,
        };
        unsafe {
            image
                .vk_dev
                .logical_device
                .bind_image_memory(
                    image.raw,
                    image.allocation.memory,
                    image.allocation.offset,
                )
                .map_err(ImageError::UnableToBindImageMemory)?;
        }
        Ok(image)
    }

    /// A single-sampled, optimally tiled 2d image with one mip level.
    pub fn new_2d(
        vk_dev: Arc<RenderDevice>,
        vk_alloc: Arc<dyn MemoryAllocator>,
        format: vk::Format,
        extent: vk::Extent2D,
        usage: vk::ImageUsageFlags,
    ) -> Result<Self, ImageError> {
        let create_info = vk::ImageCreateInfo {
            image_type: vk::ImageType::TYPE_2D,
            format,
            extent: vk::Extent3D {
                width: extent.width,
                height: extent.height,
                depth: 1,
            },
            mip_levels: 1,
            array_layers: 1,
            samples: vk::SampleCountFlags::TYPE_1,
            tiling: vk::ImageTiling::OPTIMAL,
            usage,
            sharing_mode: vk::SharingMode::EXCLUSIVE,
            initial_layout: vk::ImageLayout::UNDEFINED,
            ..Default::default()
        };
        Self::new(
            vk_dev,
            vk_alloc,
            &create_info,
            vk::MemoryPropertyFlags::DEVICE_LOCAL,
        )
    }
}

impl Drop for Image {
    /// # DANGER
    ///
    /// There is no internal synchronization for this type. Unexpected behavior
    /// can occur if this instance is still in-use by the GPU when it is
    /// dropped.
    fn drop(&mut self) {
        unsafe {
            self.vk_dev.logical_device.destroy_image(self.raw, None);
            self.vk_alloc.free(&self.allocation);
        }
    }
}

impl VulkanDebug for Image {
    fn set_debug_name(
        &self,
        debug_name: impl Into<String>,
    ) -> Result<(), VulkanDebugError> {
        self.vk_dev.name_vulkan_object(
            debug_name,
            vk::ObjectType::IMAGE,
            self.raw,
        )?;
        Ok(())
    }
}
