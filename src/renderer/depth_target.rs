use ::{ash::vk, std::sync::Arc};

use super::DepthTarget;
use crate::vulkan::{
    errors::VulkanError, is_depth_only, Image, ImageView, MemoryAllocator,
    RenderDevice, VulkanDebug,
};

/// The image aspects which a view of a depth image must include.
pub fn depth_aspect(format: vk::Format) -> vk::ImageAspectFlags {
    if is_depth_only(format) {
        vk::ImageAspectFlags::DEPTH
    } else {
        vk::ImageAspectFlags::DEPTH | vk::ImageAspectFlags::STENCIL
    }
}

impl DepthTarget {
    pub fn new(
        vk_dev: Arc<RenderDevice>,
        vk_alloc: Arc<dyn MemoryAllocator>,
        format: vk::Format,
        extent: vk::Extent2D,
    ) -> Result<Self, VulkanError> {
        let image = Image::new_2d(
            vk_dev,
            vk_alloc,
            format,
            extent,
            vk::ImageUsageFlags::DEPTH_STENCIL_ATTACHMENT,
        )?;
        image.set_debug_name("Depth Image")?;

        let view = ImageView::new_2d(Arc::new(image), depth_aspect(format))?;
        view.set_debug_name("Depth Image View")?;

        Ok(Self { view, format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stencil_formats_include_the_stencil_aspect() {
        assert_eq!(
            depth_aspect(vk::Format::D32_SFLOAT),
            vk::ImageAspectFlags::DEPTH
        );
        assert_eq!(
            depth_aspect(vk::Format::D24_UNORM_S8_UINT),
            vk::ImageAspectFlags::DEPTH | vk::ImageAspectFlags::STENCIL
        );
    }
}
