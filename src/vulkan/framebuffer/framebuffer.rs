use ::{ash::vk, std::sync::Arc};

use super::{Framebuffer, FramebufferError};
use crate::vulkan::{
    errors::VulkanDebugError, RenderDevice, Swapchain, VulkanDebug,
};

impl Framebuffer {
    /// Construct one framebuffer per swapchain image. Each framebuffer uses
    /// the swapchain image as attachment 0 and the shared depth view as
    /// attachment 1.
    pub fn with_swapchain_attachments(
        vk_dev: Arc<RenderDevice>,
        render_pass: vk::RenderPass,
        swapchain: &Swapchain,
        depth_view: vk::ImageView,
        debug_name: impl Into<String>,
    ) -> Result<Vec<Self>, FramebufferError> {
        let name = debug_name.into();
        let mut framebuffers = Vec::with_capacity(swapchain.image_count());
        for (i, &color_view) in swapchain.image_views.iter().enumerate() {
            let framebuffer = Self::with_attachments(
                vk_dev.clone(),
                render_pass,
                &[color_view, depth_view],
                swapchain.extent,
            )?;
            framebuffer.set_debug_name(format!("{} - {}", name, i))?;
            framebuffers.push(framebuffer);
        }
        Ok(framebuffers)
    }

    /// Create a single framebuffer with the given attachments.
    pub fn with_attachments(
        vk_dev: Arc<RenderDevice>,
        render_pass: vk::RenderPass,
        images: &[vk::ImageView],
        extent: vk::Extent2D,
    ) -> Result<Self, FramebufferError> {
        let create_info = vk::FramebufferCreateInfo {
            render_pass,
            attachment_count: images.len() as u32,
            p_attachments: images.as_ptr(),
            width: extent.width,
            height: extent.height,
            layers: 1,
            ..Default::default()
        };
        let raw = unsafe {
            vk_dev
                .logical_device
                .create_framebuffer(&create_info, None)
                .map_err(FramebufferError::UnableToCreateFramebuffer)?
        };
        Ok(Self {
            raw,
            extent,
            vk_dev,
        })
    }
}

impl VulkanDebug for Framebuffer {
    fn set_debug_name(
        &self,
        debug_name: impl Into<String>,
    ) -> Result<(), VulkanDebugError> {
        self.vk_dev.name_vulkan_object(
            debug_name,
            vk::ObjectType::FRAMEBUFFER,
            self.raw,
        )?;
        Ok(())
    }
}

impl Drop for Framebuffer {
    /// # DANGER
    ///
    /// There is no internal synchronization for this type. Unexpected behavior
    /// can occur if this instance is still in-use by the GPU when it is
    /// dropped.
    fn drop(&mut self) {
        unsafe {
            self.vk_dev
                .logical_device
                .destroy_framebuffer(self.raw, None);
        }
    }
}
