use ::{ash::vk, std::sync::Arc};

use super::{RenderPass, RenderPassError};
use crate::vulkan::{errors::VulkanDebugError, RenderDevice, VulkanDebug};

/// Attachment descriptions for a single-subpass pass which clears a color
/// target for presentation along with a transient depth buffer.
pub fn color_depth_attachments(
    color_format: vk::Format,
    depth_format: vk::Format,
) -> [vk::AttachmentDescription; 2] {
    [
        vk::AttachmentDescription {
            format: color_format,
            samples: vk::SampleCountFlags::TYPE_1,
            load_op: vk::AttachmentLoadOp::CLEAR,
            store_op: vk::AttachmentStoreOp::STORE,
            stencil_load_op: vk::AttachmentLoadOp::DONT_CARE,
            stencil_store_op: vk::AttachmentStoreOp::DONT_CARE,
            initial_layout: vk::ImageLayout::UNDEFINED,
            final_layout: vk::ImageLayout::PRESENT_SRC_KHR,
            ..Default::default()
        },
        vk::AttachmentDescription {
            format: depth_format,
            samples: vk::SampleCountFlags::TYPE_1,
            load_op: vk::AttachmentLoadOp::CLEAR,
            store_op: vk::AttachmentStoreOp::DONT_CARE,
            stencil_load_op: vk::AttachmentLoadOp::DONT_CARE,
            stencil_store_op: vk::AttachmentStoreOp::DONT_CARE,
            initial_layout: vk::ImageLayout::UNDEFINED,
            final_layout: vk::ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL,
            ..Default::default()
        },
    ]
}

impl RenderPass {
    /// Create a new render pass with the given create info.
    pub fn new(
        vk_dev: Arc<RenderDevice>,
        create_info: &vk::RenderPassCreateInfo,
    ) -> Result<Self, RenderPassError> {
        let raw = unsafe {
            vk_dev
                .logical_device
                .create_render_pass(create_info, None)
                .map_err(RenderPassError::UnableToCreateRenderPass)?
        };
        Ok(Self { raw, vk_dev })
    }

    /// Create a render pass with one color attachment (attachment 0) and one
    /// depth attachment (attachment 1).
    pub fn color_depth(
        vk_dev: Arc<RenderDevice>,
        color_format: vk::Format,
        depth_format: vk::Format,
    ) -> Result<Self, RenderPassError> {
        let attachments = color_depth_attachments(color_format, depth_format);
        let color_ref = vk::AttachmentReference {
            attachment: 0,
            layout: vk::ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
        };
        let depth_ref = vk::AttachmentReference {
            attachment: 1,
            layout: vk::ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL,
        };
        let subpass = vk::SubpassDescription {
            pipeline_bind_point: vk::PipelineBindPoint::GRAPHICS,
            color_attachment_count: 1,
            p_color_attachments: &color_ref,
            p_depth_stencil_attachment: &depth_ref,
            ..Default::default()
        };
        let stages = vk::PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT
            | vk::PipelineStageFlags::EARLY_FRAGMENT_TESTS;
        let dependency = vk::SubpassDependency {
            src_subpass: vk::SUBPASS_EXTERNAL,
            dst_subpass: 0,
            src_stage_mask: stages,
            src_access_mask: vk::AccessFlags::empty(),
            dst_stage_mask: stages,
            dst_access_mask: vk::AccessFlags::COLOR_ATTACHMENT_WRITE
                | vk::AccessFlags::DEPTH_STENCIL_ATTACHMENT_WRITE,
            ..Default::default()
        };
        let create_info = vk::RenderPassCreateInfo {
            attachment_count: attachments.len() as u32,
            p_attachments: attachments.as_ptr(),
            subpass_count: 1,
            p_subpasses: &subpass,
            dependency_count: 1,
            p_dependencies: &dependency,
            ..Default::default()
        };
        Self::new(vk_dev, &create_info)
    }
}

impl VulkanDebug for RenderPass {
    fn set_debug_name(
        &self,
        debug_name: impl Into<String>,
    ) -> Result<(), VulkanDebugError> {
        self.vk_dev.name_vulkan_object(
            debug_name,
            vk::ObjectType::RENDER_PASS,
            self.raw,
        )?;
        Ok(())
    }
}

impl Drop for RenderPass {
    /// # DANGER
    ///
    /// There is no internal synchronization for this type. Unexpected behavior
    /// can occur if this instance is still in-use by the GPU when it is
    /// dropped.
    fn drop(&mut self) {
        unsafe {
            self.vk_dev
                .logical_device
                .destroy_render_pass(self.raw, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_attachment_is_cleared_and_presented() {
        let [color, _] = color_depth_attachments(
            vk::Format::B8G8R8A8_UNORM,
            vk::Format::D32_SFLOAT,
        );
        assert_eq!(color.format, vk::Format::B8G8R8A8_UNORM);
        assert_eq!(color.load_op, vk::AttachmentLoadOp::CLEAR);
        assert_eq!(color.store_op, vk::AttachmentStoreOp::STORE);
        assert_eq!(color.final_layout, vk::ImageLayout::PRESENT_SRC_KHR);
    }

    #[test]
    fn depth_attachment_is_not_stored() {
        let [_, depth] = color_depth_attachments(
            vk::Format::B8G8R8A8_UNORM,
            vk::Format::D24_UNORM_S8_UINT,
        );
        assert_eq!(depth.format, vk::Format::D24_UNORM_S8_UINT);
        assert_eq!(depth.load_op, vk::AttachmentLoadOp::CLEAR);
        assert_eq!(depth.store_op, vk::AttachmentStoreOp::DONT_CARE);
        assert_eq!(
            depth.final_layout,
            vk::ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL
        );
    }
}
