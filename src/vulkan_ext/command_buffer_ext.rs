use ::ash::vk;

use super::{CommandBufferExtError, CommandResult};
use crate::vulkan::CommandBuffer;

/// A viewport which covers the whole extent with the full depth range.
pub fn full_viewport(extent: vk::Extent2D) -> vk::Viewport {
    vk::Viewport {
        x: 0.0,
        y: 0.0,
        width: extent.width as f32,
        height: extent.height as f32,
        min_depth: 0.0,
        max_depth: 1.0,
    }
}

/// A scissor rectangle covering the whole extent.
pub fn full_scissor(extent: vk::Extent2D) -> vk::Rect2D {
    vk::Rect2D {
        offset: vk::Offset2D { x: 0, y: 0 },
        extent,
    }
}

/// Command buffer convenience methods.
pub trait CommandBufferExt {
    /// Begin recording commands into the command buffer with the
    /// `ONE_TIME_SUBMIT` flag set.
    ///
    /// # Safety
    ///
    /// The buffer must not be in use by the GPU.
    unsafe fn begin_one_time_submit(&self) -> CommandResult<&Self>;

    /// Finish recording commands into this command buffer.
    ///
    /// # Safety
    ///
    /// The buffer must be in the recording state.
    unsafe fn end_commands(&self) -> CommandResult<()>;

    /// Begin a render pass whose commands are recorded inline.
    ///
    /// # Safety
    ///
    /// The framebuffer must be compatible with the render pass.
    unsafe fn begin_render_pass_inline(
        &self,
        render_pass: vk::RenderPass,
        framebuffer: vk::Framebuffer,
        extent: vk::Extent2D,
        clear_values: &[vk::ClearValue],
    ) -> &Self;

    /// Finish the current renderpass.
    ///
    /// # Safety
    ///
    /// A render pass must have been started on this buffer.
    unsafe fn end_renderpass(&self) -> &Self;

    /// Set the dynamic viewport and scissor to cover `extent`.
    ///
    /// # Safety
    ///
    /// The bound pipeline must use dynamic viewport and scissor state.
    unsafe fn set_full_viewport_and_scissor(
        &self,
        extent: vk::Extent2D,
    ) -> &Self;
}

impl CommandBufferExt for CommandBuffer {
    unsafe fn begin_one_time_submit(&self) -> CommandResult<&Self> {
        let begin_info = vk::CommandBufferBeginInfo {
            flags: vk::CommandBufferUsageFlags::ONE_TIME_SUBMIT,
            ..Default::default()
        };
        self.vk_dev
            .logical_device
            .begin_command_buffer(self.raw, &begin_info)
            .map_err(CommandBufferExtError::UnableToBeginCommandBuffer)?;
        Ok(self)
    }

    unsafe fn end_commands(&self) -> CommandResult<()> {
        self.vk_dev
            .logical_device
            .end_command_buffer(self.raw)
            .map_err(CommandBufferExtError::UnableToEndCommandBuffer)
    }

    unsafe fn begin_render_pass_inline(
        &self,
        render_pass: vk::RenderPass,
        framebuffer: vk::Framebuffer,
        extent: vk::Extent2D,
        clear_values: &[vk::ClearValue],
    ) -> &Self {
        let begin_info = vk::RenderPassBeginInfo {
            render_pass,
            framebuffer,
            render_area: full_scissor(extent),
            clear_value_count: clear_values.len() as u32,
            p_clear_values: clear_values.as_ptr(),
            ..Default::default()
        };
        self.vk_dev.logical_device.cmd_begin_render_pass(
            self.raw,
            &begin_info,
            vk::SubpassContents::INLINE,
        );
        self
    }

    unsafe fn end_renderpass(&self) -> &Self {
        self.vk_dev.logical_device.cmd_end_render_pass(self.raw);
        self
    }

    unsafe fn set_full_viewport_and_scissor(
        &self,
        extent: vk::Extent2D,
    ) -> &Self {
        let device = &self.vk_dev.logical_device;
        device.cmd_set_viewport(self.raw, 0, &[full_viewport(extent)]);
        device.cmd_set_scissor(self.raw, 0, &[full_scissor(extent)]);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_covers_the_extent() {
        let viewport = full_viewport(vk::Extent2D {
            width: 640,
            height: 480,
        });
        assert_eq!((viewport.x, viewport.y), (0.0, 0.0));
        assert_eq!((viewport.width, viewport.height), (640.0, 480.0));
        assert_eq!((viewport.min_depth, viewport.max_depth), (0.0, 1.0));
    }

    #[test]
    fn scissor_starts_at_the_origin() {
        let extent = vk::Extent2D {
            width: 10,
            height: 20,
        };
        let scissor = full_scissor(extent);
        assert_eq!((scissor.offset.x, scissor.offset.y), (0, 0));
        assert_eq!(scissor.extent, extent);
    }
}
