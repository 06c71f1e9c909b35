use ::{ash::vk, std::sync::Arc};

use super::{pipelines, DepthTarget, GpuMesh, SceneRenderer};
use crate::{
    config::AppConfig,
    scene::SceneUniforms,
    vulkan::{
        errors::VulkanError, Buffer, CommandBuffer, DescriptorPool,
        DescriptorSet, DescriptorSetLayout, Framebuffer, MemoryAllocator,
        PipelineLayout, RenderDevice, RenderPass, Swapchain, VulkanDebug,
    },
    vulkan_ext::CommandBufferExt,
};

/// Clear values for the color and depth attachments, in attachment order.
pub fn clear_values(clear_color: [f32; 4]) -> [vk::ClearValue; 2] {
    [
        vk::ClearValue {
            color: vk::ClearColorValue {
                float32: clear_color,
            },
        },
        vk::ClearValue {
            depth_stencil: vk::ClearDepthStencilValue {
                depth: 1.0,
                stencil: 0,
            },
        },
    ]
}

struct PerImageUniforms {
    buffers: Vec<Buffer>,
    descriptor_sets: Vec<DescriptorSet>,
    pool: DescriptorPool,
}

fn create_uniforms(
    vk_dev: &Arc<RenderDevice>,
    vk_alloc: &Arc<dyn MemoryAllocator>,
    layout: &DescriptorSetLayout,
    image_count: usize,
) -> Result<PerImageUniforms, VulkanError> {
    let count = image_count as u32;
    let pool = DescriptorPool::for_uniform_buffers(vk_dev.clone(), count)?;
    pool.set_debug_name("Scene Descriptor Pool")?;
    let descriptor_sets = pool.allocate(layout, count)?;

    let mut buffers = Vec::with_capacity(image_count);
    for (i, descriptor_set) in descriptor_sets.iter().enumerate() {
        let buffer = Buffer::new_mapped(
            vk_dev.clone(),
            vk_alloc.clone(),
            vk::BufferUsageFlags::UNIFORM_BUFFER,
            std::mem::size_of::<SceneUniforms>() as u64,
        )?;
        buffer.set_debug_name(format!("Scene Uniforms - {}", i))?;
        descriptor_set.set_debug_name(format!("Scene Descriptor Set - {}", i))?;
        unsafe {
            descriptor_set.bind_buffer(
                0,
                &buffer,
                vk::DescriptorType::UNIFORM_BUFFER,
            );
        }
        buffers.push(buffer);
    }

    Ok(PerImageUniforms {
        buffers,
        descriptor_sets,
        pool,
    })
}

impl SceneRenderer {
    /// Create every resource needed to draw into the swapchain's images.
    ///
    /// Shaders are read from the configured shader directory.
    pub fn new(
        vk_dev: Arc<RenderDevice>,
        vk_alloc: Arc<dyn MemoryAllocator>,
        swapchain: &Swapchain,
        config: &AppConfig,
    ) -> Result<Self, VulkanError> {
        let depth_format = vk_dev.find_depth_format()?;
        log::debug!("Using depth format {:?}", depth_format);

        let render_pass = RenderPass::color_depth(
            vk_dev.clone(),
            swapchain.format,
            depth_format,
        )?;
        render_pass.set_debug_name("Scene Render Pass")?;

        let depth_target = DepthTarget::new(
            vk_dev.clone(),
            vk_alloc.clone(),
            depth_format,
            swapchain.extent,
        )?;
        let framebuffers = Framebuffer::with_swapchain_attachments(
            vk_dev.clone(),
            render_pass.raw,
            swapchain,
            depth_target.view.raw,
            "Scene Framebuffer",
        )?;

        let descriptor_layout = DescriptorSetLayout::single_uniform_buffer(
            vk_dev.clone(),
            vk::ShaderStageFlags::VERTEX,
        )?;
        descriptor_layout.set_debug_name("Scene Descriptor Set Layout")?;
        let pipeline_layout =
            PipelineLayout::new(vk_dev.clone(), &[descriptor_layout.raw], &[])?;
        pipeline_layout.set_debug_name("Scene Pipeline Layout")?;

        let (line_pipeline, triangle_pipeline) =
            pipelines::create_scene_pipelines(
                vk_dev.clone(),
                &config.shader_dir,
                &render_pass,
                &pipeline_layout,
            )?;

        let uniforms = create_uniforms(
            &vk_dev,
            &vk_alloc,
            &descriptor_layout,
            swapchain.image_count(),
        )?;

        Ok(Self {
            clear_color: config.clear_color,
            shader_dir: config.shader_dir.clone(),
            uniform_buffers: uniforms.buffers,
            descriptor_sets: uniforms.descriptor_sets,
            descriptor_pool: uniforms.pool,
            line_pipeline,
            triangle_pipeline,
            pipeline_layout,
            descriptor_layout,
            framebuffers,
            depth_target,
            render_pass,
            vk_alloc,
            vk_dev,
        })
    }

    /// Write the uniforms used by the frame targeting `image_index`.
    pub fn update_uniforms(
        &mut self,
        image_index: usize,
        uniforms: &SceneUniforms,
    ) -> Result<(), VulkanError> {
        self.uniform_buffers[image_index]
            .write_data(std::slice::from_ref(uniforms))?;
        Ok(())
    }

    /// Record the render pass which clears the frame and draws every mesh.
    ///
    /// # Safety
    ///
    /// The command buffer must be recording and its frame must target
    /// `image_index`.
    pub unsafe fn draw(
        &self,
        command_buffer: &CommandBuffer,
        image_index: usize,
        meshes: &[&GpuMesh],
    ) {
        let framebuffer = &self.framebuffers[image_index];
        let device = &self.vk_dev.logical_device;
        let cmd = command_buffer.raw;

        command_buffer
            .begin_render_pass_inline(
                self.render_pass.raw,
                framebuffer.raw,
                framebuffer.extent,
                &clear_values(self.clear_color),
            )
            .set_full_viewport_and_scissor(framebuffer.extent);

        device.cmd_bind_descriptor_sets(
            cmd,
            vk::PipelineBindPoint::GRAPHICS,
            self.pipeline_layout.raw,
            0,
            &[self.descriptor_sets[image_index].raw],
            &[],
        );

        for mesh in meshes {
            let pipeline = if mesh.topology == vk::PrimitiveTopology::LINE_LIST
            {
                &self.line_pipeline
            } else {
                &self.triangle_pipeline
            };
            device.cmd_bind_pipeline(cmd, pipeline.bind_point, pipeline.raw);
            mesh.draw(cmd);
        }

        command_buffer.end_renderpass();
    }

    /// Replace every resource which depends on the swapchain.
    ///
    /// The caller must make sure the GPU is no longer using the old
    /// resources. Uniform buffers are only replaced when the number of
    /// swapchain images changed.
    pub fn rebuild_swapchain_resources(
        &mut self,
        swapchain: &Swapchain,
    ) -> Result<(), VulkanError> {
        self.framebuffers.clear();

        let render_pass = RenderPass::color_depth(
            self.vk_dev.clone(),
            swapchain.format,
            self.depth_target.format,
        )?;
        render_pass.set_debug_name("Scene Render Pass")?;
        self.render_pass = render_pass;

        self.depth_target = DepthTarget::new(
            self.vk_dev.clone(),
            self.vk_alloc.clone(),
            self.depth_target.format,
            swapchain.extent,
        )?;
        self.framebuffers = Framebuffer::with_swapchain_attachments(
            self.vk_dev.clone(),
            self.render_pass.raw,
            swapchain,
            self.depth_target.view.raw,
            "Scene Framebuffer",
        )?;

        let (line_pipeline, triangle_pipeline) =
            pipelines::create_scene_pipelines(
                self.vk_dev.clone(),
                &self.shader_dir,
                &self.render_pass,
                &self.pipeline_layout,
            )?;
        self.line_pipeline = line_pipeline;
        self.triangle_pipeline = triangle_pipeline;

        if self.uniform_buffers.len() != swapchain.image_count() {
            log::debug!(
                "Swapchain image count changed from {} to {}",
                self.uniform_buffers.len(),
                swapchain.image_count()
            );
            self.descriptor_sets.clear();
            let uniforms = create_uniforms(
                &self.vk_dev,
                &self.vk_alloc,
                &self.descriptor_layout,
                swapchain.image_count(),
            )?;
            self.uniform_buffers = uniforms.buffers;
            self.descriptor_sets = uniforms.descriptor_sets;
            self.descriptor_pool = uniforms.pool;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_is_cleared_to_the_far_plane() {
        let [color, depth] = clear_values([0.1, 0.2, 0.3, 1.0]);
        unsafe {
            assert_eq!(color.color.float32, [0.1, 0.2, 0.3, 1.0]);
            assert_eq!(depth.depth_stencil.depth, 1.0);
            assert_eq!(depth.depth_stencil.stencil, 0);
        }
    }
}
