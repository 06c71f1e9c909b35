//! Draws meshes into the swapchain images with a color and depth pass.

mod depth_target;
mod gpu_mesh;
mod pipelines;
mod scene_renderer;

use ::{
    ash::vk,
    std::{path::PathBuf, sync::Arc},
};

use crate::vulkan::{
    Buffer, DescriptorPool, DescriptorSet, DescriptorSetLayout, Framebuffer,
    ImageView, MemoryAllocator, Pipeline, PipelineLayout, RenderDevice,
    RenderPass,
};

/// A depth image sized to match the swapchain, shared by every framebuffer.
pub struct DepthTarget {
    pub view: ImageView,
    pub format: vk::Format,
}

/// Mesh data living in device local memory.
pub struct GpuMesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
    pub topology: vk::PrimitiveTopology,
}

/// Renders line and triangle meshes with a single set of scene uniforms.
///
/// Each swapchain image has its own uniform buffer and descriptor set because
/// multiple frames can be in flight at once.
pub struct SceneRenderer {
    clear_color: [f32; 4],
    shader_dir: PathBuf,

    uniform_buffers: Vec<Buffer>,
    descriptor_sets: Vec<DescriptorSet>,
    descriptor_pool: DescriptorPool,

    line_pipeline: Pipeline,
    triangle_pipeline: Pipeline,
    pipeline_layout: PipelineLayout,
    descriptor_layout: DescriptorSetLayout,

    framebuffers: Vec<Framebuffer>,
    depth_target: DepthTarget,
    render_pass: RenderPass,

    vk_alloc: Arc<dyn MemoryAllocator>,
    pub vk_dev: Arc<RenderDevice>,
}
