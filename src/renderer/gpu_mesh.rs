use ::{ash::vk, std::sync::Arc};

use super::GpuMesh;
use crate::{
    scene::Mesh,
    vulkan::{
        errors::VulkanError, Buffer, MemoryAllocator, OneTimeSubmitCommandPool,
        RenderDevice, VulkanDebug,
    },
};

impl GpuMesh {
    /// Copy the mesh's vertices and indices into device local buffers. Blocks
    /// until the upload is complete.
    pub fn upload(
        vk_dev: Arc<RenderDevice>,
        vk_alloc: Arc<dyn MemoryAllocator>,
        upload_pool: &OneTimeSubmitCommandPool,
        mesh: &Mesh,
        debug_name: &str,
    ) -> Result<Self, VulkanError> {
        let vertex_buffer = Buffer::new_device_local_with_data(
            vk_dev.clone(),
            vk_alloc.clone(),
            vk::BufferUsageFlags::VERTEX_BUFFER,
            &mesh.vertices,
            upload_pool,
        )?;
        vertex_buffer.set_debug_name(format!("{} - Vertices", debug_name))?;

        let index_buffer = Buffer::new_device_local_with_data(
            vk_dev,
            vk_alloc,
            vk::BufferUsageFlags::INDEX_BUFFER,
            &mesh.indices,
            upload_pool,
        )?;
        index_buffer.set_debug_name(format!("{} - Indices", debug_name))?;

        log::debug!(
            "Uploaded {} with {} vertices and {} indices",
            debug_name,
            mesh.vertices.len(),
            mesh.indices.len()
        );

        Ok(Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count(),
            topology: mesh.topology,
        })
    }

    /// Bind the buffers and draw every index.
    ///
    /// # Safety
    ///
    /// The command buffer must be recording inside a render pass with a
    /// pipeline bound which matches this mesh's topology.
    pub unsafe fn draw(&self, command_buffer: vk::CommandBuffer) {
        let device = &self.vertex_buffer.vk_dev.logical_device;
        device.cmd_bind_vertex_buffers(
            command_buffer,
            0,
            &[self.vertex_buffer.raw],
            &[0],
        );
        device.cmd_bind_index_buffer(
            command_buffer,
            self.index_buffer.raw,
            0,
            vk::IndexType::UINT32,
        );
        device.cmd_draw_indexed(command_buffer, self.index_count, 1, 0, 0, 0);
    }
}
