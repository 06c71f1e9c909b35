use ::ash::vk;

use super::SceneContext;
use crate::{
    camera::Camera,
    renderer::GpuMesh,
    scene::Mesh,
    vulkan::errors::VulkanError,
};

/// The width / height ratio of an extent. Empty extents are treated as
/// square.
pub fn aspect_ratio(extent: vk::Extent2D) -> f32 {
    if extent.width == 0 || extent.height == 0 {
        1.0
    } else {
        extent.width as f32 / extent.height as f32
    }
}

impl SceneContext {
    pub fn aspect_ratio(&self) -> f32 {
        aspect_ratio(self.extent)
    }

    /// Apply the configured projection to a camera.
    pub fn configure_camera(&self, camera: &mut dyn Camera) {
        camera.set_perspective(
            self.config.field_of_view,
            self.aspect_ratio(),
            self.config.near_plane,
            self.config.far_plane,
        );
    }

    /// Upload a mesh to device local memory.
    pub fn upload_mesh(
        &self,
        mesh: &Mesh,
        debug_name: &str,
    ) -> Result<GpuMesh, VulkanError> {
        GpuMesh::upload(
            self.vk_dev.clone(),
            self.vk_alloc.clone(),
            &self.upload_pool,
            mesh,
            debug_name,
        )
    }
}
