//! CPU side scene data: vertices, meshes, and the per-frame uniforms.

mod mesh;
mod uniforms;
mod vertex;

use ::ash::vk;

use crate::math::Mat4;

/// A colored vertex as consumed by the scene shaders.
///
/// Location 0 is the position and location 1 is the color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Indexed geometry along with the primitive topology used to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub topology: vk::PrimitiveTopology,
}

/// The uniform buffer contents shared by every draw in a frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneUniforms {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}
