use super::SceneUniforms;
use crate::{camera::Camera, math::Mat4};

impl SceneUniforms {
    /// Uniforms for geometry which is already in world space.
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self {
            model: Mat4::identity(),
            view,
            projection,
        }
    }

    pub fn from_camera(camera: &dyn Camera) -> Self {
        Self::new(camera.view_matrix(), camera.projection_matrix())
    }
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self::new(Mat4::identity(), Mat4::identity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_match_the_shader_block_size() {
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 3 * 16 * 4);
    }

    #[test]
    fn camera_uniforms_use_an_identity_model() {
        let camera = crate::camera::OrbitCamera::default();
        let uniforms = SceneUniforms::from_camera(&camera);
        assert_eq!(uniforms.model, Mat4::identity());
        assert_eq!(uniforms.view, camera.view_matrix());
        assert_eq!(uniforms.projection, camera.projection_matrix());
    }
}
