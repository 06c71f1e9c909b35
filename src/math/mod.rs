//! Linear algebra aliases and helpers used by the cameras and the scene
//! uniforms.
//!
//! All matrices follow the Vulkan conventions used by the shaders: right
//! handed view space looking down -Z, clip space Y pointing down, and depth
//! in the range [0, 1].

pub type Mat4 = nalgebra::Matrix4<f32>;
pub type Mat3 = nalgebra::Matrix3<f32>;
pub type Vec2 = nalgebra::Vector2<f32>;
pub type Vec3 = nalgebra::Vector3<f32>;
pub type Quat = nalgebra::UnitQuaternion<f32>;

pub mod projections {
    use super::Mat4;

    /// Build a right-handed perspective projection which maps view-space
    /// depth in [near, far] to [0, 1].
    ///
    /// * `fov_y` - the vertical field of view in radians
    /// * `aspect` - the viewport's width / height
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let focal = 1.0 / (fov_y / 2.0).tan();
        Mat4::new(
            focal / aspect, 0.0, 0.0, 0.0, //
            0.0, focal, 0.0, 0.0, //
            0.0, 0.0, far / (near - far), -(far * near) / (far - near), //
            0.0, 0.0, -1.0, 0.0,
        )
    }
}

/// Build a rotation whose local -Z axis points along `direction` and whose
/// local +Y axis is as close as possible to `up`.
pub fn look_rotation(direction: &Vec3, up: &Vec3) -> Quat {
    let z = -direction.normalize();
    let x = up.cross(&z).normalize();
    let y = z.cross(&x);
    let basis = Mat3::from_columns(&[x, y, z]);
    Quat::from_rotation_matrix(&nalgebra::Rotation3::from_matrix_unchecked(
        basis,
    ))
}

/// A rotation of `angle` radians around `axis`. A zero axis yields the
/// identity rotation.
pub fn angle_axis(angle: f32, axis: &Vec3) -> Quat {
    match nalgebra::Unit::try_new(*axis, f32::EPSILON) {
        Some(unit_axis) => Quat::from_axis_angle(&unit_axis, angle),
        None => Quat::identity(),
    }
}

/// Build the world-to-view matrix for an object placed at `position` with
/// the given orientation.
pub fn view_matrix(position: &Vec3, rotation: &Quat) -> Mat4 {
    let camera_to_world =
        Mat4::new_translation(position) * rotation.to_homogeneous();
    camera_to_world
        .try_inverse()
        .unwrap_or_else(Mat4::identity)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn project(m: &Mat4, point: Vec3) -> Vec3 {
        let clip = m * point.push(1.0);
        clip.xyz() / clip.w
    }

    #[test]
    fn perspective_maps_near_and_far_to_zero_and_one() {
        let proj = projections::perspective(60f32.to_radians(), 1.5, 0.5, 50.0);
        assert_relative_eq!(
            project(&proj, Vec3::new(0.0, 0.0, -0.5)).z,
            0.0,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            project(&proj, Vec3::new(0.0, 0.0, -50.0)).z,
            1.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn perspective_respects_the_field_of_view() {
        let proj = projections::perspective(90f32.to_radians(), 2.0, 1.0, 10.0);
        // at 90 degrees the frustum edge is at y == -z
        let top = project(&proj, Vec3::new(0.0, 3.0, -3.0));
        assert_relative_eq!(top.y, 1.0, epsilon = 1e-6);
        let right = project(&proj, Vec3::new(6.0, 0.0, -3.0));
        assert_relative_eq!(right.x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn look_rotation_points_negative_z_along_the_direction() {
        let direction = Vec3::new(1.0, 2.0, -3.0).normalize();
        let up = Vec3::new(0.0, -1.0, 0.0);
        let rotation = look_rotation(&direction, &up);

        let forward = rotation * Vec3::new(0.0, 0.0, -1.0);
        assert_relative_eq!(forward, direction, epsilon = 1e-5);

        let local_up = rotation * Vec3::y();
        assert!(local_up.dot(&up) > 0.0);
        assert_relative_eq!(local_up.dot(&direction), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn angle_axis_with_zero_axis_is_identity() {
        let q = angle_axis(1.0, &Vec3::zeros());
        assert_relative_eq!(q.angle(), 0.0);
    }

    #[test]
    fn view_matrix_moves_the_camera_to_the_origin() {
        let position = Vec3::new(1.0, 2.0, -2.0);
        let rotation = look_rotation(&(-position), &Vec3::new(0.0, -1.0, 0.0));
        let view = view_matrix(&position, &rotation);

        let eye = view * position.push(1.0);
        assert_relative_eq!(eye.xyz(), Vec3::zeros(), epsilon = 1e-5);

        // the origin is straight ahead, down the -Z axis
        let target = view * Vec3::zeros().push(1.0);
        assert_relative_eq!(target.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(target.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(target.z, -3.0, epsilon = 1e-5);
    }
}
