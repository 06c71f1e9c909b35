use super::{CameraRig, InputState};
use crate::{
    input::KeyCode,
    math::{projections, view_matrix, Mat4, Quat, Vec3},
};

const DEFAULT_FIELD_OF_VIEW: f32 = 60.0;
const DEFAULT_NEAR: f32 = 0.5;
const DEFAULT_FAR: f32 = 50.0;

impl CameraRig {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        let mut rig = Self {
            position,
            rotation,
            field_of_view: DEFAULT_FIELD_OF_VIEW.to_radians(),
            aspect: 1.0,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            rotate_speed: 0.1,
            move_speed: 1.0,
            input: InputState::default(),
            view: Mat4::identity(),
            projection: Mat4::identity(),
        };
        rig.update_view_matrix();
        rig.update_projection_matrix();
        rig
    }

    pub fn set_perspective(
        &mut self,
        field_of_view: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) {
        self.field_of_view = field_of_view.to_radians();
        self.aspect = aspect;
        self.near = near;
        self.far = far;
        self.update_projection_matrix();
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection_matrix();
    }

    pub fn update_view_matrix(&mut self) {
        self.view = view_matrix(&self.position, &self.rotation);
    }

    pub fn update_projection_matrix(&mut self) {
        self.projection = projections::perspective(
            self.field_of_view,
            self.aspect,
            self.near,
            self.far,
        );
    }

    /// Camera space movement requested by the held keys at move speed.
    ///
    /// A/D move along x, R/F along y, and W/S along z. W moves toward -z,
    /// which is the direction the camera faces.
    pub fn key_movement(&self) -> Vec3 {
        let speed = self.move_speed;
        let mut movement = Vec3::zeros();
        let mut apply = |code: KeyCode, axis: usize, sign: f32| {
            if self.input.is_key_down(code) {
                movement[axis] += sign * speed;
            }
        };
        apply(KeyCode::A, 0, -1.0);
        apply(KeyCode::D, 0, 1.0);
        apply(KeyCode::R, 1, -1.0);
        apply(KeyCode::F, 1, 1.0);
        apply(KeyCode::W, 2, -1.0);
        apply(KeyCode::S, 2, 1.0);
        movement
    }

    /// Pitch (x) and yaw (y) requested by the arrow keys at rotate speed.
    pub fn arrow_rotation(&self) -> Vec3 {
        let speed = self.rotate_speed;
        let mut rotation = Vec3::zeros();
        if self.input.is_key_down(KeyCode::Up) {
            rotation.x -= speed;
        }
        if self.input.is_key_down(KeyCode::Down) {
            rotation.x += speed;
        }
        if self.input.is_key_down(KeyCode::Left) {
            rotation.y += speed;
        }
        if self.input.is_key_down(KeyCode::Right) {
            rotation.y -= speed;
        }
        rotation
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::input::{InputEvent, KeyAction},
        approx::assert_relative_eq,
    };

    fn press(rig: &mut CameraRig, code: KeyCode) {
        rig.input.handle_event(&InputEvent::Key {
            code,
            action: KeyAction::Down,
        });
    }

    #[test]
    fn set_perspective_uses_degrees() {
        let mut rig = CameraRig::new(Vec3::zeros(), Quat::identity());
        rig.set_perspective(90.0, 2.0, 0.1, 10.0);
        assert_relative_eq!(rig.projection[(1, 1)], 1.0, epsilon = 1e-6);
        assert_relative_eq!(rig.projection[(0, 0)], 0.5, epsilon = 1e-6);

        rig.set_aspect(1.0);
        assert_relative_eq!(rig.projection[(0, 0)], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut rig = CameraRig::new(Vec3::zeros(), Quat::identity());
        press(&mut rig, KeyCode::A);
        press(&mut rig, KeyCode::D);
        press(&mut rig, KeyCode::W);
        assert_eq!(rig.key_movement(), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn arrows_map_to_pitch_and_yaw() {
        let mut rig = CameraRig::new(Vec3::zeros(), Quat::identity());
        press(&mut rig, KeyCode::Up);
        press(&mut rig, KeyCode::Left);
        assert_relative_eq!(rig.arrow_rotation(), Vec3::new(-0.1, 0.1, 0.0));
    }
}
