use super::{world_up, Camera, CameraRig, FreeCamera};
use crate::{
    input::{KeyCode, MouseButton},
    math::{angle_axis, look_rotation, Vec3},
};

const DRAG_ROTATE_SPEED: f32 = 0.15;
const DRAG_MOVE_SPEED: f32 = 0.4;
const SCROLL_SPEED: f32 = 1.25;

fn initial_axes() -> (Vec3, Vec3, Vec3) {
    let forward = Vec3::new(0.0, 0.0, 1.0);
    let up = world_up();
    let right = Vec3::new(1.0, 0.0, 0.0);
    (forward, up, right)
}

impl FreeCamera {
    /// Create a camera at `position` facing +Z.
    pub fn new(position: Vec3) -> Self {
        let (forward, up, right) = initial_axes();
        Self {
            rig: CameraRig::new(position, look_rotation(&forward, &up)),
            initial_position: position,
            forward,
            up,
            right,
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Apply roll (z), then pitch (x), then yaw (y) to the camera axes.
    fn rotate_axes(&mut self, rotation: Vec3) {
        let roll = angle_axis(rotation.z, &self.forward);
        self.right = (roll * self.right).normalize();
        self.up = (roll * self.up).normalize();

        let pitch = angle_axis(rotation.x, &self.right);
        self.forward = (pitch * self.forward).normalize();
        if self.up.dot(&self.right.cross(&self.forward)) < 0.0 {
            self.up = -self.up;
        }

        let yaw = angle_axis(rotation.y, &self.up);
        self.forward = (yaw * self.forward).normalize();
        self.right = (yaw * self.right).normalize();

        // Rounding error accumulates frame over frame
        self.right = self.forward.cross(&self.up).normalize();
        self.up = self.right.cross(&self.forward).normalize();
    }
}

impl Default for FreeCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, -3.0))
    }
}

impl Camera for FreeCamera {
    fn rig(&self) -> &CameraRig {
        &self.rig
    }

    fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }

    fn update(&mut self, time_step: f32) {
        let delta = self.rig.input.move_delta();
        let input = &self.rig.input;

        let mut rotation = self.rig.arrow_rotation();
        if input.is_key_down(KeyCode::Q) {
            rotation.z += self.rig.rotate_speed;
        }
        if input.is_key_down(KeyCode::E) {
            rotation.z -= self.rig.rotate_speed;
        }
        if input.is_button_down(MouseButton::Left) {
            rotation.x += DRAG_ROTATE_SPEED * delta.y;
            rotation.y -= DRAG_ROTATE_SPEED * delta.x;
        }
        rotation *= time_step;

        let mut movement = self.rig.key_movement();
        if input.is_button_down(MouseButton::Right) {
            movement.x += DRAG_MOVE_SPEED * delta.x;
            movement.y += DRAG_MOVE_SPEED * delta.y;
        }
        movement.z += SCROLL_SPEED * input.scroll_delta();
        movement *= time_step;
        let reset = input.is_key_down(KeyCode::F5);

        self.rotate_axes(rotation);
        self.rig.rotation = look_rotation(&self.forward, &self.up);
        self.rig.position += self.rig.rotation * movement;

        if reset {
            self.reset_transform();
        }

        self.rig.update_view_matrix();
        self.rig.input.clear_deltas();
    }

    fn reset_transform(&mut self) {
        let (forward, up, right) = initial_axes();
        self.forward = forward;
        self.up = up;
        self.right = right;
        self.rig.position = self.initial_position;
        self.rig.rotation = look_rotation(&forward, &up);
        self.rig.update_view_matrix();
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::input::{InputEvent, KeyAction, MouseAction},
        approx::assert_relative_eq,
        nalgebra::Vector4,
    };

    fn press(camera: &mut FreeCamera, code: KeyCode) {
        camera.handle_event(&InputEvent::Key {
            code,
            action: KeyAction::Down,
        });
    }

    fn assert_orthonormal(camera: &FreeCamera) {
        assert_relative_eq!(camera.forward().norm(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(camera.up().norm(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(camera.right().norm(), 1.0, epsilon = 1e-5);
        let (forward, up, right) =
            (camera.forward(), camera.up(), camera.right());
        assert_relative_eq!(forward.dot(&up), 0.0, epsilon = 1e-5);
        assert_relative_eq!(forward.dot(&right), 0.0, epsilon = 1e-5);
        assert_relative_eq!(up.dot(&right), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn default_camera_faces_the_origin() {
        let camera = FreeCamera::default();
        let origin = camera.view_matrix() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(
            origin.xyz(),
            Vec3::new(0.0, 0.0, -3.0),
            epsilon = 1e-5
        );
    }

    #[test]
    fn forward_movement_follows_the_view_direction() {
        let mut camera = FreeCamera::default();
        press(&mut camera, KeyCode::W);
        camera.update(0.5);
        assert_relative_eq!(
            camera.position(),
            Vec3::new(0.0, 0.0, -2.5),
            epsilon = 1e-5
        );
    }

    #[test]
    fn roll_keeps_the_forward_direction() {
        let mut camera = FreeCamera::default();
        press(&mut camera, KeyCode::Q);
        camera.update(2.0);
        assert_relative_eq!(
            camera.forward(),
            Vec3::new(0.0, 0.0, 1.0),
            epsilon = 1e-5
        );
        assert!((camera.up() - world_up()).norm() > 0.1);
        assert_orthonormal(&camera);
    }

    #[test]
    fn axes_stay_orthonormal_under_mixed_rotation() {
        let mut camera = FreeCamera::default();
        press(&mut camera, KeyCode::Up);
        press(&mut camera, KeyCode::Right);
        press(&mut camera, KeyCode::E);
        camera.handle_event(&InputEvent::MouseButton {
            button: MouseButton::Left,
            action: MouseAction::Down,
            x: 0.0,
            y: 0.0,
        });
        for step in 0..200 {
            let offset = step as f64;
            camera.handle_event(&InputEvent::MouseMove {
                x: offset * 3.0,
                y: offset * -2.0,
            });
            camera.update(1.0 / 60.0);
        }
        assert_orthonormal(&camera);
    }

    #[test]
    fn scrolling_moves_along_the_view_direction() {
        let mut camera = FreeCamera::default();
        camera.handle_event(&InputEvent::Scroll { x: 0.0, y: 2.0 });
        camera.update(0.1);
        // +z in camera space is behind the camera
        assert_relative_eq!(
            camera.position(),
            Vec3::new(0.0, 0.0, -3.25),
            epsilon = 1e-5
        );
    }

    #[test]
    fn f5_restores_the_initial_transform() {
        let mut camera = FreeCamera::new(Vec3::new(1.0, 1.0, 1.0));
        press(&mut camera, KeyCode::Left);
        press(&mut camera, KeyCode::D);
        camera.update(1.0);
        assert!((camera.position() - Vec3::new(1.0, 1.0, 1.0)).norm() > 0.1);

        press(&mut camera, KeyCode::F5);
        camera.update(1.0);
        assert_relative_eq!(camera.position(), Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(camera.forward(), Vec3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(camera.up(), world_up());
    }
}
