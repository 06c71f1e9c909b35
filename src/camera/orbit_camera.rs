use super::{world_up, Camera, CameraRig, OrbitCamera};
use crate::{
    input::{KeyCode, MouseButton},
    math::{angle_axis, look_rotation, Quat, Vec3},
};

const DRAG_ROTATE_SPEED: f32 = 0.4;
const DRAG_MOVE_SPEED: f32 = 0.75;
const SCROLL_SPEED: f32 = 1.2;

/// The orientation which looks from `position` toward `target` with the
/// world up direction kept upright.
fn orbit_rotation(position: &Vec3, target: &Vec3) -> Quat {
    let forward = (target - position)
        .try_normalize(f32::EPSILON)
        .unwrap_or_else(|| Vec3::new(0.0, 0.0, 1.0));
    let right = forward.cross(&world_up());
    let up = right.cross(&forward);
    look_rotation(&forward, &up)
}

impl OrbitCamera {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        let rotation = orbit_rotation(&position, &target);
        Self {
            rig: CameraRig::new(position, rotation),
            initial_position: position,
            initial_target: target,
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(Vec3::new(1.0, 2.0, -2.0), Vec3::zeros())
    }
}

impl Camera for OrbitCamera {
    fn rig(&self) -> &CameraRig {
        &self.rig
    }

    fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }

    fn update(&mut self, time_step: f32) {
        let rig = &mut self.rig;
        let delta = rig.input.move_delta();

        // x is pitch and y is yaw
        let mut rotation = rig.arrow_rotation();
        if rig.input.is_button_down(MouseButton::Left) {
            rotation.x += DRAG_ROTATE_SPEED * delta.y;
            rotation.y -= DRAG_ROTATE_SPEED * delta.x;
        }
        rotation *= time_step;

        let right = rig.rotation * Vec3::x();
        let yaw = angle_axis(rotation.y, &world_up());
        let pitch = angle_axis(rotation.x, &right);
        let orbit = Quat::new_normalize((yaw * pitch).into_inner());

        rig.position = orbit * rig.position;
        rig.rotation = orbit * rig.rotation;

        let mut movement = rig.key_movement();
        if rig.input.is_button_down(MouseButton::Right) {
            movement.x -= DRAG_MOVE_SPEED * delta.x;
            movement.y -= DRAG_MOVE_SPEED * delta.y;
        }
        movement.z -= SCROLL_SPEED * rig.input.scroll_delta();
        movement *= time_step;

        rig.position += rig.rotation * movement;

        if rig.input.is_key_down(KeyCode::F5) {
            self.reset_transform();
        }

        self.rig.update_view_matrix();
        self.rig.input.clear_deltas();
    }

    fn reset_transform(&mut self) {
        self.rig.position = self.initial_position;
        self.rig.rotation =
            orbit_rotation(&self.initial_position, &self.initial_target);
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

    fn press(camera: &mut OrbitCamera, code: KeyCode) {
        camera.handle_event(&InputEvent::Key {
            code,
            action: KeyAction::Down,
        });
    }

    fn view_space_origin(camera: &OrbitCamera) -> Vec3 {
        let origin = camera.view_matrix() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        origin.xyz()
    }

    #[test]
    fn default_camera_looks_at_the_origin() {
        let camera = OrbitCamera::default();
        assert_eq!(camera.position(), Vec3::new(1.0, 2.0, -2.0));
        assert_relative_eq!(
            view_space_origin(&camera),
            Vec3::new(0.0, 0.0, -3.0),
            epsilon = 1e-5
        );
    }

    #[test]
    fn default_camera_keeps_world_up_on_screen_up() {
        let camera = OrbitCamera::default();
        let camera_up = camera.rig().rotation * Vec3::y();
        assert!(camera_up.dot(&world_up()) > 0.0);
        assert_relative_eq!(
            (camera.rig().rotation * Vec3::x()).dot(&world_up()),
            0.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn yaw_orbits_at_a_fixed_distance() {
        let mut camera = OrbitCamera::default();
        press(&mut camera, KeyCode::Left);
        for _ in 0..10 {
            camera.update(0.5);
        }
        assert_relative_eq!(camera.position().norm(), 3.0, epsilon = 1e-4);
        assert_relative_eq!(
            view_space_origin(&camera),
            Vec3::new(0.0, 0.0, -3.0),
            epsilon = 1e-4
        );
        assert!((camera.position() - Vec3::new(1.0, 2.0, -2.0)).norm() > 0.1);
    }

    #[test]
    fn mouse_drag_pitches_around_the_origin() {
        let mut camera = OrbitCamera::default();
        camera.handle_event(&InputEvent::MouseButton {
            button: MouseButton::Left,
            action: MouseAction::Down,
            x: 10.0,
            y: 10.0,
        });
        camera.handle_event(&InputEvent::MouseMove { x: 10.0, y: 12.0 });
        camera.update(0.5);

        assert_relative_eq!(camera.position().norm(), 3.0, epsilon = 1e-4);
        assert_relative_eq!(
            view_space_origin(&camera),
            Vec3::new(0.0, 0.0, -3.0),
            epsilon = 1e-4
        );
    }

    #[test]
    fn forward_movement_approaches_the_target() {
        let mut camera = OrbitCamera::default();
        press(&mut camera, KeyCode::W);
        camera.update(0.5);
        assert_relative_eq!(camera.position().norm(), 2.5, epsilon = 1e-5);
    }

    #[test]
    fn scrolling_zooms_once_per_event() {
        let mut camera = OrbitCamera::default();
        camera.handle_event(&InputEvent::Scroll { x: 0.0, y: 1.0 });
        camera.update(1.0);
        assert_relative_eq!(camera.position().norm(), 1.8, epsilon = 1e-5);

        camera.update(1.0);
        assert_relative_eq!(camera.position().norm(), 1.8, epsilon = 1e-5);
    }

    #[test]
    fn f5_restores_the_initial_transform() {
        let mut camera = OrbitCamera::default();
        press(&mut camera, KeyCode::Right);
        press(&mut camera, KeyCode::S);
        camera.update(1.0);
        assert!((camera.position() - Vec3::new(1.0, 2.0, -2.0)).norm() > 0.1);

        press(&mut camera, KeyCode::F5);
        camera.update(1.0);
        assert_relative_eq!(camera.position(), Vec3::new(1.0, 2.0, -2.0));
        assert_relative_eq!(
            view_space_origin(&camera),
            Vec3::new(0.0, 0.0, -3.0),
            epsilon = 1e-5
        );
    }
}
