//! Keyboard and mouse driven cameras.
//!
//! Cameras accumulate input events as they arrive and apply them once per
//! frame in [Camera::update], scaled by the frame's time step.

mod camera_rig;
mod free_camera;
mod input_state;
mod orbit_camera;

use ::std::collections::HashSet;

use crate::{
    config::CameraKind,
    input::{InputEvent, KeyCode, MouseButton},
    math::{Mat4, Quat, Vec2, Vec3},
};

/// The up direction shared by every camera. Vulkan's clip space Y axis
/// points down, so world up is -Y.
pub fn world_up() -> Vec3 {
    Vec3::new(0.0, -1.0, 0.0)
}

/// Create the configured kind of camera at its default placement.
pub fn new_camera(kind: CameraKind) -> Box<dyn Camera> {
    match kind {
        CameraKind::Orbit => Box::new(OrbitCamera::default()),
        CameraKind::Free => Box::new(FreeCamera::default()),
    }
}

/// Common camera behavior. Implementors only provide access to their
/// [CameraRig] and their own update and reset rules.
pub trait Camera {
    fn rig(&self) -> &CameraRig;

    fn rig_mut(&mut self) -> &mut CameraRig;

    /// Apply all input received since the last update.
    fn update(&mut self, time_step: f32);

    /// Return to the camera's initial placement.
    fn reset_transform(&mut self);

    fn handle_event(&mut self, event: &InputEvent) {
        self.rig_mut().input.handle_event(event);
    }

    /// Set the projection. `field_of_view` is the vertical field of view in
    /// degrees.
    fn set_perspective(
        &mut self,
        field_of_view: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) {
        self.rig_mut()
            .set_perspective(field_of_view, aspect, near, far);
    }

    /// Update the aspect ratio after the window is resized.
    fn set_aspect(&mut self, aspect: f32) {
        self.rig_mut().set_aspect(aspect);
    }

    fn view_matrix(&self) -> Mat4 {
        self.rig().view
    }

    fn projection_matrix(&self) -> Mat4 {
        self.rig().projection
    }

    fn position(&self) -> Vec3 {
        self.rig().position
    }
}

/// Keys and buttons currently held along with the mouse motion received
/// since the last update.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    keys: HashSet<KeyCode>,
    buttons: HashSet<MouseButton>,
    last_cursor: Vec2,
    move_delta: Vec2,
    scroll_delta: f32,
}

/// The transform and projection state shared by all cameras.
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub position: Vec3,
    pub rotation: Quat,

    /// Vertical field of view in radians.
    pub field_of_view: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    /// Radians per second for key driven rotation.
    pub rotate_speed: f32,

    /// World units per second for key driven movement.
    pub move_speed: f32,

    pub input: InputState,

    view: Mat4,
    projection: Mat4,
}

/// A camera which orbits around the world origin.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    rig: CameraRig,
    initial_position: Vec3,
    initial_target: Vec3,
}

/// A camera which can fly and roll freely.
#[derive(Debug, Clone)]
pub struct FreeCamera {
    rig: CameraRig,
    initial_position: Vec3,
    forward: Vec3,
    up: Vec3,
    right: Vec3,
}
