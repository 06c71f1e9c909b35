//! Window-system independent input events.
//!
//! Scenes and cameras only see [InputEvent]s. The [InputMapper] translates
//! GLFW window events into them.

mod glfw_mapping;

pub use self::glfw_mapping::InputMapper;

/// The keys which scenes and cameras respond to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Q,
    E,
    R,
    F,
    F5,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Down,
    Up,
    Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key {
        code: KeyCode,
        action: KeyAction,
    },

    /// A button press or release at the cursor position in screen
    /// coordinates.
    MouseButton {
        button: MouseButton,
        action: MouseAction,
        x: f64,
        y: f64,
    },

    MouseMove {
        x: f64,
        y: f64,
    },

    Scroll {
        x: f64,
        y: f64,
    },
}
