//! A single GLFW window configured for Vulkan presentation.

mod glfw_window;
mod window_error;

pub use self::window_error::WindowError;

/// GLFW uses a Receiver for accepting window events. This type alias is more
/// convenient to write/read than the full name.
pub type EventReceiver = glfw::GlfwReceiver<(f64, glfw::WindowEvent)>;

/// All of the GLFW resources which are required for managing a single-windowed
/// GLFW application.
pub struct GlfwWindow {
    /// The glfw library instance
    pub glfw: glfw::Glfw,

    /// The glfw window
    pub window: glfw::PWindow,

    /// The event receiver which is typically consumed by the application's
    /// main loop.
    event_receiver: Option<EventReceiver>,
}
