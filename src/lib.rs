pub mod application;
pub mod camera;
pub mod config;
pub mod frame_pipeline;
pub mod glfw_window;
pub mod input;
pub mod logging;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod timing;
pub mod vulkan;
pub mod vulkan_ext;
