mod debug_callback;
mod extensions;
mod instance;
mod layers;

use ::{
    ash::{extensions::ext::DebugUtils, vk, Entry},
    thiserror::Error,
};

/// This enum represents errors which can occur when building and handling the
/// Vulkan instance.
#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("Unable to setup the Vulkan debug callback")]
    DebugMessengerCreateFailed(#[source] vk::Result),

    #[error("Unable to list the available Vulkan extensions on this platform")]
    UnableToListAvailableExtensions(#[source] vk::Result),

    #[error("Required extensions are not available on this platform: {:?}", .0)]
    RequiredExtensionsNotFound(Vec<String>),

    #[error("Unable to list the available Vulkan layers on this platform")]
    UnableToListAvailableLayers(#[source] vk::Result),

    #[error("A layer or extension name contained an interior nul byte")]
    InvalidName(#[source] std::ffi::NulError),

    #[error("Unable to create the Vulkan instance")]
    UnableToCreateInstance(#[source] vk::Result),

    #[error("Unable to create the logical device")]
    UnableToCreateLogicalDevice(#[source] vk::Result),
}

/// The Instance struct holds the ash entry and instance handle along with the
/// optional validation layer messenger.
///
/// # Example
///
///     use vk_scenes::vulkan::Instance;
///
///     // Typically the required extensions come from the window system.
///     let required_extensions = vec![
///         String::from("some_required_extension"),
///     ];
///
///     let instance = Instance::new("Example", &required_extensions, true);
///
pub struct Instance {
    /// The Ash Vulkan instance.
    pub ash: ash::Instance,

    /// The Debug entrypoint, used to set debug names for vulkan objects.
    /// None when validation is disabled.
    pub debug: Option<DebugUtils>,

    /// The layers applied to this vulkan instance.
    layers: Vec<String>,

    /// The instance's debug messenger, null when validation is disabled.
    debug_messenger: vk::DebugUtilsMessengerEXT,

    /// The vulkan function loader.
    pub entry: Entry,
}
