use ::{
    ash::{extensions::ext::DebugUtils, vk, Entry},
    std::ffi::CString,
};

use crate::{
    logging::PrettyList,
    vulkan::{
        ffi::to_os_ptrs,
        instance::{debug_callback, extensions, layers, Instance, InstanceError},
    },
};

const VALIDATION_LAYER: &str = "VK_LAYER_KHRONOS_validation";

#[cfg(target_os = "macos")]
const PORTABILITY_ENUMERATION: &str = "VK_KHR_portability_enumeration";

impl Instance {
    /// Create a new ash instance with the required extensions.
    ///
    /// When `enable_validation` is set the Khronos validation layer is
    /// enabled (if installed) and validation messages are routed into the
    /// application log.
    pub fn new(
        application_name: &str,
        required_extensions: &[String],
        enable_validation: bool,
    ) -> Result<Self, InstanceError> {
        let entry = Entry::linked();

        let layers = if enable_validation {
            choose_validation_layers(&entry)?
        } else {
            vec![]
        };

        let mut all_extensions = required_extensions.to_vec();
        if enable_validation {
            all_extensions.push(
                DebugUtils::name().to_string_lossy().into_owned(),
            );
        }
        #[cfg(target_os = "macos")]
        all_extensions.push(PORTABILITY_ENUMERATION.to_owned());

        extensions::check_extensions(&entry, &all_extensions)?;
        log::debug!("Required Extensions: {}", PrettyList(&all_extensions));

        let ash = create_instance(
            &entry,
            application_name,
            &all_extensions,
            &layers,
        )?;

        let (debug, debug_messenger) = if enable_validation {
            let (debug, messenger) =
                debug_callback::create_debug_logger(&entry, &ash)?;
            (Some(debug), messenger)
        } else {
            (None, vk::DebugUtilsMessengerEXT::null())
        };

        Ok(Self {
            ash,
            debug,
            layers,
            debug_messenger,
            entry,
        })
    }

    /// Create a logical device for the given physical device. The instance
    /// layers are also applied to the device for older implementations.
    pub fn create_logical_device(
        &self,
        physical_device: &vk::PhysicalDevice,
        physical_device_features: vk::PhysicalDeviceFeatures,
        physical_device_extensions: &[String],
        queue_create_infos: &[vk::DeviceQueueCreateInfo],
    ) -> Result<ash::Device, InstanceError> {
        let (_c_names, layer_name_ptrs) =
            to_os_ptrs(&self.layers).map_err(InstanceError::InvalidName)?;
        let (_c_ext_names, ext_name_ptrs) =
            to_os_ptrs(physical_device_extensions)
                .map_err(InstanceError::InvalidName)?;

        let create_info = vk::DeviceCreateInfo {
            queue_create_info_count: queue_create_infos.len() as u32,
            p_queue_create_infos: queue_create_infos.as_ptr(),
            p_enabled_features: &physical_device_features,
            pp_enabled_layer_names: layer_name_ptrs.as_ptr(),
            enabled_layer_count: layer_name_ptrs.len() as u32,
            pp_enabled_extension_names: ext_name_ptrs.as_ptr(),
            enabled_extension_count: ext_name_ptrs.len() as u32,
            ..Default::default()
        };

        unsafe {
            self.ash
                .create_device(*physical_device, &create_info, None)
                .map_err(InstanceError::UnableToCreateLogicalDevice)
        }
    }
}

impl Drop for Instance {
    /// The owner must ensure that the Instance is only dropped after other
    /// resources which depend on it! There is no internal synchronization.
    fn drop(&mut self) {
        unsafe {
            if let Some(debug) = &self.debug {
                debug.destroy_debug_utils_messenger(self.debug_messenger, None);
            }
            self.ash.destroy_instance(None);
        }
    }
}

/// Pick the validation layers to enable. A missing validation layer is logged
/// rather than treated as fatal.
fn choose_validation_layers(
    entry: &Entry,
) -> Result<Vec<String>, InstanceError> {
    let available = layers::available_layers(entry)?;
    log::debug!("Available layers: {}", PrettyList(&available));
    if layers::contains_layer(&available, VALIDATION_LAYER) {
        Ok(vec![VALIDATION_LAYER.to_owned()])
    } else {
        log::error!(
            "{} was requested but is not installed, continuing without it",
            VALIDATION_LAYER
        );
        Ok(vec![])
    }
}

/// Create a Vulkan instance with the given extensions and layers.
fn create_instance(
    entry: &Entry,
    application_name: &str,
    extensions: &[String],
    layers: &[String],
) -> Result<ash::Instance, InstanceError> {
    let app_name =
        CString::new(application_name).map_err(InstanceError::InvalidName)?;
    let engine_name =
        CString::new("vk_scenes").map_err(InstanceError::InvalidName)?;

    let app_info = vk::ApplicationInfo {
        p_engine_name: engine_name.as_ptr(),
        p_application_name: app_name.as_ptr(),
        application_version: vk::make_api_version(0, 1, 0, 0),
        engine_version: vk::make_api_version(0, 1, 0, 0),
        api_version: vk::make_api_version(0, 1, 2, 0),
        ..Default::default()
    };

    let (_layer_names, layer_ptrs) =
        to_os_ptrs(layers).map_err(InstanceError::InvalidName)?;
    let (_ext_names, ext_ptrs) =
        to_os_ptrs(extensions).map_err(InstanceError::InvalidName)?;

    #[cfg(target_os = "macos")]
    let flags = vk::InstanceCreateFlags::ENUMERATE_PORTABILITY_KHR;
    #[cfg(not(target_os = "macos"))]
    let flags = vk::InstanceCreateFlags::empty();

    let create_info = vk::InstanceCreateInfo {
        flags,
        p_application_info: &app_info,
        pp_enabled_layer_names: layer_ptrs.as_ptr(),
        enabled_layer_count: layer_ptrs.len() as u32,
        pp_enabled_extension_names: ext_ptrs.as_ptr(),
        enabled_extension_count: ext_ptrs.len() as u32,
        ..Default::default()
    };

    unsafe {
        entry
            .create_instance(&create_info, None)
            .map_err(InstanceError::UnableToCreateInstance)
    }
}
