//! Functions for picking a physical device with the features required by this
//! application.

use ::ash::{extensions::khr, vk};

use super::{PhysicalDeviceError, QueueFamilyIndices};
use crate::vulkan::{ffi::name_to_string, Instance, WindowSurface};

#[cfg(target_os = "macos")]
const PORTABILITY_SUBSET: &str = "VK_KHR_portability_subset";

/// Get the set of required device extensions for this application.
pub fn required_device_extensions() -> Vec<String> {
    #[allow(unused_mut)]
    let mut extensions =
        vec![khr::Swapchain::name().to_string_lossy().into_owned()];
    #[cfg(target_os = "macos")]
    extensions.push(PORTABILITY_SUBSET.to_owned());
    extensions
}

/// Pick the first physical device which can render and present to the window
/// surface.
pub fn find_optimal(
    instance: &Instance,
    window_surface: &WindowSurface,
) -> Result<vk::PhysicalDevice, PhysicalDeviceError> {
    let physical_devices = unsafe {
        instance
            .ash
            .enumerate_physical_devices()
            .map_err(PhysicalDeviceError::UnableToEnumerateDevices)?
    };
    let physical_device = physical_devices
        .into_iter()
        .find(|device| is_device_suitable(instance, window_surface, device))
        .ok_or(PhysicalDeviceError::NoSuitableDeviceFound)?;

    let properties = unsafe {
        instance
            .ash
            .get_physical_device_properties(physical_device)
    };
    log::info!("Pick GPU: {}", name_to_string(&properties.device_name));

    Ok(physical_device)
}

fn is_device_suitable(
    instance: &Instance,
    window_surface: &WindowSurface,
    physical_device: &vk::PhysicalDevice,
) -> bool {
    if !has_required_extensions(instance, physical_device) {
        log::trace!(
            "Physical device {:?} is missing required extensions",
            physical_device
        );
        return false;
    }

    if QueueFamilyIndices::find(&instance.ash, window_surface, physical_device)
        .is_err()
    {
        log::trace!(
            "Could not find suitable queue families for physical device {:?}",
            physical_device
        );
        return false;
    }

    true
}

fn has_required_extensions(
    instance: &Instance,
    physical_device: &vk::PhysicalDevice,
) -> bool {
    let available = match unsafe {
        instance
            .ash
            .enumerate_device_extension_properties(*physical_device)
    } {
        Ok(properties) => properties
            .iter()
            .map(|ext| name_to_string(&ext.extension_name))
            .collect::<Vec<String>>(),
        Err(err) => {
            log::warn!(
                "Unable to list extensions for {:?}: {}",
                physical_device,
                err
            );
            return false;
        }
    };
    required_device_extensions()
        .iter()
        .all(|name| available.contains(name))
}
