use ::{
    ash::{extensions::khr, vk},
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum WindowSurfaceError {
    #[error(
        "Unable to determine if the device can present images with this queue"
    )]
    UnableToCheckPhysicalDeviceSurfaceSupport(#[source] vk::Result),

    #[error("Unable to get the surface capabilities for a physical device")]
    UnableToGetPhysicalDeviceSurfaceCapabilities(#[source] vk::Result),

    #[error("Unable to list the surface formats for a physical device")]
    UnableToGetSurfaceFormats(#[source] vk::Result),

    #[error("Unable to list the present modes for a physical device")]
    UnableToGetPresentModes(#[source] vk::Result),
}

/// The window's presentation surface along with the extension loader used to
/// query and destroy it.
pub struct WindowSurface {
    pub loader: khr::Surface,
    pub khr: vk::SurfaceKHR,
}

impl WindowSurface {
    /// Take ownership of the provided surface.
    pub fn new(
        surface_khr: vk::SurfaceKHR,
        surface_loader: khr::Surface,
    ) -> Self {
        Self {
            loader: surface_loader,
            khr: surface_khr,
        }
    }

    /// Check that a queue family on the physical device can present to this
    /// surface.
    ///
    /// # Safety
    ///
    /// The queue family index must be valid for the physical device.
    pub unsafe fn get_physical_device_surface_support(
        &self,
        physical_device: &vk::PhysicalDevice,
        queue_family_index: u32,
    ) -> Result<bool, WindowSurfaceError> {
        self.loader
            .get_physical_device_surface_support(
                *physical_device,
                queue_family_index,
                self.khr,
            )
            .map_err(
                WindowSurfaceError::UnableToCheckPhysicalDeviceSurfaceSupport,
            )
    }

    /// Returns the set of all supported formats for this device.
    ///
    /// # Safety
    ///
    /// The device must support the swapchain extension.
    pub unsafe fn supported_formats(
        &self,
        physical_device: &vk::PhysicalDevice,
    ) -> Result<Vec<vk::SurfaceFormatKHR>, WindowSurfaceError> {
        self.loader
            .get_physical_device_surface_formats(*physical_device, self.khr)
            .map_err(WindowSurfaceError::UnableToGetSurfaceFormats)
    }

    /// Returns the set of all supported presentation modes for this device.
    ///
    /// # Safety
    ///
    /// The device must support the swapchain extension.
    pub unsafe fn supported_presentation_modes(
        &self,
        physical_device: &vk::PhysicalDevice,
    ) -> Result<Vec<vk::PresentModeKHR>, WindowSurfaceError> {
        self.loader
            .get_physical_device_surface_present_modes(
                *physical_device,
                self.khr,
            )
            .map_err(WindowSurfaceError::UnableToGetPresentModes)
    }

    /// # Safety
    ///
    /// The device must support the swapchain extension.
    pub unsafe fn surface_capabilities(
        &self,
        physical_device: &vk::PhysicalDevice,
    ) -> Result<vk::SurfaceCapabilitiesKHR, WindowSurfaceError> {
        self.loader
            .get_physical_device_surface_capabilities(
                *physical_device,
                self.khr,
            )
            .map_err(
                WindowSurfaceError::UnableToGetPhysicalDeviceSurfaceCapabilities,
            )
    }
}

impl Drop for WindowSurface {
    /// # DANGER
    ///
    /// There is no internal synchronization with GPU resources. The
    /// application must ensure this object isn't dropped until the swapchain
    /// built from it is gone.
    fn drop(&mut self) {
        unsafe {
            self.loader.destroy_surface(self.khr, None);
        }
    }
}
