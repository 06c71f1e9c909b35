use ::{ash::vk, std::ffi::CString};

use super::{
    physical_device, GpuQueue, QueueFamilyIndices, RenderDevice,
    RenderDeviceError,
};
use crate::vulkan::{Instance, WindowSurface};

impl RenderDevice {
    /// Create the Vulkan Render Device.
    pub fn new(
        instance: Instance,
        window_surface: WindowSurface,
    ) -> Result<Self, RenderDeviceError> {
        let physical_device =
            physical_device::find_optimal(&instance, &window_surface)?;
        let queue_family_indices = QueueFamilyIndices::find(
            &instance.ash,
            &window_surface,
            &physical_device,
        )?;

        let priorities = [1.0_f32];
        let queue_create_infos: Vec<vk::DeviceQueueCreateInfo> =
            queue_family_indices
                .unique_families()
                .into_iter()
                .map(|family_index| vk::DeviceQueueCreateInfo {
                    queue_family_index: family_index,
                    queue_count: 1,
                    p_queue_priorities: priorities.as_ptr(),
                    ..Default::default()
                })
                .collect();

        let logical_device = instance.create_logical_device(
            &physical_device,
            vk::PhysicalDeviceFeatures::default(),
            &physical_device::required_device_extensions(),
            &queue_create_infos,
        )?;

        let graphics_queue = {
            let family_id = queue_family_indices.graphics_family_index;
            let raw = unsafe { logical_device.get_device_queue(family_id, 0) };
            GpuQueue::from_raw(raw, family_id, 0)
        };
        let present_queue = {
            let family_id = queue_family_indices.present_family_index;
            let raw = unsafe { logical_device.get_device_queue(family_id, 0) };
            GpuQueue::from_raw(raw, family_id, 0)
        };

        log::debug!(
            "Graphics queue: {:?}, present queue: {:?}",
            graphics_queue,
            present_queue
        );

        Ok(Self {
            physical_device,
            logical_device,
            graphics_queue,
            present_queue,
            window_surface,
            instance,
        })
    }

    /// Give a Vulkan object a name which shows up in validation messages.
    /// This is a no-op when validation is disabled.
    pub fn name_vulkan_object<Name, Handle>(
        &self,
        name: Name,
        object_type: vk::ObjectType,
        handle: Handle,
    ) -> Result<(), RenderDeviceError>
    where
        Handle: vk::Handle + Copy,
        Name: Into<String>,
    {
        let debug = match &self.instance.debug {
            Some(debug) => debug,
            None => return Ok(()),
        };
        let owned_name = name.into();
        let cname = CString::new(owned_name.replace('\0', "")).map_err(|_| {
            RenderDeviceError::UnableToSetDebugName(
                owned_name.clone(),
                object_type,
                vk::Result::ERROR_UNKNOWN,
            )
        })?;
        let name_info = vk::DebugUtilsObjectNameInfoEXT {
            object_type,
            p_object_name: cname.as_ptr(),
            object_handle: handle.as_raw(),
            ..Default::default()
        };
        unsafe {
            debug
                .set_debug_utils_object_name(
                    self.logical_device.handle(),
                    &name_info,
                )
                .map_err(|result| {
                    RenderDeviceError::UnableToSetDebugName(
                        owned_name,
                        object_type,
                        result,
                    )
                })?;
        }
        Ok(())
    }

    /// Block until the device has finished all submitted work.
    pub fn wait_idle(&self) -> Result<(), RenderDeviceError> {
        unsafe {
            self.logical_device
                .device_wait_idle()
                .map_err(RenderDeviceError::UnableToWaitIdle)
        }
    }

    /// True when graphics and presentation happen on the same queue family.
    pub fn queues_are_shared(&self) -> bool {
        self.graphics_queue.family_id == self.present_queue.family_id
    }
}

impl Drop for RenderDevice {
    /// # DANGER
    ///
    /// There is no internal synchronization for this type. Every resource
    /// created from this device must be destroyed before it is dropped.
    fn drop(&mut self) {
        unsafe {
            if let Err(err) = self.logical_device.device_wait_idle() {
                log::error!("Unable to wait for the device to idle: {}", err);
            }
            self.logical_device.destroy_device(None);
        }
    }
}
