use ::ash::vk;

use super::{QueueFamilyIndices, QueueSelectionError};
use crate::vulkan::WindowSurface;

impl QueueFamilyIndices {
    /// Find the graphics and present queue families for a physical device.
    pub fn find(
        instance: &ash::Instance,
        window_surface: &WindowSurface,
        physical_device: &vk::PhysicalDevice,
    ) -> Result<Self, QueueSelectionError> {
        let families = unsafe {
            instance.get_physical_device_queue_family_properties(
                *physical_device,
            )
        };
        let mut present_support = Vec::with_capacity(families.len());
        for index in 0..families.len() as u32 {
            let supported = unsafe {
                window_surface
                    .get_physical_device_surface_support(physical_device, index)
            }?;
            present_support.push(supported);
        }
        Self::from_families(&families, |index| present_support[index as usize])
    }

    /// Pick queue families from a list of family properties.
    ///
    /// A single family which supports both graphics and presentation is
    /// preferred. Otherwise the first graphics family and the first present
    /// family are used.
    pub fn from_families<F>(
        families: &[vk::QueueFamilyProperties],
        supports_present: F,
    ) -> Result<Self, QueueSelectionError>
    where
        F: Fn(u32) -> bool,
    {
        let is_graphics = |family: &vk::QueueFamilyProperties| {
            family.queue_count > 0
                && family.queue_flags.contains(vk::QueueFlags::GRAPHICS)
        };

        let combined = families.iter().enumerate().find(|(index, family)| {
            is_graphics(family) && supports_present(*index as u32)
        });
        if let Some((index, _)) = combined {
            return Ok(Self {
                graphics_family_index: index as u32,
                present_family_index: index as u32,
            });
        }

        let graphics_family_index = families
            .iter()
            .position(is_graphics)
            .ok_or(QueueSelectionError::UnableToFindGraphicsQueue)?
            as u32;
        let present_family_index = (0..families.len() as u32)
            .find(|&index| {
                families[index as usize].queue_count > 0
                    && supports_present(index)
            })
            .ok_or(QueueSelectionError::UnableToFindPresentQueue)?;

        Ok(Self {
            graphics_family_index,
            present_family_index,
        })
    }

    pub fn is_shared(&self) -> bool {
        self.graphics_family_index == self.present_family_index
    }

    /// The unique family indices which need a queue on the logical device.
    pub fn unique_families(&self) -> Vec<u32> {
        if self.is_shared() {
            vec![self.graphics_family_index]
        } else {
            vec![self.graphics_family_index, self.present_family_index]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family(flags: vk::QueueFlags) -> vk::QueueFamilyProperties {
        vk::QueueFamilyProperties {
            queue_flags: flags,
            queue_count: 1,
            ..Default::default()
        }
    }

    #[test]
    fn prefers_a_family_with_graphics_and_present() {
        let families = [
            family(vk::QueueFlags::GRAPHICS),
            family(vk::QueueFlags::COMPUTE),
            family(vk::QueueFlags::GRAPHICS | vk::QueueFlags::TRANSFER),
        ];
        let indices =
            QueueFamilyIndices::from_families(&families, |i| i != 0).unwrap();
        assert_eq!(indices.graphics_family_index, 2);
        assert_eq!(indices.present_family_index, 2);
        assert!(indices.is_shared());
        assert_eq!(indices.unique_families(), vec![2]);
    }

    #[test]
    fn falls_back_to_separate_families() {
        let families = [
            family(vk::QueueFlags::GRAPHICS),
            family(vk::QueueFlags::COMPUTE),
        ];
        let indices =
            QueueFamilyIndices::from_families(&families, |i| i == 1).unwrap();
        assert_eq!(indices.graphics_family_index, 0);
        assert_eq!(indices.present_family_index, 1);
        assert_eq!(indices.unique_families(), vec![0, 1]);
    }

    #[test]
    fn missing_graphics_is_an_error() {
        let families = [family(vk::QueueFlags::COMPUTE)];
        let result = QueueFamilyIndices::from_families(&families, |_| true);
        assert!(matches!(
            result,
            Err(QueueSelectionError::UnableToFindGraphicsQueue)
        ));
    }

    #[test]
    fn missing_present_is_an_error() {
        let families = [family(vk::QueueFlags::GRAPHICS)];
        let result = QueueFamilyIndices::from_families(&families, |_| false);
        assert!(matches!(
            result,
            Err(QueueSelectionError::UnableToFindPresentQueue)
        ));
    }
}
