use ::ash::vk;

use super::{RenderDevice, RenderDeviceError};

/// Find the first memory type which is allowed by `type_bits` and has every
/// requested property flag.
pub fn find_memory_type_index(
    memory_properties: &vk::PhysicalDeviceMemoryProperties,
    type_bits: u32,
    property_flags: vk::MemoryPropertyFlags,
) -> Option<u32> {
    let count = memory_properties.memory_type_count as usize;
    memory_properties.memory_types[..count]
        .iter()
        .enumerate()
        .find(|(index, memory_type)| {
            type_bits & (1 << index) != 0
                && memory_type.property_flags.contains(property_flags)
        })
        .map(|(index, _)| index as u32)
}

impl RenderDevice {
    /// Select the memory type index for an allocation.
    pub fn memory_type_index(
        &self,
        type_bits: u32,
        property_flags: vk::MemoryPropertyFlags,
    ) -> Result<u32, RenderDeviceError> {
        let memory_properties = unsafe {
            self.instance
                .ash
                .get_physical_device_memory_properties(self.physical_device)
        };
        find_memory_type_index(&memory_properties, type_bits, property_flags)
            .ok_or(RenderDeviceError::NoSuitableMemoryType(
                type_bits,
                property_flags,
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn properties(
        flags: &[vk::MemoryPropertyFlags],
    ) -> vk::PhysicalDeviceMemoryProperties {
        let mut props = vk::PhysicalDeviceMemoryProperties {
            memory_type_count: flags.len() as u32,
            ..Default::default()
        };
        for (i, &property_flags) in flags.iter().enumerate() {
            props.memory_types[i] = vk::MemoryType {
                property_flags,
                heap_index: 0,
            };
        }
        props
    }

    #[test]
    fn picks_the_first_type_with_all_flags() {
        let props = properties(&[
            vk::MemoryPropertyFlags::DEVICE_LOCAL,
            vk::MemoryPropertyFlags::HOST_VISIBLE,
            vk::MemoryPropertyFlags::HOST_VISIBLE
                | vk::MemoryPropertyFlags::HOST_COHERENT,
        ]);
        let index = find_memory_type_index(
            &props,
            0b111,
            vk::MemoryPropertyFlags::HOST_VISIBLE
                | vk::MemoryPropertyFlags::HOST_COHERENT,
        );
        assert_eq!(index, Some(2));
    }

    #[test]
    fn respects_the_type_bits() {
        let props = properties(&[
            vk::MemoryPropertyFlags::DEVICE_LOCAL,
            vk::MemoryPropertyFlags::DEVICE_LOCAL,
        ]);
        let index = find_memory_type_index(
            &props,
            0b10,
            vk::MemoryPropertyFlags::DEVICE_LOCAL,
        );
        assert_eq!(index, Some(1));
    }

    #[test]
    fn types_past_the_count_are_ignored() {
        let props = properties(&[vk::MemoryPropertyFlags::DEVICE_LOCAL]);
        let index = find_memory_type_index(
            &props,
            u32::MAX,
            vk::MemoryPropertyFlags::HOST_VISIBLE,
        );
        assert_eq!(index, None);
    }
}
