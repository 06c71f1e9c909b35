use super::Allocation;

use ash::vk;

impl Allocation {
    /// An empty allocation with null pointers and resource references.
    pub fn null() -> Allocation {
        Self {
            memory: vk::DeviceMemory::null(),
            offset: 0,
            byte_size: 0,
            memory_type_index: 0,
        }
    }

    pub fn is_null(&self) -> bool {
        self.memory == vk::DeviceMemory::null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_allocation_is_empty() {
        let allocation = Allocation::null();
        assert!(allocation.is_null());
        assert_eq!(allocation.byte_size, 0);
    }
}
