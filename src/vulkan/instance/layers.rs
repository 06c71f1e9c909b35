//! This module defines functions for checking supported Vulkan layers.

use ash::Entry;

use crate::vulkan::{ffi::name_to_string, instance::InstanceError};

/// List the names of every layer installed on this platform.
pub fn available_layers(entry: &Entry) -> Result<Vec<String>, InstanceError> {
    let available_layer_properties = entry
        .enumerate_instance_layer_properties()
        .map_err(InstanceError::UnableToListAvailableLayers)?;
    Ok(available_layer_properties
        .iter()
        .map(|layer| name_to_string(&layer.layer_name))
        .collect())
}

pub fn contains_layer(available: &[String], layer: &str) -> bool {
    available.iter().any(|name| name == layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_layer_matches_exact_names() {
        let available = vec!["VK_LAYER_KHRONOS_validation".to_owned()];
        assert!(contains_layer(&available, "VK_LAYER_KHRONOS_validation"));
        assert!(!contains_layer(&available, "VK_LAYER_KHRONOS"));
        assert!(!contains_layer(&[], "VK_LAYER_KHRONOS_validation"));
    }
}
