//! This module provides functions for verifying the available Vulkan
//! extensions.

use ash::Entry;

use crate::{
    logging::PrettyList,
    vulkan::{ffi::name_to_string, instance::InstanceError},
};

/// Check that each of the provided extensions is available on the current
/// platform.
pub fn check_extensions(
    entry: &Entry,
    required_extensions: &[String],
) -> Result<(), InstanceError> {
    let available_extensions = entry
        .enumerate_instance_extension_properties(None)
        .map_err(InstanceError::UnableToListAvailableExtensions)?;
    let available_names: Vec<String> = available_extensions
        .iter()
        .map(|ext| name_to_string(&ext.extension_name))
        .collect();

    log::debug!("Available extensions: {}", PrettyList(&available_names));

    let missing = missing_names(required_extensions, &available_names);
    if !missing.is_empty() {
        Err(InstanceError::RequiredExtensionsNotFound(missing))
    } else {
        Ok(())
    }
}

/// Every required name which does not appear in the available list.
pub fn missing_names(required: &[String], available: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|name| !available.contains(name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_names_reports_only_unavailable_entries() {
        let available = names(&["VK_KHR_surface", "VK_KHR_xcb_surface"]);
        let required = names(&["VK_KHR_surface", "VK_EXT_debug_utils"]);
        assert_eq!(
            missing_names(&required, &available),
            names(&["VK_EXT_debug_utils"])
        );
    }

    #[test]
    fn nothing_is_missing_when_all_are_available() {
        let available = names(&["a", "b", "c"]);
        assert!(missing_names(&names(&["c", "a"]), &available).is_empty());
        assert!(missing_names(&[], &available).is_empty());
    }
}
