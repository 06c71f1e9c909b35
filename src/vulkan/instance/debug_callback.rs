use ::{
    ash::{extensions::ext::DebugUtils, vk, Entry},
    std::{borrow::Cow, ffi::CStr, os::raw::c_void},
};

use crate::vulkan::instance::InstanceError;

/// Install a debug messenger which forwards validation messages to the log.
pub fn create_debug_logger(
    entry: &Entry,
    instance: &ash::Instance,
) -> Result<(DebugUtils, vk::DebugUtilsMessengerEXT), InstanceError> {
    let create_info = vk::DebugUtilsMessengerCreateInfoEXT {
        message_severity: vk::DebugUtilsMessageSeverityFlagsEXT::WARNING
            | vk::DebugUtilsMessageSeverityFlagsEXT::ERROR,
        message_type: vk::DebugUtilsMessageTypeFlagsEXT::GENERAL
            | vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION
            | vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE,
        pfn_user_callback: Some(debug_callback),
        ..Default::default()
    };
    let debug_utils = DebugUtils::new(entry, instance);
    let debug_messenger = unsafe {
        debug_utils
            .create_debug_utils_messenger(&create_info, None)
            .map_err(InstanceError::DebugMessengerCreateFailed)?
    };
    Ok((debug_utils, debug_messenger))
}

/// The log level used for a validation message of the given severity.
pub fn level_for_severity(
    severity: vk::DebugUtilsMessageSeverityFlagsEXT,
) -> log::Level {
    if severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::ERROR) {
        log::Level::Error
    } else if severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::WARNING)
    {
        log::Level::Warn
    } else if severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::INFO) {
        log::Level::Info
    } else {
        log::Level::Trace
    }
}

pub fn format_message(message_id_name: &str, message: &str) -> String {
    format!("[{}] : {}", message_id_name, message)
}

unsafe fn cstr_or_empty<'a>(ptr: *const std::os::raw::c_char) -> Cow<'a, str> {
    if ptr.is_null() {
        Cow::Borrowed("")
    } else {
        CStr::from_ptr(ptr).to_string_lossy()
    }
}

unsafe extern "system" fn debug_callback(
    message_severity: vk::DebugUtilsMessageSeverityFlagsEXT,
    _message_type: vk::DebugUtilsMessageTypeFlagsEXT,
    p_callback_data: *const vk::DebugUtilsMessengerCallbackDataEXT,
    _p_user_data: *mut c_void,
) -> vk::Bool32 {
    if p_callback_data.is_null() {
        return vk::FALSE;
    }
    let callback_data = &*p_callback_data;
    let id_name = cstr_or_empty(callback_data.p_message_id_name);
    let message = cstr_or_empty(callback_data.p_message);
    log::log!(
        level_for_severity(message_severity),
        "{}",
        format_message(&id_name, &message)
    );
    vk::FALSE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_map_to_log_levels() {
        use vk::DebugUtilsMessageSeverityFlagsEXT as Severity;
        assert_eq!(level_for_severity(Severity::ERROR), log::Level::Error);
        assert_eq!(level_for_severity(Severity::WARNING), log::Level::Warn);
        assert_eq!(level_for_severity(Severity::INFO), log::Level::Info);
        assert_eq!(level_for_severity(Severity::VERBOSE), log::Level::Trace);
    }

    #[test]
    fn message_includes_the_id_name() {
        assert_eq!(
            format_message("VUID-vkCmdDraw", "bad draw"),
            "[VUID-vkCmdDraw] : bad draw"
        );
    }
}
