use ::ash::vk;

use super::{RenderDevice, RenderDeviceError};

/// Depth formats in order of preference.
pub const DEPTH_FORMAT_CANDIDATES: [vk::Format; 5] = [
    vk::Format::D32_SFLOAT,
    vk::Format::D32_SFLOAT_S8_UINT,
    vk::Format::D24_UNORM_S8_UINT,
    vk::Format::D16_UNORM_S8_UINT,
    vk::Format::D16_UNORM,
];

/// Pick the first candidate format accepted by `is_supported`.
pub fn pick_depth_format<F>(
    candidates: &[vk::Format],
    is_supported: F,
) -> Option<vk::Format>
where
    F: Fn(vk::Format) -> bool,
{
    candidates.iter().copied().find(|&format| is_supported(format))
}

/// True for formats without a stencil component.
pub fn is_depth_only(format: vk::Format) -> bool {
    format == vk::Format::D16_UNORM || format == vk::Format::D32_SFLOAT
}

impl RenderDevice {
    /// Find the preferred depth format which supports optimal tiling as a
    /// depth stencil attachment.
    pub fn find_depth_format(&self) -> Result<vk::Format, RenderDeviceError> {
        pick_depth_format(&DEPTH_FORMAT_CANDIDATES, |format| {
            let properties = unsafe {
                self.instance.ash.get_physical_device_format_properties(
                    self.physical_device,
                    format,
                )
            };
            properties
                .optimal_tiling_features
                .contains(vk::FormatFeatureFlags::DEPTH_STENCIL_ATTACHMENT)
        })
        .ok_or(RenderDeviceError::NoSupportedDepthFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_first_supported_candidate_wins() {
        let format = pick_depth_format(&DEPTH_FORMAT_CANDIDATES, |format| {
            format == vk::Format::D24_UNORM_S8_UINT
                || format == vk::Format::D16_UNORM
        });
        assert_eq!(format, Some(vk::Format::D24_UNORM_S8_UINT));
    }

    #[test]
    fn no_supported_candidate_yields_none() {
        assert_eq!(
            pick_depth_format(&DEPTH_FORMAT_CANDIDATES, |_| false),
            None
        );
    }

    #[test]
    fn depth_only_formats() {
        assert!(is_depth_only(vk::Format::D32_SFLOAT));
        assert!(is_depth_only(vk::Format::D16_UNORM));
        assert!(!is_depth_only(vk::Format::D24_UNORM_S8_UINT));
        assert!(!is_depth_only(vk::Format::D32_SFLOAT_S8_UINT));
    }
}
