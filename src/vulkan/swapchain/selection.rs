//! Pure functions for choosing the swapchain's properties from what the
//! surface supports.

use ::ash::{prelude::VkResult, vk};

use super::{SwapchainError, SwapchainStatus};

const PREFERRED_FORMATS: [vk::Format; 3] = [
    vk::Format::R8G8B8A8_UNORM,
    vk::Format::B8G8R8A8_UNORM,
    vk::Format::A8B8G8R8_UNORM_PACK32,
];

/// Choose the surface format for the swapchain.
pub fn choose_surface_format(
    formats: &[vk::SurfaceFormatKHR],
) -> Result<vk::SurfaceFormatKHR, SwapchainError> {
    let first = *formats.first().ok_or(SwapchainError::NoSurfaceFormats)?;

    // The surface has no preference at all.
    if formats.len() == 1 && first.format == vk::Format::UNDEFINED {
        return Ok(vk::SurfaceFormatKHR {
            format: vk::Format::B8G8R8A8_UNORM,
            color_space: first.color_space,
        });
    }

    // The surface lists formats in its own order of preference.
    let preferred = formats
        .iter()
        .copied()
        .find(|format| PREFERRED_FORMATS.contains(&format.format));
    Ok(preferred.unwrap_or(first))
}

/// Choose the swapchain extent. Surfaces which report u32::MAX for the
/// current width let the application pick, so the framebuffer size is
/// clamped to the supported range.
pub fn choose_extent(
    capabilities: &vk::SurfaceCapabilitiesKHR,
    framebuffer_size: (u32, u32),
) -> vk::Extent2D {
    if capabilities.current_extent.width != u32::MAX {
        return capabilities.current_extent;
    }
    let (width, height) = framebuffer_size;
    let min = capabilities.min_image_extent;
    let max = capabilities.max_image_extent;
    vk::Extent2D {
        width: width.clamp(min.width, max.width.max(min.width)),
        height: height.clamp(min.height, max.height.max(min.height)),
    }
}

/// Use the preferred present mode when it's available. FIFO is always
/// supported.
pub fn choose_present_mode(
    modes: &[vk::PresentModeKHR],
    preferred: vk::PresentModeKHR,
) -> vk::PresentModeKHR {
    if modes.contains(&preferred) {
        preferred
    } else {
        vk::PresentModeKHR::FIFO
    }
}

/// One more image than the minimum, bounded by the maximum when the surface
/// has one.
pub fn choose_image_count(capabilities: &vk::SurfaceCapabilitiesKHR) -> u32 {
    let proposed = capabilities.min_image_count + 1;
    if capabilities.max_image_count > 0 {
        proposed.min(capabilities.max_image_count)
    } else {
        proposed
    }
}

pub fn choose_pre_transform(
    capabilities: &vk::SurfaceCapabilitiesKHR,
) -> vk::SurfaceTransformFlagsKHR {
    if capabilities
        .supported_transforms
        .contains(vk::SurfaceTransformFlagsKHR::IDENTITY)
    {
        vk::SurfaceTransformFlagsKHR::IDENTITY
    } else {
        capabilities.current_transform
    }
}

pub fn choose_composite_alpha(
    capabilities: &vk::SurfaceCapabilitiesKHR,
) -> vk::CompositeAlphaFlagsKHR {
    [
        vk::CompositeAlphaFlagsKHR::OPAQUE,
        vk::CompositeAlphaFlagsKHR::INHERIT,
        vk::CompositeAlphaFlagsKHR::PRE_MULTIPLIED,
        vk::CompositeAlphaFlagsKHR::POST_MULTIPLIED,
    ]
    .into_iter()
    .find(|&flag| capabilities.supported_composite_alpha.contains(flag))
    .unwrap_or(vk::CompositeAlphaFlagsKHR::OPAQUE)
}

/// Interpret the result of vkAcquireNextImageKHR.
pub fn classify_acquire(
    result: VkResult<(u32, bool)>,
) -> Result<SwapchainStatus, vk::Result> {
    match result {
        Ok((index, false)) => Ok(SwapchainStatus::Index(index as usize)),
        Ok((index, true)) => Ok(SwapchainStatus::Suboptimal(index as usize)),
        Err(vk::Result::ERROR_OUT_OF_DATE_KHR) => {
            Ok(SwapchainStatus::NeedsRebuild)
        }
        Err(err) => Err(err),
    }
}

/// Interpret the result of vkQueuePresentKHR. Returns true when the
/// swapchain needs to be rebuilt.
pub fn classify_present(result: VkResult<bool>) -> Result<bool, vk::Result> {
    match result {
        Ok(suboptimal) => Ok(suboptimal),
        Err(vk::Result::ERROR_OUT_OF_DATE_KHR) => Ok(true),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(format: vk::Format) -> vk::SurfaceFormatKHR {
        vk::SurfaceFormatKHR {
            format,
            color_space: vk::ColorSpaceKHR::SRGB_NONLINEAR,
        }
    }

    fn capabilities() -> vk::SurfaceCapabilitiesKHR {
        vk::SurfaceCapabilitiesKHR {
            min_image_count: 2,
            max_image_count: 8,
            current_extent: vk::Extent2D {
                width: 640,
                height: 480,
            },
            min_image_extent: vk::Extent2D {
                width: 1,
                height: 1,
            },
            max_image_extent: vk::Extent2D {
                width: 4096,
                height: 4096,
            },
            supported_transforms: vk::SurfaceTransformFlagsKHR::IDENTITY,
            current_transform: vk::SurfaceTransformFlagsKHR::IDENTITY,
            supported_composite_alpha: vk::CompositeAlphaFlagsKHR::OPAQUE,
            ..Default::default()
        }
    }

    #[test]
    fn empty_format_list_is_an_error() {
        assert!(matches!(
            choose_surface_format(&[]),
            Err(SwapchainError::NoSurfaceFormats)
        ));
    }

    #[test]
    fn undefined_format_means_bgra() {
        let chosen =
            choose_surface_format(&[format(vk::Format::UNDEFINED)]).unwrap();
        assert_eq!(chosen.format, vk::Format::B8G8R8A8_UNORM);
    }

    #[test]
    fn the_first_supported_format_in_surface_order_is_chosen() {
        let chosen = choose_surface_format(&[
            format(vk::Format::B8G8R8A8_SRGB),
            format(vk::Format::B8G8R8A8_UNORM),
            format(vk::Format::R8G8B8A8_UNORM),
        ])
        .unwrap();
        assert_eq!(chosen.format, vk::Format::B8G8R8A8_UNORM);
    }

    #[test]
    fn any_linear_rgba_format_is_accepted() {
        let chosen = choose_surface_format(&[
            format(vk::Format::R16G16B16A16_SFLOAT),
            format(vk::Format::A8B8G8R8_UNORM_PACK32),
            format(vk::Format::R8G8B8A8_UNORM),
        ])
        .unwrap();
        assert_eq!(chosen.format, vk::Format::A8B8G8R8_UNORM_PACK32);
    }

    #[test]
    fn unknown_formats_fall_back_to_the_first() {
        let chosen = choose_surface_format(&[
            format(vk::Format::R16G16B16A16_SFLOAT),
            format(vk::Format::B8G8R8A8_SRGB),
        ])
        .unwrap();
        assert_eq!(chosen.format, vk::Format::R16G16B16A16_SFLOAT);
    }

    #[test]
    fn current_extent_is_used_when_defined() {
        let extent = choose_extent(&capabilities(), (100, 100));
        assert_eq!((extent.width, extent.height), (640, 480));
    }

    #[test]
    fn framebuffer_size_is_clamped_when_extent_is_undefined() {
        let mut caps = capabilities();
        caps.current_extent.width = u32::MAX;
        caps.current_extent.height = u32::MAX;
        let extent = choose_extent(&caps, (8000, 300));
        assert_eq!((extent.width, extent.height), (4096, 300));
        let extent = choose_extent(&caps, (0, 0));
        assert_eq!((extent.width, extent.height), (1, 1));
    }

    #[test]
    fn present_mode_falls_back_to_fifo() {
        let modes = [vk::PresentModeKHR::FIFO, vk::PresentModeKHR::MAILBOX];
        assert_eq!(
            choose_present_mode(&modes, vk::PresentModeKHR::MAILBOX),
            vk::PresentModeKHR::MAILBOX
        );
        assert_eq!(
            choose_present_mode(&modes, vk::PresentModeKHR::IMMEDIATE),
            vk::PresentModeKHR::FIFO
        );
    }

    #[test]
    fn image_count_is_min_plus_one_bounded_by_max() {
        let mut caps = capabilities();
        assert_eq!(choose_image_count(&caps), 3);
        caps.max_image_count = 2;
        assert_eq!(choose_image_count(&caps), 2);
        caps.max_image_count = 0;
        caps.min_image_count = 5;
        assert_eq!(choose_image_count(&caps), 6);
    }

    #[test]
    fn pre_transform_prefers_identity() {
        let mut caps = capabilities();
        assert_eq!(
            choose_pre_transform(&caps),
            vk::SurfaceTransformFlagsKHR::IDENTITY
        );
        caps.supported_transforms = vk::SurfaceTransformFlagsKHR::ROTATE_90;
        caps.current_transform = vk::SurfaceTransformFlagsKHR::ROTATE_90;
        assert_eq!(
            choose_pre_transform(&caps),
            vk::SurfaceTransformFlagsKHR::ROTATE_90
        );
    }

    #[test]
    fn composite_alpha_uses_the_first_supported_mode() {
        let mut caps = capabilities();
        caps.supported_composite_alpha = vk::CompositeAlphaFlagsKHR::INHERIT
            | vk::CompositeAlphaFlagsKHR::POST_MULTIPLIED;
        assert_eq!(
            choose_composite_alpha(&caps),
            vk::CompositeAlphaFlagsKHR::INHERIT
        );
    }

    #[test]
    fn acquire_results_are_classified() {
        assert_eq!(
            classify_acquire(Ok((2, false))),
            Ok(SwapchainStatus::Index(2))
        );
        assert_eq!(
            classify_acquire(Ok((1, true))),
            Ok(SwapchainStatus::Suboptimal(1))
        );
        assert_eq!(
            classify_acquire(Err(vk::Result::ERROR_OUT_OF_DATE_KHR)),
            Ok(SwapchainStatus::NeedsRebuild)
        );
        assert_eq!(
            classify_acquire(Err(vk::Result::ERROR_DEVICE_LOST)),
            Err(vk::Result::ERROR_DEVICE_LOST)
        );
    }

    #[test]
    fn present_results_are_classified() {
        assert_eq!(classify_present(Ok(false)), Ok(false));
        assert_eq!(classify_present(Ok(true)), Ok(true));
        assert_eq!(
            classify_present(Err(vk::Result::ERROR_OUT_OF_DATE_KHR)),
            Ok(true)
        );
        assert_eq!(
            classify_present(Err(vk::Result::ERROR_SURFACE_LOST_KHR)),
            Err(vk::Result::ERROR_SURFACE_LOST_KHR)
        );
    }
}
