mod selection;
mod swapchain;

pub use self::selection::{
    choose_composite_alpha, choose_extent, choose_image_count,
    choose_present_mode, choose_pre_transform, choose_surface_format,
    classify_acquire, classify_present,
};

use ::{
    ash::{extensions::khr, vk},
    std::sync::Arc,
    thiserror::Error,
};

use crate::vulkan::{errors::WindowSurfaceError, RenderDevice};

#[derive(Debug, Error)]
pub enum SwapchainError {
    #[error("The surface does not report any supported formats")]
    NoSurfaceFormats,

    #[error("Unable to create the swapchain")]
    UnableToCreateSwapchain(#[source] vk::Result),

    #[error("Unable to get images from the swapchain")]
    UnableToGetSwapchainImages(#[source] vk::Result),

    #[error("Unable to create a view for swapchain image {}", .0)]
    UnableToCreateImageView(usize, #[source] vk::Result),

    #[error("Unable to acquire the next swapchain image")]
    UnableToAcquireImage(#[source] vk::Result),

    #[error("Unable to present swapchain image {}", .0)]
    UnableToPresentImage(usize, #[source] vk::Result),

    #[error(transparent)]
    UnexpectedWindowSurfaceError(#[from] WindowSurfaceError),
}

/// The outcome of acquiring a swapchain image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapchainStatus {
    /// The image at this index is ready to be rendered.
    Index(usize),

    /// The image can be rendered and presented, but the swapchain no longer
    /// matches the surface exactly and should be rebuilt afterwards.
    Suboptimal(usize),

    /// The swapchain is out of date and nothing can be presented until it is
    /// rebuilt.
    NeedsRebuild,
}

/// The swapchain and the views for each of its images.
pub struct Swapchain {
    pub loader: khr::Swapchain,
    pub khr: vk::SwapchainKHR,
    pub images: Vec<vk::Image>,
    pub image_views: Vec<vk::ImageView>,
    pub format: vk::Format,
    pub color_space: vk::ColorSpaceKHR,
    pub extent: vk::Extent2D,
    pub present_mode: vk::PresentModeKHR,
    pub vk_dev: Arc<RenderDevice>,
}
