mod image;
mod image_view;

use ::{ash::vk, std::sync::Arc, thiserror::Error};

use crate::vulkan::{
    errors::DeviceAllocatorError, Allocation, MemoryAllocator, RenderDevice,
};

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Unable to create a new image")]
    UnableToCreateImage(#[source] vk::Result),

    #[error("Unable to allocate memory for a new image")]
    UnableToAllocateImageMemory(#[from] DeviceAllocatorError),

    #[error("Unable to bind memory to the new image")]
    UnableToBindImageMemory(#[source] vk::Result),

    #[error("Unable to create an image view")]
    UnableToCreateView(#[source] vk::Result),
}

/// An owned Vulkan image handle and its memory. Both are released when the
/// image is dropped.
pub struct Image {
    /// The Vulkan image handle.
    pub raw: vk::Image,

    pub format: vk::Format,
    pub extent: vk::Extent3D,

    /// A region of allocated memory which is bound to the image.
    pub allocation: Allocation,

    /// The memory allocater used to create the image.
    pub vk_alloc: Arc<dyn MemoryAllocator>,

    /// The render device used to create the image.
    pub vk_dev: Arc<RenderDevice>,
}

/// An owned Vulkan image view which keeps its image alive.
pub struct ImageView {
    /// The raw image view handle
    pub raw: vk::ImageView,

    /// The image associated with this view.
    pub image: Arc<Image>,

    /// The render device used to create the image view.
    pub vk_dev: Arc<RenderDevice>,
}
