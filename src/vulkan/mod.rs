//! Thin, owned wrappers around the raw Vulkan objects used by the renderer.
//!
//! Each wrapper keeps an `Arc<RenderDevice>` so the device outlives every
//! resource created from it.

mod buffer;
mod command_buffer;
mod descriptor_set;
mod device_allocator;
mod ffi;
mod framebuffer;
mod image;
mod instance;
mod pipeline;
mod render_device;
mod render_pass;
mod swapchain;
pub mod sync;
mod vulkan_debug;
mod window_surface;

pub use self::{
    buffer::Buffer,
    command_buffer::{CommandBuffer, CommandPool, OneTimeSubmitCommandPool},
    descriptor_set::{
        pool_sizes, DescriptorPool, DescriptorSet, DescriptorSetLayout,
    },
    device_allocator::{Allocation, MemoryAllocator, PassthroughAllocator},
    framebuffer::Framebuffer,
    image::{Image, ImageView},
    instance::Instance,
    pipeline::{decode_spirv, Pipeline, PipelineLayout, ShaderModule},
    render_device::{
        find_memory_type_index, is_depth_only, pick_depth_format, GpuQueue,
        QueueFamilyIndices, RenderDevice, DEPTH_FORMAT_CANDIDATES,
    },
    render_pass::{color_depth_attachments, RenderPass},
    swapchain::{
        choose_composite_alpha, choose_extent, choose_image_count,
        choose_pre_transform, choose_present_mode, choose_surface_format,
        classify_acquire, classify_present, Swapchain, SwapchainStatus,
    },
    vulkan_debug::VulkanDebug,
    window_surface::WindowSurface,
};

pub mod errors {
    pub use super::{
        buffer::BufferError,
        command_buffer::CommandBufferError,
        descriptor_set::DescriptorSetError,
        device_allocator::DeviceAllocatorError,
        framebuffer::FramebufferError,
        image::ImageError,
        instance::InstanceError,
        pipeline::PipelineError,
        render_device::{
            PhysicalDeviceError, QueueSelectionError, RenderDeviceError,
        },
        render_pass::RenderPassError,
        swapchain::SwapchainError,
        sync::{FenceError, SemaphoreError},
        vulkan_debug::VulkanDebugError,
        window_surface::WindowSurfaceError,
    };

    use thiserror::Error;

    /// Any error produced by the Vulkan wrappers.
    #[derive(Debug, Error)]
    pub enum VulkanError {
        #[error(transparent)]
        InstanceError(#[from] InstanceError),

        #[error(transparent)]
        WindowSurfaceError(#[from] WindowSurfaceError),

        #[error(transparent)]
        RenderDeviceError(#[from] RenderDeviceError),

        #[error(transparent)]
        SwapchainError(#[from] SwapchainError),

        #[error(transparent)]
        FenceError(#[from] FenceError),

        #[error(transparent)]
        SemaphoreError(#[from] SemaphoreError),

        #[error(transparent)]
        CommandBufferError(#[from] CommandBufferError),

        #[error(transparent)]
        DeviceAllocatorError(#[from] DeviceAllocatorError),

        #[error(transparent)]
        BufferError(#[from] BufferError),

        #[error(transparent)]
        ImageError(#[from] ImageError),

        #[error(transparent)]
        RenderPassError(#[from] RenderPassError),

        #[error(transparent)]
        FramebufferError(#[from] FramebufferError),

        #[error(transparent)]
        DescriptorSetError(#[from] DescriptorSetError),

        #[error(transparent)]
        PipelineError(#[from] PipelineError),

        #[error(transparent)]
        VulkanDebugError(#[from] VulkanDebugError),
    }
}
