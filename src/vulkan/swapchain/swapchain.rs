use ::{
    ash::{extensions::khr, vk},
    std::sync::Arc,
};

use super::{selection, Swapchain, SwapchainError, SwapchainStatus};
use crate::{logging::PrettyList, vulkan::RenderDevice};

impl Swapchain {
    /// Create a swapchain for the render device's window surface.
    ///
    /// # Params
    ///
    /// * `framebuffer_size` - the window's framebuffer size in pixels, used
    ///   when the surface lets the application pick the extent.
    /// * `preferred_present_mode` - used when supported, FIFO otherwise.
    /// * `previous` - the swapchain being replaced, if any. It is passed as
    ///   the old swapchain so in-flight presentation can be reused.
    pub fn new(
        vk_dev: Arc<RenderDevice>,
        framebuffer_size: (u32, u32),
        preferred_present_mode: vk::PresentModeKHR,
        previous: Option<&Swapchain>,
    ) -> Result<Self, SwapchainError> {
        let pdev = &vk_dev.physical_device;
        let (formats, modes, capabilities) = unsafe {
            (
                vk_dev.window_surface.supported_formats(pdev)?,
                vk_dev.window_surface.supported_presentation_modes(pdev)?,
                vk_dev.window_surface.surface_capabilities(pdev)?,
            )
        };

        log::debug!("Available formats: {:#?}", PrettyList(&formats));
        log::debug!("Available present modes: {:?}", PrettyList(&modes));

        let format = selection::choose_surface_format(&formats)?;
        let present_mode =
            selection::choose_present_mode(&modes, preferred_present_mode);
        let extent = selection::choose_extent(&capabilities, framebuffer_size);
        let image_count = selection::choose_image_count(&capabilities);

        log::debug!(
            "Swapchain: {:?} {:?} {:?} {}x{} with {} images",
            format.format,
            format.color_space,
            present_mode,
            extent.width,
            extent.height,
            image_count
        );

        let indices = [
            vk_dev.graphics_queue.family_id,
            vk_dev.present_queue.family_id,
        ];
        let mut create_info = vk::SwapchainCreateInfoKHR {
            surface: vk_dev.window_surface.khr,

            // image settings
            image_format: format.format,
            image_color_space: format.color_space,
            image_extent: extent,
            min_image_count: image_count,
            image_array_layers: 1,
            image_usage: vk::ImageUsageFlags::COLOR_ATTACHMENT,

            // window system presentation settings
            present_mode,
            composite_alpha: selection::choose_composite_alpha(&capabilities),
            pre_transform: selection::choose_pre_transform(&capabilities),
            old_swapchain: previous
                .map(|swapchain| swapchain.khr)
                .unwrap_or_else(vk::SwapchainKHR::null),
            clipped: vk::TRUE,
            image_sharing_mode: vk::SharingMode::EXCLUSIVE,
            ..Default::default()
        };
        if !vk_dev.queues_are_shared() {
            create_info.image_sharing_mode = vk::SharingMode::CONCURRENT;
            create_info.p_queue_family_indices = indices.as_ptr();
            create_info.queue_family_index_count = indices.len() as u32;
        }

        let loader =
            khr::Swapchain::new(&vk_dev.instance.ash, &vk_dev.logical_device);
        let khr = unsafe {
            loader
                .create_swapchain(&create_info, None)
                .map_err(SwapchainError::UnableToCreateSwapchain)?
        };

        let mut swapchain = Self {
            loader,
            khr,
            images: vec![],
            image_views: vec![],
            format: format.format,
            color_space: format.color_space,
            extent,
            present_mode,
            vk_dev,
        };
        swapchain.images = unsafe {
            swapchain
                .loader
                .get_swapchain_images(swapchain.khr)
                .map_err(SwapchainError::UnableToGetSwapchainImages)?
        };
        swapchain.create_image_views()?;
        Ok(swapchain)
    }

    /// The number of images owned by the swapchain.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Width / height of the swapchain images.
    pub fn aspect_ratio(&self) -> f32 {
        self.extent.width as f32 / self.extent.height.max(1) as f32
    }

    /// Acquire the next swapchain image.
    ///
    /// # Params
    ///
    /// * `semaphore` - signalled when the image is ready to be rendered.
    pub fn acquire_next_image(
        &self,
        semaphore: vk::Semaphore,
    ) -> Result<SwapchainStatus, SwapchainError> {
        let result = unsafe {
            self.loader.acquire_next_image(
                self.khr,
                u64::MAX,
                semaphore,
                vk::Fence::null(),
            )
        };
        selection::classify_acquire(result)
            .map_err(SwapchainError::UnableToAcquireImage)
    }

    /// Present the image at `index` once `wait_semaphore` is signalled.
    ///
    /// # Returns
    ///
    /// True when the swapchain is suboptimal or out of date and needs to be
    /// rebuilt.
    pub fn present(
        &self,
        queue: vk::Queue,
        index: usize,
        wait_semaphore: vk::Semaphore,
    ) -> Result<bool, SwapchainError> {
        let index_u32 = index as u32;
        let present_info = vk::PresentInfoKHR {
            swapchain_count: 1,
            p_swapchains: &self.khr,
            p_image_indices: &index_u32,
            wait_semaphore_count: 1,
            p_wait_semaphores: &wait_semaphore,
            ..Default::default()
        };
        let result = unsafe { self.loader.queue_present(queue, &present_info) };
        selection::classify_present(result)
            .map_err(|err| SwapchainError::UnableToPresentImage(index, err))
    }

    fn create_image_views(&mut self) -> Result<(), SwapchainError> {
        for (i, &image) in self.images.iter().enumerate() {
            let create_info = vk::ImageViewCreateInfo {
                image,
                view_type: vk::ImageViewType::TYPE_2D,
                format: self.format,
                components: vk::ComponentMapping {
                    r: vk::ComponentSwizzle::IDENTITY,
                    g: vk::ComponentSwizzle::IDENTITY,
                    b: vk::ComponentSwizzle::IDENTITY,
                    a: vk::ComponentSwizzle::IDENTITY,
                },
                subresource_range: vk::ImageSubresourceRange {
                    aspect_mask: vk::ImageAspectFlags::COLOR,
                    base_mip_level: 0,
                    level_count: 1,
                    base_array_layer: 0,
                    layer_count: 1,
                },
                ..Default::default()
            };
            let view = unsafe {
                self.vk_dev
                    .logical_device
                    .create_image_view(&create_info, None)
                    .map_err(|err| {
                        SwapchainError::UnableToCreateImageView(i, err)
                    })?
            };
            self.image_views.push(view);
        }
        Ok(())
    }
}

impl Drop for Swapchain {
    /// # DANGER
    ///
    /// There is no internal synchronization for this type. Unexpected behavior
    /// can occur if this instance is still in-use by the GPU when it is
    /// dropped.
    fn drop(&mut self) {
        unsafe {
            for view in self.image_views.drain(..) {
                self.vk_dev.logical_device.destroy_image_view(view, None);
            }
            self.loader.destroy_swapchain(self.khr, None);
        }
    }
}
