use ::{ash::vk, std::sync::Arc};

use super::{
    CommandBuffer, CommandBufferError, CommandPool, OneTimeSubmitCommandPool,
};
use crate::vulkan::{
    errors::VulkanDebugError, sync::Fence, GpuQueue, RenderDevice, VulkanDebug,
};

/// How long to wait for a synchronous submission before giving up.
const SUBMIT_TIMEOUT_NS: u64 = 100_000_000_000;

impl OneTimeSubmitCommandPool {
    /// Create a new pool for submitting commands to the provided GPU queue.
    pub fn new(
        vk_dev: Arc<RenderDevice>,
        queue: &GpuQueue,
    ) -> Result<Self, CommandBufferError> {
        let pool = Arc::new(CommandPool::new(
            vk_dev.clone(),
            queue,
            vk::CommandPoolCreateFlags::TRANSIENT,
        )?);
        let cmd = CommandBuffer::new_primary(pool.clone())?;
        let fence = Fence::new(vk_dev.clone())?;
        Ok(Self {
            pool,
            cmd,
            fence,
            queue: *queue,
            vk_dev,
        })
    }

    /// Record commands with `func` and submit them to the configured queue.
    /// This function blocks until all commands complete.
    pub fn submit_sync_commands<Func, T>(
        &self,
        func: Func,
    ) -> Result<T, CommandBufferError>
    where
        Func: FnOnce(&Arc<RenderDevice>, vk::CommandBuffer) -> T,
    {
        self.pool.reset()?;
        let device = &self.vk_dev.logical_device;

        let begin_info = vk::CommandBufferBeginInfo {
            flags: vk::CommandBufferUsageFlags::ONE_TIME_SUBMIT,
            ..Default::default()
        };
        unsafe {
            device
                .begin_command_buffer(self.cmd.raw, &begin_info)
                .map_err(CommandBufferError::UnableToBeginCommandBuffer)?;
        }

        let result: T = func(&self.vk_dev, self.cmd.raw);

        unsafe {
            device
                .end_command_buffer(self.cmd.raw)
                .map_err(CommandBufferError::UnableToEndCommandBuffer)?;
        }

        self.fence.reset()?;
        let submit_info = vk::SubmitInfo {
            command_buffer_count: 1,
            p_command_buffers: &self.cmd.raw,
            ..Default::default()
        };
        unsafe {
            device
                .queue_submit(self.queue.queue, &[submit_info], self.fence.raw)
                .map_err(CommandBufferError::UnableToSubmitCommandBuffer)?;
        }
        self.fence.wait_with_timeout(SUBMIT_TIMEOUT_NS)?;

        Ok(result)
    }
}

impl VulkanDebug for OneTimeSubmitCommandPool {
    fn set_debug_name(
        &self,
        debug_name: impl Into<String>,
    ) -> Result<(), VulkanDebugError> {
        let name = debug_name.into();
        self.pool.set_debug_name(format!("{} - CommandPool", name))?;
        self.cmd.set_debug_name(format!("{} - CommandBuffer", name))?;
        self.fence.set_debug_name(format!("{} - Fence", name))?;
        Ok(())
    }
}
