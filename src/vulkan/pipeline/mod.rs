mod pipeline;
mod pipeline_layout;
mod shader_module;

pub use self::shader_module::decode_spirv;

use ::{ash::vk, std::sync::Arc, thiserror::Error};

use crate::vulkan::RenderDevice;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Unable to create the graphics pipeline")]
    UnableToCreateGraphicsPipeline(#[source] vk::Result),

    #[error("Vulkan did not return a pipeline")]
    NoPipelineReturned,

    #[error("Unable to create the pipeline layout")]
    UnableToCreatePipelineLayout(#[source] vk::Result),

    #[error("Unable to create the shader module")]
    UnableToCreateShaderModule(#[source] vk::Result),

    #[error("The shader bytes are not valid SPIR-V")]
    InvalidSpirv(#[source] std::io::Error),

    #[error("Unable to read shader file {}", .path)]
    UnableToReadShaderFile {
        path: String,
        source: std::io::Error,
    },
}

/// An owned pipeline which is destroyed when dropped.
pub struct Pipeline {
    pub raw: vk::Pipeline,
    pub bind_point: vk::PipelineBindPoint,
    pub vk_dev: Arc<RenderDevice>,
}

/// An owned Pipeline Layout which is destroyed automatically when it's dropped.
pub struct PipelineLayout {
    pub raw: vk::PipelineLayout,
    pub vk_dev: Arc<RenderDevice>,
}

/// An owned vk::ShaderModule which is destroyed automatically when it falls
/// out of scope.
pub struct ShaderModule {
    pub raw: vk::ShaderModule,
    pub vk_dev: Arc<RenderDevice>,
}
