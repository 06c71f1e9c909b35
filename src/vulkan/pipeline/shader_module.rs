use ::{
    ash::vk,
    std::{io::Cursor, os::raw::c_char, path::Path, sync::Arc},
};

use super::{PipelineError, ShaderModule};
use crate::vulkan::{errors::VulkanDebugError, RenderDevice, VulkanDebug};

const DEFAULT_ENTRY_POINT: &[u8] = b"main\0";

/// Decode raw SPIR-V bytes into properly aligned words.
///
/// Fails when the length is not a multiple of four or the SPIR-V magic
/// number is missing. Big-endian modules are byte swapped.
pub fn decode_spirv(bytes: &[u8]) -> Result<Vec<u32>, PipelineError> {
    ash::util::read_spv(&mut Cursor::new(bytes))
        .map_err(PipelineError::InvalidSpirv)
}

impl ShaderModule {
    /// Create a shader module from SPIR-V bytes.
    pub fn from_spirv_bytes(
        vk_dev: Arc<RenderDevice>,
        bytes: &[u8],
    ) -> Result<Self, PipelineError> {
        let words = decode_spirv(bytes)?;
        let create_info = vk::ShaderModuleCreateInfo {
            p_code: words.as_ptr(),
            code_size: words.len() * std::mem::size_of::<u32>(),
            ..Default::default()
        };
        let raw = unsafe {
            vk_dev
                .logical_device
                .create_shader_module(&create_info, None)
                .map_err(PipelineError::UnableToCreateShaderModule)?
        };
        Ok(Self { raw, vk_dev })
    }

    /// Read a compiled .spv file from disk and create a shader module.
    pub fn from_spirv_file(
        vk_dev: Arc<RenderDevice>,
        path: impl AsRef<Path>,
    ) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| {
            PipelineError::UnableToReadShaderFile {
                path: path.display().to_string(),
                source,
            }
        })?;
        log::debug!("Loaded shader {} ({} bytes)", path.display(), bytes.len());
        Self::from_spirv_bytes(vk_dev, &bytes)
    }

    /// Get the vulkan stage create info for this shader module.
    ///
    /// Note: assumes "main" entrypoint.
    pub fn stage_create_info(
        &self,
        stage: vk::ShaderStageFlags,
    ) -> vk::PipelineShaderStageCreateInfo {
        vk::PipelineShaderStageCreateInfo {
            stage,
            module: self.raw,
            p_name: DEFAULT_ENTRY_POINT.as_ptr() as *const c_char,
            ..Default::default()
        }
    }
}

impl VulkanDebug for ShaderModule {
    fn set_debug_name(
        &self,
        debug_name: impl Into<String>,
    ) -> Result<(), VulkanDebugError> {
        self.vk_dev.name_vulkan_object(
            debug_name,
            vk::ObjectType::SHADER_MODULE,
            self.raw,
        )?;
        Ok(())
    }
}

impl Drop for ShaderModule {
    /// # DANGER
    ///
    /// There is no internal synchronization for this type. Unexpected behavior
    /// can occur if this instance is still in-use by the GPU when it is
    /// dropped.
    fn drop(&mut self) {
        unsafe {
            self.vk_dev
                .logical_device
                .destroy_shader_module(self.raw, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAGIC: u32 = 0x0723_0203;

    #[test]
    fn decodes_little_endian_words() {
        let mut bytes = MAGIC.to_le_bytes().to_vec();
        bytes.extend_from_slice(&0x0001_0000u32.to_le_bytes());
        let words = decode_spirv(&bytes).unwrap();
        assert_eq!(words, vec![MAGIC, 0x0001_0000]);
    }

    #[test]
    fn misaligned_input_is_rejected() {
        let mut bytes = MAGIC.to_le_bytes().to_vec();
        bytes.push(0);
        assert!(matches!(
            decode_spirv(&bytes),
            Err(PipelineError::InvalidSpirv(_))
        ));
    }

    #[test]
    fn missing_magic_number_is_rejected() {
        let bytes = 0xdead_beefu32.to_le_bytes();
        assert!(decode_spirv(&bytes).is_err());
    }
}
