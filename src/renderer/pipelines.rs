use ::{
    ash::vk,
    std::{path::Path, sync::Arc},
};

use crate::{
    scene::Vertex,
    vulkan::{
        errors::VulkanError, Pipeline, PipelineLayout, RenderDevice,
        RenderPass, ShaderModule, VulkanDebug,
    },
};

const VERTEX_SHADER_FILE: &str = "scene.vert.spv";
const FRAGMENT_SHADER_FILE: &str = "scene.frag.spv";

/// Fixed function state which differs between the scene pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineVariant {
    pub topology: vk::PrimitiveTopology,
    pub name: &'static str,
}

pub const LINE_VARIANT: PipelineVariant = PipelineVariant {
    topology: vk::PrimitiveTopology::LINE_LIST,
    name: "Scene Line Pipeline",
};

pub const TRIANGLE_VARIANT: PipelineVariant = PipelineVariant {
    topology: vk::PrimitiveTopology::TRIANGLE_LIST,
    name: "Scene Triangle Pipeline",
};

pub fn rasterization_state() -> vk::PipelineRasterizationStateCreateInfo {
    vk::PipelineRasterizationStateCreateInfo {
        depth_clamp_enable: vk::FALSE,
        rasterizer_discard_enable: vk::FALSE,
        polygon_mode: vk::PolygonMode::FILL,
        line_width: 1.0,
        cull_mode: vk::CullModeFlags::NONE,
        front_face: vk::FrontFace::CLOCKWISE,
        depth_bias_enable: vk::FALSE,
        ..Default::default()
    }
}

pub fn depth_stencil_state() -> vk::PipelineDepthStencilStateCreateInfo {
    vk::PipelineDepthStencilStateCreateInfo {
        depth_test_enable: vk::TRUE,
        depth_write_enable: vk::TRUE,
        depth_compare_op: vk::CompareOp::LESS,
        depth_bounds_test_enable: vk::FALSE,
        stencil_test_enable: vk::FALSE,
        min_depth_bounds: 0.0,
        max_depth_bounds: 1.0,
        ..Default::default()
    }
}

/// Load the scene shaders and build the line and triangle pipelines, in that
/// order.
pub fn create_scene_pipelines(
    vk_dev: Arc<RenderDevice>,
    shader_dir: &Path,
    render_pass: &RenderPass,
    layout: &PipelineLayout,
) -> Result<(Pipeline, Pipeline), VulkanError> {
    let vertex_shader = ShaderModule::from_spirv_file(
        vk_dev.clone(),
        shader_dir.join(VERTEX_SHADER_FILE),
    )?;
    vertex_shader.set_debug_name("Scene Vertex Shader")?;
    let fragment_shader = ShaderModule::from_spirv_file(
        vk_dev.clone(),
        shader_dir.join(FRAGMENT_SHADER_FILE),
    )?;
    fragment_shader.set_debug_name("Scene Fragment Shader")?;

    let stages = [
        vertex_shader.stage_create_info(vk::ShaderStageFlags::VERTEX),
        fragment_shader.stage_create_info(vk::ShaderStageFlags::FRAGMENT),
    ];

    let lines = create_pipeline(
        vk_dev.clone(),
        &stages,
        render_pass,
        layout,
        LINE_VARIANT,
    )?;
    let triangles = create_pipeline(
        vk_dev,
        &stages,
        render_pass,
        layout,
        TRIANGLE_VARIANT,
    )?;
    Ok((lines, triangles))
}

fn create_pipeline(
    vk_dev: Arc<RenderDevice>,
    stages: &[vk::PipelineShaderStageCreateInfo],
    render_pass: &RenderPass,
    layout: &PipelineLayout,
    variant: PipelineVariant,
) -> Result<Pipeline, VulkanError> {
    let vertex_input_binding_descriptions = Vertex::binding_descriptions();
    let vertex_input_attribute_descriptions = Vertex::attribute_descriptions();
    let vertex_input_state = vk::PipelineVertexInputStateCreateInfo {
        p_vertex_attribute_descriptions: vertex_input_attribute_descriptions
            .as_ptr(),
        vertex_attribute_description_count: vertex_input_attribute_descriptions
            .len() as u32,
        p_vertex_binding_descriptions: vertex_input_binding_descriptions
            .as_ptr(),
        vertex_binding_description_count: vertex_input_binding_descriptions
            .len() as u32,
        ..Default::default()
    };
    let input_assembly_state = vk::PipelineInputAssemblyStateCreateInfo {
        topology: variant.topology,
        primitive_restart_enable: vk::FALSE,
        ..Default::default()
    };
    let dynamic_states =
        [vk::DynamicState::VIEWPORT, vk::DynamicState::SCISSOR];
    let dynamic_state = vk::PipelineDynamicStateCreateInfo {
        p_dynamic_states: dynamic_states.as_ptr(),
        dynamic_state_count: dynamic_states.len() as u32,
        ..Default::default()
    };
    let viewport_state = vk::PipelineViewportStateCreateInfo {
        viewport_count: 1,
        scissor_count: 1,
        ..Default::default()
    };
    let rasterization_state = rasterization_state();
    let depth_stencil_state = depth_stencil_state();
    let multisample_state = vk::PipelineMultisampleStateCreateInfo {
        sample_shading_enable: vk::FALSE,
        rasterization_samples: vk::SampleCountFlags::TYPE_1,
        ..Default::default()
    };
    let color_blend_attachment = vk::PipelineColorBlendAttachmentState {
        color_write_mask: vk::ColorComponentFlags::RGBA,
        blend_enable: vk::FALSE,
        ..Default::default()
    };
    let color_blend_state = vk::PipelineColorBlendStateCreateInfo {
        logic_op_enable: vk::FALSE,
        logic_op: vk::LogicOp::COPY,
        attachment_count: 1,
        p_attachments: &color_blend_attachment,
        ..Default::default()
    };

    let create_info = vk::GraphicsPipelineCreateInfo {
        p_stages: stages.as_ptr(),
        stage_count: stages.len() as u32,
        p_vertex_input_state: &vertex_input_state,
        p_input_assembly_state: &input_assembly_state,
        p_dynamic_state: &dynamic_state,
        p_viewport_state: &viewport_state,
        p_rasterization_state: &rasterization_state,
        p_multisample_state: &multisample_state,
        p_color_blend_state: &color_blend_state,
        p_depth_stencil_state: &depth_stencil_state,
        render_pass: render_pass.raw,
        layout: layout.raw,
        subpass: 0,
        base_pipeline_index: -1,
        base_pipeline_handle: vk::Pipeline::null(),
        ..Default::default()
    };

    let pipeline = Pipeline::new_graphics_pipeline(vk_dev, create_info)?;
    pipeline.set_debug_name(variant.name)?;
    Ok(pipeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_testing_keeps_the_nearest_fragment() {
        let state = depth_stencil_state();
        assert_eq!(state.depth_test_enable, vk::TRUE);
        assert_eq!(state.depth_write_enable, vk::TRUE);
        assert_eq!(state.depth_compare_op, vk::CompareOp::LESS);
    }

    #[test]
    fn both_faces_are_rasterized() {
        let state = rasterization_state();
        assert_eq!(state.cull_mode, vk::CullModeFlags::NONE);
        assert_eq!(state.front_face, vk::FrontFace::CLOCKWISE);
        assert_eq!(state.polygon_mode, vk::PolygonMode::FILL);
    }

    #[test]
    fn variants_cover_lines_and_triangles() {
        assert_eq!(LINE_VARIANT.topology, vk::PrimitiveTopology::LINE_LIST);
        assert_eq!(
            TRIANGLE_VARIANT.topology,
            vk::PrimitiveTopology::TRIANGLE_LIST
        );
    }
}
