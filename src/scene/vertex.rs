use ::{ash::vk, memoffset::offset_of};

use super::Vertex;

impl Vertex {
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }

    pub fn binding_descriptions() -> [vk::VertexInputBindingDescription; 1] {
        [vk::VertexInputBindingDescription {
            binding: 0,
            stride: std::mem::size_of::<Vertex>() as u32,
            input_rate: vk::VertexInputRate::VERTEX,
        }]
    }

    pub fn attribute_descriptions() -> [vk::VertexInputAttributeDescription; 2]
    {
        [
            vk::VertexInputAttributeDescription {
                binding: 0,
                location: 0,
                format: vk::Format::R32G32B32_SFLOAT,
                offset: offset_of!(Vertex, position) as u32,
            },
            vk::VertexInputAttributeDescription {
                binding: 0,
                location: 1,
                format: vk::Format::R32G32B32_SFLOAT,
                offset: offset_of!(Vertex, color) as u32,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_are_tightly_packed() {
        let [binding] = Vertex::binding_descriptions();
        assert_eq!(binding.stride, 24);

        let [position, color] = Vertex::attribute_descriptions();
        assert_eq!((position.location, position.offset), (0, 0));
        assert_eq!((color.location, color.offset), (1, 12));
    }
}
