use ::ash::vk;

use super::{Mesh, Vertex};

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const CYAN: [f32; 3] = [0.0, 1.0, 1.0];
const BLACK: [f32; 3] = [0.0, 0.0, 0.0];

/// Twelve triangles of a 2x2x2 cube centered on the origin, each vertex with
/// its own color.
#[rustfmt::skip]
const CUBE_VERTICES: [Vertex; 36] = [
    Vertex::new([-1.0, -1.0, -1.0], [0.583, 0.771, 0.014]),
    Vertex::new([-1.0, -1.0, 1.0], [0.609, 0.115, 0.436]),
    Vertex::new([-1.0, 1.0, 1.0], [0.327, 0.483, 0.844]),
    Vertex::new([1.0, 1.0, -1.0], [0.822, 0.569, 0.201]),
    Vertex::new([-1.0, -1.0, -1.0], [0.435, 0.602, 0.223]),
    Vertex::new([-1.0, 1.0, -1.0], [0.310, 0.747, 0.185]),
    Vertex::new([1.0, -1.0, 1.0], [0.597, 0.770, 0.761]),
    Vertex::new([-1.0, -1.0, -1.0], [0.559, 0.436, 0.730]),
    Vertex::new([1.0, -1.0, -1.0], [0.359, 0.583, 0.152]),
    Vertex::new([1.0, 1.0, -1.0], [0.483, 0.596, 0.789]),
    Vertex::new([1.0, -1.0, -1.0], [0.559, 0.861, 0.639]),
    Vertex::new([-1.0, -1.0, -1.0], [0.195, 0.548, 0.859]),
    Vertex::new([-1.0, -1.0, -1.0], [0.014, 0.184, 0.576]),
    Vertex::new([-1.0, 1.0, 1.0], [0.771, 0.328, 0.970]),
    Vertex::new([-1.0, 1.0, -1.0], [0.406, 0.615, 0.116]),
    Vertex::new([1.0, -1.0, 1.0], [0.676, 0.977, 0.133]),
    Vertex::new([-1.0, -1.0, 1.0], [0.971, 0.572, 0.833]),
    Vertex::new([-1.0, -1.0, -1.0], [0.140, 0.616, 0.489]),
    Vertex::new([-1.0, 1.0, 1.0], [0.997, 0.513, 0.064]),
    Vertex::new([-1.0, -1.0, 1.0], [0.945, 0.719, 0.592]),
    Vertex::new([1.0, -1.0, 1.0], [0.543, 0.021, 0.978]),
    Vertex::new([1.0, 1.0, 1.0], [0.279, 0.317, 0.505]),
    Vertex::new([1.0, -1.0, -1.0], [0.167, 0.620, 0.077]),
    Vertex::new([1.0, 1.0, -1.0], [0.347, 0.857, 0.137]),
    Vertex::new([1.0, -1.0, -1.0], [0.055, 0.953, 0.042]),
    Vertex::new([1.0, 1.0, 1.0], [0.714, 0.505, 0.345]),
    Vertex::new([1.0, -1.0, 1.0], [0.783, 0.290, 0.734]),
    Vertex::new([1.0, 1.0, 1.0], [0.722, 0.645, 0.174]),
    Vertex::new([1.0, 1.0, -1.0], [0.302, 0.455, 0.848]),
    Vertex::new([-1.0, 1.0, -1.0], [0.225, 0.587, 0.040]),
    Vertex::new([1.0, 1.0, 1.0], [0.517, 0.713, 0.338]),
    Vertex::new([-1.0, 1.0, -1.0], [0.053, 0.959, 0.120]),
    Vertex::new([-1.0, 1.0, 1.0], [0.393, 0.621, 0.362]),
    Vertex::new([1.0, 1.0, 1.0], [0.673, 0.211, 0.457]),
    Vertex::new([-1.0, 1.0, 1.0], [0.820, 0.883, 0.371]),
    Vertex::new([1.0, -1.0, 1.0], [0.982, 0.099, 0.879]),
];

impl Mesh {
    /// An 8x8 colored quad lying in the y = 0 plane.
    pub fn triangle() -> Self {
        Self {
            vertices: vec![
                Vertex::new([4.0, 0.0, 4.0], RED),
                Vertex::new([4.0, 0.0, -4.0], GREEN),
                Vertex::new([-4.0, 0.0, -4.0], BLUE),
                Vertex::new([-4.0, 0.0, 4.0], CYAN),
            ],
            indices: vec![0, 1, 2, 0, 2, 3],
            topology: vk::PrimitiveTopology::TRIANGLE_LIST,
        }
    }

    pub fn cube() -> Self {
        Self {
            vertices: CUBE_VERTICES.to_vec(),
            indices: (0..CUBE_VERTICES.len() as u32).collect(),
            topology: vk::PrimitiveTopology::TRIANGLE_LIST,
        }
    }

    /// Black grid lines in the y = 0 plane spanning `-half_size..=half_size`
    /// on both axes, one unit apart.
    pub fn grid(half_size: u32) -> Self {
        let h = half_size as i64;
        let extent = h as f32;
        let mut vertices = Vec::with_capacity(4 * (2 * half_size as usize + 1));
        for i in -h..=h {
            let offset = i as f32;
            // column
            vertices.push(Vertex::new([offset, 0.0, -extent], BLACK));
            vertices.push(Vertex::new([offset, 0.0, extent], BLACK));
            // row
            vertices.push(Vertex::new([-extent, 0.0, offset], BLACK));
            vertices.push(Vertex::new([extent, 0.0, offset], BLACK));
        }
        let indices = (0..vertices.len() as u32).collect();
        Self {
            vertices,
            indices,
            topology: vk::PrimitiveTopology::LINE_LIST,
        }
    }

    /// The number of indices to draw.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    pub fn is_line_list(&self) -> bool {
        self.topology == vk::PrimitiveTopology::LINE_LIST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices_are_in_bounds(mesh: &Mesh) -> bool {
        mesh.indices
            .iter()
            .all(|&index| (index as usize) < mesh.vertices.len())
    }

    #[test]
    fn triangle_is_a_quad_of_two_triangles() {
        let mesh = Mesh::triangle();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(mesh.vertices[3].color, CYAN);
        assert!(mesh.vertices.iter().all(|v| v.position[1] == 0.0));
        assert!(!mesh.is_line_list());
    }

    #[test]
    fn cube_vertices_lie_on_the_unit_cube() {
        let mesh = Mesh::cube();
        assert_eq!(mesh.vertices.len(), 36);
        assert_eq!(mesh.index_count(), 36);
        assert!(indices_are_in_bounds(&mesh));
        assert!(mesh
            .vertices
            .iter()
            .flat_map(|v| v.position)
            .all(|c| c == 1.0 || c == -1.0));
    }

    #[test]
    fn grid_has_two_lines_per_step() {
        let mesh = Mesh::grid(5);
        assert_eq!(mesh.vertices.len(), 44);
        assert_eq!(mesh.indices.len(), 44);
        assert!(mesh.is_line_list());
        assert!(indices_are_in_bounds(&mesh));

        assert_eq!(mesh.vertices[0].position, [-5.0, 0.0, -5.0]);
        assert_eq!(mesh.vertices[1].position, [-5.0, 0.0, 5.0]);
        assert_eq!(mesh.vertices[2].position, [-5.0, 0.0, -5.0]);
        assert_eq!(mesh.vertices[3].position, [5.0, 0.0, -5.0]);
        assert_eq!(mesh.vertices[43].position, [5.0, 0.0, 5.0]);
        assert!(mesh.vertices.iter().all(|v| v.color == BLACK));
    }

    #[test]
    fn empty_grid_is_a_single_cross() {
        let mesh = Mesh::grid(0);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3]);
    }
}
