use bytemuck::{Pod, Zeroable};

/// Position plus RGBA color, laid out for a vertex buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Indexed triangle list.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    /// Square-based pyramid on the XZ unit square with its apex above the
    /// centre. Base corners are colored red, blue, green, green; the apex is
    /// yellow.
    pub fn pyramid() -> Self {
        const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
        const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
        const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
        const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

        #[rustfmt::skip]
        let vertices = vec![
            Vertex { position: [0.0, 0.0, 0.0], color: RED },
            Vertex { position: [1.0, 0.0, 0.0], color: BLUE },
            Vertex { position: [1.0, 0.0, 1.0], color: GREEN },
            Vertex { position: [0.0, 0.0, 1.0], color: GREEN },
            Vertex { position: [0.5, 1.0, 0.5], color: YELLOW },
        ];
        #[rustfmt::skip]
        let indices = vec![
            0, 1, 2,    // base
            0, 2, 3,    // base
            0, 1, 4,    // front
            1, 2, 4,    // left
            2, 3, 4,    // right
            0, 3, 4,    // back
        ];
        Self { vertices, indices }
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pyramid_shape() {
        let mesh = Mesh::pyramid();
        assert_eq!(mesh.vertices.len(), 5);
        assert_eq!(mesh.index_count(), 18);
        assert_eq!(mesh.triangle_count(), 6);
        assert!(
            mesh.indices
                .iter()
                .all(|&i| (i as usize) < mesh.vertices.len())
        );
    }

    #[test]
    fn every_side_touches_apex() {
        let mesh = Mesh::pyramid();
        let apex = 4;
        let sides = mesh
            .indices
            .chunks(3)
            .filter(|tri| tri.contains(&apex))
            .count();
        assert_eq!(sides, 4);
        assert_eq!(mesh.vertices[apex as usize].position, [0.5, 1.0, 0.5]);
    }

    #[test]
    fn vertex_stride_is_seven_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 7 * 4);
        let mesh = Mesh::pyramid();
        let bytes: &[u8] = bytemuck::cast_slice(&mesh.vertices);
        assert_eq!(bytes.len(), 5 * 28);
    }
}
