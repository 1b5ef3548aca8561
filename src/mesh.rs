// mesh.rs - Plain-data mesh records
//
// The generator instances every cell sprite as a textured plane; the
// projector only ever sees vertex positions, so a mesh here is just a
// vertex list plus its object-to-world transform.

use glam::{Mat4, Vec3};

/// A mesh as the projector sees it: local-space vertices and the
/// transform that places them in the world.
#[derive(Debug, Clone)]
pub struct MeshData {
    pub vertices: Vec<Vec3>,
    pub transform: Mat4,
}

impl MeshData {
    pub fn new(vertices: Vec<Vec3>, transform: Mat4) -> Self {
        Self { vertices, transform }
    }

    /// Axis-aligned quad in the local XY plane, centred at the origin.
    pub fn plane(width: f32, height: f32) -> Self {
        let hw = width * 0.5;
        let hh = height * 0.5;
        Self {
            vertices: vec![
                Vec3::new(-hw, -hh, 0.0),
                Vec3::new(hw, -hh, 0.0),
                Vec3::new(hw, hh, 0.0),
                Vec3::new(-hw, hh, 0.0),
            ],
            transform: Mat4::IDENTITY,
        }
    }

    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    /// Vertex positions in world space.
    pub fn world_vertices(&self) -> Vec<Vec3> {
        self.vertices
            .iter()
            .map(|&v| self.transform.transform_point3(v))
            .collect()
    }
}
