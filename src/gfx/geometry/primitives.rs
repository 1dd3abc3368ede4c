//! # Primitive Shape Generation
//!
//! Shapes are generated with per-face normals so flat shading works without
//! any extra processing.

use super::GeometryData;

/// Generate a box centered at the origin
///
/// Each face has its own four vertices so that normals point straight out of
/// the face. `generate_box(1.0, 1.0, 1.0)` spans `-0.5..0.5` on every axis.
pub fn generate_box(width: f32, height: f32, depth: f32) -> GeometryData {
    let (x, y, z) = (width * 0.5, height * 0.5, depth * 0.5);

    #[rustfmt::skip]
    let positions = [
        // Front face
        [-x, -y,  z], [ x, -y,  z], [ x,  y,  z], [-x,  y,  z],
        // Back face
        [-x, -y, -z], [-x,  y, -z], [ x,  y, -z], [ x, -y, -z],
        // Left face
        [-x, -y, -z], [-x, -y,  z], [-x,  y,  z], [-x,  y, -z],
        // Right face
        [ x, -y,  z], [ x, -y, -z], [ x,  y, -z], [ x,  y,  z],
        // Top face
        [-x,  y,  z], [ x,  y,  z], [ x,  y, -z], [-x,  y, -z],
        // Bottom face
        [-x, -y, -z], [ x, -y, -z], [ x, -y,  z], [-x, -y,  z],
    ];

    let face_normals: [[f32; 3]; 6] = [
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
        [-1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
    ];

    let mut data = GeometryData::new();
    data.vertices = positions.to_vec();
    data.normals = face_normals
        .iter()
        .flat_map(|normal| std::iter::repeat(*normal).take(4))
        .collect();

    // Two counter-clockwise triangles per face
    data.indices = (0..6u32)
        .flat_map(|face| {
            let base = face * 4;
            [base, base + 1, base + 2, base + 2, base + 3, base]
        })
        .collect();

    data
}

/// Generate the unit cube used by the demo scene
pub fn generate_cube() -> GeometryData {
    generate_box(1.0, 1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_generation() {
        let cube = generate_cube();
        assert_eq!(cube.vertices.len(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.indices.len(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.normals.len(), cube.vertices.len());
    }

    #[test]
    fn test_box_extents() {
        let bounds = generate_box(2.0, 1.0, 4.0).bounds();
        assert_eq!(bounds.min, cgmath::Vector3::new(-1.0, -0.5, -2.0));
        assert_eq!(bounds.max, cgmath::Vector3::new(1.0, 0.5, 2.0));
    }

    #[test]
    fn test_triangles_wind_outward() {
        let cube = generate_cube();
        for triangle in cube.indices.chunks(3) {
            let [a, b, c] =
                [0, 1, 2].map(|i| cgmath::Vector3::from(cube.vertices[triangle[i] as usize]));
            let face_normal = (b - a).cross(c - a);
            let stored = cgmath::Vector3::from(cube.normals[triangle[0] as usize]);
            assert!(cgmath::InnerSpace::dot(face_normal, stored) > 0.0);
        }
    }
}
