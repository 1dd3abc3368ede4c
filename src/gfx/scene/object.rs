use std::f32::consts::TAU;

use cgmath::{Matrix4, Rad, Vector3};

use super::material::MaterialId;
use crate::gfx::geometry::GeometryData;

/// Index of an object inside its scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub(crate) usize);

impl ObjectId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Euler rotation in radians, applied X then Y then Z
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Rotation {
    /// Adds to each angle, keeping every angle in `0..2π`.
    pub fn add(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x = (self.x + dx).rem_euclid(TAU);
        self.y = (self.y + dy).rem_euclid(TAU);
        self.z = (self.z + dz).rem_euclid(TAU);
    }

    pub fn matrix(&self) -> Matrix4<f32> {
        Matrix4::from_angle_x(Rad(self.x))
            * Matrix4::from_angle_y(Rad(self.y))
            * Matrix4::from_angle_z(Rad(self.z))
    }
}

/// A renderable object: geometry, a material reference and a transform
#[derive(Debug, Clone)]
pub struct Object {
    pub name: String,
    pub geometry: GeometryData,
    pub material: MaterialId,
    pub position: Vector3<f32>,
    pub rotation: Rotation,
    pub scale: Vector3<f32>,
    pub visible: bool,
}

impl Object {
    /// Create a new Object at the origin with no rotation
    pub fn new(name: impl Into<String>, geometry: GeometryData, material: MaterialId) -> Self {
        Self {
            name: name.into(),
            geometry,
            material,
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Rotation::default(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            visible: true,
        }
    }

    pub fn with_position(mut self, position: Vector3<f32>) -> Self {
        self.position = position;
        self
    }

    /// Model matrix, composed as translation * rotation * scale
    pub fn transform(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * self.rotation.matrix()
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::generate_cube;
    use cgmath::{SquareMatrix, Vector4};

    #[test]
    fn test_identity_transform_at_origin() {
        let object = Object::new("cube", generate_cube(), MaterialId(0));
        assert_eq!(object.transform(), Matrix4::identity());
    }

    #[test]
    fn test_rotation_wraps() {
        let mut rotation = Rotation::default();
        rotation.add(TAU + 0.25, -0.5, 0.0);
        assert!((rotation.x - 0.25).abs() < 1e-5);
        assert!((rotation.y - (TAU - 0.5)).abs() < 1e-5);
        assert_eq!(rotation.z, 0.0);
    }

    #[test]
    fn test_translation_applied_last() {
        let mut object = Object::new("cube", generate_cube(), MaterialId(0))
            .with_position(Vector3::new(3.0, 0.0, 0.0));
        object.rotation.y = std::f32::consts::FRAC_PI_2;

        let corner = object.transform() * Vector4::new(0.5, 0.0, 0.0, 1.0);
        assert!((corner.x - 3.0).abs() < 1e-5);
        assert!((corner.z + 0.5).abs() < 1e-5);
    }
}
