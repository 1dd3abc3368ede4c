//! Scene materials
//!
//! Materials live in the [`Scene`](super::Scene) and objects refer to them by
//! [`MaterialId`]. Only [`BasicMaterial`] exposes a settable color; the
//! interaction code reaches it through the [`HasColorableMaterial`] capability
//! and never needs to know which concrete material an object uses.

use crate::gfx::color::Color;

/// Index of a material inside its scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub(crate) usize);

impl MaterialId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Unlit material drawn in a single flat color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicMaterial {
    pub color: Color,
}

impl BasicMaterial {
    pub fn new(color: impl Into<Color>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

/// Material variants understood by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    Basic(BasicMaterial),
    /// Shades surfaces from their normals. Has no color to change.
    Normal,
}

/// Shading mode written into the per-object uniform; must match `basic.wgsl`.
pub const SHADING_FLAT: u32 = 0;
pub const SHADING_NORMAL: u32 = 1;

impl Material {
    pub fn basic(color: impl Into<Color>) -> Self {
        Material::Basic(BasicMaterial::new(color))
    }

    /// Color handed to the shader. Normal materials ignore it.
    pub fn display_color(&self) -> Color {
        match self {
            Material::Basic(basic) => basic.color,
            Material::Normal => Color::BLACK,
        }
    }

    pub fn shading_mode(&self) -> u32 {
        match self {
            Material::Basic(_) => SHADING_FLAT,
            Material::Normal => SHADING_NORMAL,
        }
    }
}

/// Capability of exposing a plain settable color.
///
/// Hit testing keeps only materials with this capability; everything else
/// is skipped without error.
pub trait HasColorableMaterial {
    fn color(&self) -> Option<Color>;
    fn set_color(&mut self, color: Color) -> bool;
}

impl HasColorableMaterial for BasicMaterial {
    fn color(&self) -> Option<Color> {
        Some(self.color)
    }

    fn set_color(&mut self, color: Color) -> bool {
        self.color = color;
        true
    }
}

impl HasColorableMaterial for Material {
    fn color(&self) -> Option<Color> {
        match self {
            Material::Basic(basic) => basic.color(),
            Material::Normal => None,
        }
    }

    fn set_color(&mut self, color: Color) -> bool {
        match self {
            Material::Basic(basic) => basic.set_color(color),
            Material::Normal => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_material_is_colorable() {
        let mut material = Material::basic(0x00ff00);
        assert_eq!(material.color(), Some(Color::GREEN));
        assert!(material.set_color(Color::RED));
        assert_eq!(material.color(), Some(Color::RED));
        assert_eq!(material.shading_mode(), SHADING_FLAT);
    }

    #[test]
    fn test_normal_material_ignores_color() {
        let mut material = Material::Normal;
        assert_eq!(material.color(), None);
        assert!(!material.set_color(Color::RED));
        assert_eq!(material, Material::Normal);
        assert_eq!(material.shading_mode(), SHADING_NORMAL);
    }
}
