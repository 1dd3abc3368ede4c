//! Application configuration
//!
//! Every tunable of the demo lives in [`AppConfig`]. The defaults reproduce
//! the demo exactly; the `with_*` methods adjust single fields.

use std::{fmt, str::FromStr};

use cgmath::Deg;

use crate::gfx::color::Color;

/// How the input reactor responds to pointer movement while pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Press highlights, dragging orbits the camera, release restores
    #[default]
    DragOrbit,
    /// Press highlights and release restores; the camera never moves
    StaticCamera,
}

impl InteractionMode {
    pub fn drag_orbits(self) -> bool {
        matches!(self, InteractionMode::DragOrbit)
    }
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InteractionMode::DragOrbit => "drag-orbit",
            InteractionMode::StaticCamera => "static-camera",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown interaction mode `{0}` (expected `drag-orbit` or `static-camera`)")]
pub struct ParseModeError(String);

impl FromStr for InteractionMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drag-orbit" | "drag" | "orbit" => Ok(InteractionMode::DragOrbit),
            "static-camera" | "static" => Ok(InteractionMode::StaticCamera),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    /// Initial logical window size
    pub window_size: (u32, u32),
    pub mode: InteractionMode,
    pub max_pixel_ratio: f32,
    /// Radians added to the cube's X and Y rotation every frame
    pub rotation_step: f32,
    /// Distance scale of the orbit formula
    pub orbit_radius: f32,
    /// Multiplier applied to the pointer's client x while orbiting
    pub drag_sensitivity: f32,
    pub fovy: Deg<f32>,
    pub znear: f32,
    pub zfar: f32,
    /// Initial camera z; the camera starts on the +Z axis looking at the origin
    pub camera_distance: f32,
    pub highlight_color: Color,
    pub normal_color: Color,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Orbit Cube".to_string(),
            window_size: (1200, 800),
            mode: InteractionMode::DragOrbit,
            max_pixel_ratio: 2.0,
            rotation_step: 0.01,
            orbit_radius: 5.0,
            drag_sensitivity: 0.5,
            fovy: Deg(75.0),
            znear: 0.1,
            zfar: 1000.0,
            camera_distance: 5.0,
            highlight_color: Color::from_hex(0xff0000),
            normal_color: Color::from_hex(0x00ff00),
        }
    }
}

impl AppConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width.max(1), height.max(1));
        self
    }

    pub fn with_mode(mut self, mode: InteractionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_pixel_ratio(mut self, ratio: f32) -> Self {
        self.max_pixel_ratio = ratio;
        self
    }

    pub fn with_rotation_step(mut self, step: f32) -> Self {
        self.rotation_step = step;
        self
    }

    pub fn with_colors(mut self, highlight: Color, normal: Color) -> Self {
        self.highlight_color = highlight;
        self.normal_color = normal;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_demo() {
        let config = AppConfig::default();
        assert_eq!(config.mode, InteractionMode::DragOrbit);
        assert_eq!(config.highlight_color.hex(), 0xff0000);
        assert_eq!(config.normal_color.hex(), 0x00ff00);
        assert_eq!(config.max_pixel_ratio, 2.0);
        assert_eq!(config.rotation_step, 0.01);
        assert_eq!(config.orbit_radius, 5.0);
        assert_eq!(config.drag_sensitivity, 0.5);
        assert_eq!(config.camera_distance, 5.0);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("drag-orbit".parse::<InteractionMode>(), Ok(InteractionMode::DragOrbit));
        assert_eq!(" Static-Camera ".parse::<InteractionMode>(), Ok(InteractionMode::StaticCamera));
        assert!("spin".parse::<InteractionMode>().is_err());
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in [InteractionMode::DragOrbit, InteractionMode::StaticCamera] {
            assert_eq!(mode.to_string().parse::<InteractionMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_window_size_is_never_zero() {
        let config = AppConfig::default().with_window_size(0, 600);
        assert_eq!(config.window_size, (1, 600));
    }
}
