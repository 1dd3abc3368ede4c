//! Render surface sizing
//!
//! Tracks the viewport in logical pixels together with the clamped device
//! pixel ratio, and derives the physical size of the drawing buffer from
//! them. The GPU side only ever sees [`RenderSurface::drawing_buffer_size`].

use cgmath::Vector2;

use super::camera::PerspectiveCamera;

/// A viewport as reported by the window: logical size plus scale factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    /// Converts a physical window size into a logical viewport
    pub fn from_physical(width: u32, height: u32, scale_factor: f64) -> Self {
        let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        Self {
            width: (f64::from(width) / scale) as f32,
            height: (f64::from(height) / scale) as f32,
            device_pixel_ratio: scale as f32,
        }
    }

    fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSurface {
    width: f32,
    height: f32,
    pixel_ratio: f32,
    max_pixel_ratio: f32,
}

impl RenderSurface {
    pub fn new(viewport: Viewport, max_pixel_ratio: f32) -> Self {
        let mut surface = Self {
            width: 1.0,
            height: 1.0,
            pixel_ratio: 1.0,
            max_pixel_ratio,
        };
        if !viewport.is_empty() {
            surface.set_size(viewport.width, viewport.height);
        }
        surface.set_pixel_ratio(viewport.device_pixel_ratio);
        surface
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Stores `ratio`, capped at the configured maximum
    pub fn set_pixel_ratio(&mut self, ratio: f32) {
        let ratio = if ratio.is_finite() && ratio > 0.0 { ratio } else { 1.0 };
        self.pixel_ratio = ratio.min(self.max_pixel_ratio);
    }

    /// Applies a viewport change to the surface and the camera projection.
    ///
    /// Empty viewports (a minimized window) are ignored and return `false`.
    pub fn handle_resize(&mut self, viewport: Viewport, camera: &mut PerspectiveCamera) -> bool {
        if viewport.is_empty() {
            return false;
        }

        self.set_size(viewport.width, viewport.height);
        self.set_pixel_ratio(viewport.device_pixel_ratio);

        camera.aspect = self.aspect();
        camera.update_projection_matrix();

        log::debug!(
            "surface resized to {}x{} @{}x, drawing buffer {:?}",
            self.width,
            self.height,
            self.pixel_ratio,
            self.drawing_buffer_size()
        );
        true
    }

    /// Logical size
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Physical pixel size of the drawing buffer, at least 1x1
    pub fn drawing_buffer_size(&self) -> (u32, u32) {
        let width = (self.width * self.pixel_ratio).round().max(1.0) as u32;
        let height = (self.height * self.pixel_ratio).round().max(1.0) as u32;
        (width, height)
    }

    /// Maps a client (logical pixel) position to normalized device coordinates,
    /// y pointing up
    pub fn to_ndc(&self, client: Vector2<f32>) -> Vector2<f32> {
        Vector2::new(
            (client.x / self.width) * 2.0 - 1.0,
            -(client.y / self.height) * 2.0 + 1.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Deg;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(Deg(75.0), 1.0, 0.1, 1000.0)
    }

    #[test]
    fn test_resize_updates_size_and_aspect() {
        let mut camera = camera();
        let mut surface = RenderSurface::new(Viewport::new(800.0, 600.0, 1.0), 2.0);

        assert!(surface.handle_resize(Viewport::new(1024.0, 768.0, 1.0), &mut camera));
        assert_eq!(surface.size(), (1024.0, 768.0));
        assert_eq!(camera.aspect, 1024.0 / 768.0);
        assert_eq!(surface.drawing_buffer_size(), (1024, 768));
    }

    #[test]
    fn test_pixel_ratio_is_clamped() {
        let mut camera = camera();
        let mut surface = RenderSurface::new(Viewport::new(800.0, 600.0, 1.0), 2.0);

        surface.handle_resize(Viewport::new(640.0, 480.0, 3.0), &mut camera);
        assert_eq!(surface.pixel_ratio(), 2.0);
        assert_eq!(surface.drawing_buffer_size(), (1280, 960));

        surface.handle_resize(Viewport::new(640.0, 480.0, 1.5), &mut camera);
        assert_eq!(surface.pixel_ratio(), 1.5);
        assert_eq!(surface.drawing_buffer_size(), (960, 720));
    }

    #[test]
    fn test_empty_viewport_is_ignored() {
        let mut camera = camera();
        let mut surface = RenderSurface::new(Viewport::new(800.0, 600.0, 1.0), 2.0);
        camera.aspect = surface.aspect();

        assert!(!surface.handle_resize(Viewport::new(0.0, 0.0, 1.0), &mut camera));
        assert_eq!(surface.size(), (800.0, 600.0));
        assert_eq!(camera.aspect, 800.0 / 600.0);
    }

    #[test]
    fn test_from_physical() {
        let viewport = Viewport::from_physical(2400, 1600, 2.0);
        assert_eq!(viewport, Viewport::new(1200.0, 800.0, 2.0));
    }

    #[test]
    fn test_ndc_mapping() {
        let surface = RenderSurface::new(Viewport::new(800.0, 600.0, 1.0), 2.0);
        assert_eq!(surface.to_ndc(Vector2::new(400.0, 300.0)), Vector2::new(0.0, 0.0));
        assert_eq!(surface.to_ndc(Vector2::new(0.0, 0.0)), Vector2::new(-1.0, 1.0));
        assert_eq!(surface.to_ndc(Vector2::new(800.0, 600.0)), Vector2::new(1.0, -1.0));
    }
}
