//! Error types
//!
//! Start-up failures are fatal and bubble up to `main`. Per-frame surface
//! errors are classified by [`RenderError::is_recoverable`] so the event loop
//! can skip a frame instead of exiting.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create rendering surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to open GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface does not support any texture format")]
    NoSurfaceFormat,
    #[error("surface lost or outdated")]
    SurfaceLost,
    #[error("timed out acquiring the next surface texture")]
    Timeout,
    #[error("GPU is out of memory")]
    OutOfMemory,
    #[error("surface error: {0}")]
    Surface(wgpu::SurfaceError),
}

impl RenderError {
    /// Whether skipping the current frame is enough to recover
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RenderError::SurfaceLost | RenderError::Timeout)
    }
}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(err: wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::Timeout => RenderError::Timeout,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Surface(other),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_error_classification() {
        assert!(RenderError::from(wgpu::SurfaceError::Lost).is_recoverable());
        assert!(RenderError::from(wgpu::SurfaceError::Outdated).is_recoverable());
        assert!(RenderError::from(wgpu::SurfaceError::Timeout).is_recoverable());
        assert!(!RenderError::from(wgpu::SurfaceError::OutOfMemory).is_recoverable());
    }

    #[test]
    fn test_render_error_is_transparent_in_app_error() {
        let err = AppError::from(RenderError::OutOfMemory);
        assert_eq!(err.to_string(), "GPU is out of memory");
    }
}
