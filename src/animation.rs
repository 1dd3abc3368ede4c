//! Per-frame animation
//!
//! The driver runs once per redraw: it advances the spinning objects and
//! then hands the scene to a [`FrameRenderer`]. It has no notion of time or
//! pausing; every call is one tick.

use crate::{
    context::AppContext,
    error::RenderError,
    gfx::{camera::PerspectiveCamera, scene::ObjectId, scene::Scene},
};

/// Something that can draw the scene from a camera
pub trait FrameRenderer {
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), RenderError>;
}

pub struct AnimationDriver {
    spinning: Vec<ObjectId>,
    rotation_step: f32,
    frames: u64,
}

impl AnimationDriver {
    pub fn new(rotation_step: f32) -> Self {
        Self {
            spinning: Vec::new(),
            rotation_step,
            frames: 0,
        }
    }

    /// Adds an object whose X and Y rotation advance every frame
    pub fn spin(mut self, object: ObjectId) -> Self {
        self.spinning.push(object);
        self
    }

    /// Advances the animation by one tick without drawing
    pub fn advance(&mut self, context: &mut AppContext) {
        let step = self.rotation_step;
        for id in &self.spinning {
            if let Some(object) = context.scene.object_mut(*id) {
                object.rotation.add(step, step, 0.0);
            }
        }
        self.frames += 1;
    }

    /// One frame: advance, then draw the current scene from the current camera
    pub fn frame<R: FrameRenderer>(
        &mut self,
        context: &mut AppContext,
        renderer: &mut R,
    ) -> Result<(), RenderError> {
        if context.is_disposed() {
            return Ok(());
        }
        self.advance(context);
        renderer.render(&context.scene, &context.camera)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::AppConfig,
        gfx::{color::Color, scene::HasColorableMaterial, surface::Viewport},
    };
    use cgmath::Vector3;

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<(f32, f32, Color, Vector3<f32>)>,
        fail_with: Option<fn() -> RenderError>,
    }

    impl FrameRenderer for RecordingRenderer {
        fn render(
            &mut self,
            scene: &Scene,
            camera: &PerspectiveCamera,
        ) -> Result<(), RenderError> {
            if let Some(fail) = self.fail_with {
                return Err(fail());
            }
            let cube = &scene.children()[0];
            let color = scene.material_for(cube).and_then(|m| m.color()).unwrap();
            self.frames
                .push((cube.rotation.x, cube.rotation.y, color, camera.position));
            Ok(())
        }
    }

    fn context() -> AppContext {
        AppContext::new(&AppConfig::default(), Viewport::new(800.0, 600.0, 1.0))
    }

    #[test]
    fn test_each_frame_rotates_before_drawing() {
        let mut context = context();
        let mut driver = AnimationDriver::new(0.01).spin(context.cube());
        let mut renderer = RecordingRenderer::default();

        for _ in 0..3 {
            driver.frame(&mut context, &mut renderer).unwrap();
        }

        assert_eq!(driver.frames(), 3);
        assert_eq!(renderer.frames.len(), 3);
        let (x, y, color, _) = renderer.frames[2];
        assert!((x - 0.03).abs() < 1e-6);
        assert!((y - 0.03).abs() < 1e-6);
        assert_eq!(color, Color::GREEN);
        assert!((renderer.frames[0].0 - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_frame_draws_current_shared_state() {
        let mut context = context();
        let mut driver = AnimationDriver::new(0.01).spin(context.cube());
        let mut renderer = RecordingRenderer::default();

        let material = context.scene.object(context.cube()).unwrap().material;
        context.scene.recolor(&[material], Color::RED);
        context.camera.position = Vector3::new(1.0, 0.0, 2.0);
        driver.frame(&mut context, &mut renderer).unwrap();

        let (_, _, color, position) = renderer.frames[0];
        assert_eq!(color, Color::RED);
        assert_eq!(position, Vector3::new(1.0, 0.0, 2.0));
    }

    #[test]
    fn test_render_errors_are_returned() {
        let mut context = context();
        let mut driver = AnimationDriver::new(0.01).spin(context.cube());
        let mut renderer = RecordingRenderer {
            fail_with: Some(|| RenderError::Timeout),
            ..Default::default()
        };

        let err = driver.frame(&mut context, &mut renderer).unwrap_err();
        assert!(err.is_recoverable());
        // The tick still happened
        assert_eq!(driver.frames(), 1);
    }

    #[test]
    fn test_disposed_context_is_not_drawn() {
        let mut context = context();
        let mut driver = AnimationDriver::new(0.01).spin(context.cube());
        let mut renderer = RecordingRenderer::default();

        context.dispose();
        driver.frame(&mut context, &mut renderer).unwrap();
        assert!(renderer.frames.is_empty());
        assert_eq!(driver.frames(), 0);
    }
}
