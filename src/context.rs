//! Shared application state
//!
//! [`AppContext`] is the single owner of the scene, the camera and the render
//! surface. The input reactor and the animation driver never hold on to it;
//! the composition root lends it to them for the duration of each callback.

use cgmath::Vector3;

use crate::{
    config::AppConfig,
    gfx::{
        camera::PerspectiveCamera,
        geometry::generate_cube,
        scene::{Material, Object, ObjectId, Scene},
        surface::{RenderSurface, Viewport},
    },
};

pub struct AppContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub surface: RenderSurface,
    cube: ObjectId,
    disposed: bool,
}

impl AppContext {
    /// Builds the demo scene: one unit cube with a green basic material and a
    /// camera on the +Z axis looking at it.
    pub fn new(config: &AppConfig, viewport: Viewport) -> Self {
        let surface = RenderSurface::new(viewport, config.max_pixel_ratio);

        let mut camera =
            PerspectiveCamera::new(config.fovy, surface.aspect(), config.znear, config.zfar);
        camera.position = Vector3::new(0.0, 0.0, config.camera_distance);
        camera.look_at(Vector3::new(0.0, 0.0, 0.0));

        let mut scene = Scene::new();
        let material = scene.add_material(Material::basic(config.normal_color));
        let cube = scene.add(Object::new("cube", generate_cube(), material));

        log::info!(
            "scene ready: {} object(s), camera at {:?}",
            scene.len(),
            camera.position
        );

        Self {
            scene,
            camera,
            surface,
            cube,
            disposed: false,
        }
    }

    /// The spinning cube every demo scene starts with
    pub fn cube(&self) -> ObjectId {
        self.cube
    }

    pub fn resize(&mut self, viewport: Viewport) -> bool {
        self.surface.handle_resize(viewport, &mut self.camera)
    }

    /// Releases the scene contents. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.scene.clear();
        self.disposed = true;
        log::debug!("application context disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
