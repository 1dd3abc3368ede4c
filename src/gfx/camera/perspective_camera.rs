use super::camera_utils::{Camera, CameraUniform};
use cgmath::*;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// A perspective camera positioned freely in world space and oriented by a
/// look-at target.
///
/// `projection` uses the OpenGL clip convention (NDC depth in `-1..1`), which
/// is what ray unprojection expects. The wgpu depth remap is applied only when
/// building the matrix that goes to the GPU.
#[derive(Debug, Clone, Copy)]
pub struct PerspectiveCamera {
    pub position: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    /// Vertical field of view.
    pub fovy: Deg<f32>,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
    projection: Matrix4<f32>,
}

impl Camera for PerspectiveCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * self.projection * self.view_matrix()
    }
}

impl PerspectiveCamera {
    pub fn new(fovy: Deg<f32>, aspect: f32, znear: f32, zfar: f32) -> Self {
        let mut camera = Self {
            position: Vector3::zero(),
            target: Vector3::new(0.0, 0.0, -1.0),
            up: Vector3::unit_y(),
            fovy,
            aspect,
            znear,
            zfar,
            projection: Matrix4::identity(),
        };
        camera.update_projection_matrix();
        camera
    }

    /// Points the camera at `target` without moving it.
    pub fn look_at(&mut self, target: Vector3<f32>) {
        self.target = target;
    }

    /// Recomputes the projection matrix after `fovy`, `aspect`, `znear` or `zfar` changed.
    pub fn update_projection_matrix(&mut self) {
        self.projection = perspective(self.fovy, self.aspect, self.znear, self.zfar);
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection
    }

    /// World-to-view transform.
    ///
    /// A camera sitting exactly on its target keeps looking down `-Z` instead
    /// of producing a degenerate matrix.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let forward = self.target - self.position;
        let direction = if forward.magnitude2() > f32::EPSILON {
            forward.normalize()
        } else {
            -Vector3::unit_z()
        };
        Matrix4::look_to_rh(Point3::from_vec(self.position), direction, self.up)
    }

    /// Maps a point in normalized device coordinates back into world space.
    pub fn unproject(&self, ndc: Vector3<f32>) -> Option<Vector3<f32>> {
        let inverse = (self.projection * self.view_matrix()).invert()?;
        let world = inverse * ndc.extend(1.0);
        if world.w.abs() <= f32::EPSILON {
            return None;
        }
        Some(world.truncate() / world.w)
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform::from_camera(self, self.position.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_projection_tracks_aspect() {
        let mut camera = PerspectiveCamera::new(Deg(75.0), 1.0, 0.1, 1000.0);
        let before = camera.projection_matrix();
        camera.aspect = 2.0;
        assert_eq!(camera.projection_matrix(), before);
        camera.update_projection_matrix();
        assert_ne!(camera.projection_matrix(), before);
        assert!(approx(camera.projection_matrix().x.x * 2.0, before.x.x));
    }

    #[test]
    fn test_unproject_center_lies_on_view_axis() {
        let mut camera = PerspectiveCamera::new(Deg(75.0), 1.5, 0.1, 1000.0);
        camera.position = Vector3::new(0.0, 0.0, 5.0);
        camera.look_at(Vector3::zero());

        let point = camera.unproject(Vector3::new(0.0, 0.0, 0.5)).unwrap();
        assert!(approx(point.x, 0.0));
        assert!(approx(point.y, 0.0));
        assert!(point.z < 5.0);
    }

    #[test]
    fn test_view_matrix_is_finite_when_on_target() {
        let camera = PerspectiveCamera {
            target: Vector3::zero(),
            ..PerspectiveCamera::new(Deg(75.0), 1.0, 0.1, 1000.0)
        };
        let view = camera.view_matrix();
        for column in [view.x, view.y, view.z, view.w] {
            assert!(column.x.is_finite() && column.y.is_finite());
            assert!(column.z.is_finite() && column.w.is_finite());
        }
    }
}
