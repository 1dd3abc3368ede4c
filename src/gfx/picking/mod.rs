//! # Object Picking System
//!
//! Ray casting from a screen position into the scene.
//!
//! ## How it works
//!
//! 1. **Pointer to Ray**: normalized device coordinates are unprojected through
//!    the camera into a world-space ray starting at the camera position
//! 2. **Ray-Object Intersection**: the ray is moved into each object's local
//!    space and tested against the object's bounding box, so rotated cubes are
//!    hit exactly
//! 3. **Ordering**: every hit is returned, nearest first
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::{Deg, Vector2, Vector3};
//! use orbit_cube::gfx::{
//!     camera::PerspectiveCamera,
//!     geometry::generate_cube,
//!     picking::Raycaster,
//!     scene::{Material, Object, Scene},
//! };
//!
//! let mut scene = Scene::new();
//! let material = scene.add_material(Material::basic(0x00ff00));
//! scene.add(Object::new("cube", generate_cube(), material));
//!
//! let mut camera = PerspectiveCamera::new(Deg(75.0), 1.0, 0.1, 1000.0);
//! camera.position = Vector3::new(0.0, 0.0, 5.0);
//! camera.look_at(Vector3::new(0.0, 0.0, 0.0));
//!
//! let raycaster = Raycaster::from_camera(Vector2::new(0.0, 0.0), &camera).unwrap();
//! assert_eq!(raycaster.intersect_objects(&scene).len(), 1);
//! ```

use cgmath::{InnerSpace, Matrix4, SquareMatrix, Vector2, Vector3, Zero};

use crate::gfx::{
    camera::PerspectiveCamera,
    scene::{MaterialId, ObjectId, Scene},
};

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin point in world space
    pub origin: Vector3<f32>,
    /// Ray direction (normalized)
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Create a new ray
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box for intersection testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl Aabb {
    /// Create a new AABB
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Create AABB from a set of vertices
    pub fn from_vertices(vertices: &[[f32; 3]]) -> Self {
        let Some(first) = vertices.first() else {
            return Self::new(Vector3::zero(), Vector3::zero());
        };

        let mut min = Vector3::from(*first);
        let mut max = min;

        for vertex in vertices.iter().skip(1) {
            min.x = min.x.min(vertex[0]);
            min.y = min.y.min(vertex[1]);
            min.z = min.z.min(vertex[2]);
            max.x = max.x.max(vertex[0]);
            max.y = max.y.max(vertex[1]);
            max.z = max.z.max(vertex[2]);
        }

        Self::new(min, max)
    }

    /// Slab test against a ray whose direction need not be normalized.
    ///
    /// Returns the ray parameter of the first hit in front of the origin, or
    /// the exit parameter when the origin is inside the box.
    fn intersect(&self, origin: Vector3<f32>, direction: Vector3<f32>) -> Option<f32> {
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;

        for axis in 0..3 {
            let (o, d) = (origin[axis], direction[axis]);
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if d.abs() <= f32::EPSILON {
                // Parallel to this slab: must already be between its planes
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let t1 = (lo - o) / d;
            let t2 = (hi - o) / d;
            t_near = t_near.max(t1.min(t2));
            t_far = t_far.min(t1.max(t2));
        }

        if t_near <= t_far && t_far >= 0.0 {
            Some(if t_near >= 0.0 { t_near } else { t_far })
        } else {
            None
        }
    }

    /// Test ray-AABB intersection
    /// Returns the distance to intersection point, or None if no intersection
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        self.intersect(ray.origin, ray.direction)
    }
}

/// One object hit by a ray
#[derive(Debug, Clone)]
pub struct Intersection {
    pub object: ObjectId,
    pub material: MaterialId,
    /// Distance from the ray origin to the hit point
    pub distance: f32,
    /// World space intersection point
    pub point: Vector3<f32>,
}

/// Casts rays from the camera through screen positions
#[derive(Debug, Clone, Copy)]
pub struct Raycaster {
    pub ray: Ray,
}

impl Raycaster {
    /// Builds the ray through `ndc` (both axes in `-1..1`, y up).
    ///
    /// Returns `None` if the camera matrices cannot be inverted.
    pub fn from_camera(ndc: Vector2<f32>, camera: &PerspectiveCamera) -> Option<Self> {
        let through = camera.unproject(Vector3::new(ndc.x, ndc.y, 0.5))?;
        let direction = through - camera.position;
        if direction.magnitude2() <= f32::EPSILON {
            return None;
        }
        Some(Self {
            ray: Ray::new(camera.position, direction),
        })
    }

    /// Every visible object the ray passes through, nearest first
    pub fn intersect_objects(&self, scene: &Scene) -> Vec<Intersection> {
        let mut hits: Vec<Intersection> = scene
            .children_with_ids()
            .filter(|(_, object)| object.visible)
            .filter_map(|(id, object)| {
                let distance =
                    self.intersect_transformed(object.geometry.bounds(), object.transform())?;
                Some(Intersection {
                    object: id,
                    material: object.material,
                    distance,
                    point: self.ray.point_at(distance),
                })
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    /// Materials of the hit objects that can be recolored, nearest first.
    ///
    /// Hits on objects with any other material are dropped.
    pub fn intersect_colorable(&self, scene: &Scene) -> Vec<MaterialId> {
        self.intersect_objects(scene)
            .into_iter()
            .filter_map(|hit| scene.colorable_material_of(hit.object))
            .collect()
    }

    /// Intersects a local-space box placed in the world by `transform`.
    fn intersect_transformed(&self, bounds: Aabb, transform: Matrix4<f32>) -> Option<f32> {
        let inverse = transform.invert()?;
        let local_origin = (inverse * self.ray.origin.extend(1.0)).truncate();
        let local_direction = (inverse * self.ray.direction.extend(0.0)).truncate();

        let t = bounds.intersect(local_origin, local_direction)?;
        // The ray parameter carries over unchanged; measure the distance in world space
        let world_point = transform * (local_origin + local_direction * t).extend(1.0);
        Some((world_point.truncate() - self.ray.origin).magnitude())
    }
}
