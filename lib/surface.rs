use std::sync::Arc;

use crate::ray::Ray;
use crate::scatter::Material;
use glam::*;

pub trait Surface: Send + Sync {
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection>;
}

/// Hit record handed to a material.
///
/// `normal` is unit length and always points against the incoming ray;
/// `facing` tells whether that is the outward side of the surface.
pub struct SurfaceIntersection {
    pub p: Vec3,
    pub normal: Vec3,
    pub facing: bool,
    pub material: Arc<Material>,
    pub t: f32,
}

impl SurfaceIntersection {
    pub fn new(r: &Ray, p: Vec3, t: f32, outward_normal: Vec3, material: Arc<Material>) -> SurfaceIntersection {
        let facing = r.direction.dot(outward_normal) < 0.0;
        let normal = if facing { outward_normal } else { -outward_normal };

        SurfaceIntersection { p, normal, facing, material, t }
    }
}
