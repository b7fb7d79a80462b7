use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::SurfaceIntersection;
use crate::util::{is_near_zero, Sampler};
use crate::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LambertianMaterial {
    pub albedo: Color,
}

impl LambertianMaterial {
    pub fn new(albedo: Color) -> LambertianMaterial {
        LambertianMaterial { albedo }
    }
}

impl Scatter for LambertianMaterial {
    fn scatter<S: Sampler + ?Sized>(
        &self,
        _r: &Ray,
        intersection: &SurfaceIntersection,
        sampler: &mut S,
    ) -> Option<(Color, Ray)> {
        let mut scattered_direction = intersection.normal + sampler.on_unit_sphere();

        if is_near_zero(scattered_direction) {
            scattered_direction = intersection.normal
        }

        let scattered = Ray::new(intersection.p, scattered_direction);

        return Some((self.albedo, scattered));
    }
}
