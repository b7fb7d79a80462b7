use crate::materials::{DielectricMaterial, LambertianMaterial, MetalMaterial};
use crate::ray::Ray;
use crate::surface::SurfaceIntersection;
use crate::util::Sampler;
use crate::Color;

/// Light transport at a surface.
///
/// Returns the attenuation and the continuing ray, or `None` when the surface
/// absorbs the ray and the path ends there.
pub trait Scatter: Send + Sync {
    fn scatter<S: Sampler + ?Sized>(
        &self,
        r: &Ray,
        intersection: &SurfaceIntersection,
        sampler: &mut S,
    ) -> Option<(Color, Ray)>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    Lambertian(LambertianMaterial),
    Metal(MetalMaterial),
    Dielectric(DielectricMaterial),
}

impl Material {
    pub fn lambertian(albedo: Color) -> Material {
        Material::Lambertian(LambertianMaterial::new(albedo))
    }

    pub fn metal(albedo: Color, fuzz: f32) -> Material {
        Material::Metal(MetalMaterial::new(albedo, fuzz))
    }

    pub fn dielectric(index_of_refraction: f32) -> Material {
        Material::Dielectric(DielectricMaterial::new(index_of_refraction))
    }
}

impl Scatter for Material {
    fn scatter<S: Sampler + ?Sized>(
        &self,
        r: &Ray,
        intersection: &SurfaceIntersection,
        sampler: &mut S,
    ) -> Option<(Color, Ray)> {
        match self {
            Material::Lambertian(m) => m.scatter(r, intersection, sampler),
            Material::Metal(m) => m.scatter(r, intersection, sampler),
            Material::Dielectric(m) => m.scatter(r, intersection, sampler),
        }
    }
}
