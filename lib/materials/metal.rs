use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::SurfaceIntersection;
use crate::util::{reflect, Sampler};
use crate::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetalMaterial {
    pub albedo: Color,
    fuzz: f32,
}

impl MetalMaterial {
    /// Fuzz above 1 is clamped to 1. Negative fuzz is kept as given.
    pub fn new(albedo: Color, fuzz: f32) -> MetalMaterial {
        MetalMaterial { albedo, fuzz: fuzz.min(1.0) }
    }

    pub fn fuzz(&self) -> f32 {
        self.fuzz
    }
}

impl Scatter for MetalMaterial {
    fn scatter<S: Sampler + ?Sized>(
        &self,
        r: &Ray,
        intersection: &SurfaceIntersection,
        sampler: &mut S,
    ) -> Option<(Color, Ray)> {
        let reflected_direction = reflect(r.direction.normalize(), intersection.normal);
        let scattered_direction = if self.fuzz == 0.0 {
            reflected_direction
        } else {
            reflected_direction + sampler.in_unit_sphere() * self.fuzz
        };
        let scattered = Ray::new(intersection.p, scattered_direction);

        return if scattered.direction.dot(intersection.normal) > 0.0 { Some((self.albedo, scattered)) } else { None };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::fixtures::hit;
    use crate::scatter::Material;
    use crate::util::tests::ScriptedSampler;
    use glam::*;

    #[test]
    fn clamps_fuzz_above_one() {
        assert_eq!(MetalMaterial::new(Color::ONE, 3.5).fuzz(), 1.0);
        assert_eq!(MetalMaterial::new(Color::ONE, 1.0).fuzz(), 1.0);
        assert_eq!(MetalMaterial::new(Color::ONE, 0.3).fuzz(), 0.3);
        assert_eq!(MetalMaterial::new(Color::ONE, -0.2).fuzz(), -0.2);
    }

    #[test]
    fn mirror_reflects_head_on_ray() {
        let material = MetalMaterial::new(Color::ONE, 0.0);
        let r = Ray::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::X);
        let rec = hit(&r, -Vec3::X, Material::Metal(material));
        let mut sampler = ScriptedSampler::default();

        let (attenuation, scattered) = material.scatter(&r, &rec, &mut sampler).unwrap();
        assert_eq!(attenuation, Color::ONE);
        assert_eq!(scattered.direction, Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn zero_fuzz_is_exact_mirror_and_ignores_sampler() {
        let material = MetalMaterial::new(Color::new(0.7, 0.6, 0.5), 0.0);
        let r = Ray::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(3.0, -4.0, 0.0));
        let rec = hit(&r, Vec3::Y, Material::Metal(material));
        let mut sampler = ScriptedSampler::default();

        let (attenuation, scattered) = material.scatter(&r, &rec, &mut sampler).unwrap();
        assert_eq!(attenuation, Color::new(0.7, 0.6, 0.5));
        assert!(scattered.direction.abs_diff_eq(Vec3::new(0.6, 0.8, 0.0), 1e-6));
    }

    #[test]
    fn fuzz_perturbs_reflection() {
        let material = MetalMaterial::new(Color::ONE, 0.5);
        let r = Ray::new(Vec3::Y, -Vec3::Y);
        let rec = hit(&r, Vec3::Y, Material::Metal(material));
        let mut sampler = ScriptedSampler::with_vectors(&[Vec3::X]);

        let (_, scattered) = material.scatter(&r, &rec, &mut sampler).unwrap();
        assert!(scattered.direction.abs_diff_eq(Vec3::new(0.5, 1.0, 0.0), 1e-6));
    }

    #[test]
    fn absorbs_when_perturbation_points_below_surface() {
        let material = MetalMaterial::new(Color::ONE, 1.5);
        let r = Ray::new(Vec3::Y, -Vec3::Y);
        let rec = hit(&r, Vec3::Y, Material::Metal(material));
        let mut sampler = ScriptedSampler::with_vectors(&[-Vec3::Y]);

        assert!(material.scatter(&r, &rec, &mut sampler).is_none());
    }

    #[test]
    fn absorbs_grazing_reflection_pushed_under() {
        let material = MetalMaterial::new(Color::ONE, 0.5);
        let r = Ray::new(Vec3::ZERO, Vec3::new(1.0, -0.01, 0.0));
        let rec = hit(&r, Vec3::Y, Material::Metal(material));
        let mut sampler = ScriptedSampler::with_vectors(&[Vec3::new(0.0, -0.9, 0.0)]);

        assert!(material.scatter(&r, &rec, &mut sampler).is_none());
    }
}
