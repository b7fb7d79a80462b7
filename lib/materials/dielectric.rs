use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::SurfaceIntersection;
use crate::util::{reflect, refract, Sampler};
use crate::Color;

/// Clear dielectric such as glass or water. Assumes the medium outside is air (index 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DielectricMaterial {
    pub index_of_refraction: f32,
}

impl DielectricMaterial {
    pub fn new(index_of_refraction: f32) -> DielectricMaterial {
        DielectricMaterial { index_of_refraction }
    }

    fn refraction_ratio(&self, facing: bool) -> f32 {
        if facing {
            1.0 / self.index_of_refraction
        } else {
            self.index_of_refraction
        }
    }
}

impl Scatter for DielectricMaterial {
    fn scatter<S: Sampler + ?Sized>(
        &self,
        r: &Ray,
        intersection: &SurfaceIntersection,
        sampler: &mut S,
    ) -> Option<(Color, Ray)> {
        let refraction_ratio = self.refraction_ratio(intersection.facing);

        let r_direction_norm = r.direction.normalize();

        let cos_theta = intersection.normal.dot(-r_direction_norm).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let cannot_refract = refraction_ratio * sin_theta > 1.0;
        let schlick_approx = reflectance(cos_theta, refraction_ratio);

        // one draw per call, even under total internal reflection
        let u = sampler.uniform();

        let scattered_direction = if cannot_refract || u < schlick_approx {
            reflect(r_direction_norm, intersection.normal)
        } else {
            refract(r_direction_norm, intersection.normal, refraction_ratio)
        };

        let scattered = Ray::new(intersection.p, scattered_direction);

        Some((Color::ONE, scattered))
    }
}

/// Schlick's approximation of the Fresnel reflectance.
pub fn reflectance(cos_theta: f32, refraction_ratio: f32) -> f32 {
    let r = ((1.0 - refraction_ratio) / (1.0 + refraction_ratio)).powi(2);
    return r + (1.0 - r) * (1.0 - cos_theta).powi(5);
}
