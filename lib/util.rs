use glam::*;
use rand::Rng;
use rand_distr::*;

/// Source of the random draws consumed by scattering and ray generation.
///
/// Every `rand::Rng` is a sampler. Callers own their generator and pass it
/// down explicitly, so each worker thread can carry its own.
pub trait Sampler {
    /// Uniform scalar in `[0, 1)`.
    fn uniform(&mut self) -> f32;
    fn in_unit_disc(&mut self) -> Vec2;
    fn in_unit_sphere(&mut self) -> Vec3;
    fn on_unit_sphere(&mut self) -> Vec3;
}

impl<R: Rng + ?Sized> Sampler for R {
    fn uniform(&mut self) -> f32 {
        self.gen()
    }

    fn in_unit_disc(&mut self) -> Vec2 {
        let p: [f32; 2] = UnitDisc.sample(self);
        Vec2::from(p)
    }

    fn in_unit_sphere(&mut self) -> Vec3 {
        let p: [f32; 3] = UnitBall.sample(self);
        Vec3::from(p)
    }

    fn on_unit_sphere(&mut self) -> Vec3 {
        let p: [f32; 3] = UnitSphere.sample(self);
        Vec3::from(p)
    }
}

pub fn is_near_zero(v: Vec3) -> bool {
    return v.abs_diff_eq(Vec3::ZERO, f32::EPSILON);
}

pub fn reflect(v: Vec3, normal: Vec3) -> Vec3 {
    return v - (2.0 * v.dot(normal) * normal);
}

/// Snell refraction of the unit vector `uv` through a surface with unit `normal`.
/// `ratio` is the incident index over the transmitted index.
pub fn refract(uv: Vec3, normal: Vec3, ratio: f32) -> Vec3 {
    let cos_theta = (-uv).dot(normal).min(1.0);
    let r_perp = (uv + cos_theta * normal) * ratio;
    let r_para = -(1.0 - r_perp.length_squared()).abs().sqrt() * normal;
    return r_perp + r_para;
}
