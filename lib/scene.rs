use glam::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

use crate::camera::Camera;
use crate::scatter::Material;
use crate::sphere::Sphere;
use crate::world::World;
use crate::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scene {
    /// Ground plane, a field of small random spheres and three large ones.
    Showcase,
    /// Diffuse, hollow glass and brushed metal side by side.
    Trio,
}

impl Scene {
    pub fn build(self, seed: u64, aspect_ratio: f32) -> (World, Camera) {
        match self {
            Scene::Showcase => (showcase_world(seed), showcase_camera(aspect_ratio)),
            Scene::Trio => (trio_world(), trio_camera(aspect_ratio)),
        }
    }
}

fn random_color(rng: &mut StdRng, min: f32, max: f32) -> Color {
    Color::new(rng.gen_range(min..max), rng.gen_range(min..max), rng.gen_range(min..max))
}

fn showcase_world(seed: u64) -> World {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut world = World::new();

    world.push(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Material::lambertian(Color::new(0.5, 0.5, 0.5))),
    ));

    let glass = Arc::new(Material::dielectric(1.5));

    for a in -11..11 {
        for b in -11..11 {
            let choose: f32 = rng.gen();
            let center = Vec3::new((a as f32) + rng.gen_range(0.0..0.9), 0.2, (b as f32) + rng.gen_range(0.0..0.9));

            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let mat = if choose < 0.8 {
                let albedo = random_color(&mut rng, 0.0, 1.0) * random_color(&mut rng, 0.0, 1.0);
                Arc::new(Material::lambertian(albedo))
            } else if choose < 0.95 {
                let albedo = random_color(&mut rng, 0.5, 1.0);
                let fuzz = rng.gen_range(0.0..0.5);
                Arc::new(Material::metal(albedo, fuzz))
            } else {
                glass.clone()
            };

            world.push(Sphere::new(center, 0.2, mat));
        }
    }

    world.push(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, glass));
    world.push(Sphere::new(
        Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Material::lambertian(Color::new(0.4, 0.2, 0.1))),
    ));
    world.push(Sphere::new(
        Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Material::metal(Color::new(0.7, 0.6, 0.5), 0.0)),
    ));

    log::debug!("showcase scene built with {} spheres", world.surfaces.len());

    world
}

fn showcase_camera(aspect_ratio: f32) -> Camera {
    Camera::new(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y, 20.0, aspect_ratio, 0.1, 10.0)
}

fn trio_world() -> World {
    let ground = Arc::new(Material::lambertian(Color::new(0.8, 0.8, 0.0)));
    let center = Arc::new(Material::lambertian(Color::new(0.1, 0.2, 0.5)));
    let glass = Arc::new(Material::dielectric(1.5));
    let metal = Arc::new(Material::metal(Color::new(0.8, 0.6, 0.2), 0.3));

    let mut world = World::new();
    world.push(Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0, ground));
    world.push(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, center));
    world.push(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, glass.clone()));
    world.push(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), -0.4, glass));
    world.push(Sphere::new(Vec3::new(1.0, 0.0, -1.0), 0.5, metal));
    world
}

fn trio_camera(aspect_ratio: f32) -> Camera {
    Camera::new(Vec3::new(-2.0, 2.0, 1.0), Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 30.0, aspect_ratio, 0.0, 3.4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showcase_is_reproducible_from_seed() {
        let (a, _) = Scene::Showcase.build(3, 1.5);
        let (b, _) = Scene::Showcase.build(3, 1.5);

        assert_eq!(a.surfaces.len(), b.surfaces.len());
        assert!(a.surfaces.len() > 4);
        assert!(a.surfaces.len() <= 4 + 22 * 22);
    }

    #[test]
    fn trio_has_hollow_glass() {
        let (world, _) = Scene::Trio.build(0, 16.0 / 9.0);
        assert_eq!(world.surfaces.len(), 5);
    }
}
