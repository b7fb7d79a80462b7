use glam::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::camera::Camera;
use crate::image::Image;
use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::Surface;
use crate::util::Sampler;
use crate::Color;

/// Hits closer than this are treated as self-intersection and skipped.
const T_MIN: f32 = 0.001;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    pub seed: u64,
}

pub fn background(ray: &Ray) -> Color {
    const COLOR_T: Color = Color::new(0.5, 0.7, 1.0);
    const COLOR_B: Color = Color::new(1.0, 1.0, 1.0);

    let ray_dir_normalized = ray.direction.normalize();

    let t = 0.5 * (ray_dir_normalized.y + 1.0);

    return Vec3::lerp(COLOR_B, COLOR_T, t);
}

/// Radiance arriving along `ray`, following at most `depth` bounces.
pub fn trace<W, S>(world: &W, ray: &Ray, depth: u32, sampler: &mut S) -> Color
where
    W: Surface + ?Sized,
    S: Sampler + ?Sized,
{
    let mut ray = *ray;
    let mut throughput = Color::ONE;

    for _ in 0..depth {
        let Some(intersection) = world.raycast(&ray, T_MIN, f32::MAX) else {
            return throughput * background(&ray);
        };

        match intersection.material.scatter(&ray, &intersection, sampler) {
            Some((attenuation, scattered)) => {
                throughput *= attenuation;
                ray = scattered;
            }
            None => return Color::ZERO,
        }
    }

    Color::ZERO
}

/// Renders the image in parallel, one task per row.
///
/// Each row draws from its own generator seeded from `settings.seed` and the
/// row index, so the output does not depend on how rayon schedules rows.
pub fn render<W>(world: &W, camera: &Camera, settings: &RenderSettings) -> Image
where
    W: Surface + ?Sized,
{
    let RenderSettings { width, height, samples_per_pixel, max_depth, seed } = *settings;

    log::info!(
        "rendering {width}x{height} at {samples_per_pixel} samples per pixel, depth {max_depth}, seed {seed}"
    );

    let rows_done = AtomicUsize::new(0);

    let pixels: Vec<Color> = (0..height)
        .into_par_iter()
        .flat_map_iter(|row| {
            let mut rng = StdRng::seed_from_u64(row_seed(seed, row));
            let y = height - 1 - row;

            let scanline: Vec<Color> = (0..width)
                .map(|x| {
                    let mut c = Color::ZERO;

                    // random multisampling
                    for _ in 0..samples_per_pixel {
                        let u = (x as f32 + rng.uniform()) / (width.max(2) - 1) as f32;
                        let v = (y as f32 + rng.uniform()) / (height.max(2) - 1) as f32;
                        let ray = camera.create_ray(u, v, &mut rng);

                        c += trace(world, &ray, max_depth, &mut rng);
                    }

                    c / samples_per_pixel.max(1) as f32
                })
                .collect();

            let done = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
            log::debug!("scanline {row} done ({done}/{height})");

            scanline
        })
        .collect();

    log::info!("render finished");

    Image::new(width, height, pixels)
}

fn row_seed(seed: u64, row: usize) -> u64 {
    seed ^ (row as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scatter::Material;
    use crate::sphere::Sphere;
    use crate::util::tests::ScriptedSampler;
    use crate::world::World;
    use std::sync::Arc;

    fn single(material: Material) -> World {
        let mut world = World::new();
        world.push(Sphere::new(Vec3::new(0.0, 0.0, -2.0), 1.0, Arc::new(material)));
        world
    }

    #[test]
    fn zero_depth_is_black() {
        let world = World::new();
        let r = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(trace(&world, &r, 0, &mut ScriptedSampler::default()), Color::ZERO);
    }

    #[test]
    fn miss_returns_sky() {
        let world = World::new();
        let mut sampler = ScriptedSampler::default();

        let up = trace(&world, &Ray::new(Vec3::ZERO, Vec3::Y), 5, &mut sampler);
        let down = trace(&world, &Ray::new(Vec3::ZERO, -Vec3::Y), 5, &mut sampler);
        assert!(up.abs_diff_eq(Color::new(0.5, 0.7, 1.0), 1e-6));
        assert!(down.abs_diff_eq(Color::ONE, 1e-6));
    }

    #[test]
    fn mirror_bounce_multiplies_albedo_into_sky() {
        let world = single(Material::metal(Color::new(0.8, 0.6, 0.2), 0.0));
        let r = Ray::new(Vec3::ZERO, -Vec3::Z);

        // reflected straight back along +z, which is the horizon color
        let c = trace(&world, &r, 5, &mut ScriptedSampler::default());
        let horizon = background(&Ray::new(Vec3::ZERO, Vec3::Z));
        assert!(c.abs_diff_eq(Color::new(0.8, 0.6, 0.2) * horizon, 1e-6));
    }

    #[test]
    fn absorbed_path_is_black() {
        let world = single(Material::metal(Color::ONE, 1.0));
        let r = Ray::new(Vec3::ZERO, -Vec3::Z);
        let mut sampler = ScriptedSampler::with_vectors(&[-Vec3::Z]);

        assert_eq!(trace(&world, &r, 5, &mut sampler), Color::ZERO);
    }

    #[test]
    fn depth_limit_terminates_between_mirrors() {
        let mirror = Arc::new(Material::metal(Color::ONE, 0.0));
        let mut world = World::new();
        world.push(Sphere::new(Vec3::new(0.0, 0.0, -1001.0), 1000.0, mirror.clone()));
        world.push(Sphere::new(Vec3::new(0.0, 0.0, 1001.0), 1000.0, mirror));

        let r = Ray::new(Vec3::ZERO, -Vec3::Z);
        assert_eq!(trace(&world, &r, 10, &mut ScriptedSampler::default()), Color::ZERO);
    }

    #[test]
    fn same_seed_renders_identically() {
        let world = single(Material::lambertian(Color::splat(0.5)));
        let camera = Camera::new(Vec3::ZERO, -Vec3::Z, Vec3::Y, 90.0, 1.0, 0.1, 2.0);
        let settings = RenderSettings { width: 8, height: 6, samples_per_pixel: 4, max_depth: 4, seed: 42 };

        let a = render(&world, &camera, &settings);
        let b = render(&world, &camera, &settings);

        assert_eq!(a.width, 8);
        assert_eq!(a.height, 6);
        assert_eq!(a.pixels.len(), 48);
        assert_eq!(a.pixels, b.pixels);
    }
}
