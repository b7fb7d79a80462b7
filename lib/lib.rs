pub mod camera;
pub mod image;
pub mod materials;
pub mod ray;
pub mod render;
pub mod scatter;
pub mod scene;
pub mod sphere;
pub mod surface;
pub mod util;
pub mod world;

/// Linear RGB, used both for attenuation and radiance.
pub type Color = glam::Vec3;

pub use materials::{DielectricMaterial, LambertianMaterial, MetalMaterial};
pub use scatter::{Material, Scatter};
