mod dielectric;
mod lambertian;
mod metal;

pub use dielectric::{reflectance, DielectricMaterial};
pub use lambertian::LambertianMaterial;
pub use metal::MetalMaterial;
