use clap::{Parser, ValueEnum};
use eyre::{ensure, WrapErr};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use weekend_materials::render::{render, RenderSettings};
use weekend_materials::scene::Scene;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SceneArg {
    Showcase,
    Trio,
}

impl From<SceneArg> for Scene {
    fn from(value: SceneArg) -> Self {
        match value {
            SceneArg::Showcase => Scene::Showcase,
            SceneArg::Trio => Scene::Trio,
        }
    }
}

/// Renders a sphere scene made of diffuse, metal and glass materials to a PPM file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Image width in pixels.
    #[arg(long, default_value_t = 400)]
    width: usize,

    /// Width over height.
    #[arg(long, default_value_t = 1.5)]
    aspect_ratio: f32,

    /// Samples per pixel.
    #[arg(long, default_value_t = 20)]
    samples: u32,

    /// Maximum number of bounces per path.
    #[arg(long, default_value_t = 5)]
    depth: u32,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, value_enum, default_value_t = SceneArg::Showcase)]
    scene: SceneArg,

    #[arg(short, long, default_value = "image.ppm")]
    output: PathBuf,
}

impl Args {
    fn settings(&self) -> color_eyre::Result<RenderSettings> {
        ensure!(self.width > 0, "width must be positive");
        ensure!(self.aspect_ratio > 0.0, "aspect ratio must be positive, got {}", self.aspect_ratio);
        ensure!(self.samples > 0, "at least one sample per pixel is needed");
        ensure!(self.depth > 0, "depth must be positive");

        let height = (self.width as f32 / self.aspect_ratio) as usize;
        ensure!(height > 0, "a width of {} at aspect ratio {} leaves no rows", self.width, self.aspect_ratio);

        Ok(RenderSettings {
            width: self.width,
            height,
            samples_per_pixel: self.samples,
            max_depth: self.depth,
            seed: self.seed,
        })
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = args.settings()?;

    let (world, camera) = Scene::from(args.scene).build(args.seed, args.aspect_ratio);

    let started = Instant::now();
    let image = render(&world, &camera, &settings);
    log::info!("rendered in {:.2?}", started.elapsed());

    let file = File::create(&args.output).wrap_err_with(|| format!("creating {}", args.output.display()))?;
    image
        .write_ppm(&mut BufWriter::new(file))
        .wrap_err_with(|| format!("writing {}", args.output.display()))?;

    log::info!("wrote {}", args.output.display());

    Ok(())
}
