mod camera;
mod cli;
mod color;
mod config;
mod error;
mod hittable;
mod hittable_list;
mod image;
mod interval;
mod light;
mod logger;
mod material;
mod optics;
mod plane;
mod prelude;
mod ray;
mod render;
mod scene;
mod scenes;
mod sphere;
mod tracer;
mod triangle;
mod vec3;

use clap::Parser;
use cli::Args;
use config::RenderConfig;
use log::{error, info};
use logger::init_logger;
use std::process::ExitCode;

fn run(args: &Args) -> error::Result<()> {
    let config = RenderConfig::try_from(args)?;
    let (camera, scene) = scenes::build(&args.scene, config.width, config.height)?;
    info!("scene `{}` with {} lights", args.scene, scene.lights().len());

    let output = render::render(&camera, &scene, &config);

    output.color.save(&args.output)?;
    info!("wrote {}", args.output.display());

    if let (Some(img), Some(depth)) = (&output.depth, &config.depth) {
        img.save(&depth.path)?;
        info!("wrote depth to {}", depth.path.display());
    }
    if let (Some(img), Some(path)) = (&output.normals, &config.normals) {
        img.save(path)?;
        info!("wrote normals to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.log_level.into());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
