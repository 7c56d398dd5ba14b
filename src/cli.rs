use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "whitted_tracer")]
#[command(about = "Recursive ray tracer with shadows, mirrors and glass")]
pub struct Args {
    /// Built-in scene to render
    #[arg(long, default_value = "glass")]
    pub scene: String,

    /// Image width in pixels
    #[arg(long, default_value_t = 400)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 300)]
    pub height: u32,

    /// Output PPM file
    #[arg(short, long, default_value = "out.ppm")]
    pub output: PathBuf,

    /// Maximum number of reflection/refraction bounces (clamped to 0..=6)
    #[arg(long, default_value_t = 4)]
    pub bounces: u32,

    /// Cast shadow rays towards every light
    #[arg(long)]
    pub shadows: bool,

    /// Render a jittered 3x3 sub-grid per pixel and average it
    #[arg(long)]
    pub jitter: bool,

    /// Gaussian-blur the supersampled image before downsampling
    #[arg(long)]
    pub filter: bool,

    /// Seed for jittered sampling
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Also write a depth image to this file
    #[arg(long, value_name = "FILE")]
    pub depth: Option<PathBuf>,

    /// Depth mapped to white
    #[arg(long, default_value_t = 8.0)]
    pub depth_min: f64,

    /// Depth mapped to black
    #[arg(long, default_value_t = 18.0)]
    pub depth_max: f64,

    /// Also write a normals image to this file
    #[arg(long, value_name = "FILE")]
    pub normals: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,
}
