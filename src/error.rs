use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("depth range is empty: min {min} must be below max {max}")]
    InvalidDepthRange { min: f64, max: f64 },

    #[error("unknown scene `{0}` (available: {available})", available = crate::scenes::NAMES.join(", "))]
    UnknownScene(String),

    #[error("failed to write image: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
