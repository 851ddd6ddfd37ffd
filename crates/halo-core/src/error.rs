use thiserror::Error;

#[derive(Error, Debug)]
pub enum HaloError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Frame buffer size mismatch: expected {expected} values, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HaloError>;
