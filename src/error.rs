use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a depth conversion
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Input path does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read depth image {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to list directory {}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown colormap '{name}' (available: {available})")]
    UnknownColormap { name: String, available: String },

    #[error("Invalid depth bounds: min {min} must be finite and not exceed max {max}")]
    InvalidBounds { min: f32, max: f32 },

    #[error("Failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
