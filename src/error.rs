//! Errors raised while labeling a single file.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabelError {
    /// The input could not be opened or decoded.
    #[error("No image data for {}, skipping... ({source})", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The input path has no file stem to name outputs after.
    #[error("Cannot derive an output name from {}", .0.display())]
    InvalidInput(PathBuf),

    #[error("Failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write mask {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Window creation or update failed.
    #[error("Display error: {0}")]
    Display(String),
}

impl From<minifb::Error> for LabelError {
    fn from(e: minifb::Error) -> Self {
        LabelError::Display(e.to_string())
    }
}
