//! Error type shared by both combining tools.

use std::io;
use std::path::PathBuf;

use image::ImageError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CombinerError>;

/// Everything that can abort a run. None of these are retried.
#[derive(Debug, Error)]
pub enum CombinerError {
    #[error("Invalid color '{token}': expected an SVG color name or 6/12 hex digits")]
    InvalidColor { token: String },

    #[error("Expected <image> <color> pairs followed by an output path, got {count} arguments")]
    WrongArgumentCount { count: usize },

    #[error("An image must be supplied for every color (missing {channel})")]
    MissingChannel { channel: &'static str },

    #[error("An output filename is required")]
    MissingOutput,

    #[error("Using more than 3 channels is unsupported (got {count})")]
    TooManyChannels { count: usize },

    #[error("Bad channel index {index}")]
    BadChannel { index: usize },

    #[error("No input images were given")]
    NoInputs,

    #[error("Cannot create a {width}x{height} canvas")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("Failed opening {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed decoding {}: unrecognized image format: {source}", path.display())]
    UnknownFormat {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("Failed decoding {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("Error opening output file {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed creating output JPEG image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

impl CombinerError {
    /// True for mistakes in the command line, which get a usage banner.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            CombinerError::InvalidColor { .. }
                | CombinerError::WrongArgumentCount { .. }
                | CombinerError::MissingChannel { .. }
                | CombinerError::MissingOutput
                | CombinerError::TooManyChannels { .. }
        )
    }
}
