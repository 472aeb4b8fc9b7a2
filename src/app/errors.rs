use std::path::PathBuf;

use thiserror::Error;

use crate::library::CompositeError;

#[derive(Error, Debug)]
pub enum AppError {
    /////////////////////////////////
    // Argument parsing
    #[error("Args file not found at {0}")]
    ArgsFileNotFound(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse args file at given location: {0}: {1}")]
    ArgsFileParse(PathBuf, String),

    #[error("Could not parse {0}: {1}")]
    ParseNumber(&'static str, String),

    #[error("Could not parse {0}: expected three values between 0 and 255, got {1}")]
    ParseColor(&'static str, String),

    #[error("--line-width must be at least 1")]
    ZeroLineWidth,

    #[error("Expected one or two paths in --file, got {0}")]
    InputCount(usize),

    /////////////////////////////////
    // Loading the input images
    #[error("Failed to read image header: {0}")]
    InputProbe(PathBuf, #[source] image::ImageError),

    #[error("Failed to decode image: {0}")]
    InputDecode(PathBuf, #[source] image::ImageError),

    /////////////////////////////////
    // Building the composite
    #[error(transparent)]
    Composite(#[from] CompositeError),

    /////////////////////////////////
    // Output
    #[error("Failed to write output image to {0}")]
    WriteOutput(PathBuf, #[source] image::ImageError),

    #[error("Failed to show output image: {0}")]
    ShowImage(String),

    #[error("Failed to print summary: {0}")]
    JsonOutput(#[from] serde_json::Error),
}

impl AppError {
    //Problems with the given image files, as opposed to problems with the options.
    pub fn is_input_error(&self) -> bool {
        match self {
            Self::InputCount(_) | Self::InputProbe(..) | Self::InputDecode(..) => true,
            Self::Composite(e) => e.is_input_error(),
            _ => false,
        }
    }
}
