use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompositeError {
    /////////////////////////////////
    // Bad input images
    #[error("Expected one or two input images, got {0}")]
    ImageCount(usize),

    #[error("Input image {index} is empty ({width}x{height})")]
    EmptyImage { index: usize, width: u32, height: u32 },

    #[error("The composite is too wide to allocate with an interval of {interval} pixels")]
    CompositeTooLarge { interval: u32 },

    /////////////////////////////////
    // Impossible line geometry
    #[error(
        "Lines of width {line_width} would overlap: {line_count} lines across a height of {height} are only {line_interval} pixels apart"
    )]
    LineOverlap {
        line_width: u32,
        line_interval: u32,
        line_count: u32,
        height: u32,
    },

    /////////////////////////////////
    // Should never happen as the canvas is sized to fit every image.
    #[error("Internal error pasting an image onto the canvas")]
    Paste(#[from] image::ImageError),
}

impl CompositeError {
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::ImageCount(_) | Self::EmptyImage { .. } | Self::CompositeTooLarge { .. }
        )
    }
}
