use image::Rgb;

// Guide line defaults
pub const DEFAULT_LINE_COUNT: u32 = 10;
pub const DEFAULT_LINE_WIDTH: u32 = 3;
pub const DEFAULT_LINE_RGB: Rgb<u8> = Rgb([0, 0, 0]);

// Padding between the two images. Zero means the images touch.
pub const DEFAULT_INTERVAL: u32 = 0;
pub const DEFAULT_INTERVAL_RGB: Rgb<u8> = Rgb([0, 0, 0]);

//The canvas is always cleared to this before anything is pasted onto it, so that rows below
//a shorter image have a defined value.
pub const CANVAS_BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

// Stereo pairs: never more than left + right.
pub const MAX_INPUT_IMAGES: usize = 2;

pub const DEFAULT_OUTPUT_PATH: &str = "concatenated.jpg";
