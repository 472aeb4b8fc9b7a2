use std::path::PathBuf;

use image::Rgb;

use super::definitions::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeCfg {
    pub line_count: u32,
    pub line_width: u32,
    pub line_rgb: Rgb<u8>,

    pub interval: u32,
    pub interval_rgb: Rgb<u8>,
}

impl Default for CompositeCfg {
    fn default() -> Self {
        Self {
            line_count: DEFAULT_LINE_COUNT,
            line_width: DEFAULT_LINE_WIDTH,
            line_rgb: DEFAULT_LINE_RGB,
            interval: DEFAULT_INTERVAL,
            interval_rgb: DEFAULT_INTERVAL_RGB,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputCfg {
    pub image_paths: Vec<PathBuf>,
}
