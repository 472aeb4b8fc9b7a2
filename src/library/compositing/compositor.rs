use std::convert::TryFrom;

use crate::library::{
    definitions::{CANVAS_BACKGROUND, MAX_INPUT_IMAGES},
    errors::CompositeError,
    img_ops::{blank_canvas, draw_horizontal_line, fill_block, paste, RgbImgBuf},
    CompositeCfg,
};

use super::line_layout::line_offsets;

/// Joins the images side by side (left to right, top-aligned) and draws evenly spaced horizontal
/// guide lines across the result.
///
/// When two images are given and `cfg.interval` is nonzero, a block of `cfg.interval_rgb` is
/// inserted between them. Rows below a shorter image are left black.
///
/// The line geometry is checked before the canvas is allocated, so on error nothing is drawn.
/// The input images are never modified.
pub fn compose(images: &[RgbImgBuf], cfg: &CompositeCfg) -> Result<RgbImgBuf, CompositeError> {
    check_images(images)?;

    let (total_width, max_height) = composite_dimensions(images, cfg.interval)?;

    //bail before allocating anything if the lines cannot fit.
    let offsets = line_offsets(max_height, cfg)?;

    let mut canvas = blank_canvas(total_width, max_height, CANVAS_BACKGROUND);

    let mut x_offset = 0;
    for (i, img) in images.iter().enumerate() {
        if i > 0 && cfg.interval > 0 {
            fill_block(&mut canvas, x_offset, 0, cfg.interval, max_height, cfg.interval_rgb);
            x_offset += cfg.interval;
        }

        paste(&mut canvas, img, x_offset, 0)?;
        x_offset += img.width();
    }

    for y in offsets {
        draw_horizontal_line(&mut canvas, y, cfg.line_width, cfg.line_rgb);
    }

    trace!(
        "Composed {} image(s) into {}x{} with {} lines",
        images.len(),
        total_width,
        max_height,
        cfg.line_count
    );

    Ok(canvas)
}

/// Width and height of the composite for images of the given dimensions.
///
/// The width is the sum of the widths plus one interval between each pair of neighbours, and
/// the height is the tallest of the images. Fails if the width does not fit in a `u32`.
pub fn composite_dimensions_of(
    dimensions: impl IntoIterator<Item = (u32, u32)>,
    interval: u32,
) -> Result<(u32, u32), CompositeError> {
    let mut count: u32 = 0;
    let mut sum_x: u64 = 0;
    let mut max_y = 0;
    for (x, y) in dimensions {
        count += 1;
        sum_x += u64::from(x);
        max_y = std::cmp::max(max_y, y);
    }

    let gaps = u64::from(count.saturating_sub(1));
    let total_x = u64::from(interval)
        .checked_mul(gaps)
        .and_then(|padding| padding.checked_add(sum_x))
        .ok_or(CompositeError::CompositeTooLarge { interval })?;

    let total_x = u32::try_from(total_x).map_err(|_| CompositeError::CompositeTooLarge { interval })?;
    Ok((total_x, max_y))
}

fn composite_dimensions(images: &[RgbImgBuf], interval: u32) -> Result<(u32, u32), CompositeError> {
    composite_dimensions_of(images.iter().map(|img| img.dimensions()), interval)
}

fn check_images(images: &[RgbImgBuf]) -> Result<(), CompositeError> {
    if images.is_empty() || images.len() > MAX_INPUT_IMAGES {
        return Err(CompositeError::ImageCount(images.len()));
    }

    for (index, img) in images.iter().enumerate() {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(CompositeError::EmptyImage { index, width, height });
        }
    }

    Ok(())
}
