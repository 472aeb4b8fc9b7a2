use image::*;
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

use crate::library::errors::CompositeError;

pub type RgbImgBuf = ImageBuffer<Rgb<u8>, Vec<u8>>;

pub fn blank_canvas(width: u32, height: u32, background: Rgb<u8>) -> RgbImgBuf {
    ImageBuffer::from_pixel(width, height, background)
}

//Copy the whole of src onto the canvas with its top-left corner at (x, y).
pub fn paste(canvas: &mut RgbImgBuf, src: &RgbImgBuf, x: u32, y: u32) -> Result<(), CompositeError> {
    canvas.copy_from(src, x, y)?;
    Ok(())
}

pub fn fill_block(canvas: &mut RgbImgBuf, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
    //imageproc panics on zero-sized rects
    if width == 0 || height == 0 {
        return;
    }

    let rect = Rect::at(x as i32, y as i32).of_size(width, height);
    draw_filled_rect_mut(canvas, rect, color);
}

/// Draws a solid bar across the full width of the canvas, centred on row `y`.
///
/// The bar covers rows `y - thickness / 2 .. y - thickness / 2 + thickness`. Anything falling
/// outside the canvas is clipped.
pub fn draw_horizontal_line(canvas: &mut RgbImgBuf, y: u32, thickness: u32, color: Rgb<u8>) {
    if thickness == 0 || canvas.width() == 0 {
        return;
    }

    let top = y as i32 - (thickness / 2) as i32;
    let rect = Rect::at(0, top).of_size(canvas.width(), thickness);
    draw_filled_rect_mut(canvas, rect, color);
}
