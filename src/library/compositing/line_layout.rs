use crate::library::{errors::CompositeError, CompositeCfg};

/// Vertical distance between consecutive guide lines on a composite of the given height.
pub fn line_interval(height: u32, line_count: u32) -> u32 {
    height / line_count.saturating_add(1)
}

/// Checks that `cfg.line_count` lines of `cfg.line_width` fit on a composite of the given height
/// without touching each other or the edges of the image. Returns the line interval on success.
pub fn check_line_geometry(height: u32, cfg: &CompositeCfg) -> Result<u32, CompositeError> {
    let interval = line_interval(height, cfg.line_count);

    if cfg.line_width >= interval {
        return Err(CompositeError::LineOverlap {
            line_width: cfg.line_width,
            line_interval: interval,
            line_count: cfg.line_count,
            height,
        });
    }

    Ok(interval)
}

/// The centre row of every guide line, top to bottom.
pub fn line_offsets(height: u32, cfg: &CompositeCfg) -> Result<Vec<u32>, CompositeError> {
    let interval = check_line_geometry(height, cfg)?;

    let offsets = (1..=cfg.line_count).map(|k| k * interval).collect();
    Ok(offsets)
}
