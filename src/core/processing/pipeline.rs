use tracing::info;

use crate::core::buffer::PixelBuffer;
use crate::core::params::TrimParams;
use crate::core::processing::background::estimate_background;
use crate::core::processing::bbox::detect_content_bbox;
use crate::core::processing::crop::crop_to_bbox;
use crate::core::processing::resize::fit_to_box;
use crate::error::{Error, Result};
use crate::types::{BoundingBox, Pixel};

/// Final RGBA buffer plus what the analysis found on the way.
#[derive(Debug, Clone)]
pub struct TrimmedImage {
    pub buffer: PixelBuffer,
    pub background: Pixel,
    pub bbox: BoundingBox,
    pub source_size: (usize, usize),
    pub cropped_size: (usize, usize),
}

/// Background estimate -> content box -> crop -> fit, for one owned buffer.
/// The source buffer is released as soon as the crop exists.
pub fn trim_and_fit(source: PixelBuffer, params: &TrimParams) -> Result<TrimmedImage> {
    let source_size = (source.width(), source.height());

    let background = estimate_background(&source);
    let bbox = detect_content_bbox(&source, background);
    if bbox.is_empty() {
        return Err(Error::NoContent);
    }
    info!("Content box: {}", bbox);

    let cropped = crop_to_bbox(&source, bbox)?;
    drop(source);
    let cropped_size = (cropped.width(), cropped.height());
    info!("Trimmed size: {}x{}", cropped_size.0, cropped_size.1);

    let buffer = fit_to_box(
        cropped,
        params.target_width as usize,
        params.target_height as usize,
        params.filter,
    )?;
    info!("Resized size: {}x{}", buffer.width(), buffer.height());

    Ok(TrimmedImage {
        buffer,
        background,
        bbox,
        source_size,
        cropped_size,
    })
}
