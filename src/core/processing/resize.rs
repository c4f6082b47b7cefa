use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::info;

use crate::core::buffer::{PixelBuffer, try_alloc_samples};
use crate::core::processing::crop::crop_to_bbox;
use crate::error::{Error, Result};
use crate::types::{BoundingBox, ResizeFilter};

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Bilinear => FilterType::Bilinear,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Mitchell => FilterType::Mitchell,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Largest size with the source aspect ratio that fits inside the target box.
/// Each side is at least 1 pixel.
pub fn calculate_fit_dimensions(
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> (usize, usize) {
    let scale_factor = (target_cols as f64 / original_cols as f64)
        .min(target_rows as f64 / original_rows as f64);

    let new_cols = (original_cols as f64 * scale_factor).round() as usize;
    let new_rows = (original_rows as f64 * scale_factor).round() as usize;

    (new_cols.max(1), new_rows.max(1))
}

fn to_u32(value: usize, what: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::Resample(format!("{} {} is too large", what, value)))
}

pub fn resize_rgba_image(
    data: Vec<u8>,
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
    filter: ResizeFilter,
) -> Result<Vec<u8>> {
    // Alpha is resampled as a plain channel, without premultiplication.
    let resize_options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(filter.into()))
        .use_alpha(false);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        to_u32(original_cols, "source width")?,
        to_u32(original_rows, "source height")?,
        data,
        PixelType::U8x4,
    )
    .map_err(Error::resample)?;

    let dst_len = target_cols
        .checked_mul(target_rows)
        .and_then(|n| n.checked_mul(4))
        .ok_or(Error::Allocation {
            stage: "resize",
            bytes: usize::MAX,
        })?;
    let dst_buffer = try_alloc_samples(dst_len, "resize")?;
    let mut dst_image = Image::from_vec_u8(
        to_u32(target_cols, "target width")?,
        to_u32(target_rows, "target height")?,
        dst_buffer,
        PixelType::U8x4,
    )
    .map_err(Error::resample)?;

    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resample)?;

    Ok(dst_image.into_vec())
}

/// Uniformly scale `buffer` so it fits a `target_cols x target_rows` box.
/// Consumes the input; the result always has 4 channels.
pub fn fit_to_box(
    buffer: PixelBuffer,
    target_cols: usize,
    target_rows: usize,
    filter: ResizeFilter,
) -> Result<PixelBuffer> {
    if buffer.is_empty() {
        return Err(Error::Resample(format!(
            "cannot resize a {}x{} image",
            buffer.width(),
            buffer.height()
        )));
    }
    if target_cols == 0 || target_rows == 0 {
        return Err(Error::Resample(format!(
            "invalid target box {}x{}",
            target_cols, target_rows
        )));
    }

    let rgba = if buffer.has_alpha() {
        buffer
    } else {
        let full = BoundingBox::Bounds {
            top: 0,
            left: 0,
            bottom: buffer.height() - 1,
            right: buffer.width() - 1,
        };
        crop_to_bbox(&buffer, full)?
    };

    let (original_cols, original_rows) = (rgba.width(), rgba.height());
    let (new_cols, new_rows) =
        calculate_fit_dimensions(original_cols, original_rows, target_cols, target_rows);

    info!(
        "Original size: {}x{}, New size: {}x{} ({} filter)",
        original_cols, original_rows, new_cols, new_rows, filter
    );

    let resized = resize_rgba_image(
        rgba.into_vec(),
        original_cols,
        original_rows,
        new_cols,
        new_rows,
        filter,
    )?;
    PixelBuffer::new(new_cols, new_rows, 4, resized)
}
