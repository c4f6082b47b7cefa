use tracing::debug;

use crate::core::buffer::{PixelBuffer, try_alloc_samples};
use crate::error::Result;
use crate::types::BoundingBox;

/// Copy `bbox` out of `buffer` into a new RGBA buffer. 3-channel sources get alpha 255.
///
/// # Panics
/// If `bbox` is empty or reaches outside `buffer`. Callers must check
/// `BoundingBox::is_empty` first.
pub fn crop_to_bbox(buffer: &PixelBuffer, bbox: BoundingBox) -> Result<PixelBuffer> {
    assert!(
        bbox.fits_within(buffer.width(), buffer.height()),
        "crop box {:?} is empty or outside {}x{} image",
        bbox,
        buffer.width(),
        buffer.height()
    );
    let BoundingBox::Bounds { top, left, .. } = bbox else {
        unreachable!()
    };

    let out_width = bbox.width();
    let out_height = bbox.height();
    let src_channels = buffer.channels();
    let src_stride = buffer.stride();
    let dst_stride = out_width * 4;
    let src = buffer.as_bytes();

    let mut cropped = try_alloc_samples(dst_stride * out_height, "crop")?;

    for (row, dst_row) in cropped.chunks_exact_mut(dst_stride).enumerate() {
        let src_offset = (top + row) * src_stride + left * src_channels;
        let src_row = &src[src_offset..src_offset + out_width * src_channels];
        if src_channels == 4 {
            dst_row.copy_from_slice(src_row);
        } else {
            for (dst, px) in dst_row.chunks_exact_mut(4).zip(src_row.chunks_exact(3)) {
                dst[..3].copy_from_slice(px);
                dst[3] = 255;
            }
        }
    }

    debug!(
        "Cropped {}x{} -> {}x{} at ({}, {})",
        buffer.width(),
        buffer.height(),
        out_width,
        out_height,
        left,
        top
    );
    PixelBuffer::new(out_width, out_height, 4, cropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pixel;

    #[test]
    fn rgb_crop_is_opaque_rgba() {
        let mut buf = PixelBuffer::filled(10, 10, 3, Pixel::WHITE).unwrap();
        for y in 1..9 {
            for x in 1..9 {
                buf.set_pixel(x, y, Pixel::rgb(255, 0, 0));
            }
        }
        let bbox = BoundingBox::Bounds {
            top: 1,
            left: 1,
            bottom: 8,
            right: 8,
        };
        let cropped = crop_to_bbox(&buf, bbox).unwrap();
        assert_eq!((cropped.width(), cropped.height(), cropped.channels()), (8, 8, 4));
        assert!(cropped.pixels().all(|(_, _, p)| p == Pixel::new(255, 0, 0, 255)));
    }

    #[test]
    fn rgba_crop_keeps_source_alpha() {
        let mut buf = PixelBuffer::filled(4, 3, 4, Pixel::new(0, 0, 0, 0)).unwrap();
        buf.set_pixel(1, 1, Pixel::new(10, 20, 30, 77));
        buf.set_pixel(2, 2, Pixel::new(40, 50, 60, 200));
        let bbox = BoundingBox::Bounds {
            top: 1,
            left: 1,
            bottom: 2,
            right: 2,
        };
        let cropped = crop_to_bbox(&buf, bbox).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (2, 2));
        assert_eq!(cropped.pixel(0, 0), Pixel::new(10, 20, 30, 77));
        assert_eq!(cropped.pixel(1, 1), Pixel::new(40, 50, 60, 200));
        assert_eq!(cropped.pixel(1, 0), Pixel::new(0, 0, 0, 0));
    }

    #[test]
    fn single_pixel_box() {
        let mut buf = PixelBuffer::filled(3, 3, 3, Pixel::WHITE).unwrap();
        buf.set_pixel(2, 0, Pixel::rgb(1, 2, 3));
        let bbox = BoundingBox::Empty.include(2, 0);
        let cropped = crop_to_bbox(&buf, bbox).unwrap();
        assert_eq!(cropped.as_bytes(), &[1, 2, 3, 255]);
    }

    #[test]
    #[should_panic(expected = "crop box")]
    fn empty_box_panics() {
        let buf = PixelBuffer::filled(3, 3, 3, Pixel::WHITE).unwrap();
        let _ = crop_to_bbox(&buf, BoundingBox::Empty);
    }

    #[test]
    #[should_panic(expected = "crop box")]
    fn out_of_bounds_box_panics() {
        let buf = PixelBuffer::filled(3, 3, 3, Pixel::WHITE).unwrap();
        let bbox = BoundingBox::Bounds {
            top: 0,
            left: 1,
            bottom: 2,
            right: 3,
        };
        let _ = crop_to_bbox(&buf, bbox);
    }
}
