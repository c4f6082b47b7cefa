use tracing::debug;

use crate::core::buffer::PixelBuffer;
use crate::types::{BoundingBox, Pixel};

/// RGBA pixels with alpha below this are background whatever their color.
pub const NEAR_TRANSPARENT_ALPHA: u8 = 10;

pub fn is_background(color: Pixel, background: Pixel, has_alpha: bool) -> bool {
    color == background || (has_alpha && color.a < NEAR_TRANSPARENT_ALPHA)
}

/// Tightest rectangle enclosing every pixel that is not background.
/// Returns `BoundingBox::Empty` when the image has no content.
pub fn detect_content_bbox(buffer: &PixelBuffer, background: Pixel) -> BoundingBox {
    let has_alpha = buffer.has_alpha();
    let bbox = buffer
        .pixels()
        .filter(|&(_, _, color)| !is_background(color, background, has_alpha))
        .fold(BoundingBox::Empty, |bbox, (x, y, _)| bbox.include(x, y));

    debug!(
        "Content box in {}x{} against {}: {}",
        buffer.width(),
        buffer.height(),
        background,
        bbox
    );
    bbox
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::processing::background::estimate_background;
    use crate::core::processing::crop::crop_to_bbox;

    /// `side`x`side` white canvas with an 8x8 red square starting at `margin`.
    fn red_square_on_white(side: usize, margin: usize) -> PixelBuffer {
        let mut buf = PixelBuffer::filled(side, side, 3, Pixel::WHITE).unwrap();
        for y in margin..margin + 8 {
            for x in margin..margin + 8 {
                buf.set_pixel(x, y, Pixel::rgb(255, 0, 0));
            }
        }
        buf
    }

    #[test]
    fn finds_centered_square() {
        // 80 white pixels outnumber the 64 red ones
        let buf = red_square_on_white(12, 2);
        let bg = estimate_background(&buf);
        assert_eq!(bg, Pixel::WHITE);

        let bbox = detect_content_bbox(&buf, bg);
        assert_eq!(
            bbox,
            BoundingBox::Bounds {
                top: 2,
                left: 2,
                bottom: 9,
                right: 9
            }
        );
        assert_eq!((bbox.width(), bbox.height()), (8, 8));
    }

    #[test]
    fn majority_square_becomes_background() {
        // 64 red against 36 white: red wins and the white frame is the content
        let buf = red_square_on_white(10, 1);
        let bg = estimate_background(&buf);
        assert_eq!(bg, Pixel::rgb(255, 0, 0));
        assert_eq!(
            detect_content_bbox(&buf, bg),
            BoundingBox::Bounds {
                top: 0,
                left: 0,
                bottom: 9,
                right: 9
            }
        );
    }

    #[test]
    fn uniform_image_has_no_content() {
        let buf = PixelBuffer::filled(6, 4, 3, Pixel::rgb(3, 4, 5)).unwrap();
        let bbox = detect_content_bbox(&buf, estimate_background(&buf));
        assert!(bbox.is_empty());
        assert_eq!((bbox.width(), bbox.height()), (0, 0));
    }

    #[test]
    fn near_transparent_pixel_is_background_regardless_of_rgb() {
        let mut buf = PixelBuffer::filled(5, 5, 4, Pixel::WHITE).unwrap();
        buf.set_pixel(2, 2, Pixel::new(200, 10, 10, 5));
        assert!(detect_content_bbox(&buf, Pixel::WHITE).is_empty());

        buf.set_pixel(3, 1, Pixel::new(200, 10, 10, 10));
        assert_eq!(
            detect_content_bbox(&buf, Pixel::WHITE),
            BoundingBox::Bounds {
                top: 1,
                left: 3,
                bottom: 1,
                right: 3
            }
        );
    }

    #[test]
    fn box_spans_scattered_pixels_per_axis() {
        let mut buf = PixelBuffer::filled(8, 6, 3, Pixel::WHITE).unwrap();
        buf.set_pixel(6, 0, Pixel::rgb(0, 0, 0));
        buf.set_pixel(1, 4, Pixel::rgb(0, 0, 0));
        assert_eq!(
            detect_content_bbox(&buf, Pixel::WHITE),
            BoundingBox::Bounds {
                top: 0,
                left: 1,
                bottom: 4,
                right: 6
            }
        );
    }

    #[test]
    fn redetecting_on_crop_covers_whole_crop() {
        let mut buf = red_square_on_white(12, 2);
        buf.set_pixel(5, 5, Pixel::rgb(0, 255, 0));
        let bg = estimate_background(&buf);
        let bbox = detect_content_bbox(&buf, bg);
        let cropped = crop_to_bbox(&buf, bbox).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (8, 8));

        let again = detect_content_bbox(&cropped, bg);
        assert_eq!(
            again,
            BoundingBox::Bounds {
                top: 0,
                left: 0,
                bottom: cropped.height() - 1,
                right: cropped.width() - 1
            }
        );
    }
}
