use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};
use tracing::debug;

use crate::core::buffer::PixelBuffer;
use crate::error::{DecodeFailure, Error, Result};

/// Turns a source file into an RGB or RGBA `PixelBuffer`.
pub trait ImageDecoder: Sync {
    fn decode(&self, path: &Path) -> Result<PixelBuffer>;
}

/// Decoder backed by the `image` crate. The format is guessed from the file
/// contents, falling back to the extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateDecoder;

fn io_failure(e: &std::io::Error) -> DecodeFailure {
    if e.kind() == std::io::ErrorKind::NotFound {
        DecodeFailure::NotFound
    } else {
        DecodeFailure::Corrupt(e.to_string())
    }
}

fn image_failure(e: ImageError) -> DecodeFailure {
    match e {
        ImageError::IoError(io) => io_failure(&io),
        ImageError::Unsupported(u) => DecodeFailure::UnsupportedFormat(u.to_string()),
        other => DecodeFailure::Corrupt(other.to_string()),
    }
}

/// Normalize a decoded image to 8-bit RGB or RGBA, keeping alpha only when the
/// source has it. Sources with fewer than 3 channels are rejected.
pub fn buffer_from_dynamic(image: DynamicImage) -> std::result::Result<PixelBuffer, DecodeFailure> {
    let color = image.color();
    let channels = color.channel_count();
    if channels < 3 {
        return Err(DecodeFailure::InsufficientChannels(channels));
    }

    let (width, height) = (image.width() as usize, image.height() as usize);
    let buffer = if color.has_alpha() {
        PixelBuffer::new(width, height, 4, image.into_rgba8().into_raw())
    } else {
        PixelBuffer::new(width, height, 3, image.into_rgb8().into_raw())
    };
    buffer.map_err(|e| DecodeFailure::Corrupt(e.to_string()))
}

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, path: &Path) -> Result<PixelBuffer> {
        let fail = |reason: DecodeFailure| Error::Decode {
            path: path.to_path_buf(),
            reason,
        };

        let image = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| fail(io_failure(&e)))?
            .decode()
            .map_err(|e| fail(image_failure(e)))?;

        debug!("Decoded {:?} as {:?}", path, image.color());
        buffer_from_dynamic(image).map_err(fail)
    }
}
