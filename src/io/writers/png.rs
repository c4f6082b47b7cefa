use std::path::{Path, PathBuf};

use image::{ColorType, ImageFormat};

use crate::core::buffer::PixelBuffer;
use crate::error::{Error, Result};

/// Persists a finished RGBA buffer.
pub trait ImageEncoder: Sync {
    fn encode_png(&self, buffer: &PixelBuffer, output: &Path) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PngWriter;

impl ImageEncoder for PngWriter {
    fn encode_png(&self, buffer: &PixelBuffer, output: &Path) -> Result<()> {
        write_rgba_png(output, buffer)
    }
}

pub fn write_rgba_png(output: &Path, buffer: &PixelBuffer) -> Result<()> {
    let fail = |reason: String| Error::Encode {
        path: output.to_path_buf(),
        reason,
    };
    if buffer.channels() != 4 {
        return Err(fail(format!(
            "expected 4 channels, got {}",
            buffer.channels()
        )));
    }
    let width = u32::try_from(buffer.width()).map_err(|e| fail(e.to_string()))?;
    let height = u32::try_from(buffer.height()).map_err(|e| fail(e.to_string()))?;

    image::save_buffer_with_format(
        output,
        buffer.as_bytes(),
        width,
        height,
        ColorType::Rgba8,
        ImageFormat::Png,
    )
    .map_err(|e| fail(e.to_string()))
}

/// `dir/name.ext` -> `output_dir/name{suffix}.png`
pub fn output_path_for(input: &Path, output_dir: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    output_dir.join(format!("{}{}.png", stem, suffix))
}
