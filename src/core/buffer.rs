use crate::error::{Error, Result};
use crate::types::Pixel;

/// Zero-filled sample storage that reports allocation failure instead of aborting.
pub(crate) fn try_alloc_samples(len: usize, stage: &'static str) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| Error::Allocation { stage, bytes: len })?;
    data.resize(len, 0);
    Ok(data)
}

/// Row-major, top-left origin array of 8-bit samples with 3 (RGB) or 4 (RGBA)
/// channels per pixel. `data.len() == width * height * channels` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        if channels != 3 && channels != 4 {
            return Err(Error::InvalidBuffer(format!(
                "channel count must be 3 or 4, got {}",
                channels
            )));
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(channels))
            .ok_or_else(|| {
                Error::InvalidBuffer(format!("{}x{}x{} overflows", width, height, channels))
            })?;
        if data.len() != expected {
            return Err(Error::InvalidBuffer(format!(
                "expected {} samples for {}x{}x{}, got {}",
                expected,
                width,
                height,
                channels,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// A buffer where every pixel is `color`.
    pub fn filled(width: usize, height: usize, channels: usize, color: Pixel) -> Result<Self> {
        let sample = [color.r, color.g, color.b, color.a];
        let per_pixel = &sample[..channels.min(4)];
        let count = width
            .checked_mul(height)
            .filter(|n| n.checked_mul(per_pixel.len()).is_some())
            .ok_or_else(|| {
                Error::InvalidBuffer(format!("{}x{}x{} overflows", width, height, channels))
            })?;
        let data = per_pixel.repeat(count);
        Self::new(width, height, channels, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Byte length of one row.
    pub fn stride(&self) -> usize {
        self.width * self.channels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Pixel {
        let offset = (y * self.width + x) * self.channels;
        Pixel::from_samples(&self.data[offset..offset + self.channels])
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Pixel) {
        let offset = (y * self.width + x) * self.channels;
        let sample = [color.r, color.g, color.b, color.a];
        self.data[offset..offset + self.channels].copy_from_slice(&sample[..self.channels]);
    }

    /// Row-major iterator yielding `(x, y, pixel)`.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, Pixel)> + '_ {
        let width = self.width.max(1);
        self.data
            .chunks_exact(self.channels)
            .enumerate()
            .map(move |(i, samples)| (i % width, i / width, Pixel::from_samples(samples)))
    }
}
