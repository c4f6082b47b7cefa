//! Shared types and enums used across autotrim.
//! Includes `Pixel`, `BoundingBox`, and the `ResizeFilter` used by the scaler.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One RGBA sample. 3-channel sources are lifted to alpha 255.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const WHITE: Pixel = Pixel::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Build a pixel from a 3- or 4-sample slice.
    pub fn from_samples(samples: &[u8]) -> Self {
        let a = if samples.len() >= 4 { samples[3] } else { 255 };
        Self::new(samples[0], samples[1], samples[2], a)
    }
}

impl std::fmt::Display for Pixel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Inclusive pixel rectangle around the non-background content of an image.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum BoundingBox {
    #[default]
    Empty,
    Bounds {
        top: usize,
        left: usize,
        bottom: usize,
        right: usize,
    },
}

impl BoundingBox {
    pub fn is_empty(&self) -> bool {
        matches!(self, BoundingBox::Empty)
    }

    pub fn width(&self) -> usize {
        match *self {
            BoundingBox::Empty => 0,
            BoundingBox::Bounds { left, right, .. } => right - left + 1,
        }
    }

    pub fn height(&self) -> usize {
        match *self {
            BoundingBox::Empty => 0,
            BoundingBox::Bounds { top, bottom, .. } => bottom - top + 1,
        }
    }

    /// Grow the box so it covers `(x, y)`.
    pub fn include(self, x: usize, y: usize) -> Self {
        match self {
            BoundingBox::Empty => BoundingBox::Bounds {
                top: y,
                left: x,
                bottom: y,
                right: x,
            },
            BoundingBox::Bounds {
                top,
                left,
                bottom,
                right,
            } => BoundingBox::Bounds {
                top: top.min(y),
                left: left.min(x),
                bottom: bottom.max(y),
                right: right.max(x),
            },
        }
    }

    /// True if the box is non-empty and lies inside a `width x height` image.
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        match *self {
            BoundingBox::Empty => false,
            BoundingBox::Bounds {
                top,
                left,
                bottom,
                right,
            } => left <= right && top <= bottom && right < width && bottom < height,
        }
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            BoundingBox::Empty => write!(f, "empty"),
            BoundingBox::Bounds { top, left, .. } => write!(
                f,
                "x={}, y={}, w={}, h={}",
                left,
                top,
                self.width(),
                self.height()
            ),
        }
    }
}

/// Convolution filter used when fitting the cropped content into the target box.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    Bilinear,
    CatmullRom,
    Mitchell,
    #[default]
    Lanczos3,
}

impl std::fmt::Display for ResizeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResizeFilter::Bilinear => write!(f, "Bilinear"),
            ResizeFilter::CatmullRom => write!(f, "CatmullRom"),
            ResizeFilter::Mitchell => write!(f, "Mitchell"),
            ResizeFilter::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}
