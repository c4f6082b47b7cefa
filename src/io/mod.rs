//! I/O layer around the trimming core: decoding source images into
//! `PixelBuffer`s, selecting inputs, and `writers` for the PNG output.
pub mod decode;
pub use decode::{ImageCrateDecoder, ImageDecoder};

pub mod input;
pub use input::{DirectoryScan, InputSource, PathList};

pub mod writers;
pub use writers::png::{ImageEncoder, PngWriter, output_path_for};
