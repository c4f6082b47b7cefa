//! Core trimming building blocks: the pixel buffer, background estimation,
//! content bounding box, crop, resize, and the single-image pipeline. These are
//! primitives consumed by the high-level `api` module.
pub mod buffer;
pub mod params;
pub mod processing;
