#![doc = r#"
autotrim — trim solid backgrounds and fit images into a fixed canvas.

For every input image the crate infers the background color (the most frequent
non-transparent color), finds the bounding box of everything that is not
background, crops to it, and scales the crop uniformly so it fits a target box
(360x180 by default). Output is always RGBA PNG.

Add dependency
--------------
```toml
[dependencies]
autotrim = "0.1"
```

Trim one file
-------------
```rust,no_run
use std::path::Path;
use autotrim::{process_image_to_path, TrimParams};

fn main() -> autotrim::Result<()> {
    let trimmed = process_image_to_path(
        Path::new("logos/acme.jpg"),
        Path::new("output/acme_trimmed.png"),
        &TrimParams::default(),
    )?;
    println!("content box: {}", trimmed.bbox);
    Ok(())
}
```

Work on in-memory buffers
-------------------------
```rust
use autotrim::{PixelBuffer, Pixel, BoundingBox, estimate_background, detect_content_bbox};

let mut buf = PixelBuffer::filled(10, 10, 3, Pixel::WHITE).unwrap();
buf.set_pixel(4, 6, Pixel::rgb(0, 0, 0));

let bg = estimate_background(&buf);
assert_eq!(bg, Pixel::WHITE);
assert_eq!(
    detect_content_bbox(&buf, bg),
    BoundingBox::Bounds { top: 6, left: 4, bottom: 6, right: 4 }
);
```

Batch
-----
```rust,no_run
use std::path::PathBuf;
use autotrim::{BatchPipeline, TrimParams};

fn main() -> autotrim::Result<()> {
    let params = TrimParams { jobs: Some(4), ..TrimParams::default() };
    let report = BatchPipeline::new(params)
        .process_all(&[PathBuf::from("a.png"), PathBuf::from("b.jpg")])?;
    println!("succeeded={} failed={}", report.succeeded, report.failed);
    Ok(())
}
```

Error handling
--------------
Per-image problems (`Error::Decode`, `Error::NoContent`, `Error::Allocation`,
`Error::Resample`, `Error::Encode`) are recorded in the `BatchReport` and the
batch continues. `Error::Directory` aborts the run because nothing could be saved.

Useful modules
--------------
- [`api`] — high-level entry points and `BatchPipeline`.
- [`core`] — `PixelBuffer`, `TrimParams`, and the processing stages.
- [`io`] — decoder, PNG writer, and input sources.
- [`types`] — `Pixel`, `BoundingBox`, `ResizeFilter`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::buffer::PixelBuffer;
pub use crate::core::params::TrimParams;
pub use error::{DecodeFailure, Error, Result};
pub use types::{BoundingBox, Pixel, ResizeFilter};

// Processing stages
pub use crate::core::processing::{
    TrimmedImage, calculate_fit_dimensions, crop_to_bbox, detect_content_bbox,
    estimate_background, fit_to_box, trim_and_fit,
};

// High-level API re-exports
pub use api::{
    BatchPipeline, BatchReport, ImageReport, Outcome, process_directory_to_path,
    process_image_to_buffer, process_image_to_path,
};
