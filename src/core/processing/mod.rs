pub mod background;
pub mod bbox;
pub mod crop;
pub mod pipeline;
pub mod resize;

pub use background::estimate_background;
pub use bbox::detect_content_bbox;
pub use crop::crop_to_bbox;
pub use pipeline::{TrimmedImage, trim_and_fit};
pub use resize::{calculate_fit_dimensions, fit_to_box};
