//! Output writers. Only RGBA PNG is produced.
pub mod png;
