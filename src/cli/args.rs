use clap::Parser;
use std::path::PathBuf;

use autotrim::ResizeFilter;

#[derive(Parser, Debug)]
#[command(
    name = "autotrim",
    version,
    about = "Trim solid backgrounds and fit images into a fixed RGBA canvas"
)]
pub struct CliArgs {
    /// Input image files, processed in the given order
    pub inputs: Vec<PathBuf>,

    /// Directory to scan for images (jpg, jpeg, png, bmp, tga, gif)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Also scan subdirectories of --input-dir
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Output directory, created if absent [default: output]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Width of the target box [default: 360]
    #[arg(long)]
    pub width: Option<u32>,

    /// Height of the target box [default: 180]
    #[arg(long)]
    pub height: Option<u32>,

    /// Suffix appended to output file stems [default: _trimmed]
    #[arg(long)]
    pub suffix: Option<String>,

    /// Resampling filter [default: lanczos3]
    #[arg(short = 'f', long, value_enum)]
    pub filter: Option<ResizeFilter>,

    /// Worker threads; 1 processes images sequentially
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// JSON file with default parameters; flags above override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write a JSON report of every image's outcome to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
