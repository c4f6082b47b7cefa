//! High-level, ergonomic library API: trim a single image to a file or an
//! in-memory buffer, and the `BatchPipeline` that runs many images with
//! per-image failure isolation. Prefer these entrypoints over the low-level
//! processing modules when integrating autotrim.
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::core::params::TrimParams;
use crate::core::processing::pipeline::{TrimmedImage, trim_and_fit};
use crate::error::{Error, Result};
use crate::io::decode::{ImageCrateDecoder, ImageDecoder};
use crate::io::input::{DirectoryScan, InputSource};
use crate::io::writers::png::{ImageEncoder, PngWriter, output_path_for};
use crate::types::{BoundingBox, Pixel};

/// Decode `input` and run the trim pipeline in memory (no disk writes).
pub fn process_image_to_buffer(input: &Path, params: &TrimParams) -> Result<TrimmedImage> {
    params.validate()?;
    let source = ImageCrateDecoder.decode(input)?;
    trim_and_fit(source, params)
}

/// Decode `input`, trim it and write the PNG to `output`.
pub fn process_image_to_path(
    input: &Path,
    output: &Path,
    params: &TrimParams,
) -> Result<TrimmedImage> {
    let trimmed = process_image_to_buffer(input, params)?;
    PngWriter.encode_png(&trimmed.buffer, output)?;
    Ok(trimmed)
}

/// Process every supported image in `input_dir` into `params.output_dir`.
pub fn process_directory_to_path(
    input_dir: &Path,
    params: &TrimParams,
    recursive: bool,
) -> Result<BatchReport> {
    BatchPipeline::new(params.clone()).process_source(&DirectoryScan::new(input_dir, recursive))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Failure { kind: String, reason: String },
}

/// What happened to one input image.
#[derive(Debug, Clone, Serialize)]
pub struct ImageReport {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub source_size: Option<(usize, usize)>,
    pub channels: Option<usize>,
    pub background: Option<Pixel>,
    pub bbox: Option<BoundingBox>,
    pub cropped_size: Option<(usize, usize)>,
    pub output_size: Option<(usize, usize)>,
    pub outcome: Outcome,
}

impl ImageReport {
    fn new(input: &Path) -> Self {
        Self {
            input: input.to_path_buf(),
            output: None,
            source_size: None,
            channels: None,
            background: None,
            bbox: None,
            cropped_size: None,
            output_size: None,
            outcome: Outcome::Success,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

/// Batch processing report
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub succeeded: usize,
    pub failed: usize,
    pub output_dir: PathBuf,
    pub images: Vec<ImageReport>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl BatchReport {
    fn from_images(output_dir: PathBuf, images: Vec<ImageReport>, started_at: DateTime<Utc>) -> Self {
        let succeeded = images.iter().filter(|r| r.is_success()).count();
        Self {
            succeeded,
            failed: images.len() - succeeded,
            output_dir,
            images,
            started_at,
            finished_at: Utc::now(),
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), self)?;
        Ok(())
    }
}

/// Runs decode -> trim -> encode for each input independently. A failing
/// image is recorded and skipped; only an unusable output directory stops
/// the batch.
pub struct BatchPipeline<D = ImageCrateDecoder, E = PngWriter> {
    params: TrimParams,
    decoder: D,
    encoder: E,
}

impl BatchPipeline {
    pub fn new(params: TrimParams) -> Self {
        Self::with_codecs(params, ImageCrateDecoder, PngWriter)
    }
}

impl<D: ImageDecoder, E: ImageEncoder> BatchPipeline<D, E> {
    pub fn with_codecs(params: TrimParams, decoder: D, encoder: E) -> Self {
        Self {
            params,
            decoder,
            encoder,
        }
    }

    pub fn params(&self) -> &TrimParams {
        &self.params
    }

    /// Create the output directory if absent; fail if the path is not a directory.
    pub fn prepare_output_dir(&self) -> Result<()> {
        let dir = &self.params.output_dir;
        let fail = |reason: String| Error::Directory {
            path: dir.clone(),
            reason,
        };
        if dir.exists() {
            if !dir.is_dir() {
                return Err(fail("exists but is not a directory".to_string()));
            }
            return Ok(());
        }
        std::fs::create_dir_all(dir).map_err(|e| fail(e.to_string()))?;
        info!("Created output directory: {:?}", dir);
        Ok(())
    }

    pub fn process_source(&self, source: &dyn InputSource) -> Result<BatchReport> {
        let inputs = source.inputs()?;
        self.process_all(&inputs)
    }

    pub fn process_all(&self, inputs: &[PathBuf]) -> Result<BatchReport> {
        let started_at = Utc::now();
        self.params.validate()?;

        if inputs.is_empty() {
            info!("No files selected. Nothing to do.");
            return Ok(BatchReport::from_images(
                self.params.output_dir.clone(),
                Vec::new(),
                started_at,
            ));
        }

        info!("Selected {} file(s)", inputs.len());
        self.prepare_output_dir()?;

        let images: Vec<ImageReport> = match self.params.jobs {
            Some(jobs) if jobs > 1 => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(jobs)
                    .build()
                    .map_err(|e| Error::InvalidArgument {
                        arg: "jobs",
                        value: e.to_string(),
                    })?;
                info!("Using {} threads for parallel processing", jobs);
                pool.install(|| inputs.par_iter().map(|p| self.process_one(p)).collect())
            }
            _ => inputs.iter().map(|p| self.process_one(p)).collect(),
        };

        let report = BatchReport::from_images(self.params.output_dir.clone(), images, started_at);
        info!(
            succeeded = report.succeeded,
            failed = report.failed,
            output_dir = %report.output_dir.display(),
            "Processing complete"
        );
        Ok(report)
    }

    /// Process one input; never fails, the outcome is in the report.
    pub fn process_one(&self, input: &Path) -> ImageReport {
        let mut report = ImageReport::new(input);
        match self.run_stages(input, &mut report) {
            Ok(()) => {
                info!(
                    path = %input.display(),
                    output = ?report.output,
                    "Successfully saved"
                );
            }
            Err(e) => {
                if matches!(e, Error::NoContent) {
                    report.bbox = Some(BoundingBox::Empty);
                }
                warn!(path = %input.display(), kind = e.kind(), "Skipping: {}", e);
                report.outcome = Outcome::Failure {
                    kind: e.kind().to_string(),
                    reason: e.to_string(),
                };
            }
        }
        report
    }

    fn run_stages(&self, input: &Path, report: &mut ImageReport) -> Result<()> {
        info!(path = %input.display(), "Processing");

        let source = self.decoder.decode(input)?;
        report.source_size = Some((source.width(), source.height()));
        report.channels = Some(source.channels());
        info!(
            width = source.width(),
            height = source.height(),
            channels = source.channels(),
            "Loaded"
        );

        let trimmed = trim_and_fit(source, &self.params)?;
        report.background = Some(trimmed.background);
        report.bbox = Some(trimmed.bbox);
        report.cropped_size = Some(trimmed.cropped_size);
        report.output_size = Some((trimmed.buffer.width(), trimmed.buffer.height()));

        let output = output_path_for(input, &self.params.output_dir, &self.params.suffix);
        self.encoder.encode_png(&trimmed.buffer, &output)?;
        report.output = Some(output);
        Ok(())
    }
}
