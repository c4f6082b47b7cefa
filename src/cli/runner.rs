use std::path::PathBuf;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use autotrim::io::{DirectoryScan, InputSource, PathList};
use autotrim::{BatchPipeline, BatchReport, TrimParams};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) -> Result<(), AppError> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

/// Config file first, then individual flags on top.
pub fn resolve_params(args: &CliArgs) -> Result<TrimParams, AppError> {
    let mut params = match &args.config {
        Some(path) => TrimParams::from_json_file(path).map_err(|source| AppError::Config {
            path: path.clone(),
            source,
        })?,
        None => TrimParams::default(),
    };

    if let Some(dir) = &args.output_dir {
        params.output_dir = dir.clone();
    }
    if let Some(width) = args.width {
        params.target_width = width;
    }
    if let Some(height) = args.height {
        params.target_height = height;
    }
    if let Some(suffix) = &args.suffix {
        params.suffix = suffix.clone();
    }
    if let Some(filter) = args.filter {
        params.filter = filter;
    }
    if args.jobs.is_some() {
        params.jobs = args.jobs;
    }

    params.validate().map_err(AppError::InvalidParams)?;
    Ok(params)
}

fn collect_inputs(args: &CliArgs) -> Result<Vec<PathBuf>, AppError> {
    let mut sources: Vec<Box<dyn InputSource>> = Vec::new();
    if !args.inputs.is_empty() {
        sources.push(Box::new(PathList::new(args.inputs.clone())));
    }
    if let Some(dir) = &args.input_dir {
        sources.push(Box::new(DirectoryScan::new(dir.clone(), args.recursive)));
    }
    Ok(sources.inputs()?)
}

fn log_summary(report: &BatchReport) {
    info!("----------------------------------------");
    info!("Processing complete.");
    info!("  Successfully processed: {} file(s).", report.succeeded);
    info!("  Failed/Skipped:         {} file(s).", report.failed);
    info!("Output saved in {:?}", report.output_dir);
    info!("----------------------------------------");
    for image in report.images.iter().filter(|r| !r.is_success()) {
        warn!("  failed: {:?}", image.input);
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log)?;

    let params = resolve_params(&args)?;
    let inputs = collect_inputs(&args)?;

    if inputs.is_empty() {
        info!("No input files given. Exiting.");
        return Ok(());
    }

    let pipeline = BatchPipeline::new(params);
    let report = pipeline.process_all(&inputs).map_err(AppError::from)?;
    log_summary(&report);

    if let Some(path) = &args.report {
        report.write_json(path).map_err(|source| AppError::Report {
            path: path.clone(),
            source,
        })?;
        info!("Report written to {:?}", path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn flags_override_defaults() {
        let args = CliArgs::parse_from([
            "autotrim", "a.png", "--width", "64", "--filter", "mitchell", "-j", "4",
        ]);
        let params = resolve_params(&args).unwrap();
        assert_eq!(params.target_width, 64);
        assert_eq!(params.target_height, 180);
        assert_eq!(params.filter, autotrim::ResizeFilter::Mitchell);
        assert_eq!(params.jobs, Some(4));
        assert_eq!(args.inputs, vec![PathBuf::from("a.png")]);
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("trim.json");
        std::fs::write(
            &config,
            r#"{ "target_width": 100, "target_height": 50, "suffix": "_cfg" }"#,
        )
        .unwrap();

        let args = CliArgs::parse_from([
            "autotrim",
            "--config",
            config.to_str().unwrap(),
            "--height",
            "70",
        ]);
        let params = resolve_params(&args).unwrap();
        assert_eq!((params.target_width, params.target_height), (100, 70));
        assert_eq!(params.suffix, "_cfg");
    }

    #[test]
    fn zero_width_is_rejected() {
        let args = CliArgs::parse_from(["autotrim", "--width", "0"]);
        assert!(matches!(
            resolve_params(&args),
            Err(AppError::InvalidParams(_))
        ));
    }

    #[test]
    fn no_inputs_means_nothing_to_do() {
        let args = CliArgs::parse_from(["autotrim"]);
        assert!(collect_inputs(&args).unwrap().is_empty());
    }
}
