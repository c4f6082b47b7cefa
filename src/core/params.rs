use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::ResizeFilter;

pub const DEFAULT_TARGET_WIDTH: u32 = 360;
pub const DEFAULT_TARGET_HEIGHT: u32 = 180;
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_SUFFIX: &str = "_trimmed";

/// Processing parameters suitable for config files and CLI overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimParams {
    /// Width of the box the trimmed content is fitted into
    pub target_width: u32,
    /// Height of the box the trimmed content is fitted into
    pub target_height: u32,
    pub output_dir: PathBuf,
    /// Appended to the input file stem, e.g. `logo.jpg` -> `logo_trimmed.png`
    pub suffix: String,
    pub filter: ResizeFilter,
    /// Worker threads for batch mode; None or 1 means sequential
    pub jobs: Option<usize>,
}

impl Default for TrimParams {
    fn default() -> Self {
        Self {
            target_width: DEFAULT_TARGET_WIDTH,
            target_height: DEFAULT_TARGET_HEIGHT,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            suffix: DEFAULT_SUFFIX.to_string(),
            filter: ResizeFilter::default(),
            jobs: None,
        }
    }
}

impl TrimParams {
    /// Load parameters from a JSON file; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let params: TrimParams = serde_json::from_str(&text)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_width == 0 {
            return Err(Error::ZeroSize {
                size: self.target_width,
            });
        }
        if self.target_height == 0 {
            return Err(Error::ZeroSize {
                size: self.target_height,
            });
        }
        if self.jobs == Some(0) {
            return Err(Error::InvalidArgument {
                arg: "jobs",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_wide_banner_box() {
        let params = TrimParams::default();
        assert_eq!((params.target_width, params.target_height), (360, 180));
        assert_eq!(params.output_dir, PathBuf::from("output"));
        assert_eq!(params.suffix, "_trimmed");
        assert!(params.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let params: TrimParams =
            serde_json::from_str(r#"{ "target_width": 64, "filter": "catmull-rom" }"#).unwrap();
        assert_eq!(params.target_width, 64);
        assert_eq!(params.target_height, DEFAULT_TARGET_HEIGHT);
        assert_eq!(params.filter, ResizeFilter::CatmullRom);
    }

    #[test]
    fn zero_target_is_rejected() {
        let params = TrimParams {
            target_height: 0,
            ..TrimParams::default()
        };
        assert!(matches!(params.validate(), Err(Error::ZeroSize { size: 0 })));
    }

    #[test]
    fn zero_jobs_is_rejected() {
        let params = TrimParams {
            jobs: Some(0),
            ..TrimParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidArgument { arg: "jobs", .. })
        ));
    }
}
