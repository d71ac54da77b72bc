//! Detector configuration from an optional JSON file plus command-line overrides.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use blurx_core::DetectorConfig;

/// Values given on the command line; each one replaces the file value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overrides {
    pub min_face_size: Option<u32>,
    pub score_thresh: Option<f64>,
}

/// Load the detector configuration, starting from defaults.
pub fn load_detector_config(path: Option<&Path>, overrides: &Overrides) -> Result<DetectorConfig> {
    let mut config = match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open config: {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => DetectorConfig::default(),
    };

    if let Some(size) = overrides.min_face_size {
        config.min_face_size = size;
    }
    if let Some(thresh) = overrides.score_thresh {
        config.score_thresh = thresh;
    }

    config.validate()?;
    log::debug!("Detector config: {:?}", config);
    Ok(config)
}
