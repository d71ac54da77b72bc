//! Detector parameters and errors.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for constructing a face detector.
#[derive(Debug, Error)]
pub enum DetectError {
    /// The model file could not be opened or parsed.
    #[error("Failed to load detection model {}: {source}", path.display())]
    ModelLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The model stream could not be parsed.
    #[error("Failed to read detection model: {0}")]
    ModelRead(#[source] std::io::Error),

    /// A detector parameter is out of range.
    #[error("Invalid detector configuration: {0}")]
    InvalidConfig(String),
}

/// Smallest face edge, in pixels, the sliding-window detector can search for.
pub const MIN_FACE_SIZE_LIMIT: u32 = 20;

/// Tuning parameters for the sliding-window detector.
///
/// Missing fields take their defaults when deserialized, so a config file
/// only needs to list what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Smallest face edge to search for, in pixels (at least 20).
    pub min_face_size: u32,
    /// Minimum classifier score for a window to count as a face.
    pub score_thresh: f64,
    /// Scale step between image pyramid levels, in (0, 1).
    pub pyramid_scale_factor: f32,
    /// Horizontal and vertical sliding-window step, in pixels.
    pub slide_window_step: (u32, u32),
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_face_size: MIN_FACE_SIZE_LIMIT,
            score_thresh: 2.0,
            pyramid_scale_factor: 0.8,
            slide_window_step: (4, 4),
        }
    }
}

impl DetectorConfig {
    /// Check every parameter is within the range the detector accepts.
    pub fn validate(&self) -> Result<(), DetectError> {
        if self.min_face_size < MIN_FACE_SIZE_LIMIT {
            return Err(DetectError::InvalidConfig(format!(
                "min_face_size must be >= {MIN_FACE_SIZE_LIMIT}, got {}",
                self.min_face_size
            )));
        }
        if !self.score_thresh.is_finite() {
            return Err(DetectError::InvalidConfig(format!(
                "score_thresh must be finite, got {}",
                self.score_thresh
            )));
        }
        if !(self.pyramid_scale_factor > 0.0 && self.pyramid_scale_factor < 1.0) {
            return Err(DetectError::InvalidConfig(format!(
                "pyramid_scale_factor must be in (0, 1), got {}",
                self.pyramid_scale_factor
            )));
        }
        let (step_x, step_y) = self.slide_window_step;
        if step_x == 0 || step_y == 0 {
            return Err(DetectError::InvalidConfig(format!(
                "slide_window_step must be positive, got ({step_x}, {step_y})"
            )));
        }
        Ok(())
    }
}
