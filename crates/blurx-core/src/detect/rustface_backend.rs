//! Built-in SeetaFace detector backed by the `rustface` crate.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::{BoundingBox, DetectError, DetectedFace, DetectorConfig, FaceDetector};
use crate::io::DecodedImage;

/// Face detector backed by the `rustface` crate (SeetaFace engine).
///
/// The model is parsed once on construction; each call to `detect` runs a
/// fresh detector over a clone of it, so a single handle can be shared by
/// reference. SeetaFace reports boxes only, never keypoints.
pub struct RustfaceDetector {
    model: rustface::Model,
    config: DetectorConfig,
}

impl RustfaceDetector {
    /// Load a SeetaFace model file (e.g. `seeta_fd_frontal_v1.0.bin`).
    pub fn from_model_path<P: AsRef<Path>>(
        path: P,
        config: DetectorConfig,
    ) -> Result<Self, DetectError> {
        let path = path.as_ref();
        config.validate()?;
        let file = File::open(path).map_err(|source| DetectError::ModelLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let model =
            rustface::read_model(BufReader::new(file)).map_err(|source| DetectError::ModelLoad {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!("Loaded face detection model from {}", path.display());
        Ok(Self { model, config })
    }

    /// Parse a SeetaFace model from any reader, such as embedded bytes.
    pub fn from_reader<R: Read>(reader: R, config: DetectorConfig) -> Result<Self, DetectError> {
        config.validate()?;
        let model = rustface::read_model(reader).map_err(DetectError::ModelRead)?;
        Ok(Self { model, config })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }
}

impl FaceDetector for RustfaceDetector {
    fn detect(&self, image: &DecodedImage) -> Vec<DetectedFace> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Vec::new();
        }
        let gray = image.to_luma();

        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(self.config.min_face_size);
        detector.set_score_thresh(self.config.score_thresh);
        detector.set_pyramid_scale_factor(self.config.pyramid_scale_factor);
        let (step_x, step_y) = self.config.slide_window_step;
        detector.set_slide_window_step(step_x, step_y);

        let faces = detector.detect(&rustface::ImageData::new(&gray, width, height));
        log::debug!("rustface found {} face(s) in {}x{} image", faces.len(), width, height);

        faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                let x1 = bbox.x() as f32;
                let y1 = bbox.y() as f32;
                DetectedFace {
                    bbox: BoundingBox {
                        x1,
                        y1,
                        x2: x1 + bbox.width() as f32,
                        y2: y1 + bbox.height() as f32,
                        score: face.score() as f32,
                    },
                    keypoints: None,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_missing_model_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.bin");

        match RustfaceDetector::from_model_path(&missing, DetectorConfig::default()) {
            Err(DetectError::ModelLoad { path, .. }) => assert_eq!(path, missing),
            Err(e) => panic!("Expected ModelLoad error, got: {:?}", e),
            Ok(_) => panic!("Expected error, got success"),
        }
    }

    #[test]
    fn test_empty_model_stream() {
        let result = RustfaceDetector::from_reader(Cursor::new(Vec::new()), DetectorConfig::default());
        assert!(matches!(result, Err(DetectError::ModelRead(_))));
    }

    #[test]
    fn test_config_checked_before_model() {
        let mut config = DetectorConfig::default();
        config.min_face_size = 4;

        let result = RustfaceDetector::from_reader(Cursor::new(Vec::new()), config);
        assert!(matches!(result, Err(DetectError::InvalidConfig(_))));
    }
}
