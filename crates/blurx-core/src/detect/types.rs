//! Face detection records and the detector trait.

use serde::{Deserialize, Serialize};

use crate::io::DecodedImage;

/// Bounding box of a detected face, in pixel coordinates of the source image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge.
    pub x1: f32,
    /// Top edge.
    pub y1: f32,
    /// Right edge.
    pub x2: f32,
    /// Bottom edge.
    pub y2: f32,
    /// Detection confidence score.
    pub score: f32,
}

impl BoundingBox {
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// Round to integer pixels and clip to `[0, width - 1] × [0, height - 1]`.
    ///
    /// Detectors may report boxes that overhang the image edge.
    pub fn clamp_to(&self, width: u32, height: u32) -> BoundingBox {
        let max_x = width.saturating_sub(1) as f32;
        let max_y = height.saturating_sub(1) as f32;
        BoundingBox {
            x1: self.x1.round().clamp(0.0, max_x),
            y1: self.y1.round().clamp(0.0, max_y),
            x2: self.x2.round().clamp(0.0, max_x),
            y2: self.y2.round().clamp(0.0, max_y),
            score: self.score,
        }
    }
}

/// A facial landmark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
}

/// One face found by a [`FaceDetector`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedFace {
    pub bbox: BoundingBox,
    /// Ordered landmarks, when the backend produces them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keypoints: Option<Vec<Keypoint>>,
}

/// Pluggable face detection backend.
///
/// Implementations are constructed once and borrowed for every call, so any
/// model loading happens up front. Implement this trait to plug in ONNX,
/// dlib or another engine in place of the built-in rustface backend.
pub trait FaceDetector {
    /// Detect faces in a decoded RGB image.
    fn detect(&self, image: &DecodedImage) -> Vec<DetectedFace>;
}

impl<D: FaceDetector + ?Sized> FaceDetector for &D {
    fn detect(&self, image: &DecodedImage) -> Vec<DetectedFace> {
        (**self).detect(image)
    }
}

impl<D: FaceDetector + ?Sized> FaceDetector for Box<D> {
    fn detect(&self, image: &DecodedImage) -> Vec<DetectedFace> {
        (**self).detect(image)
    }
}
