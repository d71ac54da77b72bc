//! Face detection over a lazy sequence of images.

use std::path::PathBuf;

use serde::Serialize;

use crate::detect::{DetectedFace, FaceDetector};
use crate::io::{DecodedImage, LoadError};

/// Faces found in one image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageDetections {
    pub path: PathBuf,
    /// Source image width in pixels.
    pub width: u32,
    /// Source image height in pixels.
    pub height: u32,
    pub faces: Vec<DetectedFace>,
}

impl ImageDetections {
    /// Same detections with every box clipped to the image bounds.
    pub fn clamped(mut self) -> Self {
        for face in &mut self.faces {
            face.bbox = face.bbox.clamp_to(self.width, self.height);
        }
        self
    }
}

/// Run `detector` over each image as it is pulled from `images`.
///
/// Each decoded image is dropped as soon as its faces are extracted. A load
/// error is passed through unchanged; with [`crate::io::ImageIter`] as the
/// source, that error is also the last item.
pub fn detect_faces<'d, I, D>(
    images: I,
    detector: &'d D,
) -> impl Iterator<Item = Result<ImageDetections, LoadError>> + 'd
where
    I: IntoIterator<Item = Result<(PathBuf, DecodedImage), LoadError>> + 'd,
    I::IntoIter: 'd,
    D: FaceDetector + ?Sized,
{
    images.into_iter().map(move |item| {
        let (path, image) = item?;
        let faces = detector.detect(&image);
        log::debug!("{}: {} face(s)", path.display(), faces.len());
        Ok(ImageDetections {
            path,
            width: image.width(),
            height: image.height(),
            faces,
        })
    })
}
