//! blurx Core - image discovery, lazy loading and face detection
//!
//! This crate lists image files under a path, decodes them one at a time as
//! the caller advances, and hands each decoded image to a face detector.

pub mod detect;
pub mod io;
pub mod pipeline;

pub use detect::{BoundingBox, DetectError, DetectedFace, DetectorConfig, FaceDetector, Keypoint};
#[cfg(feature = "rustface")]
pub use detect::RustfaceDetector;
pub use io::{
    is_image_path, iter_images, list_image_paths, load_image, DecodedImage, ImageIter, LoadError,
    LoaderState, IMAGE_EXTENSIONS,
};
pub use pipeline::{detect_faces, ImageDetections};
