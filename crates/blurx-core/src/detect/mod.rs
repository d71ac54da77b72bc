//! Face detection over decoded images.
//!
//! Detection is delegated to a [`FaceDetector`] implementation. The caller
//! builds the detector once (loading its model up front) and passes it by
//! reference to every call; there is no process-wide detector instance.
//!
//! # Examples
//!
//! ```ignore
//! use blurx_core::detect::{DetectorConfig, FaceDetector, RustfaceDetector};
//! use blurx_core::io::load_image;
//!
//! let detector = RustfaceDetector::from_model_path("seeta_fd_frontal_v1.0.bin", DetectorConfig::default())?;
//! let image = load_image("group.jpg")?;
//! for face in detector.detect(&image) {
//!     println!("{:?}", face.bbox);
//! }
//! ```

mod config;
#[cfg(feature = "rustface")]
mod rustface_backend;
mod types;

pub use config::{DetectError, DetectorConfig, MIN_FACE_SIZE_LIMIT};
#[cfg(feature = "rustface")]
pub use rustface_backend::RustfaceDetector;
pub use types::{BoundingBox, DetectedFace, FaceDetector, Keypoint};
