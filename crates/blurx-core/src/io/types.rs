//! Core types for image discovery and loading.

use std::path::{Path, PathBuf};

use ndarray::{Array3, ArrayView3};
use thiserror::Error;

/// Error types for resolving and loading images.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The supplied path does not exist.
    #[error("Path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// The supplied directory exists but holds no recognized image files.
    #[error("No images found in directory: {}", .0.display())]
    NoImages(PathBuf),

    /// The supplied file exists but its extension is not a recognized image type.
    #[error("File is not a supported image format: {}", .0.display())]
    InvalidFormat(PathBuf),

    /// The file has a recognized extension but could not be decoded.
    #[error("Failed to load image {}: {reason}", path.display())]
    InvalidImage {
        /// The offending file.
        path: PathBuf,
        /// Decoder or I/O message.
        reason: String,
    },

    /// The path cannot be expressed as a UTF-8 string.
    #[error("Path is not valid UTF-8: {}", .0.display())]
    InvalidPath(PathBuf),
}

impl LoadError {
    /// True for both a missing path and a directory without images.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound(_) | LoadError::NoImages(_))
    }

    /// The path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound(path)
            | LoadError::NoImages(path)
            | LoadError::InvalidFormat(path)
            | LoadError::InvalidPath(path) => path,
            LoadError::InvalidImage { path, .. } => path,
        }
    }
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// A decoded color image: `height × width × 3` unsigned 8-bit RGB samples.
///
/// The loader hands ownership to the caller and keeps no copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pixels: Array3<u8>,
}

impl DecodedImage {
    /// Number of color channels in every decoded image.
    pub const CHANNELS: usize = 3;

    /// Wrap an existing `(height, width, 3)` array.
    ///
    /// Returns `None` if the last axis does not have exactly three channels.
    pub fn from_array(pixels: Array3<u8>) -> Option<Self> {
        (pixels.dim().2 == Self::CHANNELS).then_some(Self { pixels })
    }

    /// Create a DecodedImage from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let shape = (height as usize, width as usize, Self::CHANNELS);
        let pixels = Array3::from_shape_fn(shape, |(y, x, c)| img.get_pixel(x as u32, y as u32).0[c]);
        Self { pixels }
    }

    /// Convert to an image::RgbImage for further processing.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        let raw: Vec<u8> = self.pixels.iter().copied().collect();
        image::RgbImage::from_raw(self.width(), self.height(), raw)
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.dim().1 as u32
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.dim().0 as u32
    }

    /// `(height, width, channels)`, the array shape.
    pub fn shape(&self) -> (usize, usize, usize) {
        self.pixels.dim()
    }

    /// Borrow the pixel array.
    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.pixels.view()
    }

    /// Take ownership of the pixel array.
    pub fn into_array(self) -> Array3<u8> {
        self.pixels
    }

    /// Row-major single-channel luminance, as consumed by grayscale detectors.
    pub fn to_luma(&self) -> Vec<u8> {
        match self.to_rgb_image() {
            Some(rgb) => image::imageops::grayscale(&rgb).into_raw(),
            None => Vec::new(),
        }
    }

    /// Check if this is an empty image.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_from_u32() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(99), Orientation::Normal); // Invalid defaults to Normal
    }

    #[test]
    fn test_decoded_image_shape_is_height_width_channels() {
        let img = DecodedImage::from_rgb_image(image::RgbImage::new(8, 10));

        assert_eq!(img.shape(), (10, 8, 3));
        assert_eq!(img.width(), 8);
        assert_eq!(img.height(), 10);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_decoded_image_pixel_layout() {
        let mut rgb = image::RgbImage::new(2, 1);
        rgb.put_pixel(1, 0, image::Rgb([10, 20, 30]));
        let img = DecodedImage::from_rgb_image(rgb);

        let view = img.view();
        assert_eq!(view[[0, 1, 0]], 10);
        assert_eq!(view[[0, 1, 1]], 20);
        assert_eq!(view[[0, 1, 2]], 30);
        assert_eq!(view[[0, 0, 0]], 0);
    }

    #[test]
    fn test_rgb_image_roundtrip_keeps_pixels() {
        let mut rgb = image::RgbImage::new(3, 2);
        rgb.put_pixel(2, 1, image::Rgb([1, 2, 3]));
        let img = DecodedImage::from_rgb_image(rgb.clone());

        assert_eq!(img.to_rgb_image().unwrap(), rgb);
    }

    #[test]
    fn test_from_array_rejects_wrong_channel_count() {
        assert!(DecodedImage::from_array(Array3::zeros((4, 4, 4))).is_none());
        assert!(DecodedImage::from_array(Array3::zeros((4, 4, 3))).is_some());
    }

    #[test]
    fn test_to_luma_has_one_byte_per_pixel() {
        let img = DecodedImage::from_rgb_image(image::RgbImage::new(5, 4));
        assert_eq!(img.to_luma().len(), 20);
    }

    #[test]
    fn test_empty_image() {
        let img = DecodedImage::from_array(Array3::zeros((0, 0, 3))).unwrap();
        assert!(img.is_empty());
    }

    #[test]
    fn test_not_found_classification() {
        assert!(LoadError::NotFound(PathBuf::from("x")).is_not_found());
        assert!(LoadError::NoImages(PathBuf::from("x")).is_not_found());
        assert!(!LoadError::InvalidFormat(PathBuf::from("x")).is_not_found());
    }

    #[test]
    fn test_load_error_display() {
        let err = LoadError::InvalidImage {
            path: PathBuf::from("bad.jpg"),
            reason: "empty file".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to load image bad.jpg: empty file");
        assert_eq!(err.path(), Path::new("bad.jpg"));

        let err = LoadError::NotFound(PathBuf::from("nope"));
        assert_eq!(err.to_string(), "Path does not exist: nope");
    }
}
