//! Decoding a single image file with EXIF orientation handling.

use std::io::Cursor;
use std::path::Path;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::{DecodedImage, LoadError, Orientation};

/// Load a single image file as 8-bit RGB, applying EXIF orientation correction.
///
/// The format is guessed from the file content, not from its extension.
///
/// # Errors
///
/// Returns `LoadError::InvalidImage` if the file is missing, unreadable,
/// empty, corrupted or in a format the decoder does not support.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DecodedImage, LoadError> {
    let path = path.as_ref();
    let invalid = |reason: String| LoadError::InvalidImage {
        path: path.to_path_buf(),
        reason,
    };

    let bytes = std::fs::read(path).map_err(|e| invalid(e.to_string()))?;
    let image = decode_bytes(&bytes).map_err(invalid)?;
    log::debug!(
        "Decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Decode in-memory image bytes, applying EXIF orientation correction.
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedImage, String> {
    if bytes.is_empty() {
        return Err("empty file".to_string());
    }

    let orientation = extract_orientation(bytes);

    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| e.to_string())?
        .decode()
        .map_err(|e| e.to_string())?;

    let rgb_img = apply_orientation(img, orientation).into_rgb8();
    Ok(DecodedImage::from_rgb_image(rgb_img))
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    Reader::new()
        .read_from_container(&mut cursor)
        .ok()
        .and_then(|exif| {
            exif.get_field(Tag::Orientation, In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
        })
        .map(Orientation::from)
        .unwrap_or_default()
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
