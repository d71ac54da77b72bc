//! Image discovery and loading for blurx.
//!
//! This module provides functionality for:
//! - Resolving a file or directory into a sorted list of image paths
//! - Decoding a single image file to an 8-bit RGB array
//! - Lazily decoding a list of images, one per pull
//!
//! # Architecture
//!
//! Path resolution is eager: the whole list is known before the first decode.
//! Decoding is lazy and synchronous, so at most one decoded image is alive
//! inside the loader at any time. A decode failure ends the sequence.
//!
//! # Examples
//!
//! ```ignore
//! use blurx_core::io::iter_images;
//!
//! for item in iter_images("photos/")? {
//!     let (path, image) = item?;
//!     println!("{}: {}x{}", path.display(), image.width(), image.height());
//! }
//! ```

mod decode;
mod extensions;
mod iter;
mod resolve;
mod types;

pub use decode::{decode_bytes, load_image};
pub use extensions::{is_image_path, IMAGE_EXTENSIONS};
pub use iter::{iter_images, ImageIter, LoaderState};
pub use resolve::list_image_paths;
pub use types::{DecodedImage, LoadError, Orientation};
