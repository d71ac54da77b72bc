//! Recognized image file extensions.

use std::path::Path;

/// File extensions treated as images, lowercase and without the leading dot.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "bmp", "tif", "tiff", "webp"];

/// Check whether a path carries a recognized image extension (case-insensitive).
///
/// Only the extension is inspected; the file does not need to exist.
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for a recognized extension with arbitrary letter case.
    fn mixed_case_extension() -> impl Strategy<Value = String> {
        (prop::sample::select(IMAGE_EXTENSIONS.to_vec()), any::<u64>()).prop_map(|(ext, mask)| {
            ext.chars()
                .enumerate()
                .map(|(i, c)| {
                    if mask & (1 << i) != 0 {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    }
                })
                .collect()
        })
    }

    proptest! {
        /// Property: Extension matching ignores case.
        #[test]
        fn prop_extension_case_insensitive(
            stem in "[a-z0-9_]{1,12}",
            ext in mixed_case_extension(),
        ) {
            let name = format!("{stem}.{ext}");
            prop_assert!(is_image_path(Path::new(&name)));
        }

        /// Property: Extensions outside the allow-list are never recognized.
        #[test]
        fn prop_other_extensions_rejected(
            stem in "[a-z0-9_]{1,12}",
            ext in "[a-z]{1,5}",
        ) {
            prop_assume!(!IMAGE_EXTENSIONS.contains(&ext.as_str()));
            let name = format!("{stem}.{ext}");
            prop_assert!(!is_image_path(Path::new(&name)));
        }
    }
}
