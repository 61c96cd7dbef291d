//! Image addressing rules.
//!
//! Uploaded images are stored under a name derived from their content, so
//! identical uploads collapse onto one file. References coming back from
//! clients are checked here before any adapter joins them onto a directory.

use std::ffi::OsStr;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::ports::ImageError;

/// The only accepted upload extension, and the suffix of every reference.
pub const IMAGE_EXTENSION: &str = "jpg";

/// Reserved file served when a requested image does not exist.
pub const DEFAULT_IMAGE: &str = "default.jpg";

/// Compute the content address of an image: `hex(sha256(bytes)).jpg`.
pub fn content_address(bytes: &[u8]) -> String {
    format!("{:x}.{IMAGE_EXTENSION}", Sha256::digest(bytes))
}

/// Accept only uploads whose original file name ends in `.jpg`
/// (ASCII case-insensitive).
pub fn ensure_jpg_upload(filename: &str) -> Result<(), ImageError> {
    let is_jpg = Path::new(filename)
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(IMAGE_EXTENSION));

    if is_jpg {
        Ok(())
    } else {
        Err(ImageError::UnsupportedFormat(format!(
            "{filename:?} is not a .{IMAGE_EXTENSION} file"
        )))
    }
}

/// Check that a client-supplied reference names a single `.jpg` file inside
/// the image directory.
///
/// Separators and dot segments are rejected before the suffix check, so a
/// reference like `../../etc/passwd.jpg` never reaches the filesystem.
pub fn validate_reference(reference: &str) -> Result<(), ImageError> {
    if reference.is_empty()
        || reference == "."
        || reference == ".."
        || reference.contains(['/', '\\', '\0'])
    {
        return Err(ImageError::PathInvalid(format!(
            "Image reference {reference:?} is not a plain file name"
        )));
    }

    if !reference.ends_with(".jpg") {
        return Err(ImageError::PathInvalid(
            "Image path does not end with .jpg".to_string(),
        ));
    }

    Ok(())
}
