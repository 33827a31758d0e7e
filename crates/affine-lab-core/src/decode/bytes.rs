//! Decoding of encoded image files (PNG, JPEG) into RGB pixels.

use std::io::Cursor;

use image::ImageReader;
use log::debug;

use super::{DecodeError, DecodedImage};

/// Decode an image from bytes, guessing the format from its content.
///
/// # Arguments
///
/// * `bytes` - Raw file bytes as read from disk or a file picker
///
/// # Returns
///
/// A `DecodedImage` with RGB pixel data. Alpha, if present, is discarded.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognized.
/// Returns `DecodeError::CorruptedFile` if the data fails to decode.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let format = reader.format().ok_or(DecodeError::InvalidFormat)?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let decoded = DecodedImage::from_rgb_image(img.into_rgb8());
    debug!(
        "decoded {:?} image {}x{}",
        format, decoded.width, decoded.height
    );
    Ok(decoded)
}
