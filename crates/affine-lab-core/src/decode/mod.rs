//! Image loading for the visualizer.
//!
//! This module provides functionality for:
//! - Decoding PNG and JPEG files into a packed RGB buffer
//! - Accepting RGBA buffers coming from a canvas `ImageData`
//! - Pixel lookup helpers used when the learner picks a pixel
//!
//! All operations are synchronous; the buffer is never mutated after decode.
//! Transformed images are always new buffers.

mod bytes;
mod types;

pub use bytes::decode_image;
pub use types::{DecodeError, DecodedImage};
