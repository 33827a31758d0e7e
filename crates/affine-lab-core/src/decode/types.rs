//! Core types for the pixel buffer the visualizer works on.

use thiserror::Error;

use crate::filter::Rgb;

/// Error types for image decoding operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// A raw buffer does not match the declared dimensions.
    #[error("Pixel buffer has {actual} bytes, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// A decoded image with RGB pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a new DecodedImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a DecodedImage from packed RGB bytes, checking the buffer length.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::DimensionMismatch` unless `pixels` holds exactly
    /// `width * height * 3` bytes.
    pub fn from_rgb(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DecodeError> {
        let img = Self {
            width,
            height,
            pixels,
        };
        img.check_size()?;
        Ok(img)
    }

    /// Check that the pixel buffer matches the dimensions.
    pub fn check_size(&self) -> Result<(), DecodeError> {
        let expected = self.width as usize * self.height as usize * 3;
        if self.pixels.len() != expected {
            return Err(DecodeError::DimensionMismatch {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// A black image of the given size.
    pub fn black(width: u32, height: u32) -> Self {
        Self::new(width, height, vec![0; width as usize * height as usize * 3])
    }

    /// Build from an RGBA buffer such as a canvas `ImageData`, dropping alpha.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self, DecodeError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(DecodeError::DimensionMismatch {
                expected,
                actual: rgba.len(),
            });
        }
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
        for px in rgba.chunks_exact(4) {
            pixels.extend_from_slice(&px[..3]);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a DecodedImage from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Expand to RGBA with opaque alpha, ready for a canvas `ImageData`.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixel_count() as usize * 4);
        for px in self.pixels.chunks_exact(3) {
            out.extend_from_slice(px);
            out.push(255);
        }
        out
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    #[inline]
    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    /// The color at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        let px = self.pixels.get(i..i + 3)?;
        Some([px[0], px[1], px[2]])
    }

    /// Clamp a (possibly negative or oversized) position into the image.
    ///
    /// Returns `(0, 0)` for an empty image.
    pub fn clamp_point(&self, x: i64, y: i64) -> (u32, u32) {
        let max_x = self.width.saturating_sub(1) as i64;
        let max_y = self.height.saturating_sub(1) as i64;
        (x.clamp(0, max_x) as u32, y.clamp(0, max_y) as u32)
    }

    /// The pixel selected by default: `(⌊w/2⌋, ⌊h/2⌋)`.
    pub fn center(&self) -> (u32, u32) {
        (self.width / 2, self.height / 2)
    }

    /// A `size × size` block of colors centered on `(x, y)`, row-major.
    ///
    /// Positions past the border repeat the edge pixel. Used by the zoom
    /// inspector around the selected pixel. Empty for an empty image.
    pub fn neighborhood(&self, x: u32, y: u32, size: u32) -> Vec<Rgb> {
        if self.is_empty() {
            return Vec::new();
        }
        let half = (size / 2) as i64;
        let mut out = Vec::with_capacity(size as usize * size as usize);
        for j in 0..size as i64 {
            for i in 0..size as i64 {
                let (px, py) = self.clamp_point(x as i64 - half + i, y as i64 - half + j);
                out.push(self.pixel(px, py).unwrap_or([0, 0, 0]));
            }
        }
        out
    }
}
