//! Per-pixel color filters.
//!
//! Both filters are pure functions of one RGB triple, so a whole image can be
//! processed row by row, in chunks, or in any order with the same result.

use serde::{Deserialize, Serialize};

/// An RGB pixel with 8-bit channels.
pub type Rgb = [u8; 3];

/// Weight of the red channel in the grayscale luminance.
pub const GRAY_R: f64 = 0.3;

/// Weight of the green channel in the grayscale luminance.
pub const GRAY_G: f64 = 0.59;

/// Weight of the blue channel in the grayscale luminance.
pub const GRAY_B: f64 = 0.11;

/// Luminance `I = 0.3·R + 0.59·G + 0.11·B`, not rounded.
#[inline]
pub fn luminance(rgb: Rgb) -> f64 {
    GRAY_R * rgb[0] as f64 + GRAY_G * rgb[1] as f64 + GRAY_B * rgb[2] as f64
}

/// Grayscale: the luminance replicated across the three channels.
///
/// The value is left real-valued; converting it to a channel byte is up to
/// the caller (see [`ColorFilter::apply`]).
#[inline]
pub fn grayscale(rgb: Rgb) -> [f64; 3] {
    let i = luminance(rgb);
    [i, i, i]
}

/// Negative: every channel becomes `255 - C`.
#[inline]
pub fn negative(rgb: Rgb) -> Rgb {
    [255 - rgb[0], 255 - rgb[1], 255 - rgb[2]]
}

/// Clamp a real channel value into `0..=255` and round half to even.
#[inline]
pub fn to_channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0).round_ties_even() as u8
}

/// The two color filters a step can demonstrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorFilter {
    Grayscale,
    Negative,
}

impl ColorFilter {
    /// Map one pixel to the bytes shown in the step-by-step readout.
    ///
    /// Grayscale luminance is truncated toward zero, so `76.5` becomes `76`.
    #[inline]
    pub fn apply(self, rgb: Rgb) -> Rgb {
        match self {
            ColorFilter::Grayscale => {
                let i = luminance(rgb) as u8;
                [i, i, i]
            }
            ColorFilter::Negative => negative(rgb),
        }
    }

    /// Map one pixel to the bytes a canvas stores for it.
    ///
    /// Grayscale luminance is clamped and rounded half to even, as a
    /// `Uint8ClampedArray` write does. A gray input keeps its value even when
    /// the weighted sum lands a hair below it.
    #[inline]
    pub fn apply_for_canvas(self, rgb: Rgb) -> Rgb {
        match self {
            ColorFilter::Grayscale => {
                let i = to_channel(luminance(rgb));
                [i, i, i]
            }
            ColorFilter::Negative => negative(rgb),
        }
    }

    /// Filter packed RGB bytes in place with [`ColorFilter::apply_for_canvas`].
    /// A trailing partial pixel is left as is.
    pub fn apply_in_place(self, pixels: &mut [u8]) {
        for chunk in pixels.chunks_exact_mut(3) {
            let out = self.apply_for_canvas([chunk[0], chunk[1], chunk[2]]);
            chunk.copy_from_slice(&out);
        }
    }

    /// The formula shown to the learner.
    pub fn rule(self) -> &'static str {
        match self {
            ColorFilter::Grayscale => "I = 0.3·R + 0.59·G + 0.11·B",
            ColorFilter::Negative => "R' = 255 - R, G' = 255 - G, B' = 255 - B",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        assert!((GRAY_R + GRAY_G + GRAY_B - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_grayscale_white_and_black() {
        let white = grayscale([255, 255, 255]);
        for c in white {
            assert!((c - 255.0).abs() < 1e-9, "white gave {}", c);
        }
        assert_eq!(grayscale([0, 0, 0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_grayscale_pure_red() {
        let [r, g, b] = grayscale([255, 0, 0]);
        assert!((r - 76.5).abs() < 1e-9);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn test_grayscale_green_and_blue() {
        assert!((luminance([0, 255, 0]) - 150.45).abs() < 1e-9);
        assert!((luminance([0, 0, 255]) - 28.05).abs() < 1e-9);
    }

    #[test]
    fn test_negative() {
        assert_eq!(negative([0, 0, 0]), [255, 255, 255]);
        assert_eq!(negative([255, 255, 255]), [0, 0, 0]);
        assert_eq!(negative([10, 20, 30]), [245, 235, 225]);
    }

    #[test]
    fn test_filter_truncates_grayscale() {
        assert_eq!(ColorFilter::Grayscale.apply([255, 0, 0]), [76, 76, 76]);
        assert_eq!(ColorFilter::Grayscale.apply([0, 255, 0]), [150, 150, 150]);
    }

    #[test]
    fn test_filter_white_stays_white() {
        // 0.3*255 + 0.59*255 + 0.11*255 may land a hair below 255 in f64
        let [v, _, _] = ColorFilter::Grayscale.apply([255, 255, 255]);
        assert!(v >= 254);
    }

    #[test]
    fn test_canvas_grayscale_rounds() {
        assert_eq!(ColorFilter::Grayscale.apply_for_canvas([255, 0, 0]), [76, 76, 76]);
        assert_eq!(ColorFilter::Grayscale.apply_for_canvas([0, 255, 0]), [150, 150, 150]);
        assert_eq!(ColorFilter::Grayscale.apply_for_canvas([0, 0, 255]), [28, 28, 28]);
        assert_eq!(ColorFilter::Grayscale.apply_for_canvas([255, 255, 255]), [255; 3]);
    }

    #[test]
    fn test_canvas_grayscale_keeps_every_gray_level() {
        for v in 0..=255u8 {
            let out = ColorFilter::Grayscale.apply_for_canvas([v, v, v]);
            assert_eq!(out, [v, v, v], "level {}", v);
        }
    }

    #[test]
    fn test_to_channel() {
        assert_eq!(to_channel(76.5), 76);
        assert_eq!(to_channel(77.5), 78);
        assert_eq!(to_channel(2.999_999_999), 3);
        assert_eq!(to_channel(-4.0), 0);
        assert_eq!(to_channel(300.0), 255);
        assert_eq!(to_channel(f64::NAN), 0);
    }

    #[test]
    fn test_apply_in_place_rounds_grayscale() {
        let mut pixels = vec![3, 3, 3, 128, 128, 128];
        ColorFilter::Grayscale.apply_in_place(&mut pixels);
        assert_eq!(pixels, vec![3, 3, 3, 128, 128, 128]);
    }

    #[test]
    fn test_apply_in_place() {
        let mut pixels = vec![10, 20, 30, 0, 0, 0, 7];
        ColorFilter::Negative.apply_in_place(&mut pixels);
        assert_eq!(pixels, vec![245, 235, 225, 255, 255, 255, 7]);
    }

    #[test]
    fn test_filter_serde_tags() {
        let json = serde_json::to_string(&ColorFilter::Grayscale).unwrap();
        assert_eq!(json, "\"grayscale\"");
        let back: ColorFilter = serde_json::from_str("\"negative\"").unwrap();
        assert_eq!(back, ColorFilter::Negative);
    }
}
