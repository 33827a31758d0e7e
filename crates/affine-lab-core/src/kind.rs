//! The closed set of operations the visualizer can demonstrate.
//!
//! Geometric kinds carry their numeric parameters and resolve to a matrix for
//! a given image size; filter kinds resolve to a [`ColorFilter`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter::ColorFilter;
use crate::transform::{
    reflect_horizontal_axis, reflect_vertical_axis, rotate_around_center, scale_around_center,
    translation, Matrix3,
};

/// Error types for transform selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KindError {
    /// The tag does not name one of the supported operations.
    #[error("Unknown transform: {0}")]
    UnknownTag(String),
}

/// One of the seven operations, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TransformKind {
    /// Rotation about the image center, in degrees.
    Rotate { degrees: f64 },
    /// Scaling about the image center.
    Scale { sx: f64, sy: f64 },
    /// Translation in pixels.
    Translate { tx: f64, ty: f64 },
    /// Mirror left↔right within the image width.
    ReflectX,
    /// Mirror top↔bottom within the image height.
    ReflectY,
    Grayscale,
    Negative,
}

impl Default for TransformKind {
    fn default() -> Self {
        TransformKind::Rotate { degrees: 0.0 }
    }
}

impl TransformKind {
    /// All tags in selector order.
    pub const TAGS: [&'static str; 7] = [
        "rotate",
        "scale",
        "translate",
        "reflectX",
        "reflectY",
        "grayscale",
        "negative",
    ];

    /// The selector tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            TransformKind::Rotate { .. } => "rotate",
            TransformKind::Scale { .. } => "scale",
            TransformKind::Translate { .. } => "translate",
            TransformKind::ReflectX => "reflectX",
            TransformKind::ReflectY => "reflectY",
            TransformKind::Grayscale => "grayscale",
            TransformKind::Negative => "negative",
        }
    }

    /// Build a kind from a selector tag and the raw parameter inputs.
    ///
    /// Parameters irrelevant to the tag are ignored.
    pub fn from_tag(tag: &str, params: &TransformParams) -> Result<Self, KindError> {
        let kind = match tag {
            "rotate" => TransformKind::Rotate {
                degrees: params.degrees(),
            },
            "scale" => {
                let (sx, sy) = params.scale();
                TransformKind::Scale { sx, sy }
            }
            "translate" => {
                let (tx, ty) = params.offset();
                TransformKind::Translate { tx, ty }
            }
            "reflectX" => TransformKind::ReflectX,
            "reflectY" => TransformKind::ReflectY,
            "grayscale" => TransformKind::Grayscale,
            "negative" => TransformKind::Negative,
            other => return Err(KindError::UnknownTag(other.to_string())),
        };
        Ok(kind)
    }

    pub fn is_geometric(&self) -> bool {
        self.filter().is_none()
    }

    /// The color filter for filter kinds, `None` for geometric ones.
    pub fn filter(&self) -> Option<ColorFilter> {
        match self {
            TransformKind::Grayscale => Some(ColorFilter::Grayscale),
            TransformKind::Negative => Some(ColorFilter::Negative),
            _ => None,
        }
    }

    /// The matrix for an image of `width × height`, `None` for filter kinds.
    ///
    /// Rotation and scaling pivot on the image center; reflections mirror the
    /// pixel grid.
    pub fn matrix(&self, width: u32, height: u32) -> Option<Matrix3> {
        let (w, h) = (width as f64, height as f64);
        match *self {
            TransformKind::Rotate { degrees } => Some(rotate_around_center(w, h, degrees)),
            TransformKind::Scale { sx, sy } => Some(scale_around_center(w, h, sx, sy)),
            TransformKind::Translate { tx, ty } => Some(translation(tx, ty)),
            TransformKind::ReflectX => Some(reflect_vertical_axis(w)),
            TransformKind::ReflectY => Some(reflect_horizontal_axis(h)),
            TransformKind::Grayscale | TransformKind::Negative => None,
        }
    }
}

/// Raw parameter inputs as typed by the user.
///
/// Each field is parsed on demand. Anything that does not parse to a finite,
/// non-zero number falls back to the field's default: 0° for the angle, 1 for
/// the scale factors, 0 px for the offsets. A scale factor of `0` is therefore
/// read as `1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParams {
    pub angle: String,
    pub scale_x: String,
    pub scale_y: String,
    pub tx: String,
    pub ty: String,
}

impl TransformParams {
    pub fn degrees(&self) -> f64 {
        parse_or(&self.angle, 0.0)
    }

    pub fn scale(&self) -> (f64, f64) {
        (parse_or(&self.scale_x, 1.0), parse_or(&self.scale_y, 1.0))
    }

    pub fn offset(&self) -> (f64, f64) {
        (parse_or(&self.tx, 0.0), parse_or(&self.ty, 0.0))
    }
}

/// Parse `input`, substituting `default` for empty, malformed, zero or
/// non-finite values.
pub fn parse_or(input: &str, default: f64) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v != 0.0 => v,
        _ => default,
    }
}
