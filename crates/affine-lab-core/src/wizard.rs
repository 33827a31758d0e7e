//! The five-step guided explanation as an explicit state value.
//!
//! The wizard owns no image and draws nothing. It records which operation is
//! selected, which pixel the learner picked and which step is showing; the
//! caller passes the image in and renders the returned [`StepOutcome`].
//!
//! # Steps
//!
//! 1. Pick a pixel and write it as `[x, y, 1]^T`
//! 2. Build the matrix (or state the filter rule)
//! 3. Compute the new position (or the new color) of that pixel
//! 4. Show the pixel moving (geometry) or start the filter sweep
//! 5. Sweep the matrix over the whole image (geometry only)

use log::debug;
use serde::{Deserialize, Serialize};

use crate::decode::DecodedImage;
use crate::filter::{ColorFilter, Rgb};
use crate::format::{vector_text, DotBreakdown};
use crate::kind::TransformKind;
use crate::sweep::{RowSweep, SweepConfig, SweepOp};
use crate::transform::{Matrix3, Point2};

/// Pacing of the single-pixel movement animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Number of segments between start and end; the path has `steps + 1` points.
    pub steps: u32,
    /// Suggested delay between frames in milliseconds.
    pub frame_interval_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            steps: 30,
            frame_interval_ms: 18,
        }
    }
}

/// Evenly spaced points from `from` to `to`, both included.
///
/// The last point is exactly `to`. `steps == 0` yields just `from`.
pub fn pixel_path(from: Point2, to: Point2, steps: u32) -> Vec<Point2> {
    if steps == 0 {
        return vec![from];
    }
    let n = steps as f64;
    let (dx, dy) = ((to.x - from.x) / n, (to.y - from.y) / n);
    (0..=steps)
        .map(|k| {
            if k == steps {
                return to;
            }
            let k = k as f64;
            Point2::new(from.x + dx * k, from.y + dy * k)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    SelectPixel,
    BuildOperator,
    ComputeResult,
    Demonstrate,
    ApplyToImage,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::SelectPixel,
        WizardStep::BuildOperator,
        WizardStep::ComputeResult,
        WizardStep::Demonstrate,
        WizardStep::ApplyToImage,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Step for an index, saturating past the last step.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }
}

/// What a step shows, as data for the UI to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StepOutcome {
    /// The chosen pixel and its homogeneous vector text, `p = [x, y, 1]^T`.
    Pixel { x: u32, y: u32, vector: String },
    /// The matrix of a geometric operation.
    Matrix { matrix: Matrix3 },
    /// The rule of a color filter.
    FilterRule { filter: ColorFilter, rule: String },
    /// Where the chosen pixel lands.
    Moved {
        from: Point2,
        to: Point2,
        breakdown: DotBreakdown,
    },
    /// The chosen pixel's color before and after the filter.
    Recolored { from: Rgb, to: Rgb },
    /// Frames of the chosen pixel traveling to its destination.
    Animate { path: Vec<Point2> },
    /// Start a whole-image sweep with this operation.
    Sweep { op: SweepOp },
    /// Nothing left to show for this operation.
    Done,
}

/// Selected operation, pixel and step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wizard {
    width: u32,
    height: u32,
    kind: TransformKind,
    selected: (u32, u32),
    step: WizardStep,
    #[serde(default)]
    animation: AnimationConfig,
}

impl Wizard {
    /// Start at the first step with the image center selected.
    pub fn new(width: u32, height: u32, kind: TransformKind) -> Self {
        Self {
            width,
            height,
            kind,
            selected: (width / 2, height / 2),
            step: WizardStep::SelectPixel,
            animation: AnimationConfig::default(),
        }
    }

    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn kind(&self) -> &TransformKind {
        &self.kind
    }

    pub fn selected(&self) -> (u32, u32) {
        self.selected
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn can_go_back(&self) -> bool {
        self.step > WizardStep::SelectPixel
    }

    /// Advance one step; stays on the last step.
    pub fn next(&mut self) -> WizardStep {
        self.step = WizardStep::from_index(self.step.index() + 1);
        debug!("wizard step -> {:?}", self.step);
        self.step
    }

    /// Go back one step; stays on the first step.
    pub fn prev(&mut self) -> WizardStep {
        self.step = WizardStep::from_index(self.step.index().saturating_sub(1));
        debug!("wizard step -> {:?}", self.step);
        self.step
    }

    pub fn reset(&mut self) {
        self.step = WizardStep::SelectPixel;
    }

    /// Pick a pixel, clamped into the image, and restart the explanation.
    pub fn select_pixel(&mut self, x: i64, y: i64) -> (u32, u32) {
        let max_x = self.width.saturating_sub(1) as i64;
        let max_y = self.height.saturating_sub(1) as i64;
        self.selected = (x.clamp(0, max_x) as u32, y.clamp(0, max_y) as u32);
        self.reset();
        debug!("wizard selected pixel {:?}", self.selected);
        self.selected
    }

    /// Switch the operation and restart the explanation.
    pub fn set_kind(&mut self, kind: TransformKind) {
        self.kind = kind;
        self.reset();
    }

    /// The current matrix, `None` for filters.
    pub fn matrix(&self) -> Option<Matrix3> {
        self.kind.matrix(self.width, self.height)
    }

    fn selected_point(&self) -> Point2 {
        Point2::new(self.selected.0 as f64, self.selected.1 as f64)
    }

    fn sweep_op(&self) -> SweepOp {
        match self.kind.filter() {
            Some(filter) => SweepOp::Filter(filter),
            None => SweepOp::Geometry(self.matrix().unwrap_or_default()),
        }
    }

    /// Describe the current step for the selected pixel of `image`.
    pub fn explain(&self, image: &DecodedImage) -> StepOutcome {
        let (x, y) = self.selected;
        match (self.step, self.kind.filter()) {
            (WizardStep::SelectPixel, _) => StepOutcome::Pixel {
                x,
                y,
                vector: vector_text(self.selected_point(), 0, "p"),
            },

            (WizardStep::BuildOperator, Some(filter)) => StepOutcome::FilterRule {
                filter,
                rule: filter.rule().to_string(),
            },
            (WizardStep::BuildOperator, None) => StepOutcome::Matrix {
                matrix: self.matrix().unwrap_or_default(),
            },

            (WizardStep::ComputeResult, Some(filter)) => {
                let from = image.pixel(x, y).unwrap_or([0, 0, 0]);
                StepOutcome::Recolored {
                    from,
                    to: filter.apply(from),
                }
            }
            (WizardStep::ComputeResult, None) => {
                let from = self.selected_point();
                let breakdown = DotBreakdown::new(&self.matrix().unwrap_or_default(), from);
                StepOutcome::Moved {
                    from,
                    to: breakdown.result,
                    breakdown,
                }
            }

            (WizardStep::Demonstrate, Some(_)) => StepOutcome::Sweep {
                op: self.sweep_op(),
            },
            (WizardStep::Demonstrate, None) => {
                let from = self.selected_point();
                let to = self.matrix().unwrap_or_default().apply(from);
                StepOutcome::Animate {
                    path: pixel_path(from, to, self.animation.steps),
                }
            }

            (WizardStep::ApplyToImage, Some(_)) => StepOutcome::Done,
            (WizardStep::ApplyToImage, None) => StepOutcome::Sweep {
                op: self.sweep_op(),
            },
        }
    }

    /// A sweep of the current operation over `image`, paced by `config`.
    ///
    /// Returns `None` on steps that do not run a sweep.
    pub fn sweep(&self, image: &DecodedImage, config: &SweepConfig) -> Option<RowSweep> {
        match self.explain(image) {
            StepOutcome::Sweep { op } => Some(RowSweep::with_config(image.clone(), op, config)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x * 10) as u8);
                pixels.push((y * 10) as u8);
                pixels.push(30);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    fn go_to(wizard: &mut Wizard, step: WizardStep) {
        wizard.reset();
        while wizard.step() < step {
            wizard.next();
        }
    }

    #[test]
    fn test_new_selects_center() {
        let w = Wizard::new(9, 6, TransformKind::ReflectX);
        assert_eq!(w.selected(), (4, 3));
        assert_eq!(w.step(), WizardStep::SelectPixel);
        assert!(!w.can_go_back());
    }

    #[test]
    fn test_navigation_saturates() {
        let mut w = Wizard::new(4, 4, TransformKind::Negative);
        assert_eq!(w.prev(), WizardStep::SelectPixel);
        for _ in 0..10 {
            w.next();
        }
        assert_eq!(w.step(), WizardStep::ApplyToImage);
        assert_eq!(w.prev(), WizardStep::Demonstrate);
        assert!(w.can_go_back());
    }

    #[test]
    fn test_select_pixel_clamps_and_resets() {
        let mut w = Wizard::new(10, 8, TransformKind::ReflectY);
        w.next();
        w.next();
        assert_eq!(w.select_pixel(-5, 100), (0, 7));
        assert_eq!(w.step(), WizardStep::SelectPixel);
    }

    #[test]
    fn test_set_kind_resets() {
        let mut w = Wizard::new(10, 8, TransformKind::ReflectY);
        w.next();
        w.set_kind(TransformKind::Grayscale);
        assert_eq!(w.step(), WizardStep::SelectPixel);
        assert_eq!(w.kind(), &TransformKind::Grayscale);
    }

    #[test]
    fn test_geometry_walkthrough() {
        let img = test_image(10, 10);
        let kind = TransformKind::Translate { tx: 3.0, ty: -2.0 };
        let mut w = Wizard::new(10, 10, kind);
        w.select_pixel(2, 4);

        assert_eq!(
            w.explain(&img),
            StepOutcome::Pixel {
                x: 2,
                y: 4,
                vector: "p = [2, 4, 1]^T".to_string(),
            }
        );

        w.next();
        match w.explain(&img) {
            StepOutcome::Matrix { matrix } => assert_eq!(matrix.get(0, 2), 3.0),
            other => panic!("unexpected {:?}", other),
        }

        w.next();
        match w.explain(&img) {
            StepOutcome::Moved { from, to, breakdown } => {
                assert_eq!(from, Point2::new(2.0, 4.0));
                assert_eq!(to, Point2::new(5.0, 2.0));
                assert!(breakdown.x_line.ends_with("= 5.00"));
            }
            other => panic!("unexpected {:?}", other),
        }

        w.next();
        match w.explain(&img) {
            StepOutcome::Animate { path } => {
                assert_eq!(path.len(), 31);
                assert_eq!(path[0], Point2::new(2.0, 4.0));
                assert_eq!(path[30], Point2::new(5.0, 2.0));
            }
            other => panic!("unexpected {:?}", other),
        }

        w.next();
        assert!(matches!(
            w.explain(&img),
            StepOutcome::Sweep {
                op: SweepOp::Geometry(_)
            }
        ));
    }

    #[test]
    fn test_filter_walkthrough() {
        let img = test_image(5, 5);
        let mut w = Wizard::new(5, 5, TransformKind::Negative);
        w.select_pixel(1, 2);

        w.next();
        match w.explain(&img) {
            StepOutcome::FilterRule { filter, rule } => {
                assert_eq!(filter, ColorFilter::Negative);
                assert!(rule.contains("255 - R"));
            }
            other => panic!("unexpected {:?}", other),
        }

        w.next();
        assert_eq!(
            w.explain(&img),
            StepOutcome::Recolored {
                from: [10, 20, 30],
                to: [245, 235, 225],
            }
        );

        w.next();
        assert_eq!(
            w.explain(&img),
            StepOutcome::Sweep {
                op: SweepOp::Filter(ColorFilter::Negative)
            }
        );

        w.next();
        assert_eq!(w.explain(&img), StepOutcome::Done);
    }

    #[test]
    fn test_grayscale_recolor_truncates() {
        let img = DecodedImage::new(1, 1, vec![255, 0, 0]);
        let mut w = Wizard::new(1, 1, TransformKind::Grayscale);
        go_to(&mut w, WizardStep::ComputeResult);
        assert_eq!(
            w.explain(&img),
            StepOutcome::Recolored {
                from: [255, 0, 0],
                to: [76, 76, 76],
            }
        );
    }

    #[test]
    fn test_sweep_only_on_sweep_steps() {
        let img = test_image(6, 6);
        let config = SweepConfig::default();
        let mut w = Wizard::new(6, 6, TransformKind::ReflectX);

        assert!(w.sweep(&img, &config).is_none());
        go_to(&mut w, WizardStep::ApplyToImage);

        let mut sweep = w.sweep(&img, &config).unwrap();
        assert_eq!(sweep.tick().rows_done, 4);
        sweep.run_to_end();
        assert_eq!(sweep.output().pixel(5, 0), img.pixel(0, 0));
    }

    #[test]
    fn test_custom_animation_length() {
        let img = test_image(4, 4);
        let mut w = Wizard::new(4, 4, TransformKind::ReflectX).with_animation(AnimationConfig {
            steps: 2,
            frame_interval_ms: 5,
        });
        go_to(&mut w, WizardStep::Demonstrate);
        match w.explain(&img) {
            StepOutcome::Animate { path } => assert_eq!(path.len(), 3),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_pixel_path_endpoints() {
        let path = pixel_path(Point2::new(0.0, 0.0), Point2::new(3.0, -6.0), 3);
        assert_eq!(
            path,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, -2.0),
                Point2::new(2.0, -4.0),
                Point2::new(3.0, -6.0),
            ]
        );
        assert_eq!(pixel_path(Point2::new(1.0, 1.0), Point2::new(9.0, 9.0), 0).len(), 1);
    }

    #[test]
    fn test_outcome_serializes_with_type_tag() {
        let img = test_image(8, 8);
        let mut w = Wizard::new(8, 8, TransformKind::default());
        w.select_pixel(3, 4);
        let json = serde_json::to_value(w.explain(&img)).unwrap();
        assert_eq!(json["type"], "pixel");
        assert_eq!(json["x"], 3);
        assert_eq!(json["vector"], "p = [3, 4, 1]^T");

        let json = serde_json::to_value(StepOutcome::Done).unwrap();
        assert_eq!(json["type"], "done");
    }

    #[test]
    fn test_step_index_round_trip() {
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), i);
            assert_eq!(WizardStep::from_index(i), *step);
        }
        assert_eq!(WizardStep::from_index(99), WizardStep::ApplyToImage);
    }
}
