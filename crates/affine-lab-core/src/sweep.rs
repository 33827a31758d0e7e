//! Applying one operation to every pixel of an image.
//!
//! Two entry points share the same per-row kernels:
//! - [`apply_filter`] / [`apply_geometry`] process the whole image at once
//! - [`RowSweep`] processes a few rows per call so a UI can show the image
//!   filling in progressively, from a timer, a worker or a plain loop
//!
//! # Geometry Mapping
//!
//! Geometric sweeps use forward mapping: each source pixel `(x, y)` is sent
//! through the matrix, rounded to the nearest pixel, and copied there if it
//! lands inside the image. Destination pixels no source reaches stay black,
//! so scaling up or rotating leaves visible holes. That is intended: it shows
//! exactly where each source pixel went.

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::decode::DecodedImage;
use crate::filter::ColorFilter;
use crate::transform::{Matrix3, Point2};

/// Pacing of progressive sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Rows processed per tick for geometric sweeps.
    pub geometry_rows_per_tick: u32,
    /// Rows processed per tick for filter sweeps.
    pub filter_rows_per_tick: u32,
    /// Suggested delay between ticks in milliseconds.
    pub tick_interval_ms: u32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            geometry_rows_per_tick: 4,
            filter_rows_per_tick: 6,
            tick_interval_ms: 28,
        }
    }
}

impl SweepConfig {
    pub fn rows_per_tick(&self, op: &SweepOp) -> u32 {
        match op {
            SweepOp::Geometry(_) => self.geometry_rows_per_tick,
            SweepOp::Filter(_) => self.filter_rows_per_tick,
        }
    }
}

/// What a sweep does to each pixel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum SweepOp {
    Geometry(Matrix3),
    Filter(ColorFilter),
}

/// Progress after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepProgress {
    pub rows_done: u32,
    pub total_rows: u32,
}

impl SweepProgress {
    pub fn is_finished(&self) -> bool {
        self.rows_done >= self.total_rows
    }

    /// Completed fraction in `[0, 1]`; an empty image counts as done.
    pub fn fraction(&self) -> f64 {
        if self.total_rows == 0 {
            1.0
        } else {
            self.rows_done as f64 / self.total_rows as f64
        }
    }
}

/// Send every pixel of `source` through `filter`.
pub fn apply_filter(source: &DecodedImage, filter: ColorFilter) -> DecodedImage {
    let mut out = source.clone();
    filter.apply_in_place(&mut out.pixels);
    out
}

/// Forward-map every pixel of `source` through `matrix`.
pub fn apply_geometry(source: &DecodedImage, matrix: &Matrix3) -> DecodedImage {
    let mut out = DecodedImage::black(source.width, source.height);
    for y in 0..source.height {
        geometry_row(source, &mut out, matrix, y);
    }
    out
}

// Rows missing from a short buffer are skipped.
fn filter_row(source: &DecodedImage, dest: &mut DecodedImage, filter: ColorFilter, y: u32) {
    let start = source.index(0, y);
    let end = start + source.width as usize * 3;
    let Some(src) = source.pixels.get(start..end) else {
        return;
    };
    let Some(row) = dest.pixels.get_mut(start..end) else {
        return;
    };
    row.copy_from_slice(src);
    filter.apply_in_place(row);
}

fn geometry_row(source: &DecodedImage, dest: &mut DecodedImage, matrix: &Matrix3, y: u32) {
    let (w, h) = (source.width as i64, source.height as i64);
    for x in 0..source.width {
        let (nx, ny) = matrix.apply(Point2::new(x as f64, y as f64)).rounded();
        if nx < 0 || nx >= w || ny < 0 || ny >= h {
            continue;
        }
        let Some(color) = source.pixel(x, y) else {
            continue;
        };
        let dst = dest.index(nx as u32, ny as u32);
        if let Some(out) = dest.pixels.get_mut(dst..dst + 3) {
            out.copy_from_slice(&color);
        }
    }
}

/// A resumable, row-by-row application of a [`SweepOp`].
///
/// The output starts black and fills in as rows are processed. Chunk size
/// never affects the final image: running to the end always equals the
/// one-shot [`apply_filter`] / [`apply_geometry`] result.
#[derive(Debug, Clone)]
pub struct RowSweep {
    source: DecodedImage,
    output: DecodedImage,
    op: SweepOp,
    rows_per_tick: u32,
    next_row: u32,
}

impl RowSweep {
    /// Start a sweep over `source`. A `rows_per_tick` of 0 is treated as 1.
    pub fn new(source: DecodedImage, op: SweepOp, rows_per_tick: u32) -> Self {
        let output = DecodedImage::black(source.width, source.height);
        if let Err(e) = source.check_size() {
            warn!("sweep source is malformed, short rows are skipped: {}", e);
        }
        debug!(
            "starting {:?} sweep over {}x{} image, {} rows per tick",
            op, source.width, source.height, rows_per_tick
        );
        Self {
            source,
            output,
            op,
            rows_per_tick: rows_per_tick.max(1),
            next_row: 0,
        }
    }

    /// Start a sweep paced by `config`.
    pub fn with_config(source: DecodedImage, op: SweepOp, config: &SweepConfig) -> Self {
        let rows = config.rows_per_tick(&op);
        Self::new(source, op, rows)
    }

    pub fn op(&self) -> &SweepOp {
        &self.op
    }

    pub fn progress(&self) -> SweepProgress {
        SweepProgress {
            rows_done: self.next_row,
            total_rows: self.source.height,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.next_row >= self.source.height
    }

    /// Process the next chunk of rows. A finished sweep does nothing.
    pub fn tick(&mut self) -> SweepProgress {
        let end = self
            .next_row
            .saturating_add(self.rows_per_tick)
            .min(self.source.height);
        for y in self.next_row..end {
            match self.op {
                SweepOp::Geometry(ref m) => geometry_row(&self.source, &mut self.output, m, y),
                SweepOp::Filter(f) => filter_row(&self.source, &mut self.output, f, y),
            }
        }
        self.next_row = end;

        let progress = self.progress();
        trace!("sweep row {} of {}", progress.rows_done, progress.total_rows);
        if progress.is_finished() {
            debug!("sweep finished after {} rows", progress.total_rows);
        }
        progress
    }

    /// Process all remaining rows.
    pub fn run_to_end(&mut self) -> SweepProgress {
        while !self.is_finished() {
            self.tick();
        }
        self.progress()
    }

    /// The image as processed so far.
    pub fn output(&self) -> &DecodedImage {
        &self.output
    }

    pub fn into_output(self) -> DecodedImage {
        self.output
    }
}
