use std::ops::Range;

use rayon::prelude::*;

use crate::{
    foundation::core::Rgba8Premul,
    foundation::error::{InkmarkError, InkmarkResult},
    raster::buffer::{PixelBuffer, RGBA8_CHANNELS},
};

/// Channel level above which a pixel counts as "light" (0-255 scale).
pub const DEFAULT_THRESHOLD: u8 = 44;

/// What a rewritten pixel becomes.
const REPLACEMENT: [u8; 4] = Rgba8Premul::BLACK.to_bytes();

/// Counters reported by every threshold pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ThresholdStats {
    /// Pixels inspected.
    pub pixels_visited: usize,
    /// Pixels rewritten to opaque black.
    pub pixels_rewritten: usize,
}

impl ThresholdStats {
    fn merge(self, other: Self) -> Self {
        Self {
            pixels_visited: self.pixels_visited + other.pixels_visited,
            pixels_rewritten: self.pixels_rewritten + other.pixels_rewritten,
        }
    }
}

/// Threshold pass settings, loadable from the `threshold` config section.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ThresholdConfig {
    /// Channel level; a pixel is rewritten only when R, G, and B all exceed it.
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    /// Split rows across rayon workers.
    #[serde(default)]
    pub parallel: bool,
    /// Dedicated worker count (parallel mode only). `None` uses the global rayon pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,
    /// Rows handed to a worker at a time; 0 is treated as 1.
    #[serde(default = "default_rows_per_chunk")]
    pub rows_per_chunk: usize,
}

fn default_threshold() -> u8 {
    DEFAULT_THRESHOLD
}

fn default_rows_per_chunk() -> usize {
    64
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            parallel: false,
            threads: None,
            rows_per_chunk: default_rows_per_chunk(),
        }
    }
}

impl ThresholdConfig {
    /// Reject a dedicated pool of zero threads.
    pub fn validate(&self) -> InkmarkResult<()> {
        if self.threads == Some(0) {
            return Err(InkmarkError::validation(
                "threshold 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

/// `true` when red, green, and blue are all strictly greater than `threshold`.
#[inline]
pub fn is_light(px: &[u8], threshold: u8) -> bool {
    px[0] > threshold && px[1] > threshold && px[2] > threshold
}

fn threshold_row(row: &mut [u8], threshold: u8) -> ThresholdStats {
    let mut stats = ThresholdStats::default();
    for px in row.chunks_exact_mut(RGBA8_CHANNELS) {
        stats.pixels_visited += 1;
        if is_light(px, threshold) {
            px.copy_from_slice(&REPLACEMENT);
            stats.pixels_rewritten += 1;
        }
    }
    stats
}

/// Turn every light pixel black using [`DEFAULT_THRESHOLD`]; dark pixels are never touched.
pub fn convert_to_black_and_white(buf: &mut PixelBuffer<'_>) -> ThresholdStats {
    threshold_in_place(buf, DEFAULT_THRESHOLD)
}

/// Serial threshold pass over every row.
#[tracing::instrument(skip(buf), fields(width = buf.width(), height = buf.height()))]
pub fn threshold_in_place(buf: &mut PixelBuffer<'_>, threshold: u8) -> ThresholdStats {
    let stats = buf
        .rows_mut()
        .map(|row| threshold_row(row, threshold))
        .fold(ThresholdStats::default(), ThresholdStats::merge);
    tracing::debug!(rewritten = stats.pixels_rewritten, "threshold pass done");
    stats
}

/// Threshold only `rows`, for callers that chunk work between cancellation checks.
pub fn threshold_rows(
    buf: &mut PixelBuffer<'_>,
    threshold: u8,
    rows: Range<u32>,
) -> InkmarkResult<ThresholdStats> {
    if rows.start > rows.end || rows.end > buf.height() {
        return Err(InkmarkError::validation(format!(
            "row range {}..{} is outside 0..{}",
            rows.start,
            rows.end,
            buf.height()
        )));
    }
    let mut stats = ThresholdStats::default();
    for y in rows {
        if let Some(row) = buf.row_mut(y) {
            stats = stats.merge(threshold_row(row, threshold));
        }
    }
    Ok(stats)
}

/// Row-parallel threshold pass. Rows share no data, so chunks run independently.
#[tracing::instrument(skip(buf), fields(width = buf.width(), height = buf.height()))]
pub fn threshold_in_place_parallel(
    buf: &mut PixelBuffer<'_>,
    threshold: u8,
    threads: Option<usize>,
    rows_per_chunk: usize,
) -> InkmarkResult<ThresholdStats> {
    if buf.pixel_count() == 0 {
        return Ok(ThresholdStats::default());
    }
    let layout = buf.layout();
    let required = layout.required_len()?;
    let stride = layout.stride;
    let row_bytes = layout.row_bytes();
    let chunk_bytes = stride
        .checked_mul(rows_per_chunk.max(1))
        .ok_or_else(|| InkmarkError::validation("rows_per_chunk is too large"))?;

    let data = &mut buf.bytes_mut()[..required];
    let mut run = move || {
        data.par_chunks_mut(chunk_bytes)
            .map(|chunk| {
                chunk
                    .chunks_mut(stride)
                    .map(|row| threshold_row(&mut row[..row_bytes], threshold))
                    .fold(ThresholdStats::default(), ThresholdStats::merge)
            })
            .reduce(ThresholdStats::default, ThresholdStats::merge)
    };

    let stats = match threads {
        Some(n) => build_thread_pool(n)?.install(run),
        None => run(),
    };
    tracing::debug!(rewritten = stats.pixels_rewritten, "parallel threshold pass done");
    Ok(stats)
}

/// Dispatch to the serial or parallel pass according to `cfg`.
pub fn threshold_in_place_with(
    buf: &mut PixelBuffer<'_>,
    cfg: &ThresholdConfig,
) -> InkmarkResult<ThresholdStats> {
    cfg.validate()?;
    if cfg.parallel {
        threshold_in_place_parallel(buf, cfg.threshold, cfg.threads, cfg.rows_per_chunk)
    } else {
        Ok(threshold_in_place(buf, cfg.threshold))
    }
}

/// Threshold tightly packed RGBA8 bytes; fails without touching `data` if the size is wrong.
pub fn threshold_rgba8_in_place(
    data: &mut [u8],
    width: u32,
    height: u32,
    threshold: u8,
) -> InkmarkResult<ThresholdStats> {
    let mut buf = PixelBuffer::from_rgba8(data, width, height)?;
    Ok(threshold_in_place(&mut buf, threshold))
}

fn build_thread_pool(threads: usize) -> InkmarkResult<rayon::ThreadPool> {
    if threads == 0 {
        return Err(InkmarkError::validation(
            "threshold 'threads' must be >= 1 when set",
        ));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| InkmarkError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/threshold.rs"]
mod tests;
