//! Inkmark is a small toolkit for annotating captured images.
//!
//! It covers three independent steps of a markup workflow:
//!
//! 1. **Shapes**: `ShapeKind + Rect -> Drawing`. Ellipse, rectangle, triangle, and star outlines
//!    are synthesized as ink strokes inscribed in caller bounds ([`generate_drawing`]).
//! 2. **Threshold**: light pixels of an RGBA8 buffer are rewritten to opaque black in place
//!    ([`convert_to_black_and_white`]), serially or row-parallel with rayon.
//! 3. **Orientation**: a capture transform whose linear part is one of eight rotations or
//!    reflections gets its translation re-anchored from the natural content size
//!    ([`normalize_transform`]).
//!
//! [`ShapeCanvas`] ties shape generation to an undoable drawing, and [`InkmarkConfig`] loads
//! shared settings for the `inkmark` binary.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Fail before writing**: buffer geometry is validated up front, so a failed conversion
//!   leaves caller bytes untouched.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod canvas;
mod config;
mod foundation;
mod ink;
mod raster;
mod shape;

/// Affine, orientation, and aspect-fit helpers.
pub mod transform;

pub use canvas::history::{DEFAULT_HISTORY_DEPTH, Snapshot, UndoHistory};
pub use canvas::surface::{ShapeCanvas, placement_bounds, undo_action_name};
pub use config::InkmarkConfig;
pub use foundation::core::{Affine, Point, Rect, Rgba8Premul, Size, Vec2, normalized_bounds};
pub use foundation::error::{InkmarkError, InkmarkResult};
pub use ink::model::{
    ControlPoint, Drawing, InkColor, InkKind, InkStyle, InkingTool, Stroke, StrokePath,
};
pub use raster::buffer::{PixelBuffer, PixelLayout, RGBA8_CHANNELS};
pub use raster::decode::{DecodedImage, decode_image, encode_png};
pub use raster::grayscale::grayscale_in_place;
pub use raster::threshold::{
    DEFAULT_THRESHOLD, ThresholdConfig, ThresholdStats, convert_to_black_and_white, is_light,
    threshold_in_place, threshold_in_place_parallel, threshold_in_place_with,
    threshold_rgba8_in_place, threshold_rows,
};
pub use shape::generator::{
    DEFAULT_THICKNESS, ELLIPSE_SAMPLES, ShapeStyle, generate_drawing, generate_drawing_at,
};
pub use shape::kind::ShapeKind;
pub use transform::orientation::{Orientation, normalize_transform};
