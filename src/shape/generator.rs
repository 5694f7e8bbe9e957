use chrono::{DateTime, Utc};

use crate::{
    foundation::core::{Point, Rect, normalized_bounds},
    foundation::error::{InkmarkError, InkmarkResult},
    ink::model::{ControlPoint, Drawing, InkStyle, InkingTool, Stroke, StrokePath},
    shape::kind::ShapeKind,
    shape::table::{RECTANGLE_SEGMENTS, RatioSegment, STAR_GRID, STAR_SEGMENTS, TRIANGLE_SEGMENTS},
};

/// Number of samples along a generated ellipse: every whole degree in `0..=360`.
///
/// The last sample repeats the first so the polyline closes on itself.
pub const ELLIPSE_SAMPLES: usize = 361;

/// Default control point size in canvas units.
pub const DEFAULT_THICKNESS: f64 = 3.0;

/// Appearance parameters applied to every generated control point.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeStyle {
    /// Ink for every stroke.
    #[serde(default)]
    pub ink: InkStyle,
    /// Control point opacity in `[0, 1]`.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Control point size.
    #[serde(default = "default_thickness")]
    pub thickness: f64,
}

fn default_opacity() -> f64 {
    1.0
}

fn default_thickness() -> f64 {
    DEFAULT_THICKNESS
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            ink: InkStyle::default(),
            opacity: default_opacity(),
            thickness: default_thickness(),
        }
    }
}

impl ShapeStyle {
    /// Adopt the tool's ink; its width is a floor on thickness, never a ceiling.
    pub fn with_tool(self, tool: &InkingTool) -> Self {
        Self {
            ink: tool.ink,
            thickness: self.thickness.max(tool.width),
            ..self
        }
    }

    /// Resolve the style for an optional active tool.
    pub fn for_tool(self, tool: Option<&InkingTool>) -> Self {
        match tool {
            Some(tool) => self.with_tool(tool),
            None => self,
        }
    }

    /// Reject opacity outside `[0, 1]` and negative or non-finite thickness.
    pub fn validate(&self) -> InkmarkResult<()> {
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(InkmarkError::validation(
                "shape opacity must be within [0, 1]",
            ));
        }
        if !self.thickness.is_finite() || self.thickness < 0.0 {
            return Err(InkmarkError::validation(
                "shape thickness must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Generate `shape` inscribed in `bounds`, stamped with the current time.
pub fn generate_drawing(shape: ShapeKind, bounds: Rect, style: &ShapeStyle) -> Drawing {
    generate_drawing_at(shape, bounds, style, Utc::now())
}

/// Generate `shape` inscribed in `bounds`; every stroke shares `created_at`.
///
/// Total over its inputs: zero-area bounds produce coincident points, never an error.
#[tracing::instrument(skip(style))]
pub fn generate_drawing_at(
    shape: ShapeKind,
    bounds: Rect,
    style: &ShapeStyle,
    created_at: DateTime<Utc>,
) -> Drawing {
    let bounds = normalized_bounds(bounds);
    let sampler = Sampler {
        thickness: style.thickness,
        opacity: style.opacity.clamp(0.0, 1.0),
    };

    let paths = match shape {
        ShapeKind::Ellipse => vec![ellipse_path(bounds, sampler, created_at)],
        ShapeKind::Rectangle => {
            segment_paths(&RECTANGLE_SEGMENTS, sampler, created_at, |r| {
                unit_point(bounds, r)
            })
        }
        ShapeKind::Triangle => {
            segment_paths(&TRIANGLE_SEGMENTS, sampler, created_at, |r| {
                unit_point(bounds, r)
            })
        }
        ShapeKind::Star => {
            let cell = bounds.width().max(bounds.height()) / STAR_GRID;
            segment_paths(&STAR_SEGMENTS, sampler, created_at, |(rx, ry)| {
                Point::new(bounds.x0 + rx * cell, bounds.y0 + ry * cell)
            })
        }
    };
    debug_assert_eq!(paths.len(), shape.stroke_count());

    Drawing::new(
        paths
            .into_iter()
            .map(|path| Stroke {
                ink: style.ink,
                path,
            })
            .collect(),
    )
}

#[derive(Clone, Copy)]
struct Sampler {
    thickness: f64,
    opacity: f64,
}

impl Sampler {
    fn point(self, location: Point) -> ControlPoint {
        ControlPoint::synthetic(location, self.thickness, self.opacity)
    }
}

/// Map unit ratios onto `bounds`, exact at 0 and 1.
fn unit_point(bounds: Rect, (rx, ry): (f64, f64)) -> Point {
    fn mix(a: f64, b: f64, t: f64) -> f64 {
        a * (1.0 - t) + b * t
    }
    Point::new(mix(bounds.x0, bounds.x1, rx), mix(bounds.y0, bounds.y1, ry))
}

fn segment_paths(
    segments: &[RatioSegment],
    sampler: Sampler,
    created_at: DateTime<Utc>,
    place: impl Fn((f64, f64)) -> Point,
) -> Vec<StrokePath> {
    segments
        .iter()
        .map(|[from, to]| {
            StrokePath::segment(
                sampler.point(place(*from)),
                sampler.point(place(*to)),
                created_at,
            )
        })
        .collect()
}

/// A circle of diameter `min(w, h)` stretched along the longer axis to fill the bounds.
///
/// Stretching the circle is the same as scaling each unit sample by the half extents, which
/// stays finite for any aspect ratio and collapses onto the center for zero-size bounds.
fn ellipse_path(bounds: Rect, sampler: Sampler, created_at: DateTime<Utc>) -> StrokePath {
    let center = bounds.center();
    let (half_w, half_h) = (bounds.width() / 2.0, bounds.height() / 2.0);

    let sample = |i: usize| {
        let angle = (i as f64).to_radians();
        sampler.point(Point::new(
            center.x + half_w * angle.cos(),
            center.y + half_h * angle.sin(),
        ))
    };

    StrokePath::starting_at(sample(0), (1..ELLIPSE_SAMPLES).map(sample), created_at)
}

#[cfg(test)]
#[path = "../../tests/unit/shape/generator.rs"]
mod tests;
