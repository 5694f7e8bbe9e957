use chrono::{DateTime, Utc};

use crate::foundation::core::{Point, Rect, Size};
use crate::foundation::error::{InkmarkError, InkmarkResult};

/// Rendering tool family for a stroke.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InkKind {
    /// Hard-edged pen.
    #[default]
    Pen,
    /// Textured pencil.
    Pencil,
    /// Translucent marker.
    Marker,
}

/// Straight (non-premultiplied) RGBA8 stroke color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InkColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl InkColor {
    /// The platform "system red" used when no tool supplies an ink.
    pub const SYSTEM_RED: Self = Self::rgb(255, 59, 48);

    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for InkColor {
    fn default() -> Self {
        Self::SYSTEM_RED
    }
}

/// Rendering appearance of a stroke, independent of its geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InkStyle {
    /// Tool family.
    #[serde(default)]
    pub kind: InkKind,
    /// Stroke color.
    #[serde(default)]
    pub color: InkColor,
}

impl InkStyle {
    /// Build a style from a tool family and color.
    pub fn new(kind: InkKind, color: InkColor) -> Self {
        Self { kind, color }
    }
}

/// The caller's active inking tool.
///
/// When present, its ink replaces the requested style and its width acts as a thickness floor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InkingTool {
    /// Ink the tool paints with.
    pub ink: InkStyle,
    /// Nominal tool width in canvas units.
    pub width: f64,
}

/// One sample along a stroke's path.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ControlPoint {
    /// Sample position in canvas coordinates.
    pub location: Point,
    /// Seconds since the start of the stroke.
    pub time_offset: f64,
    /// Rendered footprint of the sample.
    pub thickness: Size,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Stylus force.
    pub pressure: f64,
    /// Stylus azimuth in radians.
    pub azimuth: f64,
    /// Stylus altitude in radians.
    pub altitude: f64,
}

impl ControlPoint {
    /// A synthetic sample: no timing, force, or stylus angles.
    pub fn synthetic(location: Point, thickness: f64, opacity: f64) -> Self {
        Self {
            location,
            time_offset: 0.0,
            thickness: Size::new(thickness, thickness),
            opacity,
            pressure: 0.0,
            azimuth: 0.0,
            altitude: 0.0,
        }
    }
}

/// Ordered control points plus a creation timestamp. Never empty.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "StrokePathRepr")]
pub struct StrokePath {
    points: Vec<ControlPoint>,
    /// When the path was created.
    pub created_at: DateTime<Utc>,
}

#[derive(serde::Deserialize)]
struct StrokePathRepr {
    points: Vec<ControlPoint>,
    created_at: DateTime<Utc>,
}

impl TryFrom<StrokePathRepr> for StrokePath {
    type Error = InkmarkError;

    fn try_from(repr: StrokePathRepr) -> InkmarkResult<Self> {
        Self::new(repr.points, repr.created_at)
    }
}

impl StrokePath {
    /// Build a path from at least one control point.
    pub fn new(points: Vec<ControlPoint>, created_at: DateTime<Utc>) -> InkmarkResult<Self> {
        if points.is_empty() {
            return Err(InkmarkError::validation(
                "stroke path must contain at least one control point",
            ));
        }
        Ok(Self { points, created_at })
    }

    /// Path that starts at `first` and continues through `rest`.
    pub fn starting_at(
        first: ControlPoint,
        rest: impl IntoIterator<Item = ControlPoint>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let mut points = vec![first];
        points.extend(rest);
        Self { points, created_at }
    }

    /// Two-point straight segment.
    pub fn segment(start: ControlPoint, end: ControlPoint, created_at: DateTime<Utc>) -> Self {
        Self {
            points: vec![start, end],
            created_at,
        }
    }

    /// Control points in path order.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Number of control points (always >= 1).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` for a path with no points, which construction never produces.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First control point.
    pub fn first(&self) -> &ControlPoint {
        &self.points[0]
    }

    /// Last control point; the first one for single-point paths.
    pub fn last(&self) -> &ControlPoint {
        &self.points[self.points.len() - 1]
    }

    /// `true` for a two-point straight segment.
    pub fn is_segment(&self) -> bool {
        self.points.len() == 2
    }
}

/// One renderable unit: an ink applied along a path.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    /// Appearance.
    pub ink: InkStyle,
    /// Geometry.
    pub path: StrokePath,
}

/// Ordered strokes painted as one unit; later strokes paint over earlier ones.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Drawing {
    strokes: Vec<Stroke>,
}

impl Drawing {
    /// Drawing from strokes in paint order.
    pub fn new(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }

    /// Strokes in paint order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Number of strokes.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// `true` when there are no strokes.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Append `other`'s strokes after this drawing's strokes.
    pub fn append(&mut self, other: Drawing) {
        self.strokes.extend(other.strokes);
    }

    /// Smallest rectangle containing every control point location, `None` when empty.
    pub fn bounding_box(&self) -> Option<Rect> {
        let mut locations = self
            .strokes
            .iter()
            .flat_map(|s| s.path.points().iter().map(|p| p.location));
        let first = locations.next()?;
        Some(locations.fold(Rect::from_points(first, first), |acc, p| {
            acc.union_pt(p)
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ink/model.rs"]
mod tests;
