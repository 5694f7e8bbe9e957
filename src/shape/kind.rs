use std::{fmt, str::FromStr};

use crate::foundation::error::{InkmarkError, InkmarkResult};

/// Primitive shapes the generator can synthesize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ShapeKind {
    /// Ellipse filling the bounds; keyed as `"circle"`.
    #[serde(rename = "circle", alias = "ellipse")]
    Ellipse,
    /// Axis-aligned rectangle outline.
    #[serde(rename = "rectangle")]
    Rectangle,
    /// Isosceles triangle with its apex on the top edge.
    #[serde(rename = "triangle")]
    Triangle,
    /// Five-point star.
    #[serde(rename = "star")]
    Star,
}

impl ShapeKind {
    /// Every shape, in picker order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Ellipse,
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
        ShapeKind::Star,
    ];

    /// Stable key, as used by recognizers and undo labels.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Ellipse => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Star => "star",
        }
    }

    /// Number of strokes a generated drawing of this shape contains.
    pub fn stroke_count(self) -> usize {
        match self {
            ShapeKind::Ellipse => 1,
            ShapeKind::Rectangle => 4,
            ShapeKind::Triangle => 3,
            ShapeKind::Star => 10,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = InkmarkError;

    fn from_str(s: &str) -> InkmarkResult<Self> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "circle" | "ellipse" => Ok(ShapeKind::Ellipse),
            "rectangle" | "rect" => Ok(ShapeKind::Rectangle),
            "triangle" => Ok(ShapeKind::Triangle),
            "star" => Ok(ShapeKind::Star),
            "" => Err(InkmarkError::validation("shape name must be non-empty")),
            other => Err(InkmarkError::validation(format!(
                "unknown shape '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/kind.rs"]
mod tests;
