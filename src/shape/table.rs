//! Fixed vertex tables for the polygonal shapes.
//!
//! Rectangle and triangle ratios are fractions of the bounds' width and height, measured
//! from the top-left corner. Star ratios are cells of a 3x3 grid whose cell edge is
//! `max(width, height) / 3`, so the star keeps its proportions at any size.

/// A vertex expressed as `(x, y)` ratios.
pub(crate) type Ratio = (f64, f64);

/// A two-point segment in ratio space.
pub(crate) type RatioSegment = [Ratio; 2];

/// Edges clockwise from top-left, closing back to top-left.
pub(crate) const RECTANGLE_SEGMENTS: [RatioSegment; 4] = [
    [(0.0, 0.0), (1.0, 0.0)],
    [(1.0, 0.0), (1.0, 1.0)],
    [(1.0, 1.0), (0.0, 1.0)],
    [(0.0, 1.0), (0.0, 0.0)],
];

/// Bottom-left, top-center, bottom-right, back to bottom-left.
pub(crate) const TRIANGLE_SEGMENTS: [RatioSegment; 3] = [
    [(0.0, 1.0), (0.5, 0.0)],
    [(0.5, 0.0), (1.0, 1.0)],
    [(1.0, 1.0), (0.0, 1.0)],
];

/// Star grid cells per side.
pub(crate) const STAR_GRID: f64 = 3.0;

/// Star outline alternating outer and inner vertices, starting at the top point.
pub(crate) const STAR_SEGMENTS: [RatioSegment; 10] = [
    [(1.5, 0.0), (2.0, 1.0)],
    [(2.0, 1.0), (3.0, 1.0)],
    [(3.0, 1.0), (2.125, 1.75)],
    [(2.125, 1.75), (2.5, 3.0)],
    [(2.5, 3.0), (1.5, 2.25)],
    [(1.5, 2.25), (0.5, 3.0)],
    [(0.5, 3.0), (0.875, 1.75)],
    [(0.875, 1.75), (0.0, 1.0)],
    [(0.0, 1.0), (1.0, 1.0)],
    [(1.0, 1.0), (1.5, 0.0)],
];

#[cfg(test)]
#[path = "../../tests/unit/shape/table.rs"]
mod tests;
