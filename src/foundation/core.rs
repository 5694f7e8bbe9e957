pub use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::foundation::math::mul_div255_u8;

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red, scaled by alpha.
    pub r: u8,
    /// Green, scaled by alpha.
    pub g: u8,
    /// Blue, scaled by alpha.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully opaque black.
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    /// Premultiply a straight-alpha color, rounding to nearest.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        let alpha = u16::from(a);
        Self {
            r: mul_div255_u8(u16::from(r), alpha),
            g: mul_div255_u8(u16::from(g), alpha),
            b: mul_div255_u8(u16::from(b), alpha),
            a,
        }
    }

    /// Pixel bytes in RGBA order.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Bounds with non-negative width and height.
///
/// `kurbo::Rect` allows inverted edges; every shape is inscribed into the normalized form.
#[inline]
pub fn normalized_bounds(bounds: Rect) -> Rect {
    bounds.abs()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
