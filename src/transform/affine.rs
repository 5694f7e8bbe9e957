//! Affine transform helpers.

use crate::foundation::core::{Affine, Vec2};

/// The rotation/reflection/scale part `(a, b, c, d)` of an affine map.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinearPart {
    /// Weight of `x` in the output `x`.
    pub a: f64,
    /// Weight of `x` in the output `y`.
    pub b: f64,
    /// Weight of `y` in the output `x`.
    pub c: f64,
    /// Weight of `y` in the output `y`.
    pub d: f64,
}

impl LinearPart {
    /// Linear part from its four coefficients.
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Linear part of `t`, dropping its translation.
    #[inline]
    pub fn of(t: Affine) -> Self {
        let [a, b, c, d, _, _] = t.as_coeffs();
        Self { a, b, c, d }
    }
}

/// Translation `(e, f)` of `t`.
#[inline]
pub fn translation(t: Affine) -> Vec2 {
    let [_, _, _, _, e, f] = t.as_coeffs();
    Vec2::new(e, f)
}

/// Same linear part as `t`, with its translation replaced.
#[inline]
pub fn with_translation(t: Affine, offset: Vec2) -> Affine {
    let [a, b, c, d, _, _] = t.as_coeffs();
    Affine::new([a, b, c, d, offset.x, offset.y])
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
