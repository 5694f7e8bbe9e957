//! Capture orientation correction.
//!
//! Recorded media carries a transform whose linear part encodes how the device was held.
//! Its translation is not reliable, so for each canonical rotation/reflection the origin is
//! re-anchored from the natural (unrotated) content size. Anything else passes through.

use crate::{
    foundation::core::{Affine, Size, Vec2},
    transform::affine::{LinearPart, translation, with_translation},
};

/// One of the eight rotation/reflection cases a capture transform can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// `(1, 0, 0, 1)`
    Identity,
    /// `(1, 0, 0, -1)`: mirrored top to bottom.
    FlipVertical,
    /// `(-1, 0, 0, 1)`: mirrored left to right.
    FlipHorizontal,
    /// `(-1, 0, 0, -1)`
    Rotate180,
    /// `(0, -1, 1, 0)`
    Rotate270,
    /// `(0, 1, -1, 0)`
    Rotate90,
    /// `(0, 1, 1, 0)`: mirrored across the main diagonal.
    Transpose,
    /// `(0, -1, -1, 0)`: mirrored across the anti-diagonal.
    Transverse,
}

/// Which natural extent a translation component is pinned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Extent {
    Zero,
    Width,
    Height,
}

impl Extent {
    fn of(self, natural: Size) -> f64 {
        match self {
            Extent::Zero => 0.0,
            Extent::Width => natural.width,
            Extent::Height => natural.height,
        }
    }
}

struct Entry {
    orientation: Orientation,
    linear: LinearPart,
    tx: Extent,
    ty: Extent,
}

const fn entry(orientation: Orientation, linear: LinearPart, tx: Extent, ty: Extent) -> Entry {
    Entry {
        orientation,
        linear,
        tx,
        ty,
    }
}

const ORIENTATION_TABLE: [Entry; 8] = [
    entry(
        Orientation::Identity,
        LinearPart::new(1.0, 0.0, 0.0, 1.0),
        Extent::Zero,
        Extent::Zero,
    ),
    entry(
        Orientation::FlipVertical,
        LinearPart::new(1.0, 0.0, 0.0, -1.0),
        Extent::Zero,
        Extent::Height,
    ),
    entry(
        Orientation::FlipHorizontal,
        LinearPart::new(-1.0, 0.0, 0.0, 1.0),
        Extent::Width,
        Extent::Zero,
    ),
    entry(
        Orientation::Rotate180,
        LinearPart::new(-1.0, 0.0, 0.0, -1.0),
        Extent::Width,
        Extent::Height,
    ),
    entry(
        Orientation::Rotate270,
        LinearPart::new(0.0, -1.0, 1.0, 0.0),
        Extent::Zero,
        Extent::Width,
    ),
    entry(
        Orientation::Rotate90,
        LinearPart::new(0.0, 1.0, -1.0, 0.0),
        Extent::Height,
        Extent::Zero,
    ),
    entry(
        Orientation::Transpose,
        LinearPart::new(0.0, 1.0, 1.0, 0.0),
        Extent::Zero,
        Extent::Zero,
    ),
    entry(
        Orientation::Transverse,
        LinearPart::new(0.0, -1.0, -1.0, 0.0),
        Extent::Height,
        Extent::Width,
    ),
];

impl Orientation {
    /// All eight cases, in table order.
    pub const ALL: [Orientation; 8] = [
        Orientation::Identity,
        Orientation::FlipVertical,
        Orientation::FlipHorizontal,
        Orientation::Rotate180,
        Orientation::Rotate270,
        Orientation::Rotate90,
        Orientation::Transpose,
        Orientation::Transverse,
    ];

    fn entry(self) -> &'static Entry {
        // Table order matches `ALL`.
        &ORIENTATION_TABLE[self as usize]
    }

    /// Exact match of `t`'s linear part against the table; `None` for anything else.
    pub fn classify(t: Affine) -> Option<Self> {
        let linear = LinearPart::of(t);
        ORIENTATION_TABLE
            .iter()
            .find(|e| e.linear == linear)
            .map(|e| e.orientation)
    }

    /// Canonical `(a, b, c, d)` of this orientation.
    pub fn linear_part(self) -> LinearPart {
        self.entry().linear
    }

    /// Translation that puts the oriented content's origin at `(0, 0)`.
    pub fn anchor(self, natural: Size) -> Vec2 {
        let e = self.entry();
        Vec2::new(e.tx.of(natural), e.ty.of(natural))
    }

    /// `true` when width and height trade places.
    pub fn is_quarter_turn(self) -> bool {
        self.linear_part().a == 0.0
    }

    /// Size of the content after orientation is applied.
    pub fn oriented_size(self, natural: Size) -> Size {
        if self.is_quarter_turn() {
            Size::new(natural.height, natural.width)
        } else {
            natural
        }
    }

    /// Canonical transform for this orientation and natural size.
    pub fn to_affine(self, natural: Size) -> Affine {
        let l = self.linear_part();
        let anchor = self.anchor(natural);
        Affine::new([l.a, l.b, l.c, l.d, anchor.x, anchor.y])
    }
}

/// Re-anchor the translation of a capture transform.
///
/// Canonical linear parts get the table's translation; any other transform is returned
/// unchanged, translation included.
pub fn normalize_transform(t: Affine, natural: Size) -> Affine {
    match Orientation::classify(t) {
        Some(o) => with_translation(t, o.anchor(natural)),
        None => {
            tracing::debug!(
                linear = ?LinearPart::of(t),
                translation = ?translation(t),
                "unrecognized orientation, passing transform through"
            );
            t
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/orientation.rs"]
mod tests;
