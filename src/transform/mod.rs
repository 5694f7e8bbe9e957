/// Accessors over the linear and translation parts of an [`crate::Affine`].
pub mod affine;
/// Sizing content inside a frame.
pub mod fit;
/// Canonical capture orientations and transform normalization.
pub mod orientation;
