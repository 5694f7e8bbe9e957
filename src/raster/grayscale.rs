use crate::{
    foundation::math::luma_bt601,
    raster::buffer::{PixelBuffer, RGBA8_CHANNELS},
};

/// Replace R, G, and B with their BT.601 luma; alpha is kept.
///
/// Luma of premultiplied channels is itself premultiplied, so no alpha round trip is needed.
pub fn grayscale_in_place(buf: &mut PixelBuffer<'_>) {
    for row in buf.rows_mut() {
        for px in row.chunks_exact_mut(RGBA8_CHANNELS) {
            let y = luma_bt601(px[0], px[1], px[2]);
            px[0] = y;
            px[1] = y;
            px[2] = y;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/grayscale.rs"]
mod tests;
