use std::io::Cursor;

use anyhow::Context;

use crate::{
    foundation::core::Rgba8Premul,
    foundation::error::{InkmarkError, InkmarkResult},
    foundation::math::div255_by_alpha,
    raster::buffer::PixelBuffer,
};

/// A decoded bitmap in premultiplied RGBA8, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    /// Pixels per row.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// Tightly packed premultiplied RGBA8 bytes.
    pub rgba8_premul: Vec<u8>,
}

impl DecodedImage {
    /// Borrow the pixels for in-place conversion.
    pub fn pixel_buffer(&mut self) -> InkmarkResult<PixelBuffer<'_>> {
        PixelBuffer::from_rgba8(&mut self.rgba8_premul, self.width, self.height)
    }
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> InkmarkResult<DecodedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(DecodedImage {
        width,
        height,
        rgba8_premul,
    })
}

/// Un-premultiply and encode as PNG.
pub fn encode_png(img: &DecodedImage) -> InkmarkResult<Vec<u8>> {
    let mut straight = img.rgba8_premul.clone();
    unpremultiply_rgba8_in_place(&mut straight);
    let rgba = image::RgbaImage::from_raw(img.width, img.height, straight).ok_or_else(|| {
        InkmarkError::conversion(format!(
            "{} bytes do not describe a {}x{} rgba8 image",
            img.rgba8_premul.len(),
            img.width,
            img.height
        ))
    })?;

    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(rgba)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(out)
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let premul = Rgba8Premul::from_straight_rgba(px[0], px[1], px[2], px[3]);
        px.copy_from_slice(&premul.to_bytes());
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3];
        if a == 255 {
            continue;
        }
        px[0] = div255_by_alpha(px[0], a);
        px[1] = div255_by_alpha(px[1], a);
        px[2] = div255_by_alpha(px[2], a);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/decode.rs"]
mod tests;
