use crate::foundation::error::{InkmarkError, InkmarkResult};

/// Bytes per RGBA8 pixel; the only layout the converters accept.
pub const RGBA8_CHANNELS: usize = 4;

/// Declared geometry of a caller-owned pixel grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelLayout {
    /// Pixels per row.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// Bytes from the start of one row to the start of the next.
    pub stride: usize,
    /// Bytes per pixel.
    pub channels: usize,
}

impl PixelLayout {
    /// Tightly packed RGBA8 rows.
    pub fn rgba8(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            stride: width as usize * RGBA8_CHANNELS,
            channels: RGBA8_CHANNELS,
        }
    }

    /// Bytes of pixel data in one row (excludes stride padding).
    pub fn row_bytes(&self) -> usize {
        self.width as usize * self.channels
    }

    /// Minimum buffer length able to hold every row.
    ///
    /// The last row needs only `row_bytes`, so a trailing padding tail is optional.
    pub fn required_len(&self) -> InkmarkResult<usize> {
        if self.height == 0 || self.width == 0 {
            return Ok(0);
        }
        (self.height as usize - 1)
            .checked_mul(self.stride)
            .and_then(|v| v.checked_add(self.row_bytes()))
            .ok_or_else(|| InkmarkError::conversion("pixel buffer size overflow"))
    }

    fn check(&self, len: usize) -> InkmarkResult<()> {
        if self.channels != RGBA8_CHANNELS {
            return Err(InkmarkError::conversion(format!(
                "expected {RGBA8_CHANNELS} channels per pixel, got {}",
                self.channels
            )));
        }
        let row_bytes = (self.width as usize)
            .checked_mul(self.channels)
            .ok_or_else(|| InkmarkError::conversion("pixel row size overflow"))?;
        if self.stride < row_bytes {
            return Err(InkmarkError::conversion(format!(
                "stride {} is smaller than row size {row_bytes}",
                self.stride
            )));
        }
        let required = self.required_len()?;
        if len < required {
            return Err(InkmarkError::conversion(format!(
                "buffer holds {len} bytes but {}x{} pixels at stride {} need {required}",
                self.width, self.height, self.stride
            )));
        }
        Ok(())
    }
}

/// A validated, exclusively borrowed RGBA8 premultiplied pixel grid.
///
/// Construction checks the layout once; every operation afterwards can index rows without
/// failing, so conversions either run to completion or never touch the bytes.
#[derive(Debug)]
pub struct PixelBuffer<'a> {
    data: &'a mut [u8],
    layout: PixelLayout,
}

impl<'a> PixelBuffer<'a> {
    /// Interpret `data` with an explicit layout.
    pub fn new(data: &'a mut [u8], layout: PixelLayout) -> InkmarkResult<Self> {
        layout.check(data.len())?;
        Ok(Self { data, layout })
    }

    /// Interpret `data` as tightly packed RGBA8 rows; the length must match exactly.
    pub fn from_rgba8(data: &'a mut [u8], width: u32, height: u32) -> InkmarkResult<Self> {
        let layout = PixelLayout::rgba8(width, height);
        let expected = layout.required_len()?;
        if data.len() != expected {
            return Err(InkmarkError::conversion(format!(
                "expected {expected} bytes for {width}x{height} rgba8, got {}",
                data.len()
            )));
        }
        Ok(Self { data, layout })
    }

    /// Validated geometry.
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Pixels per row.
    pub fn width(&self) -> u32 {
        self.layout.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.layout.height
    }

    /// `width * height`.
    pub fn pixel_count(&self) -> usize {
        self.layout.width as usize * self.layout.height as usize
    }

    /// Pixel bytes of row `y`, without stride padding.
    pub fn row_mut(&mut self, y: u32) -> Option<&mut [u8]> {
        if y >= self.layout.height {
            return None;
        }
        let start = y as usize * self.layout.stride;
        Some(&mut self.data[start..start + self.layout.row_bytes()])
    }

    /// Pixel bytes of row `y`, without stride padding.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.layout.height {
            return None;
        }
        let start = y as usize * self.layout.stride;
        Some(&self.data[start..start + self.layout.row_bytes()])
    }

    /// Disjoint mutable rows, each trimmed to its pixel bytes.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> + '_ {
        let row_bytes = self.layout.row_bytes();
        let height = self.layout.height as usize;
        let stride = self.layout.stride.max(1);
        self.data
            .chunks_mut(stride)
            .take(height)
            .map(move |row| &mut row[..row_bytes])
    }

    /// Raw access to the full borrowed byte range, including stride padding.
    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data[..]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
