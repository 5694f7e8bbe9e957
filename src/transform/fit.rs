//! Content sizing inside a display frame.

use crate::foundation::core::Size;

fn scales(frame: Size, content: Size) -> Option<(f64, f64)> {
    if content.width <= 0.0 || content.height <= 0.0 {
        return None;
    }
    Some((frame.width / content.width, frame.height / content.height))
}

/// Displayed size of `content` scaled to fit entirely inside `frame`.
pub fn aspect_fit_size(frame: Size, content: Size) -> Size {
    let Some((sx, sy)) = scales(frame, content) else {
        return Size::ZERO;
    };
    if sy < sx {
        Size::new(sy * content.width, frame.height)
    } else if sx < sy {
        Size::new(frame.width, sx * content.height)
    } else {
        frame
    }
}

/// Displayed size of `content` scaled to cover `frame`, overflowing one axis.
pub fn aspect_fill_size(frame: Size, content: Size) -> Size {
    let Some((sx, sy)) = scales(frame, content) else {
        return Size::ZERO;
    };
    if sy > sx {
        Size::new(sy * content.width, frame.height)
    } else if sx > sy {
        Size::new(frame.width, sx * content.height)
    } else {
        frame
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/fit.rs"]
mod tests;
