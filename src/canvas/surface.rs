use chrono::{DateTime, Utc};

use crate::{
    canvas::history::UndoHistory,
    foundation::core::{Rect, Size},
    ink::model::{Drawing, InkingTool},
    shape::generator::{ShapeStyle, generate_drawing_at},
    shape::kind::ShapeKind,
};

/// Undo label for appending `shape`.
pub fn undo_action_name(shape: ShapeKind) -> String {
    format!("Undo adding {}", shape.name())
}

/// Where a new shape lands on a canvas of `size`.
///
/// A square one third of the canvas width, offset by a third of each dimension.
pub fn placement_bounds(size: Size) -> Rect {
    let side = size.width / 3.0;
    Rect::from_origin_size((size.width / 3.0, size.height / 3.0), (side, side))
}

/// Reference canvas that appends generated shapes with undo support.
#[derive(Clone, Debug)]
pub struct ShapeCanvas {
    size: Size,
    drawing: Drawing,
    style: ShapeStyle,
    tool: Option<InkingTool>,
    history: UndoHistory,
}

impl ShapeCanvas {
    /// Empty canvas of `size` with the default style and history.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            drawing: Drawing::default(),
            style: ShapeStyle::default(),
            tool: None,
            history: UndoHistory::default(),
        }
    }

    /// Replace the base style used for new shapes.
    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the undo history, e.g. to change its depth.
    pub fn with_history(mut self, history: UndoHistory) -> Self {
        self.history = history;
        self
    }

    /// Set or clear the active inking tool.
    pub fn set_tool(&mut self, tool: Option<InkingTool>) {
        self.tool = tool;
    }

    /// Canvas size used for placement.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Current canvas content.
    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    /// Undo/redo state.
    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Append `shape` at the default placement.
    pub fn draw_shape(&mut self, shape: ShapeKind) {
        self.draw_shape_at(shape, Utc::now());
    }

    /// Append `shape` at the default placement, stamped with `created_at`.
    #[tracing::instrument(skip(self))]
    pub fn draw_shape_at(&mut self, shape: ShapeKind, created_at: DateTime<Utc>) {
        let bounds = placement_bounds(self.size);
        let style = self.style.for_tool(self.tool.as_ref());
        let drawing = generate_drawing_at(shape, bounds, &style, created_at);
        self.append(drawing, undo_action_name(shape));
    }

    /// Append an externally produced drawing as one undoable action.
    pub fn append(&mut self, drawing: Drawing, action_name: impl Into<String>) {
        self.history.record(action_name, self.drawing.clone());
        self.drawing.append(drawing);
        tracing::debug!(strokes = self.drawing.len(), "canvas appended drawing");
    }

    /// Revert the last action; `false` when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.drawing)
    }

    /// Re-apply the last undone action; `false` when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.drawing)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/surface.rs"]
mod tests;
