use chrono::Utc;

use super::*;
use crate::ink::model::{InkColor, InkKind, InkStyle};

#[test]
fn placement_is_a_third_of_the_canvas() {
    let bounds = placement_bounds(Size::new(300.0, 600.0));
    assert_eq!(bounds, Rect::new(100.0, 200.0, 200.0, 300.0));
}

#[test]
fn drawing_a_shape_appends_its_strokes_and_records_undo() {
    let mut canvas = ShapeCanvas::new(Size::new(300.0, 300.0));
    canvas.draw_shape(ShapeKind::Star);
    assert_eq!(canvas.drawing().len(), 10);
    assert_eq!(
        canvas.history().undo_action_name(),
        Some("Undo adding star")
    );

    canvas.draw_shape(ShapeKind::Rectangle);
    assert_eq!(canvas.drawing().len(), 14);
    assert_eq!(
        canvas.history().undo_action_name(),
        Some("Undo adding rectangle")
    );
}

#[test]
fn undo_and_redo_restore_canvas_content() {
    let mut canvas = ShapeCanvas::new(Size::new(300.0, 300.0));
    let now = Utc::now();
    canvas.draw_shape_at(ShapeKind::Triangle, now);
    let after_triangle = canvas.drawing().clone();
    canvas.draw_shape_at(ShapeKind::Ellipse, now);
    assert_eq!(canvas.drawing().len(), 4);

    assert!(canvas.undo());
    assert_eq!(canvas.drawing(), &after_triangle);
    assert!(canvas.undo());
    assert!(canvas.drawing().is_empty());
    assert!(!canvas.undo());

    assert!(canvas.redo());
    assert_eq!(canvas.drawing(), &after_triangle);
    assert!(canvas.redo());
    assert_eq!(canvas.drawing().len(), 4);
    assert!(!canvas.redo());
}

#[test]
fn empty_canvas_has_nothing_to_undo() {
    let mut canvas = ShapeCanvas::new(Size::new(10.0, 10.0));
    assert!(!canvas.undo());
    assert!(!canvas.redo());
    assert!(canvas.drawing().is_empty());
}

#[test]
fn active_tool_sets_ink_and_floors_thickness() {
    let ink = InkStyle::new(InkKind::Marker, InkColor::rgb(0, 0, 255));
    let mut canvas = ShapeCanvas::new(Size::new(90.0, 90.0));
    canvas.set_tool(Some(InkingTool { ink, width: 12.0 }));
    canvas.draw_shape(ShapeKind::Rectangle);

    for stroke in canvas.drawing().strokes() {
        assert_eq!(stroke.ink, ink);
        for p in stroke.path.points() {
            assert_eq!(p.thickness, Size::new(12.0, 12.0));
        }
    }

    canvas.set_tool(None);
    canvas.draw_shape(ShapeKind::Rectangle);
    let last = &canvas.drawing().strokes()[4];
    assert_eq!(last.ink, InkStyle::default());
    assert_eq!(last.path.first().thickness, Size::new(3.0, 3.0));
}

#[test]
fn disabled_history_still_draws() {
    let mut canvas =
        ShapeCanvas::new(Size::new(30.0, 30.0)).with_history(UndoHistory::with_depth(0));
    canvas.draw_shape(ShapeKind::Ellipse);
    assert_eq!(canvas.drawing().len(), 1);
    assert!(!canvas.undo());
    assert_eq!(canvas.drawing().len(), 1);
}
