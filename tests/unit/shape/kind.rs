use super::*;

#[test]
fn names_parse_back_to_the_same_kind() {
    for kind in ShapeKind::ALL {
        assert_eq!(kind.name().parse::<ShapeKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), kind.name());
    }
}

#[test]
fn parse_is_case_insensitive_and_accepts_ellipse() {
    assert_eq!(" Ellipse ".parse::<ShapeKind>().unwrap(), ShapeKind::Ellipse);
    assert_eq!("STAR".parse::<ShapeKind>().unwrap(), ShapeKind::Star);
}

#[test]
fn parse_rejects_unknown_and_empty() {
    let err = "hexagon".parse::<ShapeKind>().unwrap_err();
    assert!(err.to_string().contains("unknown shape 'hexagon'"));
    assert!("  ".parse::<ShapeKind>().is_err());
}

#[test]
fn stroke_counts_are_fixed() {
    assert_eq!(ShapeKind::Ellipse.stroke_count(), 1);
    assert_eq!(ShapeKind::Rectangle.stroke_count(), 4);
    assert_eq!(ShapeKind::Triangle.stroke_count(), 3);
    assert_eq!(ShapeKind::Star.stroke_count(), 10);
}

#[test]
fn serde_uses_shape_keys() {
    assert_eq!(
        serde_json::to_string(&ShapeKind::Ellipse).unwrap(),
        "\"circle\""
    );
    let k: ShapeKind = serde_json::from_str("\"ellipse\"").unwrap();
    assert_eq!(k, ShapeKind::Ellipse);
}
