use super::*;
use crate::foundation::core::Coord;
use crate::foundation::error::ErrorKind;

fn fe(start: i64, end: i64, name: &'static str) -> Span<&'static str> {
    Span::new("fe", start, end, name)
}

#[test]
fn text_document_end_to_end() {
    let doc = AnnotationDocument::text(
        "the cat sat",
        vec![
            fe(0, 2, "Agent"),
            fe(0, 6, "Theme"),
            Span::null("fe", "int_unexpressed", "Place"),
            Span::new("gl", 8, 10, "verb"),
        ],
    )
    .with_targets(vec![Span::new("target", 4, 6, "lu")]);

    let out = layout_document(doc, &LayoutConfig::default()).unwrap();

    assert_eq!(out.axis, AxisKind::Char);
    assert_eq!(out.words.len(), 3);
    assert!(out.words[1].annotated);

    assert_eq!(out.layers.len(), 2);
    assert_eq!(out.layers[0].layer_key, "fe");
    assert_eq!(out.layers[0].row_count(), 2);
    assert_eq!(out.layers[1].row_count(), 1);

    // the null instantiation is only in the bucket
    assert_eq!(out.nulls["int_unexpressed"][0].payload, "Place");
    assert!(
        out.layers
            .iter()
            .flat_map(|l| l.spans())
            .all(|(_, s)| s.payload != "Place")
    );

    assert_eq!(out.metrics.row_count, 3);
    assert_eq!((out.metrics.min_coord, out.metrics.max_coord), (0, 10));
    assert_eq!(out.metrics.total_height, 3 * 24 + 16);
    assert_eq!(out.placements.len(), 3);
    assert_eq!(out.placements[2].global_row, 2);
    assert_eq!(out.placements[2].words, Some((2, 2)));
}

#[test]
fn frame_document_has_no_words() {
    let doc = AnnotationDocument::frames(vec![
        Span::new("bbox", 0, 99, 1u32),
        Span::new("bbox", 50, 150, 2),
        Span::new("bbox", 100, 120, 3),
    ]);
    let out = layout_document(doc, &LayoutConfig::default()).unwrap();
    assert!(out.words.is_empty());
    assert_eq!(out.layers[0].row_count(), 2);
    assert_eq!(out.metrics.pixel_scale, 2.0);
    assert_eq!(out.metrics.extent_width(), 302.0);
    assert!(out.placements.iter().all(|p| p.words.is_none()));
}

#[test]
fn frame_span_ending_at_coordinate_ceiling_is_placed() {
    let doc = AnnotationDocument::frames(vec![
        Span::new("obj", 0, Coord::MAX, ()),
        Span::new("obj", 10, 20, ()),
    ]);
    let out = layout_document(doc, &LayoutConfig::default()).unwrap();
    assert_eq!(out.layers[0].row_count(), 2);
    assert_eq!((out.metrics.min_coord, out.metrics.max_coord), (0, Coord::MAX));
    assert_eq!(out.metrics.total_height, 2 * 24 + 16);

    let wide = out.metrics.extent_width();
    assert!(wide.is_finite() && wide > 0.0);
    let rect = out.placements[0].rect;
    assert_eq!(rect.x0, 0.0);
    assert_eq!(rect.x1, wide);
    assert_eq!(out.placements[1].rect.x0, 20.0);
    assert_eq!(out.placements[1].rect.x1, 42.0);
}

#[test]
fn text_on_frame_axis_is_rejected() {
    let mut doc = AnnotationDocument::<()>::frames(vec![]);
    doc.text = Some("x".to_string());
    let err = layout_document(doc, &LayoutConfig::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn targets_without_text_are_rejected() {
    let doc = AnnotationDocument::frames(vec![]).with_targets(vec![Span::new("t", 0, 1, ())]);
    let err = layout_document(doc, &LayoutConfig::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn span_past_end_of_text_is_invalid() {
    let doc = AnnotationDocument::text("short", vec![fe(0, 5, "Agent")]);
    let err = layout_document(doc, &LayoutConfig::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSpan);
}

#[test]
fn empty_text_means_zero_words() {
    let doc = AnnotationDocument::text("", vec![Span::null("fe", "cni", "Agent")]);
    let out = layout_document(doc, &LayoutConfig::default()).unwrap();
    assert!(out.words.is_empty());
    assert!(out.layers.is_empty());
    assert_eq!(out.metrics.row_count, 0);
    assert_eq!(out.nulls["cni"].len(), 1);
}

#[test]
fn errors_surface_from_every_stage() {
    let cfg = LayoutConfig::default();

    let doc = AnnotationDocument::text("the cat", vec![])
        .with_targets(vec![Span::new("target", 1, 2, ())]);
    assert_eq!(
        layout_document(doc, &cfg).unwrap_err().kind(),
        ErrorKind::MisalignedTarget
    );

    let doc = AnnotationDocument::text("the cat", vec![Span::new("fe", 4, 2, ())]);
    assert_eq!(
        layout_document(doc, &cfg).unwrap_err().kind(),
        ErrorKind::InvalidSpan
    );

    let bad_cfg = LayoutConfig {
        row_height: 0,
        ..LayoutConfig::default()
    };
    let doc = AnnotationDocument::<()>::frames(vec![]);
    assert_eq!(
        layout_document(doc, &bad_cfg).unwrap_err().kind(),
        ErrorKind::Validation
    );
}

#[test]
fn layout_serializes_to_json() {
    let doc = AnnotationDocument::text("a b", vec![Span::new("fe", 0, 0, serde_json::json!({"id": 7}))]);
    let out = layout_document(doc, &LayoutConfig::default()).unwrap();
    let v = serde_json::to_value(&out).unwrap();
    assert_eq!(v["axis"], "char");
    assert_eq!(v["layers"][0]["rows"][0]["spans"][0]["payload"]["id"], 7);
    assert_eq!(v["metrics"]["row_count"], 1);
    assert!(v["placements"][0]["rect"].is_object() || v["placements"][0]["rect"].is_array());
}
