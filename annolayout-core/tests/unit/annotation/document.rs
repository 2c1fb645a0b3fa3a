use super::*;
use crate::foundation::error::ErrorKind;

#[test]
fn parses_minimal_text_document() {
    let doc: AnnotationDocument = AnnotationDocument::from_json_str(
        r#"{
            "text": "the cat sat",
            "targets": [{ "layer_key": "target", "start": 4, "end": 6 }],
            "spans": [
                { "layer_key": "fe", "start": 0, "end": 2, "payload": { "fe": "Agent" } },
                { "layer_key": "fe", "start": -1, "end": -1, "category_key": "int_unexpressed" }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(doc.axis, AxisKind::Char);
    assert_eq!(doc.text.as_deref(), Some("the cat sat"));
    assert_eq!(doc.targets.len(), 1);
    assert_eq!(doc.spans[0].payload["fe"], "Agent");
    assert!(doc.spans[1].is_null());
}

#[test]
fn frame_document_defaults_collections() {
    let doc: AnnotationDocument = AnnotationDocument::from_json_str(r#"{"axis":"frame"}"#).unwrap();
    assert_eq!(doc.axis, AxisKind::Frame);
    assert!(doc.text.is_none());
    assert!(doc.spans.is_empty());
    assert!(doc.targets.is_empty());
}

#[test]
fn typed_payload_defaults_when_missing() {
    let doc = AnnotationDocument::<u32>::from_json_str(
        r#"{
            "axis": "frame",
            "spans": [
                { "layer_key": "obj", "start": 0, "end": 9, "payload": 7 },
                { "layer_key": "obj", "start": 3, "end": 4 }
            ]
        }"#,
    )
    .unwrap();
    let payloads: Vec<u32> = doc.spans.iter().map(|s| s.payload).collect();
    assert_eq!(payloads, vec![7, 0]);
}

#[test]
fn constructors_set_axis() {
    let doc = AnnotationDocument::text("a b", vec![Span::new("l", 0, 0, ())])
        .with_targets(vec![Span::new("t", 2, 2, ())]);
    assert_eq!(doc.axis, AxisKind::Char);
    assert_eq!(doc.targets.len(), 1);

    let doc = AnnotationDocument::<()>::frames(vec![]);
    assert_eq!(doc.axis, AxisKind::Frame);
}

#[test]
fn bad_json_is_serde_error() {
    let err = AnnotationDocument::<serde_json::Value>::from_json_str(r#"{"spans": 3}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Serde);
}
