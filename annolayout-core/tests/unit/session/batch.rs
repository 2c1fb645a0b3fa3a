use super::*;
use crate::annotation::span::Span;
use crate::foundation::error::ErrorKind;

fn docs() -> Vec<AnnotationDocument<u32>> {
    (0..12u32)
        .map(|i| {
            let spans = (0..=i)
                .map(|j| Span::new("fe", i64::from(j), i64::from(i + 3), j))
                .collect();
            AnnotationDocument::frames(spans)
        })
        .collect()
}

#[test]
fn parallel_and_sequential_agree() {
    let cfg = LayoutConfig::default();
    let seq = layout_batch(docs(), &cfg, &BatchOpts::default()).unwrap();
    let par = layout_batch(
        docs(),
        &cfg,
        &BatchOpts {
            parallel: true,
            threads: Some(2),
        },
    )
    .unwrap();

    assert_eq!(seq.len(), 12);
    for (i, (a, b)) in seq.iter().zip(&par).enumerate() {
        let (a, b) = (a.as_ref().unwrap(), b.as_ref().unwrap());
        assert_eq!(a, b);
        // all spans of document i share coordinate i
        assert_eq!(a.metrics.row_count, i + 1);
    }
}

#[test]
fn one_bad_document_does_not_sink_the_batch() {
    let mut input = docs();
    input[3].spans.push(Span::new("fe", 9, 1, 99));
    let out = layout_batch(input, &LayoutConfig::default(), &BatchOpts::default()).unwrap();
    assert_eq!(out[3].as_ref().unwrap_err().kind(), ErrorKind::InvalidSpan);
    assert_eq!(out.iter().filter(|r| r.is_ok()).count(), 11);
}

#[test]
fn zero_threads_is_rejected() {
    let err = layout_batch(
        docs(),
        &LayoutConfig::default(),
        &BatchOpts {
            parallel: true,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}
