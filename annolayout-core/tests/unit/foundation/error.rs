use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LayoutError::invalid_span("x")
            .to_string()
            .contains("invalid span:")
    );
    assert!(
        LayoutError::misaligned_target("x")
            .to_string()
            .contains("misaligned target:")
    );
    assert!(
        LayoutError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        LayoutError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert_eq!(LayoutError::EmptyInput.to_string(), "empty input");
}

#[test]
fn kind_matches_variant() {
    assert_eq!(LayoutError::invalid_span("x").kind(), ErrorKind::InvalidSpan);
    assert_eq!(
        LayoutError::misaligned_target("x").kind(),
        ErrorKind::MisalignedTarget
    );
    assert_eq!(LayoutError::EmptyInput.kind(), ErrorKind::EmptyInput);
    assert_eq!(LayoutError::validation("x").kind(), ErrorKind::Validation);
    assert_eq!(LayoutError::serde("x").kind(), ErrorKind::Serde);
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LayoutError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert_eq!(err.kind(), ErrorKind::Other);
}
