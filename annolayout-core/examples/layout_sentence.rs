use annolayout::{AnnotationDocument, Fps, LayoutConfig, Span, layout_document};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let text = "Sue gave the book to Kim";
    let doc = AnnotationDocument::text(
        text,
        vec![
            Span::new("fe", 0, 2, "Donor"),
            Span::new("fe", 9, 16, "Theme"),
            Span::new("fe", 21, 23, "Recipient"),
            Span::new("fe", 9, 23, "Goal?"),
            Span::null("fe", "def_null", "Time"),
            Span::new("gf", 0, 2, "Ext"),
        ],
    )
    .with_targets(vec![Span::new("target", 4, 7, "give.v")]);

    let layout = layout_document(doc, &LayoutConfig::default())?;
    for word in &layout.words {
        let mark = if word.annotated { "*" } else { "" };
        println!("{:>3}..{:<3} {}{mark}", word.start, word.end, word.text);
    }
    for (layer, l) in layout.layers.iter().enumerate() {
        for (row, r) in l.rows.iter().enumerate() {
            let names: Vec<_> = r.spans.iter().map(|s| s.payload).collect();
            println!("layer {layer} ({}) row {row}: {names:?}", l.layer_key);
        }
    }
    for (category, spans) in &layout.nulls {
        println!("null {category}: {}", spans.len());
    }
    println!(
        "{} rows, {}x{} px",
        layout.metrics.row_count,
        layout.metrics.extent_width(),
        layout.metrics.total_height
    );

    let fps = Fps::new(25, 1)?;
    let clip = Span::from_secs("object:7", 1.2, 3.0, fps, ())?;
    println!("object:7 frames {}..={}", clip.start, clip.end);
    Ok(())
}
