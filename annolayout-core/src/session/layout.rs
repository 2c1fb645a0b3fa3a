use crate::annotation::document::AnnotationDocument;
use crate::annotation::span::Span;
use crate::foundation::core::AxisKind;
use crate::foundation::error::{LayoutError, LayoutResult};
use crate::layout::config::LayoutConfig;
use crate::layout::group::{NullBucket, group_spans};
use crate::layout::metrics::{LayoutMetrics, PlacedSpan, compute_metrics, place_spans};
use crate::layout::pack::{LayerLayout, pack_layer};
use crate::text::splice::splice;
use crate::text::tokenize::{Word, WordIndex, tokenize};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Render-ready layout of one annotation document.
#[serde(bound(deserialize = "P: serde::Deserialize<'de> + Default"))]
pub struct AnnotationLayout<P = serde_json::Value> {
    /// Axis the layout was computed on.
    pub axis: AxisKind,
    /// Tokenized (and target-spliced) sentence; empty on the frame axis.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub words: Vec<Word>,
    /// Packed rows per layer, in order of first appearance.
    pub layers: Vec<LayerLayout<P>>,
    /// Null instantiations, rendered outside the coordinate grid.
    pub nulls: NullBucket<P>,
    /// Canvas sizing.
    pub metrics: LayoutMetrics,
    /// Pixel placement of every packed span, layer by layer, row by row.
    pub placements: Vec<PlacedSpan>,
}

/// Lay out one document: tokenize and splice (char axis), group, pack, measure, place.
///
/// Returns the first invariant violation encountered; nothing is skipped silently.
/// Empty text is treated as a sentence with no words.
#[tracing::instrument(
    skip(doc, config),
    fields(axis = ?doc.axis, spans = doc.spans.len(), targets = doc.targets.len())
)]
pub fn layout_document<P>(
    doc: AnnotationDocument<P>,
    config: &LayoutConfig,
) -> LayoutResult<AnnotationLayout<P>> {
    config.validate()?;
    let AnnotationDocument {
        axis,
        text,
        targets,
        spans,
    } = doc;

    let words = match (axis, text) {
        (AxisKind::Frame, Some(_)) => {
            return Err(LayoutError::validation(
                "text can only be laid out on the char axis",
            ));
        }
        (_, None) => {
            if !targets.is_empty() {
                return Err(LayoutError::validation(
                    "targets require sentence text on the char axis",
                ));
            }
            Vec::new()
        }
        (AxisKind::Char, Some(text)) => {
            let words = match tokenize(&text) {
                Ok(words) => words,
                Err(LayoutError::EmptyInput) => Vec::new(),
                Err(e) => return Err(e),
            };
            let words = splice(&text, words, &targets)?;
            check_within_text(&spans, text.chars().count())?;
            words
        }
    };

    let (groups, nulls) = group_spans(spans)?.into_parts();
    let layers = groups
        .into_iter()
        .map(|g| pack_layer(g.layer_key, g.spans))
        .collect::<LayoutResult<Vec<_>>>()?;

    let metrics = compute_metrics(&layers, axis, config);
    let index = (!words.is_empty()).then(|| WordIndex::new(&words));
    let placements = place_spans(&layers, &metrics, config, index.as_ref());

    tracing::debug!(
        layers = layers.len(),
        rows = metrics.row_count,
        nulls = nulls.values().map(Vec::len).sum::<usize>(),
        "document laid out"
    );

    Ok(AnnotationLayout {
        axis,
        words,
        layers,
        nulls,
        metrics,
        placements,
    })
}

fn check_within_text<P>(spans: &[Span<P>], char_len: usize) -> LayoutResult<()> {
    let len = char_len as i64;
    for s in spans.iter().filter(|s| !s.is_null()) {
        if s.end >= len {
            return Err(LayoutError::invalid_span(format!(
                "span [{}, {}] on layer '{}' runs past the {char_len}-char text",
                s.start, s.end, s.layer_key
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/session/layout.rs"]
mod tests;
