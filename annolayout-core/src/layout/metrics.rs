use kurbo::Rect;

use crate::foundation::core::{AxisKind, Coord};
use crate::layout::config::LayoutConfig;
use crate::layout::pack::LayerLayout;
use crate::text::tokenize::WordIndex;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Canvas sizing derived from packed layers.
pub struct LayoutMetrics {
    /// Smallest coordinate of any packed span (0 when there are none).
    pub min_coord: Coord,
    /// Largest coordinate of any packed span (0 when there are none).
    pub max_coord: Coord,
    /// Rows across all layers.
    pub row_count: usize,
    /// Pixels per coordinate.
    pub pixel_scale: f64,
    /// `row_count * row_height + padding`.
    pub total_height: u32,
}

impl LayoutMetrics {
    /// Horizontal extent in pixels of the packed coordinate range.
    pub fn extent_width(&self) -> f64 {
        if self.row_count == 0 {
            return 0.0;
        }
        ((self.max_coord - self.min_coord) as f64 + 1.0) * self.pixel_scale
    }
}

/// Derive canvas metrics from packed layers.
///
/// Null instantiations never reach the layers, so they do not affect the extent.
pub fn compute_metrics<P>(
    layouts: &[LayerLayout<P>],
    axis: AxisKind,
    config: &LayoutConfig,
) -> LayoutMetrics {
    let bounds = layouts
        .iter()
        .flat_map(|l| l.spans())
        .map(|(_, s)| (s.start, s.end))
        .reduce(|(lo, hi), (s, e)| (lo.min(s), hi.max(e)));
    let (min_coord, max_coord) = bounds.unwrap_or((0, 0));

    let row_count: usize = layouts.iter().map(LayerLayout::row_count).sum();
    let rows = u32::try_from(row_count).unwrap_or(u32::MAX);
    let total_height = rows
        .saturating_mul(config.row_height)
        .saturating_add(config.padding);

    LayoutMetrics {
        min_coord,
        max_coord,
        row_count,
        pixel_scale: config.pixel_scale_for(axis),
        total_height,
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Pixel placement of one packed span.
pub struct PlacedSpan {
    /// Index into the layer list.
    pub layer: usize,
    /// Row index within the layer.
    pub row: usize,
    /// Row index counted across all layers, top to bottom.
    pub global_row: usize,
    /// Position of the span within its row.
    pub index: usize,
    /// Pixel bounds on the canvas.
    pub rect: Rect,
    /// Inclusive word range covered, on the char axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<(usize, usize)>,
}

/// Position every packed span on the canvas.
///
/// Layers stack top to bottom in order; rows start half the padding below the top
/// edge. Horizontal positions are relative to `metrics.min_coord`.
pub fn place_spans<P>(
    layouts: &[LayerLayout<P>],
    metrics: &LayoutMetrics,
    config: &LayoutConfig,
    words: Option<&WordIndex>,
) -> Vec<PlacedSpan> {
    let scale = metrics.pixel_scale;
    let row_h = f64::from(config.row_height);
    let top = f64::from(config.padding) / 2.0;

    let mut out = Vec::new();
    let mut row_base = 0usize;
    for (layer, layout) in layouts.iter().enumerate() {
        for (row, spans) in layout.rows.iter().enumerate() {
            let global_row = row_base + row;
            let y0 = top + (global_row as f64) * row_h;
            for (index, s) in spans.spans.iter().enumerate() {
                let x0 = ((s.start - metrics.min_coord) as f64) * scale;
                let x1 = ((s.end - metrics.min_coord) as f64 + 1.0) * scale;
                out.push(PlacedSpan {
                    layer,
                    row,
                    global_row,
                    index,
                    rect: Rect::new(x0, y0, x1, y0 + row_h),
                    words: words.and_then(|w| w.word_range(s.start, s.end)),
                });
            }
        }
        row_base += layout.row_count();
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/layout/metrics.rs"]
mod tests;
