use crate::annotation::span::Span;
use crate::foundation::core::Coord;
use crate::foundation::error::LayoutResult;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One display track of a layer. No two spans in a row share a coordinate.
#[serde(bound(deserialize = "P: serde::Deserialize<'de> + Default"))]
pub struct Row<P = serde_json::Value> {
    /// Spans in placement order (ascending start).
    pub spans: Vec<Span<P>>,
}

impl<P> Row<P> {
    /// End coordinate of the last span placed in this row.
    pub fn last_end(&self) -> Option<Coord> {
        self.spans.last().map(|s| s.end)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Packed rows of one layer.
#[serde(bound(deserialize = "P: serde::Deserialize<'de> + Default"))]
pub struct LayerLayout<P = serde_json::Value> {
    /// Layer identity.
    pub layer_key: String,
    /// Rows in creation order.
    pub rows: Vec<Row<P>>,
}

impl<P> LayerLayout<P> {
    /// Number of rows in this layer.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// All spans of the layer with their row index, row by row.
    pub fn spans(&self) -> impl Iterator<Item = (usize, &Span<P>)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.spans.iter().map(move |s| (r, s)))
    }
}

/// Assign spans to the fewest rows such that no row holds two overlapping spans.
///
/// Spans are stable-sorted by start, then each goes into the first row (in creation
/// order) whose last span ends before it starts; a new row is opened when none fits.
/// The resulting row count equals [`overlap_depth`] of the input.
///
/// Fails with `InvalidSpan` if any span is a null instantiation, has a negative
/// coordinate, or starts after it ends.
pub fn pack<P>(spans: Vec<Span<P>>) -> LayoutResult<Vec<Row<P>>> {
    for span in &spans {
        span.validate_positioned()?;
    }

    let mut spans = spans;
    spans.sort_by_key(|s| s.start);

    let mut rows: Vec<Row<P>> = Vec::new();
    let mut tails: Vec<Coord> = Vec::new();
    for span in spans {
        match tails.iter().position(|&end| end < span.start) {
            Some(r) => {
                tails[r] = span.end;
                rows[r].spans.push(span);
            }
            None => {
                tails.push(span.end);
                rows.push(Row { spans: vec![span] });
            }
        }
    }
    Ok(rows)
}

/// Pack one layer group into a [`LayerLayout`].
#[tracing::instrument(level = "debug", skip(spans), fields(spans = spans.len()))]
pub fn pack_layer<P>(layer_key: String, spans: Vec<Span<P>>) -> LayoutResult<LayerLayout<P>> {
    let rows = pack(spans)?;
    tracing::debug!(rows = rows.len(), "packed layer");
    Ok(LayerLayout { layer_key, rows })
}

/// Largest number of spans covering any single coordinate.
///
/// Null instantiations are ignored.
pub fn overlap_depth<P>(spans: &[Span<P>]) -> usize {
    // (coord, is_release): spans are inclusive, so at a shared coordinate every
    // acquisition lands before any release
    let mut events: Vec<(Coord, bool)> = Vec::with_capacity(spans.len() * 2);
    for s in spans.iter().filter(|s| !s.is_null()) {
        events.push((s.start, false));
        events.push((s.end, true));
    }
    events.sort_unstable();

    let mut depth = 0usize;
    let mut max = 0usize;
    for (_, release) in events {
        if release {
            depth = depth.saturating_sub(1);
        } else {
            depth += 1;
            max = max.max(depth);
        }
    }
    max
}

#[cfg(test)]
#[path = "../../tests/unit/layout/pack.rs"]
mod tests;
