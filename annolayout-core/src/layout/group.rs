use std::collections::{BTreeMap, HashMap};

use crate::annotation::span::Span;
use crate::foundation::error::LayoutResult;

/// Null-instantiation spans keyed by category, in input order within each key.
pub type NullBucket<P = serde_json::Value> = BTreeMap<String, Vec<Span<P>>>;

/// Arena index of a layer inside [`GroupedSpans`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub usize);

/// Spans of one layer, in their original relative order.
#[derive(Clone, Debug)]
pub struct LayerGroup<P = serde_json::Value> {
    /// Layer identity.
    pub layer_key: String,
    /// Positioned spans of this layer.
    pub spans: Vec<Span<P>>,
}

/// Result of partitioning a flat span list by layer.
#[derive(Clone, Debug)]
pub struct GroupedSpans<P = serde_json::Value> {
    layers: Vec<LayerGroup<P>>,
    by_key: HashMap<String, LayerId>,
    nulls: NullBucket<P>,
}

impl<P> GroupedSpans<P> {
    /// Layers in order of first appearance.
    pub fn layers(&self) -> &[LayerGroup<P>] {
        &self.layers
    }

    /// Arena id of `layer_key`, if any positioned span used it.
    pub fn id_of(&self, layer_key: &str) -> Option<LayerId> {
        self.by_key.get(layer_key).copied()
    }

    /// Spans for `layer_key`.
    pub fn get(&self, layer_key: &str) -> Option<&[Span<P>]> {
        let id = self.id_of(layer_key)?;
        Some(&self.layers[id.0].spans)
    }

    /// The null instantiations diverted during grouping.
    pub fn nulls(&self) -> &NullBucket<P> {
        &self.nulls
    }

    /// Split into layer groups and the null bucket.
    pub fn into_parts(self) -> (Vec<LayerGroup<P>>, NullBucket<P>) {
        (self.layers, self.nulls)
    }
}

/// Partition spans by `layer_key`, diverting null instantiations to the null bucket.
///
/// Grouping is stable: spans keep their relative input order, which the row packer
/// uses as its tie-break.
pub fn group_spans<P>(spans: Vec<Span<P>>) -> LayoutResult<GroupedSpans<P>> {
    let mut layers: Vec<LayerGroup<P>> = Vec::new();
    let mut by_key: HashMap<String, LayerId> = HashMap::new();
    let mut nulls = NullBucket::new();

    for span in spans {
        if span.is_null() {
            push_null(&mut nulls, span)?;
            continue;
        }
        let id = match by_key.get(&span.layer_key) {
            Some(id) => *id,
            None => {
                let id = LayerId(layers.len());
                by_key.insert(span.layer_key.clone(), id);
                layers.push(LayerGroup {
                    layer_key: span.layer_key.clone(),
                    spans: Vec::new(),
                });
                id
            }
        };
        layers[id.0].spans.push(span);
    }

    Ok(GroupedSpans {
        layers,
        by_key,
        nulls,
    })
}

/// Collect the null instantiations in `spans` by category key.
///
/// Positioned spans are ignored.
pub fn bucket_nulls<P>(spans: Vec<Span<P>>) -> LayoutResult<NullBucket<P>> {
    let mut nulls = NullBucket::new();
    for span in spans.into_iter().filter(Span::is_null) {
        push_null(&mut nulls, span)?;
    }
    Ok(nulls)
}

fn push_null<P>(nulls: &mut NullBucket<P>, span: Span<P>) -> LayoutResult<()> {
    let key = span.null_category()?.to_owned();
    nulls.entry(key).or_default().push(span);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/group.rs"]
mod tests;
