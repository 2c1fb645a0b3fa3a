use crate::foundation::core::{Coord, Fps, NO_COORD};
use crate::foundation::error::{LayoutError, LayoutResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// The extent of one annotation on a shared axis.
///
/// `payload` is an opaque handle back to whatever owns the span (frame element,
/// generic label, lexical-unit target, bounding box). The engine never looks inside
/// it; it only carries it through to the output.
///
/// A span whose `start` is [`NO_COORD`] is a null instantiation: it has no position
/// and is identified by its `category_key` instead.
pub struct Span<P = serde_json::Value> {
    /// Layer identity used for grouping.
    pub layer_key: String,
    /// First covered coordinate.
    pub start: Coord,
    /// Last covered coordinate (inclusive).
    pub end: Coord,
    /// Instantiation-type key, required for null instantiations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_key: Option<String>,
    /// Opaque owner reference.
    #[serde(default)]
    pub payload: P,
}

impl<P> Span<P> {
    /// A positioned span covering `start..=end`.
    pub fn new(layer_key: impl Into<String>, start: Coord, end: Coord, payload: P) -> Self {
        Self {
            layer_key: layer_key.into(),
            start,
            end,
            category_key: None,
            payload,
        }
    }

    /// A null instantiation of category `category_key`.
    pub fn null(layer_key: impl Into<String>, category_key: impl Into<String>, payload: P) -> Self {
        Self {
            layer_key: layer_key.into(),
            start: NO_COORD,
            end: NO_COORD,
            category_key: Some(category_key.into()),
            payload,
        }
    }

    /// Frame span for the half-open time range `[start_s, end_s)`.
    ///
    /// The span starts on the frame containing `start_s` and ends on the last frame
    /// that begins before `end_s` (or the start frame, for instants).
    pub fn from_secs(
        layer_key: impl Into<String>,
        start_s: f64,
        end_s: f64,
        fps: Fps,
        payload: P,
    ) -> LayoutResult<Self> {
        if !start_s.is_finite() || !end_s.is_finite() || start_s < 0.0 {
            return Err(LayoutError::invalid_span(
                "time range must be finite and start at >= 0s",
            ));
        }
        if start_s > end_s {
            return Err(LayoutError::invalid_span(format!(
                "time range start {start_s}s is after end {end_s}s"
            )));
        }
        let start = fps.secs_to_frames_floor(start_s);
        let end = fps.secs_to_last_frame(end_s, start);
        Ok(Self::new(layer_key, start, end, payload))
    }

    /// Whether this span is a null instantiation.
    pub fn is_null(&self) -> bool {
        self.start == NO_COORD
    }

    /// Number of coordinates covered (zero for null instantiations).
    pub fn width(&self) -> u64 {
        if self.is_null() {
            return 0;
        }
        self.end.abs_diff(self.start) + 1
    }

    /// Whether the two spans share at least one coordinate.
    pub fn overlaps<Q>(&self, other: &Span<Q>) -> bool {
        !(self.end < other.start || other.end < self.start)
    }

    /// Check the positioned-span contract: both coordinates `>= 0` and `start <= end`.
    pub fn validate_positioned(&self) -> LayoutResult<()> {
        if self.is_null() {
            return Err(LayoutError::invalid_span(format!(
                "null instantiation on layer '{}' has no coordinates",
                self.layer_key
            )));
        }
        if self.start < 0 || self.end < 0 {
            return Err(LayoutError::invalid_span(format!(
                "span [{}, {}] on layer '{}' has a negative coordinate",
                self.start, self.end, self.layer_key
            )));
        }
        if self.start > self.end {
            return Err(LayoutError::invalid_span(format!(
                "span [{}, {}] on layer '{}' starts after it ends",
                self.start, self.end, self.layer_key
            )));
        }
        Ok(())
    }

    /// The category key of a null instantiation, or `InvalidSpan` if it has none.
    pub(crate) fn null_category(&self) -> LayoutResult<&str> {
        self.category_key.as_deref().ok_or_else(|| {
            LayoutError::invalid_span(format!(
                "null instantiation on layer '{}' is missing its category key",
                self.layer_key
            ))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/annotation/span.rs"]
mod tests;
