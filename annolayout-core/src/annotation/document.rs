use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::annotation::span::Span;
use crate::foundation::core::AxisKind;
use crate::foundation::error::{LayoutError, LayoutResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Everything one render request needs: the axis, optional sentence text, the
/// already-annotated targets and the spans to lay out.
#[serde(bound(deserialize = "P: serde::Deserialize<'de> + Default"))]
pub struct AnnotationDocument<P = serde_json::Value> {
    /// Coordinate axis of every span in the document.
    #[serde(default)]
    pub axis: AxisKind,
    /// Sentence text; only meaningful on the char axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Target spans spliced into the word sequence as atomic words.
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<Span<P>>,
    /// Spans to group and pack.
    #[serde(default = "Vec::new")]
    pub spans: Vec<Span<P>>,
}

impl<P> AnnotationDocument<P> {
    /// A document on the char axis over `text`.
    pub fn text(text: impl Into<String>, spans: Vec<Span<P>>) -> Self {
        Self {
            axis: AxisKind::Char,
            text: Some(text.into()),
            targets: Vec::new(),
            spans,
        }
    }

    /// A document on the frame axis.
    pub fn frames(spans: Vec<Span<P>>) -> Self {
        Self {
            axis: AxisKind::Frame,
            text: None,
            targets: Vec::new(),
            spans,
        }
    }

    /// Attach target spans.
    pub fn with_targets(mut self, targets: Vec<Span<P>>) -> Self {
        self.targets = targets;
        self
    }
}

impl<P: DeserializeOwned + Default> AnnotationDocument<P> {
    /// Load a document from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> LayoutResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            LayoutError::validation(format!("open annotation JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse a document from a JSON reader.
    pub fn from_reader(r: impl Read) -> LayoutResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| LayoutError::serde(format!("annotation document JSON: {e}")))
    }

    /// Parse a document from a JSON string.
    pub fn from_json_str(s: &str) -> LayoutResult<Self> {
        Self::from_reader(s.as_bytes())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/annotation/document.rs"]
mod tests;
