//! annolayout is the row-packing layout engine behind a FrameNet-style annotation tool.
//!
//! Given annotation spans anchored to one axis (character offsets in a sentence, or
//! frame numbers on a video timeline) and grouped by layer, it computes the fewest
//! non-overlapping display rows per layer plus the pixel metrics needed to draw them.
//! For text it also provides the coordinate tokenizer that turns a sentence into
//! words with character offsets and splices annotated targets in as atomic words.
//!
//! # Pipeline overview
//!
//! 1. **Tokenize** (char axis): `text -> Vec<Word>`, then splice targets in.
//! 2. **Group**: `Vec<Span> -> GroupedSpans` (per layer, stable) plus a [`NullBucket`]
//!    for null instantiations, which have no coordinate.
//! 3. **Pack**: each layer's spans into the minimum number of rows.
//! 4. **Measure and place**: [`LayoutMetrics`] for the canvas and a pixel rect per span.
//!
//! [`layout_document`] runs the whole pipeline; [`layout_batch`] runs it over many
//! documents, optionally in parallel.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure**: every operation is a deterministic function of its inputs. Rendering
//!   constants come in through [`LayoutConfig`], never from ambient state.
//! - **No silent repair**: invalid spans and misaligned targets are reported, not skipped.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod annotation;
mod foundation;
mod layout;
mod session;
mod text;

pub use annotation::document::AnnotationDocument;
pub use annotation::span::Span;
pub use foundation::core::{AxisKind, Coord, Fps, NO_COORD};
pub use foundation::error::{ErrorKind, LayoutError, LayoutResult};
pub use layout::config::LayoutConfig;
pub use layout::group::{GroupedSpans, LayerGroup, LayerId, NullBucket, bucket_nulls, group_spans};
pub use layout::metrics::{LayoutMetrics, PlacedSpan, compute_metrics, place_spans};
pub use layout::pack::{LayerLayout, Row, overlap_depth, pack, pack_layer};
pub use session::batch::{BatchOpts, layout_batch};
pub use session::layout::{AnnotationLayout, layout_document};
pub use text::splice::splice;
pub use text::tokenize::{Word, WordIndex, tokenize};
