use rayon::prelude::*;

use crate::annotation::document::AnnotationDocument;
use crate::foundation::error::{LayoutError, LayoutResult};
use crate::layout::config::LayoutConfig;
use crate::session::layout::{AnnotationLayout, layout_document};

/// Options controlling [`layout_batch`].
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct BatchOpts {
    /// Lay documents out in parallel on a dedicated rayon pool.
    #[serde(default)]
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    #[serde(default)]
    pub threads: Option<usize>,
}

/// Lay out many independent documents.
///
/// The outer error covers the config and the thread pool; each document gets its own
/// result so callers can skip the ones that fail. Output order matches input order.
#[tracing::instrument(skip(docs, config), fields(docs = docs.len()))]
pub fn layout_batch<P>(
    docs: Vec<AnnotationDocument<P>>,
    config: &LayoutConfig,
    opts: &BatchOpts,
) -> LayoutResult<Vec<LayoutResult<AnnotationLayout<P>>>>
where
    P: Send,
{
    config.validate()?;

    let results: Vec<_> = if opts.parallel {
        let pool = build_thread_pool(opts.threads)?;
        pool.install(|| {
            docs.into_par_iter()
                .map(|doc| layout_document(doc, config))
                .collect()
        })
    } else {
        docs.into_iter()
            .map(|doc| layout_document(doc, config))
            .collect()
    };

    let failed = results.iter().filter(|r| r.is_err()).count();
    tracing::debug!(failed, "batch laid out");
    Ok(results)
}

fn build_thread_pool(threads: Option<usize>) -> LayoutResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(LayoutError::validation(
            "layout_batch 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| LayoutError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/session/batch.rs"]
mod tests;
