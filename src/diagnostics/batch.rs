use rayon::prelude::*;

use super::Diagnostic;
use super::sink::DiagnosticCollector;

/// Validate several documents in parallel.
///
/// `validate` runs once per document with a fresh collector and typically
/// reports through a shared [`ReporterCatalog`](super::ReporterCatalog).
/// Results come back in input order.
pub fn collect_parallel<D, F>(documents: &[D], validate: F) -> Vec<Vec<Diagnostic>>
where
    D: Sync,
    F: Fn(&D, &mut DiagnosticCollector) + Sync,
{
    documents
        .par_iter()
        .map(|document| {
            let mut collector = DiagnosticCollector::new();
            validate(document, &mut collector);
            collector.into_diagnostics()
        })
        .collect()
}
