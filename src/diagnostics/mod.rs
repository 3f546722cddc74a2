//! Diagnostics module.
//!
//! The error-code registry, the reporter catalog that turns a [`Report`] on a
//! syntax node into a coded, positioned diagnostic, and the sinks and
//! rendering helpers that consume those diagnostics.

pub mod aggregator;
pub mod batch;
pub mod diagnostic;
pub mod docs;
pub mod error_codes;
pub mod format;
pub mod registry;
pub mod report;
pub mod reporter;
pub mod sink;
pub mod types;

pub use aggregator::{
    DEFAULT_MAX_ERRORS, DiagnosticCounts, DiagnosticsAggregator, DiagnosticsReport,
};
pub use batch::collect_parallel;
pub use diagnostic::Diagnostic;
pub use docs::{error_codes_json, render_error_code_docs};
pub use format::{format_data_type, format_number};
pub use registry::{ERROR_CODES, ErrorKind, lookup_error_code};
pub use report::Report;
pub use reporter::{Reporter, ReporterCatalog};
pub use sink::{DiagnosticCollector, DiagnosticSink, FnSink, SuppressingSink};
pub use types::{DiagnosticInfo, DiagnosticTarget, ErrorCode, Highlight, Severity};

pub use error_codes::*;

#[cfg(test)]
mod diagnostics_test;
