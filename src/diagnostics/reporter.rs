use serde::Serialize;
use tracing::{debug, trace};

use super::registry::ErrorKind;
use super::report::Report;
use super::sink::DiagnosticSink;
use super::types::{DiagnosticInfo, DiagnosticTarget, ErrorCode, Highlight, Severity};

/// One catalog entry: the fixed code, severity and highlight of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reporter {
    kind: ErrorKind,
    code: &'static str,
    title: &'static str,
    severity: Severity,
    highlight: Highlight,
}

impl Reporter {
    pub const fn new(
        kind: ErrorKind,
        code: &'static str,
        title: &'static str,
        severity: Severity,
        highlight: Highlight,
    ) -> Self {
        Self {
            kind,
            code,
            title,
            severity,
            highlight,
        }
    }

    pub fn from_error_code(kind: ErrorKind, error_code: &ErrorCode) -> Self {
        Self::new(
            kind,
            error_code.code,
            error_code.title,
            error_code.severity,
            error_code.highlight,
        )
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    /// Part of `node` this reporter highlights.
    pub fn locate<N: ?Sized>(&self, _node: &N) -> DiagnosticTarget {
        match self.highlight {
            Highlight::Node => DiagnosticTarget::node(),
            Highlight::Property(property) => DiagnosticTarget::property(property),
        }
    }
}

/// The fixed set of reporters, one per [`ErrorKind`].
///
/// Built once at startup and shared by reference; it holds no mutable state,
/// so concurrent validation passes can report through the same catalog.
#[derive(Debug, Clone)]
pub struct ReporterCatalog {
    reporters: Vec<Reporter>,
}

impl ReporterCatalog {
    pub fn new() -> Self {
        let reporters: Vec<Reporter> = ErrorKind::ALL
            .iter()
            .map(|kind| Reporter::from_error_code(*kind, kind.error_code()))
            .collect();
        debug!(reporters = reporters.len(), "reporter catalog constructed");
        Self { reporters }
    }

    pub fn get(&self, kind: ErrorKind) -> &Reporter {
        &self.reporters[kind.index()]
    }

    pub fn by_name(&self, name: &str) -> Option<&Reporter> {
        ErrorKind::from_name(name).map(|kind| self.get(kind))
    }

    pub fn by_code(&self, code: &str) -> Option<&Reporter> {
        self.reporters.iter().find(|reporter| reporter.code == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reporter> {
        self.reporters.iter()
    }

    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.reporters.iter().map(|reporter| reporter.code)
    }

    pub fn len(&self) -> usize {
        self.reporters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reporters.is_empty()
    }

    /// Render `report`, locate it on `node`, stamp the code and hand the
    /// result to `sink`. The sink is called exactly once; its error, if any,
    /// is returned unchanged.
    pub fn report<N, S>(&self, node: &N, report: Report<'_>, sink: &mut S) -> Result<(), S::Error>
    where
        N: ?Sized,
        S: DiagnosticSink<N> + ?Sized,
    {
        let reporter = self.get(report.kind());
        let message = report.message();
        let target = reporter.locate(node);
        trace!(code = reporter.code, property = ?target.property, "report");
        sink.accept(
            reporter.severity,
            message,
            DiagnosticInfo::new(node, target, reporter.code),
        )
    }
}

impl Default for ReporterCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ReporterCatalog {
    type Item = &'a Reporter;
    type IntoIter = std::slice::Iter<'a, Reporter>;

    fn into_iter(self) -> Self::IntoIter {
        self.reporters.iter()
    }
}
