//! De-duplication, ordering and error limits for collected diagnostics.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use super::{Diagnostic, Severity};
use crate::config::DiagnosticsConfig;

/// Errors shown when no limit is configured.
pub const DEFAULT_MAX_ERRORS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiagnosticCounts {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    pub hints: usize,
}

impl DiagnosticCounts {
    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.infos + self.hints
    }

    fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::Info => self.infos += 1,
            Severity::Hint => self.hints += 1,
        }
    }
}

/// Result of [`DiagnosticsAggregator::report`].
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsReport<'a> {
    /// Distinct diagnostics per severity, before the error limit.
    pub counts: DiagnosticCounts,
    /// Distinct diagnostics per error code. Uncoded ones are not counted.
    pub per_code: BTreeMap<&'a str, usize>,
    /// Diagnostics that survive the error limit, in display order.
    pub shown: Vec<&'a Diagnostic>,
    /// Errors dropped by the limit.
    pub hidden_errors: usize,
}

impl DiagnosticsReport<'_> {
    /// `Found 2 errors and 1 warning.`, or `None` when nothing was found.
    pub fn summary(&self) -> Option<String> {
        let counts = self.counts;
        let parts: Vec<String> = [
            (counts.errors, "error"),
            (counts.warnings, "warning"),
            (counts.infos, "info"),
            (counts.hints, "hint"),
        ]
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, noun)| format!("{count} {noun}{}", plural(count)))
        .collect();

        let (last, init) = parts.split_last()?;
        if init.is_empty() {
            Some(format!("Found {last}."))
        } else {
            Some(format!("Found {} and {last}.", init.join(", ")))
        }
    }
}

/// Orders, de-duplicates and limits diagnostics from one or more documents.
pub struct DiagnosticsAggregator<'a> {
    diagnostics: &'a [Diagnostic],
    max_errors: usize,
    sources: HashMap<String, String>,
}

impl<'a> DiagnosticsAggregator<'a> {
    pub fn new(diagnostics: &'a [Diagnostic]) -> Self {
        Self {
            diagnostics,
            max_errors: DEFAULT_MAX_ERRORS,
            sources: HashMap::new(),
        }
    }

    /// Take the error limit from host configuration.
    pub fn with_config(self, config: &DiagnosticsConfig) -> Self {
        self.with_max_errors(config.max_errors())
    }

    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    /// Source text used for the caret snippets of diagnostics in `file`.
    pub fn with_source(mut self, file: impl Into<String>, source: impl Into<String>) -> Self {
        self.sources.insert(file.into(), source.into());
        self
    }

    pub fn report(&self) -> DiagnosticsReport<'a> {
        let mut seen = HashSet::new();
        let mut unique: Vec<&'a Diagnostic> = self
            .diagnostics
            .iter()
            .filter(|diag| seen.insert(*diag))
            .collect();
        // Stable, so equal keys keep their reporting order.
        unique.sort_by(|a, b| display_order(a, b));

        let mut report = DiagnosticsReport::default();
        let mut errors_shown = 0;
        for diag in unique {
            report.counts.record(diag.severity());
            if let Some(code) = diag.code() {
                *report.per_code.entry(code).or_default() += 1;
            }
            if diag.severity() == Severity::Error {
                if errors_shown == self.max_errors {
                    report.hidden_errors += 1;
                    continue;
                }
                errors_shown += 1;
            }
            report.shown.push(diag);
        }
        report
    }

    pub fn render(&self) -> String {
        let report = self.report();
        let mut out = report.summary().map(|s| s + "\n").unwrap_or_default();
        for diag in &report.shown {
            let source = diag
                .file()
                .and_then(|file| self.sources.get(file))
                .map(String::as_str);
            out.push('\n');
            out.push_str(&diag.render(source));
        }
        if report.hidden_errors > 0 {
            out.push_str(&format!(
                "\n... and {} more error{} not shown.\n",
                report.hidden_errors,
                plural(report.hidden_errors)
            ));
        }
        out
    }
}

/// File, then line and column (unplaced last), then severity, then code.
fn display_order(a: &Diagnostic, b: &Diagnostic) -> Ordering {
    let place = |diag: &Diagnostic| {
        diag.position()
            .filter(|pos| pos.line > 0)
            .map_or((usize::MAX, usize::MAX), |pos| (pos.line, pos.column))
    };
    a.file()
        .unwrap_or("")
        .cmp(b.file().unwrap_or(""))
        .then_with(|| place(a).cmp(&place(b)))
        .then_with(|| a.severity().rank().cmp(&b.severity().rank()))
        .then_with(|| a.code().cmp(&b.code()))
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
