//! Destinations for reported diagnostics.
//!
//! A reporter hands every diagnostic to exactly one [`DiagnosticSink`] call
//! and keeps nothing afterwards. Whatever the sink does with it (collecting,
//! filtering, translating for an editor) is up to the sink.

use std::convert::Infallible;

use tracing::trace;

use super::Diagnostic;
use super::types::{DiagnosticInfo, Severity};
use crate::config::DiagnosticsConfig;
use crate::diagnostics::registry::lookup_error_code;
use crate::syntax::SyntaxNode;

pub trait DiagnosticSink<N: ?Sized> {
    type Error;

    fn accept(
        &mut self,
        severity: Severity,
        message: String,
        info: DiagnosticInfo<'_, N>,
    ) -> Result<(), Self::Error>;
}

impl<N: ?Sized, S: DiagnosticSink<N> + ?Sized> DiagnosticSink<N> for &mut S {
    type Error = S::Error;

    fn accept(
        &mut self,
        severity: Severity,
        message: String,
        info: DiagnosticInfo<'_, N>,
    ) -> Result<(), Self::Error> {
        (**self).accept(severity, message, info)
    }
}

/// Sink backed by a closure. See [`from_fn`].
pub struct FnSink<F>(F);

/// Wrap a closure as a sink.
///
/// # Example
/// ```
/// use std::convert::Infallible;
/// use sql_diagnostics::diagnostics::{DiagnosticInfo, Severity, sink::from_fn};
///
/// let mut messages: Vec<String> = Vec::new();
/// let _sink = from_fn(|_: Severity, message: String, _: DiagnosticInfo<'_, str>| {
///     messages.push(message);
///     Ok::<(), Infallible>(())
/// });
/// ```
pub fn from_fn<N, E, F>(f: F) -> FnSink<F>
where
    N: ?Sized,
    F: FnMut(Severity, String, DiagnosticInfo<'_, N>) -> Result<(), E>,
{
    FnSink(f)
}

impl<N, E, F> DiagnosticSink<N> for FnSink<F>
where
    N: ?Sized,
    F: FnMut(Severity, String, DiagnosticInfo<'_, N>) -> Result<(), E>,
{
    type Error = E;

    fn accept(
        &mut self,
        severity: Severity,
        message: String,
        info: DiagnosticInfo<'_, N>,
    ) -> Result<(), E> {
        (self.0)(severity, message, info)
    }
}

/// Collects owned [`Diagnostic`] values, resolving each target to a span.
///
/// A target property the node cannot locate falls back to the whole node.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    file: Option<String>,
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_file(file: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            diagnostics: Vec::new(),
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl<N: SyntaxNode + ?Sized> DiagnosticSink<N> for DiagnosticCollector {
    type Error = Infallible;

    fn accept(
        &mut self,
        severity: Severity,
        message: String,
        info: DiagnosticInfo<'_, N>,
    ) -> Result<(), Infallible> {
        let title = lookup_error_code(info.code)
            .map(|error_code| error_code.title)
            .unwrap_or(info.code);
        let span = info
            .property()
            .and_then(|property| info.node.property_span(property, info.index()))
            .unwrap_or_else(|| info.node.span());

        let mut diag = Diagnostic::new(severity, title)
            .with_code(info.code)
            .with_message(message)
            .with_node_type(info.node.node_type())
            .with_span(span);
        if let Some(property) = info.property() {
            diag = diag.with_property(property);
        }
        if let Some(index) = info.index() {
            diag = diag.with_index(index);
        }
        if let Some(file) = &self.file {
            diag = diag.with_file(file.clone());
        }

        self.diagnostics.push(diag);
        Ok(())
    }
}

/// Drops diagnostics whose code the configuration suppresses.
pub struct SuppressingSink<'c, S> {
    config: &'c DiagnosticsConfig,
    inner: S,
    suppressed: usize,
}

impl<'c, S> SuppressingSink<'c, S> {
    pub fn new(config: &'c DiagnosticsConfig, inner: S) -> Self {
        Self {
            config,
            inner,
            suppressed: 0,
        }
    }

    /// Number of diagnostics dropped so far
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<N: ?Sized, S: DiagnosticSink<N>> DiagnosticSink<N> for SuppressingSink<'_, S> {
    type Error = S::Error;

    fn accept(
        &mut self,
        severity: Severity,
        message: String,
        info: DiagnosticInfo<'_, N>,
    ) -> Result<(), S::Error> {
        if self.config.is_suppressed(info.code) {
            trace!(code = info.code, "diagnostic suppressed");
            self.suppressed += 1;
            return Ok(());
        }
        self.inner.accept(severity, message, info)
    }
}
