use std::env;

use serde::Serialize;

use super::types::Severity;
use crate::syntax::{Position, Property, Span};

/// Owned diagnostic, detached from the node it was reported on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Diagnostic {
    severity: Severity,
    title: String,
    code: Option<String>,
    message: Option<String>,
    file: Option<String>,
    node_type: Option<String>,
    property: Option<Property>,
    index: Option<usize>,
    span: Option<Span>,
}

impl Diagnostic {
    pub fn new(severity: Severity, title: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            code: None,
            message: None,
            file: None,
            node_type: None,
            property: None,
            index: None,
            span: None,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Severity::Error, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title)
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_node_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.property = Some(property);
        self
    }

    /// Element of a repeated property the diagnostic points at.
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn node_type(&self) -> Option<&str> {
        self.node_type.as_deref()
    }

    pub fn property(&self) -> Option<Property> {
        self.property
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn span(&self) -> Option<Span> {
        self.span
    }

    pub fn position(&self) -> Option<Position> {
        self.span.map(|span| span.start)
    }

    /// Plain-text rendering with a caret snippet taken from `source`.
    ///
    /// ```text
    /// -- Error: duplicated variable name [SQL00001]
    ///
    /// Duplicated variable name 'u'.
    ///
    ///   --> query.sql:1:37
    ///   |
    /// 1 | SELECT * FROM users AS u, orders AS u;
    ///   |                                     ^
    /// ```
    pub fn render(&self, source: Option<&str>) -> String {
        let palette = Palette::from_env();
        let mut out = format!(
            "{}-- {}: {}",
            palette.header,
            self.severity.label(),
            self.title.to_lowercase()
        );
        if let Some(code) = &self.code {
            out.push_str(&format!(" [{code}]"));
        }
        out.push('\n');
        out.push_str(palette.reset);

        if let Some(message) = &self.message {
            out.push_str(&format!("\n{message}\n"));
        }

        let Some(span) = self.span else {
            return out;
        };
        let file = self
            .file
            .as_deref()
            .filter(|file| !file.is_empty())
            .unwrap_or("<unknown>");
        out.push_str(&format!(
            "\n  --> {file}:{}:{}\n",
            span.start.line,
            span.start.column + 1
        ));

        let first = span.start.line;
        let last = span.end.line.max(first);
        let gutter = last.to_string().len();
        out.push_str(&format!("{:gutter$} |\n", ""));

        // Lines are 1-based; line 0 has no text to show.
        let Some(source) = source.filter(|_| first > 0) else {
            return out;
        };
        let snippet = source
            .lines()
            .enumerate()
            .skip(first - 1)
            .take(last - first + 1);
        for (offset, text) in snippet {
            let line_no = offset + 1;
            let start = if line_no == first {
                span.start.column.min(text.len())
            } else {
                0
            };
            let end = if line_no == last {
                span.end.column.min(text.len())
            } else {
                text.len()
            }
            .max(start + 1);

            out.push_str(&format!("{line_no:>gutter$} | {text}\n"));
            out.push_str(&format!(
                "{:gutter$} | {}{}{}{}\n",
                "",
                " ".repeat(start),
                palette.caret,
                "^".repeat(end - start),
                palette.reset
            ));
        }

        out
    }
}

/// ANSI sequences used by [`Diagnostic::render`]; all empty under `NO_COLOR`.
struct Palette {
    header: &'static str,
    caret: &'static str,
    reset: &'static str,
}

impl Palette {
    fn from_env() -> Self {
        if env::var_os("NO_COLOR").is_some() {
            Self {
                header: "",
                caret: "",
                reset: "",
            }
        } else {
            Self {
                header: "\u{1b}[33m",
                caret: "\u{1b}[31m",
                reset: "\u{1b}[0m",
            }
        }
    }
}
