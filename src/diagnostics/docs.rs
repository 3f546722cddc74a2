//! Documentation export for the error-code registry.

use serde::Serialize;

use super::registry::ErrorKind;
use super::types::{ErrorCode, Highlight, Severity};

#[derive(Debug, Serialize)]
struct ErrorCodeEntry {
    code: &'static str,
    name: &'static str,
    title: &'static str,
    severity: Severity,
    highlight: Highlight,
}

impl ErrorCodeEntry {
    fn new(kind: ErrorKind, error_code: &'static ErrorCode) -> Self {
        Self {
            code: error_code.code,
            name: kind.name(),
            title: error_code.title,
            severity: error_code.severity,
            highlight: error_code.highlight,
        }
    }
}

fn entries() -> impl Iterator<Item = ErrorCodeEntry> {
    ErrorKind::ALL
        .into_iter()
        .map(|kind| ErrorCodeEntry::new(kind, kind.error_code()))
}

/// Markdown page listing every error code.
pub fn render_error_code_docs() -> String {
    let mut out = String::from("# SQL diagnostics\n\n");
    out.push_str("| Code | Name | Severity | Highlights |\n");
    out.push_str("|------|------|----------|------------|\n");
    for entry in entries() {
        let highlight = match entry.highlight {
            Highlight::Node => "node".to_string(),
            Highlight::Property(property) => format!("`{}`", property),
        };
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            entry.code, entry.name, entry.severity, highlight
        ));
    }
    out
}

/// The registry as a JSON array, one object per code.
pub fn error_codes_json() -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(entries().collect::<Vec<_>>())
}
