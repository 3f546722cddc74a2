//! Error code types for the diagnostics system

use serde::Serialize;

use super::Severity;
use crate::syntax::Property;

/// Part of the reported node that a diagnostic highlights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Highlight {
    /// The whole node
    Node,
    /// A single property of the node
    Property(Property),
}

impl Highlight {
    pub fn property(&self) -> Option<Property> {
        match self {
            Highlight::Node => None,
            Highlight::Property(property) => Some(*property),
        }
    }
}

/// Static description of one error condition.
///
/// Codes follow the `SQL#####` pattern and are never reused or renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorCode {
    pub code: &'static str,
    pub title: &'static str,
    pub severity: Severity,
    pub highlight: Highlight,
}
