//! Type definitions for the diagnostics system
//!
//! Severity levels, error code descriptions and the location types passed
//! from reporters to sinks.

mod error_code;
mod severity;
mod target;

pub use error_code::{ErrorCode, Highlight};
pub use severity::Severity;
pub use target::{DiagnosticInfo, DiagnosticTarget};
