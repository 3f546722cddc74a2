pub mod config;
pub mod diagnostics;
pub mod syntax;

pub use config::{ConfigError, DiagnosticsConfig};
pub use diagnostics::{Report, ReporterCatalog, Severity};
