//! Literal formatting helpers used by message rendering.
//!
//! None of these can fail: values outside the usual domain fall back to their
//! plain textual form.

use crate::syntax::DataTypeNode;

/// Render a numeric literal.
///
/// Finite values use their shortest round-trip form (`1.5`, `3`); non-finite
/// values render as `NaN`, `inf` or `-inf`.
///
/// # Example
/// ```
/// use sql_diagnostics::diagnostics::format_number;
/// assert_eq!(format_number(1.5), "1.5");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else if value.is_nan() {
        "NaN".to_string()
    } else if value.is_sign_negative() {
        "-inf".to_string()
    } else {
        "inf".to_string()
    }
}

/// Render a data type the way it is written, e.g. `VARCHAR(255)`.
pub fn format_data_type(data_type: &dyn DataTypeNode) -> String {
    let name = data_type.type_name();
    let arguments = data_type.type_arguments();
    if arguments.is_empty() {
        return name.to_string();
    }
    let arguments = arguments
        .iter()
        .map(|arg| arg.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}({})", name, arguments)
}
