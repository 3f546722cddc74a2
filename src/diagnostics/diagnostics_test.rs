use std::collections::HashSet;

use crate::diagnostics::{
    DiagnosticTarget, ERROR_CODES, ErrorKind, Highlight, ReporterCatalog, Severity,
    format_number, lookup_error_code,
};
use crate::syntax::Property;

#[test]
fn error_kinds_line_up_with_registry_order() {
    for (kind, error_code) in ErrorKind::ALL.iter().zip(ERROR_CODES) {
        assert_eq!(kind.error_code(), error_code);
    }
    assert_eq!(ErrorKind::ALL.len(), ERROR_CODES.len());
}

#[test]
fn error_kind_names_round_trip() {
    for kind in ErrorKind::ALL {
        assert_eq!(ErrorKind::from_name(kind.name()), Some(kind));
        assert_eq!(ErrorKind::from_code(kind.error_code().code), Some(kind));
    }
    assert_eq!(ErrorKind::from_name("NoSuchCondition"), None);
}

#[test]
fn lookup_error_code_finds_entries() {
    let entry = lookup_error_code("SQL00006").expect("SQL00006 exists");
    assert_eq!(entry.highlight, Highlight::Node);
    assert!(lookup_error_code("SQL99999").is_none());
}

#[test]
fn catalog_indexes_by_kind() {
    let catalog = ReporterCatalog::new();
    for kind in ErrorKind::ALL {
        assert_eq!(catalog.get(kind).kind(), kind);
    }
    let codes: HashSet<_> = catalog.codes().collect();
    assert_eq!(codes.len(), catalog.len());
}

#[test]
fn reporter_locates_declared_property() {
    let catalog = ReporterCatalog::new();
    let node = "SELECT 1";

    assert_eq!(
        catalog.get(ErrorKind::DuplicatedVariableName).locate(node),
        DiagnosticTarget::property(Property::Name)
    );
    assert_eq!(
        catalog.get(ErrorKind::CannotDeriveTypeOfExpression).locate(node),
        DiagnosticTarget::node()
    );
}

#[test]
fn every_entry_is_an_error() {
    let catalog = ReporterCatalog::default();
    assert!(catalog.iter().all(|r| r.severity() == Severity::Error));
}

#[test]
fn format_number_keeps_integral_floats_short() {
    assert_eq!(format_number(3.0), "3");
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(f64::INFINITY), "inf");
}
