use sql_diagnostics::diagnostics::{ERROR_CODES, ErrorKind, lookup_error_code};

#[test]
fn registry_has_unique_codes() {
    let mut codes = std::collections::HashSet::new();
    for item in ERROR_CODES {
        assert!(
            codes.insert(item.code),
            "duplicate error code in registry: {}",
            item.code
        );
    }
}

#[test]
fn registry_get_finds_codes() {
    for item in ERROR_CODES {
        let found = lookup_error_code(item.code).expect("code missing from registry");
        assert_eq!(found.title, item.title);
    }
}

#[test]
fn codes_follow_the_sql_pattern_in_order() {
    for (expected, item) in (1..).zip(ERROR_CODES) {
        let digits = item.code.strip_prefix("SQL").expect("SQL prefix");
        assert_eq!(digits.len(), 5, "{}", item.code);
        assert_eq!(digits.parse::<u32>().ok(), Some(expected), "{}", item.code);
    }
}

#[test]
fn published_codes_are_stable() {
    let pairs = [
        (ErrorKind::DuplicatedVariableName, "SQL00001"),
        (ErrorKind::NumericValueIsNotInteger, "SQL00002"),
        (ErrorKind::BinaryOperatorNotDefined, "SQL00003"),
        (ErrorKind::UnaryOperatorNotDefined, "SQL00004"),
        (ErrorKind::ExpressionMustReturnBoolean, "SQL00005"),
        (ErrorKind::AllStarSelectionRequiresTableSources, "SQL00006"),
        (ErrorKind::TableDefinitionRequiresColumns, "SQL00007"),
        (ErrorKind::SubQueryMustHaveOneColumn, "SQL00008"),
        (ErrorKind::CannotDeriveTypeOfExpression, "SQL00009"),
        (ErrorKind::SetOperationColumnCountMismatch, "SQL00010"),
        (ErrorKind::SetOperationColumnTypeMismatch, "SQL00011"),
        (ErrorKind::ReferenceKindMismatch, "SQL00012"),
        (ErrorKind::UnknownDataType, "SQL00013"),
    ];
    for (kind, code) in pairs {
        assert_eq!(kind.error_code().code, code, "{kind}");
    }
}
