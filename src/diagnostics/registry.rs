use std::fmt;

use serde::Serialize;

use super::error_codes::*;
use super::types::ErrorCode;

/// Central registry of all error codes, in code order
pub const ERROR_CODES: &[ErrorCode] = &[
    DUPLICATED_VARIABLE_NAME,
    NUMERIC_VALUE_IS_NOT_INTEGER,
    BINARY_OPERATOR_NOT_DEFINED,
    UNARY_OPERATOR_NOT_DEFINED,
    EXPRESSION_MUST_RETURN_BOOLEAN,
    ALL_STAR_SELECTION_REQUIRES_TABLE_SOURCES,
    TABLE_DEFINITION_REQUIRES_COLUMNS,
    SUB_QUERY_MUST_HAVE_ONE_COLUMN,
    CANNOT_DERIVE_TYPE_OF_EXPRESSION,
    SET_OPERATION_COLUMN_COUNT_MISMATCH,
    SET_OPERATION_COLUMN_TYPE_MISMATCH,
    REFERENCE_KIND_MISMATCH,
    UNKNOWN_DATA_TYPE,
];

/// Look up error code by code string (e.g., "SQL00007")
pub fn lookup_error_code(code: &str) -> Option<&'static ErrorCode> {
    ERROR_CODES.iter().find(|item| item.code == code)
}

/// One variant per error condition the validator can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ErrorKind {
    DuplicatedVariableName,
    NumericValueIsNotInteger,
    BinaryOperatorNotDefined,
    UnaryOperatorNotDefined,
    ExpressionMustReturnBoolean,
    AllStarSelectionRequiresTableSources,
    TableDefinitionRequiresColumns,
    SubQueryMustHaveOneColumn,
    CannotDeriveTypeOfExpression,
    SetOperationColumnCountMismatch,
    SetOperationColumnTypeMismatch,
    ReferenceKindMismatch,
    UnknownDataType,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 13] = [
        ErrorKind::DuplicatedVariableName,
        ErrorKind::NumericValueIsNotInteger,
        ErrorKind::BinaryOperatorNotDefined,
        ErrorKind::UnaryOperatorNotDefined,
        ErrorKind::ExpressionMustReturnBoolean,
        ErrorKind::AllStarSelectionRequiresTableSources,
        ErrorKind::TableDefinitionRequiresColumns,
        ErrorKind::SubQueryMustHaveOneColumn,
        ErrorKind::CannotDeriveTypeOfExpression,
        ErrorKind::SetOperationColumnCountMismatch,
        ErrorKind::SetOperationColumnTypeMismatch,
        ErrorKind::ReferenceKindMismatch,
        ErrorKind::UnknownDataType,
    ];

    pub fn error_code(&self) -> &'static ErrorCode {
        match self {
            ErrorKind::DuplicatedVariableName => &DUPLICATED_VARIABLE_NAME,
            ErrorKind::NumericValueIsNotInteger => &NUMERIC_VALUE_IS_NOT_INTEGER,
            ErrorKind::BinaryOperatorNotDefined => &BINARY_OPERATOR_NOT_DEFINED,
            ErrorKind::UnaryOperatorNotDefined => &UNARY_OPERATOR_NOT_DEFINED,
            ErrorKind::ExpressionMustReturnBoolean => &EXPRESSION_MUST_RETURN_BOOLEAN,
            ErrorKind::AllStarSelectionRequiresTableSources => {
                &ALL_STAR_SELECTION_REQUIRES_TABLE_SOURCES
            }
            ErrorKind::TableDefinitionRequiresColumns => &TABLE_DEFINITION_REQUIRES_COLUMNS,
            ErrorKind::SubQueryMustHaveOneColumn => &SUB_QUERY_MUST_HAVE_ONE_COLUMN,
            ErrorKind::CannotDeriveTypeOfExpression => &CANNOT_DERIVE_TYPE_OF_EXPRESSION,
            ErrorKind::SetOperationColumnCountMismatch => &SET_OPERATION_COLUMN_COUNT_MISMATCH,
            ErrorKind::SetOperationColumnTypeMismatch => &SET_OPERATION_COLUMN_TYPE_MISMATCH,
            ErrorKind::ReferenceKindMismatch => &REFERENCE_KIND_MISMATCH,
            ErrorKind::UnknownDataType => &UNKNOWN_DATA_TYPE,
        }
    }

    /// Catalog name of the condition
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::DuplicatedVariableName => "DuplicatedVariableName",
            ErrorKind::NumericValueIsNotInteger => "NumericValueIsNotInteger",
            ErrorKind::BinaryOperatorNotDefined => "BinaryOperatorNotDefined",
            ErrorKind::UnaryOperatorNotDefined => "UnaryOperatorNotDefined",
            ErrorKind::ExpressionMustReturnBoolean => "ExpressionMustReturnBoolean",
            ErrorKind::AllStarSelectionRequiresTableSources => {
                "AllStarSelectionRequiresTableSources"
            }
            ErrorKind::TableDefinitionRequiresColumns => "TableDefinitionRequiresColumns",
            ErrorKind::SubQueryMustHaveOneColumn => "SubQueryMustHaveOneColumn",
            ErrorKind::CannotDeriveTypeOfExpression => "CannotDeriveTypeOfExpression",
            ErrorKind::SetOperationColumnCountMismatch => "SetOperationColumnCountMismatch",
            ErrorKind::SetOperationColumnTypeMismatch => "SetOperationColumnTypeMismatch",
            ErrorKind::ReferenceKindMismatch => "ReferenceKindMismatch",
            ErrorKind::UnknownDataType => "UnknownDataType",
        }
    }

    pub fn from_name(name: &str) -> Option<ErrorKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn from_code(code: &str) -> Option<ErrorKind> {
        Self::ALL.into_iter().find(|kind| kind.error_code().code == code)
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
