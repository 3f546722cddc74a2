use super::types::{ErrorCode, Highlight, Severity};
use crate::syntax::Property;

pub const DUPLICATED_VARIABLE_NAME: ErrorCode = ErrorCode {
    code: "SQL00001",
    title: "DUPLICATED VARIABLE NAME",
    severity: Severity::Error,
    highlight: Highlight::Property(Property::Name),
};

pub const NUMERIC_VALUE_IS_NOT_INTEGER: ErrorCode = ErrorCode {
    code: "SQL00002",
    title: "NUMERIC VALUE IS NOT INTEGER",
    severity: Severity::Error,
    highlight: Highlight::Property(Property::Value),
};

pub const BINARY_OPERATOR_NOT_DEFINED: ErrorCode = ErrorCode {
    code: "SQL00003",
    title: "BINARY OPERATOR NOT DEFINED",
    severity: Severity::Error,
    highlight: Highlight::Property(Property::Operator),
};

pub const UNARY_OPERATOR_NOT_DEFINED: ErrorCode = ErrorCode {
    code: "SQL00004",
    title: "UNARY OPERATOR NOT DEFINED",
    severity: Severity::Error,
    highlight: Highlight::Property(Property::Operator),
};

pub const EXPRESSION_MUST_RETURN_BOOLEAN: ErrorCode = ErrorCode {
    code: "SQL00005",
    title: "EXPRESSION MUST RETURN BOOLEAN",
    severity: Severity::Error,
    highlight: Highlight::Node,
};

pub const ALL_STAR_SELECTION_REQUIRES_TABLE_SOURCES: ErrorCode = ErrorCode {
    code: "SQL00006",
    title: "ALL STAR SELECTION REQUIRES TABLE SOURCES",
    severity: Severity::Error,
    highlight: Highlight::Node,
};

pub const TABLE_DEFINITION_REQUIRES_COLUMNS: ErrorCode = ErrorCode {
    code: "SQL00007",
    title: "TABLE DEFINITION REQUIRES COLUMNS",
    severity: Severity::Error,
    highlight: Highlight::Property(Property::Reference),
};

pub const SUB_QUERY_MUST_HAVE_ONE_COLUMN: ErrorCode = ErrorCode {
    code: "SQL00008",
    title: "SUB-QUERY MUST HAVE ONE COLUMN",
    severity: Severity::Error,
    highlight: Highlight::Property(Property::SubQuery),
};

pub const CANNOT_DERIVE_TYPE_OF_EXPRESSION: ErrorCode = ErrorCode {
    code: "SQL00009",
    title: "CANNOT DERIVE TYPE OF EXPRESSION",
    severity: Severity::Error,
    highlight: Highlight::Node,
};

pub const SET_OPERATION_COLUMN_COUNT_MISMATCH: ErrorCode = ErrorCode {
    code: "SQL00010",
    title: "SET OPERATION COLUMN COUNT MISMATCH",
    severity: Severity::Error,
    highlight: Highlight::Property(Property::Operator),
};

pub const SET_OPERATION_COLUMN_TYPE_MISMATCH: ErrorCode = ErrorCode {
    code: "SQL00011",
    title: "SET OPERATION COLUMN TYPE MISMATCH",
    severity: Severity::Error,
    highlight: Highlight::Property(Property::Operator),
};

pub const REFERENCE_KIND_MISMATCH: ErrorCode = ErrorCode {
    code: "SQL00012",
    title: "REFERENCE KIND MISMATCH",
    severity: Severity::Error,
    highlight: Highlight::Property(Property::Reference),
};

pub const UNKNOWN_DATA_TYPE: ErrorCode = ErrorCode {
    code: "SQL00013",
    title: "UNKNOWN DATA TYPE",
    severity: Severity::Error,
    highlight: Highlight::Node,
};
