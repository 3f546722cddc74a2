//! Report variants, one per error condition.
//!
//! Each variant carries exactly the parameters its message needs, so a report
//! with a missing or mistyped field does not compile. [`Report::kind`] maps a
//! variant to its catalog entry and [`Report::message`] renders its text.

use super::format::{format_data_type, format_number};
use super::registry::ErrorKind;
use crate::syntax::{DataTypeNode, TypeDescriptor};

#[derive(Debug, Clone, Copy)]
pub enum Report<'a> {
    /// A variable or source item name is declared twice in the same scope.
    DuplicatedVariableName { name: &'a str },
    /// A numeric literal with a fractional part where an integer is required.
    NumericValueIsNotInteger { value: f64 },
    BinaryOperatorNotDefined {
        operator: &'a str,
        left: &'a dyn TypeDescriptor,
        right: &'a dyn TypeDescriptor,
    },
    UnaryOperatorNotDefined {
        operator: &'a str,
        operand: &'a dyn TypeDescriptor,
    },
    ExpressionMustReturnBoolean { result: &'a dyn TypeDescriptor },
    /// `SELECT *` without any `FROM` source.
    AllStarSelectionRequiresTableSources {},
    TableDefinitionRequiresColumns {},
    /// A sub-query used as a scalar expression selects several columns.
    SubQueryMustHaveOneColumn {},
    CannotDeriveTypeOfExpression {},
    SetOperationColumnCountMismatch {},
    /// Zero-based position of the first incompatible column pair.
    SetOperationColumnTypeMismatch { column_index: usize },
    ReferenceKindMismatch { expected: &'a str, actual: &'a str },
    UnknownDataType { data_type: &'a dyn DataTypeNode },
}

impl Report<'_> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Report::DuplicatedVariableName { .. } => ErrorKind::DuplicatedVariableName,
            Report::NumericValueIsNotInteger { .. } => ErrorKind::NumericValueIsNotInteger,
            Report::BinaryOperatorNotDefined { .. } => ErrorKind::BinaryOperatorNotDefined,
            Report::UnaryOperatorNotDefined { .. } => ErrorKind::UnaryOperatorNotDefined,
            Report::ExpressionMustReturnBoolean { .. } => ErrorKind::ExpressionMustReturnBoolean,
            Report::AllStarSelectionRequiresTableSources {} => {
                ErrorKind::AllStarSelectionRequiresTableSources
            }
            Report::TableDefinitionRequiresColumns {} => ErrorKind::TableDefinitionRequiresColumns,
            Report::SubQueryMustHaveOneColumn {} => ErrorKind::SubQueryMustHaveOneColumn,
            Report::CannotDeriveTypeOfExpression {} => ErrorKind::CannotDeriveTypeOfExpression,
            Report::SetOperationColumnCountMismatch {} => {
                ErrorKind::SetOperationColumnCountMismatch
            }
            Report::SetOperationColumnTypeMismatch { .. } => {
                ErrorKind::SetOperationColumnTypeMismatch
            }
            Report::ReferenceKindMismatch { .. } => ErrorKind::ReferenceKindMismatch,
            Report::UnknownDataType { .. } => ErrorKind::UnknownDataType,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Report::DuplicatedVariableName { name } => {
                format!("Duplicated variable name '{}'.", name)
            }
            Report::NumericValueIsNotInteger { value } => {
                format!("Numeric value '{}' is not an integer.", format_number(*value))
            }
            Report::BinaryOperatorNotDefined {
                operator,
                left,
                right,
            } => format!(
                "Binary operator '{}' is not defined for values of type '{}' and '{}'.",
                operator,
                left.discriminator(),
                right.discriminator()
            ),
            Report::UnaryOperatorNotDefined { operator, operand } => format!(
                "Unary operator '{}' is not defined for values of type '{}'.",
                operator,
                operand.discriminator()
            ),
            Report::ExpressionMustReturnBoolean { result } => format!(
                "Expression must return a boolean, not a value of type '{}'.",
                result.discriminator()
            ),
            Report::AllStarSelectionRequiresTableSources {} => {
                "Selecting all columns with '*' requires at least one table source.".to_string()
            }
            Report::TableDefinitionRequiresColumns {} => {
                "A table definition must declare at least one column.".to_string()
            }
            Report::SubQueryMustHaveOneColumn {} => {
                "A sub-query used as an expression must select exactly one column.".to_string()
            }
            Report::CannotDeriveTypeOfExpression {} => {
                "Cannot derive the type of this expression.".to_string()
            }
            Report::SetOperationColumnCountMismatch {} => {
                "Both operands of the set operation must select the same number of columns."
                    .to_string()
            }
            Report::SetOperationColumnTypeMismatch { column_index } => format!(
                "Column types of the set operation operands are incompatible at index {}.",
                column_index
            ),
            Report::ReferenceKindMismatch { expected, actual } => format!(
                "Expected a reference to an element of kind '{}', but found '{}'.",
                expected, actual
            ),
            Report::UnknownDataType { data_type } => {
                format!("Unknown data type '{}'.", format_data_type(*data_type))
            }
        }
    }
}
