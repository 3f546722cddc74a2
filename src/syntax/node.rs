use std::fmt;

use serde::Serialize;

use super::position::Span;

/// Node properties a diagnostic can narrow its highlight to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    /// Declared name of a source item or variable
    Name,
    /// Literal value of a numeric expression
    Value,
    /// Operator token of a unary, binary or set operation
    Operator,
    /// Cross-reference to another definition
    Reference,
    /// Nested select used as an expression
    SubQuery,
}

impl Property {
    /// Stable property name as it appears in the grammar.
    pub fn as_str(&self) -> &'static str {
        match self {
            Property::Name => "name",
            Property::Value => "value",
            Property::Operator => "operator",
            Property::Reference => "reference",
            Property::SubQuery => "subQuery",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node produced by the grammar layer.
pub trait SyntaxNode {
    /// Grammar type name of the node, e.g. `SourceItem` or `BinaryExpression`.
    fn node_type(&self) -> &str;

    /// Span of the whole node.
    fn span(&self) -> Span;

    /// Span of a single property, or of the `index`-th element when the
    /// property repeats.
    ///
    /// Returning `None` means the node has no such property; the diagnostic
    /// then highlights the whole node instead.
    fn property_span(&self, property: Property, index: Option<usize>) -> Option<Span>;
}

/// Inferred or declared type owned by the type analysis.
pub trait TypeDescriptor: fmt::Debug {
    /// Short label naming the kind of type (`integer`, `text`, ...).
    fn discriminator(&self) -> &str;
}

/// Data type reference as written in a column definition or cast.
pub trait DataTypeNode: SyntaxNode + fmt::Debug {
    fn type_name(&self) -> &str;

    /// Size or precision arguments, e.g. `255` in `VARCHAR(255)`.
    fn type_arguments(&self) -> &[i64] {
        &[]
    }
}
