#![allow(dead_code)]

pub mod diagnostics_env;

use sql_diagnostics::syntax::{DataTypeNode, Property, Span, SyntaxNode, TypeDescriptor};

/// Minimal grammar node: a type name, its span and the spans of whichever
/// properties the test cares about.
#[derive(Debug, Clone)]
pub struct Node {
    node_type: &'static str,
    span: Span,
    properties: Vec<(Property, Vec<Span>)>,
}

impl Node {
    pub fn new(node_type: &'static str, span: Span) -> Self {
        Self {
            node_type,
            span,
            properties: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: Property, span: Span) -> Self {
        match self.properties.iter_mut().find(|(p, _)| *p == property) {
            Some((_, spans)) => spans.push(span),
            None => self.properties.push((property, vec![span])),
        }
        self
    }
}

impl SyntaxNode for Node {
    fn node_type(&self) -> &str {
        self.node_type
    }

    fn span(&self) -> Span {
        self.span
    }

    fn property_span(&self, property: Property, index: Option<usize>) -> Option<Span> {
        self.properties
            .iter()
            .find(|(p, _)| *p == property)
            .and_then(|(_, spans)| spans.get(index.unwrap_or(0)).copied())
    }
}

#[derive(Debug)]
pub struct Type(pub &'static str);

impl TypeDescriptor for Type {
    fn discriminator(&self) -> &str {
        self.0
    }
}

#[derive(Debug)]
pub struct DataType {
    pub node: Node,
    pub name: &'static str,
    pub arguments: Vec<i64>,
}

impl DataType {
    pub fn new(name: &'static str, arguments: Vec<i64>, span: Span) -> Self {
        Self {
            node: Node::new("DataType", span),
            name,
            arguments,
        }
    }
}

impl SyntaxNode for DataType {
    fn node_type(&self) -> &str {
        self.node.node_type()
    }

    fn span(&self) -> Span {
        self.node.span()
    }

    fn property_span(&self, property: Property, index: Option<usize>) -> Option<Span> {
        self.node.property_span(property, index)
    }
}

impl DataTypeNode for DataType {
    fn type_name(&self) -> &str {
        self.name
    }

    fn type_arguments(&self) -> &[i64] {
        &self.arguments
    }
}

/// A node carrying a span for every highlightable property, so any report can
/// be located on it.
pub fn node_with_all_properties() -> Node {
    Node::new("Expression", Span::on_line(1, 0, 40))
        .with_property(Property::Name, Span::on_line(1, 1, 2))
        .with_property(Property::Value, Span::on_line(1, 3, 4))
        .with_property(Property::Operator, Span::on_line(1, 5, 6))
        .with_property(Property::Reference, Span::on_line(1, 7, 8))
        .with_property(Property::SubQuery, Span::on_line(1, 9, 10))
}
