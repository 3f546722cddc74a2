//! Contracts consumed from the grammar layer.
//!
//! The reporters never parse or analyse anything themselves. They only need to
//! know where a node lives in the source and which of its properties can be
//! highlighted, plus a printable label for type descriptors.

pub mod node;
pub mod position;

pub use node::{DataTypeNode, Property, SyntaxNode, TypeDescriptor};
pub use position::{Position, Span};
