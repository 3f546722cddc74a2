//! Diagnostic location types

use serde::Serialize;

use crate::syntax::Property;

/// Which part of a node a diagnostic points at.
///
/// `property == None` means the whole node. `index` selects one element of a
/// repeated property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct DiagnosticTarget {
    pub property: Option<Property>,
    pub index: Option<usize>,
}

impl DiagnosticTarget {
    pub fn node() -> Self {
        Self::default()
    }

    pub fn property(property: Property) -> Self {
        Self {
            property: Some(property),
            index: None,
        }
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

/// Location handed to a sink: the reported node, the narrowed target and the
/// stamped error code.
#[derive(Debug)]
pub struct DiagnosticInfo<'n, N: ?Sized> {
    pub node: &'n N,
    pub target: DiagnosticTarget,
    pub code: &'static str,
}

impl<'n, N: ?Sized> DiagnosticInfo<'n, N> {
    pub fn new(node: &'n N, target: DiagnosticTarget, code: &'static str) -> Self {
        Self { node, target, code }
    }

    pub fn property(&self) -> Option<Property> {
        self.target.property
    }

    pub fn index(&self) -> Option<usize> {
        self.target.index
    }
}

impl<N: ?Sized> Clone for DiagnosticInfo<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N: ?Sized> Copy for DiagnosticInfo<'_, N> {}
