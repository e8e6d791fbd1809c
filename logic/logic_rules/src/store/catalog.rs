//! In-memory type catalog.

use std::collections::{HashMap, HashSet};

use logic_core::id::TypeName;
use logic_core::traits::TypeCatalog;

/// A type catalog built from explicit (type, parent) declarations.
///
/// Descendants are reported breadth-first, children in declaration order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTypeCatalog {
    children: HashMap<TypeName, Vec<TypeName>>,
    parents: HashMap<TypeName, TypeName>,
}

impl InMemoryTypeCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a type with no parent.
    pub fn with_root(mut self, ty: impl Into<TypeName>) -> Self {
        self.children.entry(ty.into()).or_default();
        self
    }

    /// Declare `ty` as a direct subtype of `parent`.
    pub fn with_type(mut self, ty: impl Into<TypeName>, parent: impl Into<TypeName>) -> Self {
        let ty = ty.into();
        let parent = parent.into();
        self.children.entry(ty.clone()).or_default();
        self.children.entry(parent.clone()).or_default().push(ty.clone());
        self.parents.insert(ty, parent);
        self
    }

    /// The direct parent of `ty`, if declared.
    pub fn parent_of(&self, ty: &TypeName) -> Option<&TypeName> {
        self.parents.get(ty)
    }
}

impl TypeCatalog for InMemoryTypeCatalog {
    fn descendants_of(&self, ty: &TypeName) -> Vec<TypeName> {
        let mut result = Vec::new();
        let mut seen = HashSet::new();
        let mut frontier = vec![ty.clone()];

        while !frontier.is_empty() {
            let mut next = Vec::new();
            for current in &frontier {
                for child in self.children.get(current).into_iter().flatten() {
                    if child != ty && seen.insert(child.clone()) {
                        result.push(child.clone());
                        next.push(child.clone());
                    }
                }
            }
            frontier = next;
        }

        result
    }
}
