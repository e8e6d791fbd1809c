//! Type hierarchy queries.

use crate::id::TypeName;

/// Answers questions about the type hierarchy.
///
/// Implementations are expected to know both domain types (the targets of
/// rules) and rule-object types (the classes of permission-derived rules).
pub trait TypeCatalog: Send + Sync {
    /// Returns every transitive descendant of `ty`, excluding `ty` itself.
    ///
    /// Unknown types have no descendants.
    fn descendants_of(&self, ty: &TypeName) -> Vec<TypeName>;

    /// Whether a value of type `derived` can be used where `base` is expected.
    fn is_assignable_from(&self, base: &TypeName, derived: &TypeName) -> bool {
        base == derived || self.descendants_of(base).iter().any(|ty| ty == derived)
    }
}
