//! Security backend classification.

/// The kind of security backend the principal provider fronts.
///
/// Only complex backends materialize permission lists lazily, so only they
/// need a forced reload before the first collection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SecurityBackendKind {
    /// Permissions are available as soon as the principal is.
    #[default]
    Simple,

    /// Role-based backend with lazily loaded permissions.
    Complex,
}

impl SecurityBackendKind {
    /// Whether this backend is of the complex kind.
    pub fn is_complex(&self) -> bool {
        matches!(self, Self::Complex)
    }
}
