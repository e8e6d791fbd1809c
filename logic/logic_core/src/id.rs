//! Strongly-typed identifiers for the logic rule engine.
//!
//! Rule groups and subscriptions are identified by thin wrappers around a
//! UUID with a phantom marker, so identifiers of different kinds cannot be
//! mixed up. Domain types and rule-object types are identified by their
//! fully qualified name through [`TypeName`].
//!
//! # Examples
//!
//! ```
//! use logic_core::id::{GroupId, SubscriptionId};
//! use std::str::FromStr;
//!
//! let group_id = GroupId::new();
//! let subscription_id = SubscriptionId::new();
//! assert_ne!(group_id.to_string(), subscription_id.to_string());
//!
//! let id_str = "550e8400-e29b-41d4-a716-446655440000";
//! let group_id = GroupId::from_str(id_str).unwrap();
//! assert_eq!(group_id.to_string(), id_str);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A type-safe identifier based on UUID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Id<T> {
    uuid: Uuid,
    #[serde(skip)]
    _marker: std::marker::PhantomData<T>,
}

impl<T> Id<T> {
    /// Create a new random identifier.
    pub fn new() -> Self {
        Self {
            uuid: Uuid::new_v4(),
            _marker: std::marker::PhantomData,
        }
    }

    /// Create an identifier from a specific UUID.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_core::id::GroupId;
    /// use uuid::Uuid;
    ///
    /// let uuid = Uuid::new_v4();
    /// let id = GroupId::from_uuid(uuid);
    /// assert_eq!(id.uuid(), uuid);
    /// ```
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            uuid,
            _marker: std::marker::PhantomData,
        }
    }

    /// Get the underlying UUID.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uuid)
    }
}

impl<T> FromStr for Id<T> {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            uuid: Uuid::parse_str(s)?,
            _marker: std::marker::PhantomData,
        })
    }
}

/// Marker type for rule groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupMarker;
/// Identifier for a rule group. Two groups are the same group iff their ids match.
pub type GroupId = Id<GroupMarker>;

/// Marker type for event subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionMarker;
/// Identifier for a lifecycle or notification subscription.
pub type SubscriptionId = Id<SubscriptionMarker>;

/// The fully qualified name of a domain type or a rule-object type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    /// Create a type name from its fully qualified form, e.g. `Sales.Invoice`.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The fully qualified name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last path segment, e.g. `Invoice` for `Sales.Invoice`.
    pub fn short_name(&self) -> &str {
        self.0
            .rsplit(|c: char| c == '.' || c == ':')
            .next()
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}
