//! Interfaces to the engine's external collaborators.
//!
//! Key traits include:
//!
//! - `TypeCatalog`: type hierarchy queries
//! - `PrincipalProvider`, `Principal`, `Role`, `Permission`: the
//!   authenticated actor and what it was granted
//! - `ApplicationHandle`: lifecycle event subscription

pub mod application;
pub mod catalog;
pub mod principal;

pub use application::{ApplicationHandle, LifecycleHandler};
pub use catalog::TypeCatalog;
pub use principal::{Permission, Principal, PrincipalProvider, Role};
