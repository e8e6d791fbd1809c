//! Lifecycle integration.
//!
//! This module binds a collector to the application's lifecycle events and
//! provides an in-process event hub implementing `ApplicationHandle`.

mod binder;
mod hub;

pub use binder::LifecycleBinder;
pub use hub::LifecycleHub;
