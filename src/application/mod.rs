//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and owns the mutable store state.

pub mod services;

pub use services::HierarchyService;
