//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no HTTP, no
//! config loading).

pub mod entities;
pub mod error;
pub mod validators;

pub use entities::{HierarchyId, Node, NodeId, NodeRequest, NodeType};
pub use error::{DomainError, DomainResult};
pub use validators::{can_add_under_parent, validate_node_request};
