//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::NodeType;

/// Domain errors represent business rule violations.
///
/// Every rejected operation maps to exactly one variant; the store is
/// left untouched whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("hierarchy not found")]
    HierarchyNotFound,

    #[error("parent node not found")]
    ParentNotFound,

    #[error("parent node does not belong to the specified hierarchy")]
    ParentOutsideHierarchy,

    #[error("invalid node type '{0}', must be one of: ROOT, FRANCHISE, REGION, STORE")]
    InvalidNodeType(String),

    #[error("name is required")]
    NameRequired,

    #[error("name must be 100 characters or less")]
    NameTooLong,

    #[error("number is required")]
    NumberRequired,

    #[error("number must be exactly 3 digits (e.g. '002')")]
    NumberFormat,

    #[error("address is required for Store nodes")]
    AddressRequired,

    #[error("address must be 200 characters or less")]
    AddressTooLong,

    #[error("cannot add another ROOT node to a hierarchy")]
    RootAlreadyExists,

    #[error("{child} cannot be added under {parent}")]
    IllegalChild { parent: NodeType, child: NodeType },

    #[error("number '{0}' is already used by another node under the same parent")]
    DuplicateNumber(String),

    #[error("node not found")]
    NodeNotFound,
}

pub type DomainResult<T> = Result<T, DomainError>;
