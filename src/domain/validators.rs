//! Pure request validation
//!
//! Stateless checks for node-creation requests and for the legality of a
//! parent→child type pairing. No I/O, no access to stored state.

use crate::domain::entities::{NodeRequest, NodeType};
use crate::domain::error::{DomainError, DomainResult};

/// Validate the shape of a node-creation request.
///
/// Checks run in a fixed order and the first failure wins. On success the
/// parsed [`NodeType`] is returned so callers get exhaustive matching.
pub fn validate_node_request(request: &NodeRequest) -> DomainResult<NodeType> {
    let node_type: NodeType = request.node_type.parse()?;

    if request.name.trim().is_empty() {
        return Err(DomainError::NameRequired);
    }
    // Raw length, not trimmed
    if request.name.chars().count() > 100 {
        return Err(DomainError::NameTooLong);
    }

    if request.number.trim().is_empty() {
        return Err(DomainError::NumberRequired);
    }
    if !is_three_digits(&request.number) {
        return Err(DomainError::NumberFormat);
    }

    if node_type == NodeType::Store {
        let address = request.address.as_deref().unwrap_or("");
        if address.trim().is_empty() {
            return Err(DomainError::AddressRequired);
        }
        if address.chars().count() > 200 {
            return Err(DomainError::AddressTooLong);
        }
    }

    Ok(node_type)
}

/// Exactly three decimal digits, no sign, no separators.
fn is_three_digits(number: &str) -> bool {
    number.len() == 3 && number.bytes().all(|b| b.is_ascii_digit())
}

/// Whether a node of `child` type may be inserted directly under a node of
/// `parent` type. Table-driven via [`NodeType::allowed_children`].
pub fn can_add_under_parent(parent: NodeType, child: NodeType) -> bool {
    parent.allowed_children().contains(&child)
}
