//! Domain entities: core data structures

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Node type in the fixed four-level hierarchy.
///
/// The levels form a strict chain: ROOT → FRANCHISE → REGION → STORE.
/// There is no extension point; exhaustive matches are intentional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeType {
    Root,
    Franchise,
    Region,
    Store,
}

impl NodeType {
    /// All valid node types, in hierarchy order.
    pub const ALL: [NodeType; 4] = [Self::Root, Self::Franchise, Self::Region, Self::Store];

    /// Types that may appear as direct children of this type.
    ///
    /// Encodes the descent state machine: transitions go exactly one
    /// level down, and STORE is terminal.
    pub fn allowed_children(self) -> &'static [NodeType] {
        match self {
            Self::Root => &[Self::Franchise],
            Self::Franchise => &[Self::Region],
            Self::Region => &[Self::Store],
            Self::Store => &[],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Root => "ROOT",
            Self::Franchise => "FRANCHISE",
            Self::Region => "REGION",
            Self::Store => "STORE",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROOT" => Ok(Self::Root),
            "FRANCHISE" => Ok(Self::Franchise),
            "REGION" => Ok(Self::Region),
            "STORE" => Ok(Self::Store),
            other => Err(DomainError::InvalidNodeType(other.to_string())),
        }
    }
}

/// Unique identifier of a node, generated by the system on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier of a hierarchy, generated at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HierarchyId(Uuid);

impl HierarchyId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HierarchyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HierarchyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HierarchyId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A node in an organization hierarchy.
///
/// Identity, type and parent are immutable once created; only the child
/// list grows, by append, when a child is inserted under this node.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub name: String,
    pub number: String,
    /// Present exactly when `node_type` is STORE
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// None exactly for the ROOT node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<NodeId>,
    /// Child ids in insertion order
    pub children: Vec<NodeId>,
}

/// Incoming request to create a node.
///
/// The type is carried as the raw string so the validator can report an
/// unknown type as an ordinary validation failure instead of a parse error.
#[derive(Debug, Clone)]
pub struct NodeRequest {
    pub node_type: String,
    pub name: String,
    pub number: String,
    pub address: Option<String>,
}
