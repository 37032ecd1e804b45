//! Hierarchy store service
//!
//! Sole owner of all hierarchies and nodes. Enforces referential
//! integrity, structural legality of parent→child pairings and sibling
//! number uniqueness, and answers subtree store listings.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::{
    can_add_under_parent, validate_node_request, DomainError, DomainResult, HierarchyId, Node,
    NodeId, NodeRequest, NodeType,
};

/// Fixed attributes of the implicit root node of every hierarchy.
const ROOT_NAME: &str = "root organization";
const ROOT_NUMBER: &str = "000";

/// In-memory store of organization hierarchies.
///
/// All nodes of all hierarchies live in one shared node table keyed by id;
/// each hierarchy is a side index of member ids plus its root. Parents hold
/// child ids and children hold a parent id, so there are no ownership
/// cycles between records.
#[derive(Debug, Default)]
pub struct HierarchyService {
    /// Membership sets: which node ids belong to which hierarchy
    hierarchies: HashMap<HierarchyId, HashSet<NodeId>>,
    /// Global node table shared by all hierarchies
    nodes: HashMap<NodeId, Node>,
}

impl HierarchyService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new hierarchy with its implicit ROOT node.
    ///
    /// Always succeeds; the root is the only ROOT the hierarchy will ever
    /// have.
    pub fn create_hierarchy(&mut self) -> (HierarchyId, NodeId) {
        let hierarchy_id = HierarchyId::new();
        let root_id = NodeId::new();
        let root = Node {
            id: root_id,
            node_type: NodeType::Root,
            name: ROOT_NAME.to_string(),
            number: ROOT_NUMBER.to_string(),
            address: None,
            parent_id: None,
            children: Vec::new(),
        };

        self.hierarchies
            .insert(hierarchy_id, HashSet::from([root_id]));
        self.nodes.insert(root_id, root);

        debug!("create_hierarchy: {hierarchy_id} root={root_id}");
        (hierarchy_id, root_id)
    }

    /// Insert a new node under `parent_id` within the named hierarchy.
    ///
    /// Checks run in a fixed order and the first failure determines the
    /// error; every check precedes every mutation, so a rejected call
    /// leaves the store exactly as it was.
    pub fn add_node(
        &mut self,
        hierarchy_id: HierarchyId,
        parent_id: NodeId,
        request: &NodeRequest,
    ) -> DomainResult<NodeId> {
        debug!("add_node: hierarchy={hierarchy_id} parent={parent_id}");

        let members = self
            .hierarchies
            .get(&hierarchy_id)
            .ok_or(DomainError::HierarchyNotFound)?;
        let parent = self
            .nodes
            .get(&parent_id)
            .ok_or(DomainError::ParentNotFound)?;
        if !members.contains(&parent_id) {
            return Err(DomainError::ParentOutsideHierarchy);
        }

        let node_type = validate_node_request(request)?;
        if node_type == NodeType::Root {
            return Err(DomainError::RootAlreadyExists);
        }
        if !can_add_under_parent(parent.node_type, node_type) {
            return Err(DomainError::IllegalChild {
                parent: parent.node_type,
                child: node_type,
            });
        }
        if !self.is_number_unique_among_siblings(parent, &request.number) {
            return Err(DomainError::DuplicateNumber(request.number.clone()));
        }

        let id = NodeId::new();
        let node = Node {
            id,
            node_type,
            name: request.name.clone(),
            number: request.number.clone(),
            // The address invariant is per-type: only stores carry one
            address: if node_type == NodeType::Store {
                request.address.clone()
            } else {
                None
            },
            parent_id: Some(parent_id),
            children: Vec::new(),
        };

        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.children.push(id);
        }
        self.nodes.insert(id, node);
        if let Some(members) = self.hierarchies.get_mut(&hierarchy_id) {
            members.insert(id);
        }

        debug!("add_node: created {node_type} {id}");
        Ok(id)
    }

    /// Collect every STORE node reachable from `node_id`.
    ///
    /// Pre-order depth-first walk over raw child links, children in
    /// child-list order; the starting node itself counts if it is a store.
    /// Deliberately hierarchy-agnostic: the node id alone determines the
    /// reachable subtree.
    pub fn list_stores_from(&self, node_id: NodeId) -> DomainResult<Vec<Node>> {
        if !self.nodes.contains_key(&node_id) {
            return Err(DomainError::NodeNotFound);
        }

        let mut stores = Vec::new();
        let mut stack = vec![node_id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get(&current) {
                if node.node_type == NodeType::Store {
                    stores.push(node.clone());
                }
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    stack.push(child);
                }
            }
        }

        debug!("list_stores_from: {node_id} -> {} stores", stores.len());
        Ok(stores)
    }

    /// Look up a node in the global table.
    pub fn get_node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    fn is_number_unique_among_siblings(&self, parent: &Node, number: &str) -> bool {
        parent
            .children
            .iter()
            .filter_map(|child_id| self.nodes.get(child_id))
            .all(|child| child.number != number)
    }
}
