//! Node arena
//!
//! All nodes of a tree live in one arena, keyed by [`NodeId`]. Parent and
//! child links are plain handles into the arena, so ownership of every
//! node stays in exactly one place and removal is a map operation.

use crate::node::{Node, NodeId};
use std::collections::HashMap;
use std::ops::{Index, IndexMut};

/// Owns every node of a namespace tree
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: HashMap<NodeId, Node>,
}

impl NodeArena {
    /// Creates an empty arena
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Takes ownership of a node and returns its handle
    pub fn insert(&mut self, node: Node) -> NodeId {
        let id = node.id();
        self.nodes.insert(id, node);
        id
    }

    /// Gets a node by handle
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Gets a mutable node by handle
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// Returns true if the handle refers to a live node
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes a node and everything beneath it
    ///
    /// Returns the number of nodes removed. Removing an unknown handle is
    /// a no-op; the caller detaches the node from its parent first, so by
    /// the time this runs the subtree is already unreachable.
    pub fn remove_subtree(&mut self, id: NodeId) -> usize {
        let mut removed = 0;
        let mut pending = vec![id];

        while let Some(next) = pending.pop() {
            if let Some(node) = self.nodes.remove(&next) {
                pending.extend(node.child_ids());
                removed += 1;
            }
        }

        removed
    }
}

/// Panics on a dead handle. Sessions only index with handles they keep
/// live, mirroring `HashMap`'s own `Index` behavior.
impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[&id]
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes.get_mut(&id).expect("no node for handle")
    }
}
