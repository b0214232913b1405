//! Node model for the namespace tree
//!
//! This module defines the two node variants (file and directory) and the
//! opaque handles used to reference them.

use crate::error::TreeError;
use crate::path::PathResolver;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a namespace node
///
/// Node handles are opaque. Holding a `NodeId` does not keep the node
/// alive; the arena owns every node, and parent links are plain handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Creates a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a node ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// The kind of a namespace node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Leaf node with no children (no contents are modeled)
    File,
    /// Container of uniquely-named children
    Directory,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::File => write!(f, "File"),
            NodeKind::Directory => write!(f, "Directory"),
        }
    }
}

/// Variant payload of a node
///
/// Files carry nothing; directories carry the child map. The map is a
/// `BTreeMap` so listings are always in lexicographic name order.
#[derive(Debug, Clone)]
enum NodePayload {
    File,
    Directory { children: BTreeMap<String, NodeId> },
}

/// A single entry in the namespace tree
///
/// A node is created directly under its parent and is never reparented.
/// The parent link is `None` only for the root directory.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    name: String,
    parent: Option<NodeId>,
    payload: NodePayload,
}

impl Node {
    /// Creates a file node under the given parent
    ///
    /// Fails if the name is empty, is `.` or `..`, or contains a reserved
    /// character.
    pub fn file(name: &str, parent: NodeId) -> Result<Self, TreeError> {
        Self::validate_name(name)?;
        Ok(Self {
            id: NodeId::new(),
            name: name.to_string(),
            parent: Some(parent),
            payload: NodePayload::File,
        })
    }

    /// Creates an empty directory node under the given parent
    ///
    /// Same name validation as [`Node::file`].
    pub fn directory(name: &str, parent: NodeId) -> Result<Self, TreeError> {
        Self::validate_name(name)?;
        Ok(Self {
            id: NodeId::new(),
            name: name.to_string(),
            parent: Some(parent),
            payload: NodePayload::Directory {
                children: BTreeMap::new(),
            },
        })
    }

    /// Creates the root directory
    ///
    /// The root is the only node named with the separator itself and the
    /// only node without a parent. It is never constructed from user input.
    pub fn root() -> Self {
        Self {
            id: NodeId::new(),
            name: crate::path::SEPARATOR.to_string(),
            parent: None,
            payload: NodePayload::Directory {
                children: BTreeMap::new(),
            },
        }
    }

    fn validate_name(name: &str) -> Result<(), TreeError> {
        if !PathResolver::is_valid_name(name) {
            return Err(TreeError::InvalidName {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Returns the node's handle
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the node's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parent handle, or `None` for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the node's kind
    pub fn kind(&self) -> NodeKind {
        match self.payload {
            NodePayload::File => NodeKind::File,
            NodePayload::Directory { .. } => NodeKind::Directory,
        }
    }

    /// Returns true if this node can contain children
    pub fn is_directory(&self) -> bool {
        matches!(self.payload, NodePayload::Directory { .. })
    }

    /// Adds a child entry to this directory
    ///
    /// Fails with [`TreeError::DuplicateName`] if an entry with that name
    /// already exists; the existing entry is left untouched. Fails with
    /// [`TreeError::NotADirectory`] on a file node.
    pub fn add_child(&mut self, name: &str, child: NodeId) -> Result<(), TreeError> {
        let children = self.children_mut()?;
        if children.contains_key(name) {
            return Err(TreeError::DuplicateName {
                name: name.to_string(),
            });
        }
        children.insert(name.to_string(), child);
        Ok(())
    }

    /// Looks up a child by name
    ///
    /// Absence is a normal outcome, not an error. Returns `None` on a file
    /// node as well, since files have no children.
    pub fn child(&self, name: &str) -> Option<NodeId> {
        match &self.payload {
            NodePayload::File => None,
            NodePayload::Directory { children } => children.get(name).copied(),
        }
    }

    /// Removes a child entry from this directory
    ///
    /// Returns the removed child's handle so the caller can drop its
    /// subtree from the arena. Fails with [`TreeError::ChildNotFound`] if
    /// no entry with that name exists.
    pub fn remove_child(&mut self, name: &str) -> Result<NodeId, TreeError> {
        let children = self.children_mut()?;
        children.remove(name).ok_or_else(|| TreeError::ChildNotFound {
            name: name.to_string(),
        })
    }

    /// Lists child names in lexicographic order
    ///
    /// The order is deterministic across calls on an unchanged directory.
    /// Returns an empty list on a file node.
    pub fn child_names(&self) -> Vec<String> {
        match &self.payload {
            NodePayload::File => Vec::new(),
            NodePayload::Directory { children } => children.keys().cloned().collect(),
        }
    }

    /// Lists child handles in lexicographic name order
    pub fn child_ids(&self) -> Vec<NodeId> {
        match &self.payload {
            NodePayload::File => Vec::new(),
            NodePayload::Directory { children } => children.values().copied().collect(),
        }
    }

    /// Counts the number of children
    pub fn child_count(&self) -> usize {
        match &self.payload {
            NodePayload::File => 0,
            NodePayload::Directory { children } => children.len(),
        }
    }

    fn children_mut(&mut self) -> Result<&mut BTreeMap<String, NodeId>, TreeError> {
        match &mut self.payload {
            NodePayload::File => Err(TreeError::NotADirectory {
                name: self.name.clone(),
            }),
            NodePayload::Directory { children } => Ok(children),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_creation() {
        let parent = NodeId::new();
        let file = Node::file("notes.txt", parent).unwrap();

        assert_eq!(file.name(), "notes.txt");
        assert_eq!(file.parent(), Some(parent));
        assert_eq!(file.kind(), NodeKind::File);
        assert!(!file.is_directory());
    }

    #[test]
    fn test_directory_creation() {
        let parent = NodeId::new();
        let dir = Node::directory("docs", parent).unwrap();

        assert_eq!(dir.name(), "docs");
        assert_eq!(dir.kind(), NodeKind::Directory);
        assert!(dir.is_directory());
        assert_eq!(dir.child_count(), 0);
    }

    #[test]
    fn test_root_has_no_parent() {
        let root = Node::root();
        assert!(root.parent().is_none());
        assert_eq!(root.name(), "/");
        assert!(root.is_directory());
    }

    #[test]
    fn test_invalid_names_rejected() {
        let parent = NodeId::new();

        for name in ["", ".", "..", "has/slash", "has\0null"] {
            let result = Node::file(name, parent);
            assert!(matches!(result, Err(TreeError::InvalidName { .. })));
        }
    }

    #[test]
    fn test_add_and_get_child() {
        let parent = NodeId::new();
        let mut dir = Node::directory("docs", parent).unwrap();
        let child = NodeId::new();

        dir.add_child("notes.txt", child).unwrap();
        assert_eq!(dir.child("notes.txt"), Some(child));
        assert_eq!(dir.child("missing.txt"), None);
    }

    #[test]
    fn test_add_duplicate_child_fails() {
        let parent = NodeId::new();
        let mut dir = Node::directory("docs", parent).unwrap();
        let first = NodeId::new();

        dir.add_child("notes.txt", first).unwrap();
        let result = dir.add_child("notes.txt", NodeId::new());
        assert!(matches!(result, Err(TreeError::DuplicateName { .. })));

        // First insertion is unaffected by the failed second one
        assert_eq!(dir.child("notes.txt"), Some(first));
        assert_eq!(dir.child_count(), 1);
    }

    #[test]
    fn test_remove_child() {
        let parent = NodeId::new();
        let mut dir = Node::directory("docs", parent).unwrap();
        let child = NodeId::new();

        dir.add_child("notes.txt", child).unwrap();
        let removed = dir.remove_child("notes.txt").unwrap();
        assert_eq!(removed, child);
        assert_eq!(dir.child_count(), 0);
    }

    #[test]
    fn test_remove_nonexistent_child_fails() {
        let parent = NodeId::new();
        let mut dir = Node::directory("docs", parent).unwrap();

        let result = dir.remove_child("missing.txt");
        assert!(matches!(result, Err(TreeError::ChildNotFound { .. })));
    }

    #[test]
    fn test_child_operations_on_file_fail() {
        let parent = NodeId::new();
        let mut file = Node::file("notes.txt", parent).unwrap();

        let add = file.add_child("x", NodeId::new());
        assert!(matches!(add, Err(TreeError::NotADirectory { .. })));

        let remove = file.remove_child("x");
        assert!(matches!(remove, Err(TreeError::NotADirectory { .. })));

        assert_eq!(file.child("x"), None);
        assert!(file.child_names().is_empty());
    }

    #[test]
    fn test_child_names_are_sorted() {
        let parent = NodeId::new();
        let mut dir = Node::directory("docs", parent).unwrap();

        dir.add_child("zeta.txt", NodeId::new()).unwrap();
        dir.add_child("alpha.txt", NodeId::new()).unwrap();
        dir.add_child("mid.txt", NodeId::new()).unwrap();

        assert_eq!(dir.child_names(), vec!["alpha.txt", "mid.txt", "zeta.txt"]);
    }

    #[test]
    fn test_node_id_uniqueness() {
        let id1 = NodeId::new();
        let id2 = NodeId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_node_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = NodeId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), uuid);
    }
}
