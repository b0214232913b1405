//! Filesystem session implementation
//!
//! This module provides the session that owns the tree and implements the
//! user-facing operations.

use crate::operations::{SessionError, SessionOperations, StatInfo};
use fs_tree::{Node, NodeArena, NodeId, PathResolver};

/// A filesystem session
///
/// Owns the root directory and every node beneath it, and tracks the
/// current-directory cursor used as the base for relative paths. Each
/// session is an independent tree; there is no shared or global state.
#[derive(Debug, Clone)]
pub struct FileSystemSession {
    /// Every node of this session's tree
    nodes: NodeArena,
    /// The root directory, named `/`, parentless
    root: NodeId,
    /// The current directory; always a live directory reachable from root
    current: NodeId,
}

impl FileSystemSession {
    /// Creates a session with an empty root directory as the cursor
    pub fn new() -> Self {
        let mut nodes = NodeArena::new();
        let root = nodes.insert(Node::root());
        Self {
            nodes,
            root,
            current: root,
        }
    }

    /// Returns the root directory's handle
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the current directory's handle
    pub fn current_dir(&self) -> NodeId {
        self.current
    }

    /// Resolves path text to a node handle
    ///
    /// Resolution starts at the root for absolute paths and at the cursor
    /// otherwise, then walks segment by segment. `..` moves to the parent
    /// and is absorbed at the root; `.` and empty segments are dropped.
    /// The result may be a file or a directory — the caller decides
    /// whether that is acceptable.
    ///
    /// A segment that is missing, or that would descend into a file, fails
    /// with [`SessionError::PathNotFound`] naming the segment and the full
    /// original path.
    pub fn resolve_path(&self, path: &str) -> Result<NodeId, SessionError> {
        let mut current = if PathResolver::is_absolute(path) {
            self.root
        } else {
            self.current
        };

        for segment in PathResolver::split_path(path) {
            if segment == ".." {
                // The root has no parent; going above it is a no-op
                if let Some(parent) = self.nodes[current].parent() {
                    current = parent;
                }
                continue;
            }

            let node = &self.nodes[current];
            // A file mid-path reads the same as a missing segment
            let next = if node.is_directory() {
                node.child(segment)
            } else {
                None
            };
            current = next.ok_or_else(|| SessionError::PathNotFound {
                segment: segment.to_string(),
                path: path.to_string(),
            })?;
        }

        Ok(current)
    }

    /// Resolves a path and requires the result to be a directory
    fn resolve_dir(&self, path: &str) -> Result<NodeId, SessionError> {
        let id = self.resolve_path(path)?;
        if !self.nodes[id].is_directory() {
            return Err(SessionError::NotADirectory {
                path: path.to_string(),
            });
        }
        Ok(id)
    }

    /// Splits a path into its resolved parent directory and final name
    ///
    /// A bare name resolves against the cursor; otherwise the parent
    /// portion goes through [`FileSystemSession::resolve_path`] and must
    /// be a directory.
    fn resolve_parent<'p>(&self, path: &'p str) -> Result<(NodeId, &'p str), SessionError> {
        let (parent_text, name) = PathResolver::split_parent(path)?;
        let parent = match parent_text {
            Some(text) => self.resolve_path(text)?,
            None => self.current,
        };

        if !self.nodes[parent].is_directory() {
            return Err(SessionError::NotADirectory {
                path: path.to_string(),
            });
        }

        Ok((parent, name))
    }

    /// Returns true if `id` is the cursor or one of its ancestors
    fn cursor_within(&self, id: NodeId) -> bool {
        let mut node = self.current;
        loop {
            if node == id {
                return true;
            }
            match self.nodes[node].parent() {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }
}

impl Default for FileSystemSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionOperations for FileSystemSession {
    fn mkdir(&mut self, path: &str) -> Result<NodeId, SessionError> {
        let (parent, name) = self.resolve_parent(path)?;
        let node = Node::directory(name, parent)?;
        let id = node.id();

        // Duplicate check happens before the arena takes ownership
        self.nodes[parent].add_child(name, id)?;
        self.nodes.insert(node);
        Ok(id)
    }

    fn touch(&mut self, path: &str) -> Result<NodeId, SessionError> {
        let (parent, name) = self.resolve_parent(path)?;
        let node = Node::file(name, parent)?;
        let id = node.id();

        self.nodes[parent].add_child(name, id)?;
        self.nodes.insert(node);
        Ok(id)
    }

    fn cd(&mut self, path: &str) -> Result<(), SessionError> {
        self.current = self.resolve_dir(path)?;
        Ok(())
    }

    fn rm(&mut self, path: &str) -> Result<(), SessionError> {
        let (parent, name) = self.resolve_parent(path)?;
        let target = self.nodes[parent]
            .child(name)
            .ok_or_else(|| fs_tree::TreeError::ChildNotFound {
                name: name.to_string(),
            })?;

        // The cursor must stay reachable from the root
        if self.cursor_within(target) {
            return Err(SessionError::DirectoryBusy {
                path: path.to_string(),
            });
        }

        self.nodes[parent].remove_child(name)?;
        self.nodes.remove_subtree(target);
        Ok(())
    }

    fn ls(&self) -> Vec<String> {
        self.nodes[self.current].child_names()
    }

    fn pwd(&self) -> String {
        let mut names = Vec::new();
        let mut node = self.current;

        while let Some(parent) = self.nodes[node].parent() {
            names.push(self.nodes[node].name().to_string());
            node = parent;
        }
        names.reverse();

        if names.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", names.join("/"))
        }
    }

    fn stat(&self, path: &str) -> Result<StatInfo, SessionError> {
        let id = self.resolve_path(path)?;
        let node = &self.nodes[id];

        let entry_count = if node.is_directory() {
            Some(node.child_count())
        } else {
            None
        };

        Ok(StatInfo {
            id,
            kind: node.kind(),
            entry_count,
        })
    }
}
