//! Session operations
//!
//! This module defines the operations provided by the filesystem session
//! service and the errors they surface.

use fs_tree::{NodeId, NodeKind, TreeError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during session operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Node construction or child-map error
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// A path segment could not be found during traversal
    #[error("Path '{segment}' not found in '{path}'")]
    PathNotFound { segment: String, path: String },

    /// The operation required a directory but the path names a file
    #[error("Not a directory: '{path}'")]
    NotADirectory { path: String },

    /// The entry is the current directory or one of its ancestors
    #[error("Directory '{path}' is in use by the session cursor")]
    DirectoryBusy { path: String },
}

/// Metadata about a resolved entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatInfo {
    /// Node handle
    pub id: NodeId,
    /// Node kind
    pub kind: NodeKind,
    /// Entry count (directories only)
    pub entry_count: Option<usize>,
}

/// Filesystem session operations trait
///
/// This trait is the external surface of the session: every caller (CLI,
/// test harness, embedding application) goes through these operations.
pub trait SessionOperations {
    /// Create a directory
    ///
    /// Creates a new empty directory at the given path and returns its
    /// handle.
    fn mkdir(&mut self, path: &str) -> Result<NodeId, SessionError>;

    /// Create a file
    ///
    /// Creates a new file at the given path and returns its handle.
    fn touch(&mut self, path: &str) -> Result<NodeId, SessionError>;

    /// Change the current directory
    ///
    /// Resolves the path and moves the cursor to the resulting directory.
    fn cd(&mut self, path: &str) -> Result<(), SessionError>;

    /// Remove an entry
    ///
    /// Removes the named entry and, for a directory, everything beneath
    /// it.
    fn rm(&mut self, path: &str) -> Result<(), SessionError>;

    /// List the current directory
    ///
    /// Returns child names in lexicographic order.
    fn ls(&self) -> Vec<String>;

    /// Print the current directory
    ///
    /// Returns the cursor's absolute path, `/` for the root itself.
    fn pwd(&self) -> String;

    /// Get entry metadata
    ///
    /// Resolves the path and returns handle, kind, and entry count.
    fn stat(&self, path: &str) -> Result<StatInfo, SessionError>;
}
