//! Errors raised by node construction and child-map mutation.

use thiserror::Error;

/// Errors that can occur when constructing or mutating tree nodes
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// A node name is empty or contains a reserved character
    #[error("Invalid name: '{name}'")]
    InvalidName { name: String },

    /// A child with this name already exists in the directory
    #[error("Node '{name}' already exists")]
    DuplicateName { name: String },

    /// No child with this name exists in the directory
    #[error("Node '{name}' does not exist")]
    ChildNotFound { name: String },

    /// A child-map operation was attempted on a file
    #[error("Not a directory: '{name}'")]
    NotADirectory { name: String },
}
