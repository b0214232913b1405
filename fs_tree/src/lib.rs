//! # Namespace Tree
//!
//! This crate provides the node model for an in-memory hierarchical
//! namespace: files and directories addressed by opaque node handles.
//!
//! ## Philosophy
//!
//! - **Directories own their children**: removal of a directory removes its
//!   whole subtree, nothing survives detachment from the tree
//! - **Parent links are handles, not ownership**: `..` traversal and path
//!   printing never extend a node's lifetime
//! - **Names are validated at construction**: a node with an illegal name
//!   cannot exist
//!
//! ## Design
//!
//! - Every node lives in a [`NodeArena`], keyed by [`NodeId`]
//! - A directory maps child names to `NodeId` handles
//! - There is no global state; each arena is an independent tree

pub mod arena;
pub mod error;
pub mod node;
pub mod path;

pub use arena::NodeArena;
pub use error::TreeError;
pub use node::{Node, NodeId, NodeKind};
pub use path::{PathResolver, SEPARATOR};
