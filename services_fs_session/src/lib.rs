//! # Filesystem Session Service
//!
//! This service owns an in-memory namespace tree and a current-directory
//! cursor, and exposes the user-facing operations over them.
//!
//! ## Philosophy
//!
//! - Every operation resolves path text through one shared algorithm
//! - Validation precedes mutation; a failed operation leaves the tree as
//!   it was
//! - The cursor always references a live directory; removal of the cursor
//!   or one of its ancestors is refused
//! - Single caller, single thread; no operation suspends or interleaves
//!
//! ## Operations
//!
//! - `mkdir(path)`: Create a directory
//! - `touch(path)`: Create a file
//! - `cd(path)`: Move the current-directory cursor
//! - `rm(path)`: Remove an entry and its subtree
//! - `ls()`: List the current directory
//! - `pwd()`: Print the current directory's absolute path
//! - `stat(path)`: Get entry metadata

pub mod operations;
pub mod session;

pub use operations::{SessionError, SessionOperations, StatInfo};
pub use session::FileSystemSession;
