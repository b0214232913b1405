//! Path text handling
//!
//! This module handles splitting path strings into segments. It does not
//! walk any tree; interpreting `..` against actual parent links is the
//! session's job.

use crate::error::TreeError;

/// The path separator character
pub const SEPARATOR: char = '/';

/// Path resolver
///
/// Splits path text into segments and validates entry names.
pub struct PathResolver;

impl PathResolver {
    /// Splits a path into segments
    ///
    /// Empty segments and `.` are dropped; `..` is kept for the caller to
    /// interpret. An empty or all-separator path yields no segments, which
    /// names the starting directory itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use fs_tree::PathResolver;
    ///
    /// assert_eq!(PathResolver::split_path("docs/notes/todo.txt"), vec!["docs", "notes", "todo.txt"]);
    /// assert_eq!(PathResolver::split_path("/docs//./notes"), vec!["docs", "notes"]);
    /// assert_eq!(PathResolver::split_path("a/../b"), vec!["a", "..", "b"]);
    /// assert!(PathResolver::split_path("/").is_empty());
    /// ```
    pub fn split_path(path: &str) -> Vec<&str> {
        path.split(SEPARATOR)
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect()
    }

    /// Returns true if the path is resolved from the root
    pub fn is_absolute(path: &str) -> bool {
        path.starts_with(SEPARATOR)
    }

    /// Splits a path into its parent portion and final entry name
    ///
    /// A bare name with no separator has no parent portion (the caller
    /// uses its current directory). Otherwise the parent is everything
    /// before the last separator, or the root for a bare `/name`.
    ///
    /// Fails when the final segment is empty, `.`, or `..` — those cannot
    /// name an entry to create or remove.
    ///
    /// # Examples
    ///
    /// ```
    /// use fs_tree::PathResolver;
    ///
    /// assert_eq!(PathResolver::split_parent("todo.txt").unwrap(), (None, "todo.txt"));
    /// assert_eq!(PathResolver::split_parent("docs/todo.txt").unwrap(), (Some("docs"), "todo.txt"));
    /// assert_eq!(PathResolver::split_parent("/todo.txt").unwrap(), (Some("/"), "todo.txt"));
    /// ```
    pub fn split_parent(path: &str) -> Result<(Option<&str>, &str), TreeError> {
        let (parent, name) = match path.rfind(SEPARATOR) {
            None => (None, path),
            Some(index) => {
                let parent = if index == 0 { "/" } else { &path[..index] };
                (Some(parent), &path[index + 1..])
            }
        };

        if name.is_empty() || name == "." || name == ".." {
            return Err(TreeError::InvalidName {
                name: name.to_string(),
            });
        }

        Ok((parent, name))
    }

    /// Validates a single entry name
    ///
    /// Returns true if the name is valid for a directory entry.
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(SEPARATOR)
            && !name.contains('\0')
    }
}
