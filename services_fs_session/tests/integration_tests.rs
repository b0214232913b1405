//! Integration tests for the filesystem session service
//!
//! These tests validate complete session workflows including:
//! - Directory hierarchy creation and navigation
//! - Absolute and relative path resolution
//! - Cursor semantics (`cd`, `pwd`, `..` at the root)
//! - Removal and its interaction with the cursor

use services_fs_session::{FileSystemSession, SessionError, SessionOperations};

#[test]
fn test_create_and_navigate_hierarchy() {
    let mut session = FileSystemSession::new();

    session.mkdir("home").unwrap();
    session.mkdir("home/docs").unwrap();
    session.touch("home/docs/hola.txt").unwrap();

    assert!(session.ls().contains(&"home".to_string()));

    session.cd("home/docs").unwrap();
    assert_eq!(session.ls(), vec!["hola.txt"]);
    assert_eq!(session.pwd(), "/home/docs");
}

#[test]
fn test_cd_dotdot_walks_back_to_root() {
    let mut session = FileSystemSession::new();

    session.mkdir("a").unwrap();
    session.mkdir("a/b").unwrap();
    session.cd("a/b").unwrap();
    assert_eq!(session.pwd(), "/a/b");

    session.cd("..").unwrap();
    assert_eq!(session.pwd(), "/a");

    session.cd("..").unwrap();
    assert_eq!(session.pwd(), "/");

    // Going above the root is absorbed, not an error
    session.cd("..").unwrap();
    assert_eq!(session.pwd(), "/");
}

#[test]
fn test_absolute_paths_resolve_from_root() {
    let mut session = FileSystemSession::new();

    session.mkdir("/files").unwrap();
    session.touch("/files/test.txt").unwrap();
    session.cd("/files").unwrap();

    assert_eq!(session.ls(), vec!["test.txt"]);
    assert_eq!(session.pwd(), "/files");
}

#[test]
fn test_rm_file_then_directory_is_empty() {
    let mut session = FileSystemSession::new();

    session.mkdir("/files").unwrap();
    session.touch("/files/test.txt").unwrap();
    session.cd("/files").unwrap();

    session.rm("test.txt").unwrap();
    assert!(session.ls().is_empty());
}

#[test]
fn test_composite_absolute_paths() {
    let mut session = FileSystemSession::new();

    session.mkdir("home").unwrap();
    session.mkdir("home/docs").unwrap();
    session.mkdir("/home/docs/2025").unwrap();
    session.touch("/home/docs/2025/note.txt").unwrap();
    session.cd("/home/docs/2025").unwrap();

    assert_eq!(session.ls(), vec!["note.txt"]);
    assert_eq!(session.pwd(), "/home/docs/2025");
}

#[test]
fn test_duplicate_file_in_same_directory() {
    let mut session = FileSystemSession::new();

    session.touch("dup.txt").unwrap();
    let result = session.touch("dup.txt");

    assert!(matches!(
        result,
        Err(SessionError::Tree(fs_tree::TreeError::DuplicateName { .. }))
    ));
}

#[test]
fn test_cd_to_unknown_name_fails() {
    let mut session = FileSystemSession::new();
    session.mkdir("known").unwrap();
    session.cd("known").unwrap();

    let result = session.cd("doesnotexist");
    assert!(matches!(result, Err(SessionError::PathNotFound { .. })));
    assert_eq!(session.pwd(), "/known");
}

#[test]
fn test_resolution_through_parent_segments() {
    let mut session = FileSystemSession::new();

    session.mkdir("a").unwrap();
    session.mkdir("a/sub").unwrap();
    session.mkdir("b").unwrap();
    session.cd("a/sub").unwrap();

    // ../../b from /a/sub lands on /b
    session.cd("../../b").unwrap();
    assert_eq!(session.pwd(), "/b");
}

#[test]
fn test_mixed_relative_creation_after_cd() {
    let mut session = FileSystemSession::new();

    session.mkdir("projects").unwrap();
    session.cd("projects").unwrap();
    session.mkdir("rust").unwrap();
    session.touch("rust/main.rs").unwrap();
    session.cd("rust").unwrap();

    assert_eq!(session.ls(), vec!["main.rs"]);
    assert_eq!(session.pwd(), "/projects/rust");
}

#[test]
fn test_failed_operation_leaves_tree_unchanged() {
    let mut session = FileSystemSession::new();

    session.mkdir("docs").unwrap();
    session.touch("docs/keep.txt").unwrap();

    assert!(session.mkdir("docs").is_err());
    assert!(session.touch("docs/keep.txt").is_err());
    assert!(session.rm("docs/ghost.txt").is_err());

    session.cd("docs").unwrap();
    assert_eq!(session.ls(), vec!["keep.txt"]);
}

#[test]
fn test_cursor_survives_sibling_removal() {
    let mut session = FileSystemSession::new();

    session.mkdir("keep").unwrap();
    session.mkdir("drop").unwrap();
    session.cd("keep").unwrap();

    session.rm("/drop").unwrap();
    assert_eq!(session.pwd(), "/keep");

    // But removing the cursor's own ancestor is refused
    let result = session.rm("/keep");
    assert!(matches!(result, Err(SessionError::DirectoryBusy { .. })));
}
