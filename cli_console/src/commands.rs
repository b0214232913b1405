//! CLI Commands for the Filesystem Session
//!
//! This module implements command-line interface commands over the
//! filesystem session service. Each command maps session errors into
//! human-readable strings; the session itself stays the source of truth.

use services_fs_session::{FileSystemSession, SessionOperations};

/// CLI Command handler
pub struct CommandHandler {
    /// The session this handler drives
    pub session: FileSystemSession,
}

impl CommandHandler {
    /// Creates a new command handler with an empty root directory
    pub fn new() -> Self {
        Self {
            session: FileSystemSession::new(),
        }
    }

    /// Creates a directory
    ///
    /// Example: `mkdir docs/projects`
    pub fn mkdir(&mut self, path: &str) -> Result<String, String> {
        let id = self
            .session
            .mkdir(path)
            .map_err(|e| format!("mkdir failed: {}", e))?;

        Ok(format!("Created directory: {}", id))
    }

    /// Creates a file
    ///
    /// Example: `touch docs/todo.txt`
    pub fn touch(&mut self, path: &str) -> Result<String, String> {
        let id = self
            .session
            .touch(path)
            .map_err(|e| format!("touch failed: {}", e))?;

        Ok(format!("Created file: {}", id))
    }

    /// Changes the current directory
    ///
    /// Example: `cd /docs`
    pub fn cd(&mut self, path: &str) -> Result<String, String> {
        self.session
            .cd(path)
            .map_err(|e| format!("cd failed: {}", e))?;

        Ok(self.session.pwd())
    }

    /// Removes an entry and its subtree
    ///
    /// Example: `rm docs/todo.txt`
    pub fn rm(&mut self, path: &str) -> Result<String, String> {
        self.session
            .rm(path)
            .map_err(|e| format!("rm failed: {}", e))?;

        Ok(format!("Removed: {}", path))
    }

    /// Lists the current directory
    ///
    /// Example: `ls`
    pub fn ls(&self) -> Vec<String> {
        self.session.ls()
    }

    /// Prints the current directory's absolute path
    ///
    /// Example: `pwd`
    pub fn pwd(&self) -> String {
        self.session.pwd()
    }

    /// Displays entry information
    ///
    /// Example: `stat docs/todo.txt`
    pub fn stat(&self, path: &str) -> Result<String, String> {
        let stat = self
            .session
            .stat(path)
            .map_err(|e| format!("stat failed: {}", e))?;

        let mut output = format!("Node ID: {}\n", stat.id);
        output.push_str(&format!("Kind: {}\n", stat.kind));
        if let Some(count) = stat.entry_count {
            output.push_str(&format!("Entries: {}\n", count));
        }

        Ok(output)
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
