//! # CLI Console (Demo)
//!
//! This is a simple demonstration of driving a filesystem session from a
//! command-line style interface. It is NOT a shell and NOT intended for
//! POSIX compatibility.

pub mod commands;

pub use commands::CommandHandler;
