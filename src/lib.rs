//! Scaffold Picker - A file-tree picker for project scaffolding templates
//!
//! This crate provides functionality for:
//! - Flattening a nested file/directory listing into indented checkbox rows
//! - Cascading selection between directories and their contents
//! - A catalog of built-in project-type templates
//! - CLI and TUI front ends over the same tree snapshot

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod listing;
pub mod tree;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use error::{PickerError, Result};
pub use listing::FileStructure;
pub use tree::TreeSnapshot;
