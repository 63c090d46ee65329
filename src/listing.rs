//! The file-structure listing exchanged with the scaffolding backend.
//!
//! This is the JSON payload of the `/filestructure/{projectType}` endpoint:
//! template-id to rendered-path maps for the project-specific entries, plus
//! flat lists for the paths shared by every project type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PickerError, Result};

/// A nested file/directory listing for one project type.
///
/// Keys in `dirs` and `files` are stable template identifiers; values are
/// the slash-separated paths shown to the user. Entries in `common_dirs`
/// and `common_files` are identified by their path itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStructure {
    #[serde(default)]
    pub dirs: BTreeMap<String, String>,

    #[serde(default)]
    pub files: BTreeMap<String, String>,

    #[serde(default)]
    pub common_dirs: Vec<String>,

    #[serde(default)]
    pub common_files: Vec<String>,
}

impl FileStructure {
    /// Parse a listing from its JSON wire form.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Serialize the listing back to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// True if the listing contains no entries at all.
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
            && self.files.is_empty()
            && self.common_dirs.is_empty()
            && self.common_files.is_empty()
    }

    /// Total number of entries across all four sections.
    pub fn len(&self) -> usize {
        self.dirs.len() + self.files.len() + self.common_dirs.len() + self.common_files.len()
    }
}

/// Validate a project name against the form rules: non-empty, starts with
/// a letter, and contains only letters, numbers and underscores.
pub fn validate_project_name(name: &str) -> Result<()> {
    let mut chars = name.chars();

    match chars.next() {
        None => {
            return Err(PickerError::InvalidProjectName(
                "project name cannot be empty".to_string(),
            ))
        }
        Some(first) if !first.is_ascii_alphabetic() => {
            return Err(PickerError::InvalidProjectName(
                "project name must start with a letter".to_string(),
            ))
        }
        Some(_) => {}
    }

    if chars.any(|c| !c.is_ascii_alphanumeric() && c != '_') {
        return Err(PickerError::InvalidProjectName(
            "project name can only contain letters, numbers and underscores".to_string(),
        ));
    }

    Ok(())
}
