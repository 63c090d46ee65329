//! Template registry for managing project templates.

use crate::catalog::templates::all_templates;
use crate::catalog::ProjectTemplate;
use crate::error::{PickerError, Result};
use crate::listing::FileStructure;

use super::template::file_structure;

/// Paths present in every project template regardless of project type.
/// They render with the `cb_common_` checkbox prefix.
pub const COMMON_DIRS: &[&str] = &[];
pub const COMMON_FILES: &[&str] = &[".gitignore", "License.md", "README.md", "requirements.txt"];

/// Registry that manages project templates.
///
/// Provides lookup by type id, which backs the CLI's `TYPE` argument and
/// the TUI's project-type cycling.
pub struct TemplateRegistry {
    templates: Vec<Box<dyn ProjectTemplate>>,
}

impl TemplateRegistry {
    /// Create a registry with all built-in templates.
    pub fn new() -> Self {
        Self {
            templates: all_templates(),
        }
    }

    /// Get all registered templates.
    pub fn templates(&self) -> &[Box<dyn ProjectTemplate>] {
        &self.templates
    }

    /// Get a template by ID.
    pub fn get(&self, id: &str) -> Option<&dyn ProjectTemplate> {
        self.templates
            .iter()
            .find(|t| t.id() == id)
            .map(|t| t.as_ref())
    }

    /// List all template IDs.
    pub fn ids(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.id()).collect()
    }

    /// Get the number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Render the full listing for a project type, common paths included.
    ///
    /// Produces the same shape a
    /// `/filestructure/{projectType}?projectname={name}` endpoint returns.
    pub fn listing(&self, type_id: &str, project_name: &str) -> Result<FileStructure> {
        let template = self
            .get(type_id)
            .ok_or_else(|| PickerError::UnknownProjectType(type_id.to_string()))?;

        let mut structure = file_structure(template, project_name);
        structure.common_dirs = COMMON_DIRS.iter().map(|s| s.to_string()).collect();
        structure.common_files = COMMON_FILES.iter().map(|s| s.to_string()).collect();

        Ok(structure)
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}
