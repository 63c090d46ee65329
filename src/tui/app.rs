//! Application state for the TUI.

use crate::catalog::{ProjectTemplate, TemplateRegistry};
use crate::error::{PickerError, Result};
use crate::listing::validate_project_name;
use crate::tree::TreeSnapshot;

/// The current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal navigation mode.
    Normal,
    /// Project-name editing mode.
    EditName,
    /// Help overlay mode.
    Help,
}

/// Main application state for the TUI.
pub struct App {
    /// Catalog of project templates.
    pub registry: TemplateRegistry,

    /// Index of the active template in the registry.
    pub type_index: usize,

    /// Project name typed so far.
    pub project_name: String,

    /// Current tree, absent while the project name fails validation.
    pub snapshot: Option<TreeSnapshot>,

    /// Why the snapshot is absent, shown in place of the tree.
    pub name_error: Option<String>,

    /// Currently selected row index.
    pub selected: usize,

    /// Current UI mode.
    pub mode: Mode,

    /// Status message to display.
    pub status_message: Option<String>,

    /// Application should quit.
    pub should_quit: bool,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("type_index", &self.type_index)
            .field("project_name", &self.project_name)
            .field("snapshot", &self.snapshot)
            .field("name_error", &self.name_error)
            .field("selected", &self.selected)
            .field("mode", &self.mode)
            .field("status_message", &self.status_message)
            .field("should_quit", &self.should_quit)
            .finish()
    }
}

impl App {
    /// Create a new App bound to a starting project type and name.
    pub fn new(
        registry: TemplateRegistry,
        project_type: &str,
        project_name: String,
    ) -> Result<Self> {
        let type_index = registry
            .ids()
            .iter()
            .position(|id| *id == project_type)
            .ok_or_else(|| PickerError::UnknownProjectType(project_type.to_string()))?;

        let mut app = Self {
            registry,
            type_index,
            project_name,
            snapshot: None,
            name_error: None,
            selected: 0,
            mode: Mode::Normal,
            status_message: None,
            should_quit: false,
        };
        app.refresh();
        Ok(app)
    }

    /// The active project template.
    pub fn project_type(&self) -> &dyn ProjectTemplate {
        self.registry.templates()[self.type_index].as_ref()
    }

    /// Rebuild the snapshot for the current type and name.
    ///
    /// The previous snapshot is discarded entirely; a failing project name
    /// clears the tree and records the reason instead. Every name
    /// keystroke and type change lands here.
    pub fn refresh(&mut self) {
        self.snapshot = None;
        self.name_error = None;
        self.selected = 0;

        if let Err(err) = validate_project_name(&self.project_name) {
            self.name_error = Some(err.to_string());
            return;
        }

        match self
            .registry
            .listing(self.project_type().id(), &self.project_name)
            .and_then(|listing| TreeSnapshot::build(&listing))
        {
            Ok(snapshot) => self.snapshot = Some(snapshot),
            Err(err) => {
                tracing::warn!(%err, "Failed to build tree");
                self.name_error = Some("Could not build the file tree".to_string());
            }
        }
    }

    /// Number of visible rows.
    pub fn row_count(&self) -> usize {
        self.snapshot.as_ref().map_or(0, |s| s.len())
    }

    /// Move the selection by a signed amount, clamped to the row range.
    pub fn move_selection(&mut self, delta: i64) {
        let count = self.row_count();
        if count == 0 {
            self.selected = 0;
            return;
        }

        let new = self.selected as i64 + delta;
        self.selected = new.clamp(0, count as i64 - 1) as usize;
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.selected = count - 1;
        }
    }

    /// Toggle the selected row's checkbox, propagating to its group and
    /// ancestors.
    pub fn toggle_selected(&mut self) {
        let index = self.selected;
        if let Some(snapshot) = self.snapshot.as_mut() {
            let changed = snapshot.toggle(index);
            if changed > 1 {
                self.status_message = Some(format!("{} paths updated", changed));
            } else {
                self.status_message = None;
            }
        }
    }

    /// Switch to the next project type in the registry.
    pub fn cycle_project_type(&mut self) {
        self.type_index = (self.type_index + 1) % self.registry.len();
        self.refresh();
        self.status_message = Some(format!("Project type: {}", self.project_type().display_name()));
    }

    /// Report the current selection, standing in for the form submission.
    pub fn confirm_selection(&mut self) {
        match &self.snapshot {
            Some(snapshot) => {
                self.status_message = Some(format!(
                    "Good to go: {} of {} paths selected",
                    snapshot.checked_count(),
                    snapshot.len()
                ));
            }
            None => {
                self.status_message = Some("Nothing to select yet".to_string());
            }
        }
    }

    pub fn push_name_char(&mut self, c: char) {
        self.project_name.push(c);
        self.refresh();
    }

    pub fn pop_name_char(&mut self) {
        self.project_name.pop();
        self.refresh();
    }
}
