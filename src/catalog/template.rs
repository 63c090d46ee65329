//! Core trait and rendering for project templates.

use crate::listing::FileStructure;

/// Placeholder in replacement values that expands to the project name.
const MODNAME_PLACEHOLDER: &str = "{modname}";

/// Suffix convention for Python template files: `setup_py.template`
/// renders as `setup.py`.
const PY_TEMPLATE_SUFFIX: &str = "_py.template";

/// Trait for project-type templates.
///
/// Implement this trait to add a new project type to the catalog. A
/// template lists the directories and files it would scaffold, as paths
/// relative to the project root, plus the per-segment replacements applied
/// when rendering them for a concrete project name.
pub trait ProjectTemplate: Send + Sync {
    /// Unique identifier for this project type (e.g., "python").
    fn id(&self) -> &'static str;

    /// Human-readable name (e.g., "Python package").
    fn display_name(&self) -> &'static str;

    /// Directories scaffolded by this template, relative to the project
    /// root. Parents must be listed before their children.
    fn dirs(&self) -> &'static [&'static str];

    /// Files scaffolded by this template, relative to the project root.
    fn files(&self) -> &'static [&'static str];

    /// Path-segment replacements applied when rendering. Values may
    /// contain `{modname}`.
    fn replacements(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Render a template into the listing the picker consumes.
///
/// Template paths become the entry ids; the rendered paths become the
/// labels. A blank project name leaves `{modname}` segments as their
/// template spelling, so a tree can be previewed before a name is typed.
pub fn file_structure(template: &dyn ProjectTemplate, project_name: &str) -> FileStructure {
    let mut structure = FileStructure::default();

    for dir in template.dirs() {
        structure
            .dirs
            .insert(dir.to_string(), render_path(template, dir, project_name));
    }
    for file in template.files() {
        structure
            .files
            .insert(file.to_string(), render_path(template, file, project_name));
    }

    structure
}

/// Render one template path segment-by-segment.
fn render_path(template: &dyn ProjectTemplate, path: &str, project_name: &str) -> String {
    path.split('/')
        .map(|segment| render_segment(template, segment, project_name))
        .collect::<Vec<_>>()
        .join("/")
}

fn render_segment(template: &dyn ProjectTemplate, segment: &str, project_name: &str) -> String {
    let replaced = template
        .replacements()
        .iter()
        .find(|(from, _)| *from == segment)
        .map(|(_, to)| *to);

    if let Some(value) = replaced {
        if !value.contains(MODNAME_PLACEHOLDER) {
            return value.to_string();
        }
        if !project_name.is_empty() {
            return value.replace(MODNAME_PLACEHOLDER, project_name);
        }
        // Blank project name: fall back to the template spelling below.
    }

    match segment.strip_suffix(PY_TEMPLATE_SUFFIX) {
        Some(stem) => format!("{}.py", stem),
        None => segment.to_string(),
    }
}
