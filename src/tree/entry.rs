use serde::Serialize;

/// A single selectable path in the flattened listing.
/// This is the core data structure for the tree renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Stable identifier used for checkbox names. Template id for regular
    /// entries; the path itself for common entries.
    pub id: String,

    /// Slash-separated path as shown to the user.
    pub label: String,

    /// Number of path segments (1 for top-level entries).
    pub depth: usize,

    /// True if this is a directory
    pub is_dir: bool,

    /// True if this path is shared by every project type
    pub is_common: bool,
}

impl Entry {
    /// Last path segment, used as the row's display label.
    pub fn display_name(&self) -> &str {
        self.label.rsplit('/').next().unwrap_or(&self.label)
    }

    /// Checkbox identifier: `cb_<id>`, or `cb_common_<id>` for common entries.
    pub fn checkbox_id(&self) -> String {
        if self.is_common {
            format!("cb_common_{}", self.id)
        } else {
            format!("cb_{}", self.id)
        }
    }
}

/// An [`Entry`] positioned in the rendered row sequence, with the group
/// boundaries and indentation needed to display it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlattenedRow {
    pub entry: Entry,

    /// Indentation markers preceding the display label (depth - 1).
    pub indent_spacers: usize,

    /// True iff this row opens a new directory group after its own markup.
    pub opens_group: bool,

    /// Number of open groups that close before this row's markup.
    pub closes_groups: usize,
}
