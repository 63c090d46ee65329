use serde::Serialize;

use crate::error::Result;

use super::snapshot::TreeSnapshot;

/// Format options for tree output
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Spaces per indentation level
    pub indent_width: usize,
    /// Append the checkbox id to each row
    pub show_ids: bool,
    /// Suffix directories with '/'
    pub dir_suffix: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_ids: false,
            dir_suffix: true,
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn with_ids(mut self, show: bool) -> Self {
        self.show_ids = show;
        self
    }
}

/// Format a snapshot as a plain-text checkbox tree.
pub fn format_rows(snapshot: &TreeSnapshot, options: &FormatOptions) -> String {
    let mut output = String::new();

    for (i, row) in snapshot.rows().iter().enumerate() {
        let marker = if snapshot.is_checked(i) { "[x]" } else { "[ ]" };
        let indent = " ".repeat(row.indent_spacers * options.indent_width);
        let name = if row.entry.is_dir && options.dir_suffix {
            format!("{}/", row.entry.display_name())
        } else {
            row.entry.display_name().to_string()
        };

        if options.show_ids {
            output.push_str(&format!(
                "{} {}{}  ({})\n",
                marker,
                indent,
                name,
                row.entry.checkbox_id()
            ));
        } else {
            output.push_str(&format!("{} {}{}\n", marker, indent, name));
        }
    }

    output
}

/// One row in the JSON rendering. A consuming surface binds these
/// descriptors to its own widgets instead of assembling markup from
/// strings.
#[derive(Debug, Serialize)]
struct RowDescriptor<'a> {
    id: String,
    label: &'a str,
    name: &'a str,
    depth: usize,
    indent_spacers: usize,
    is_dir: bool,
    is_common: bool,
    opens_group: bool,
    closes_groups: usize,
    checked: bool,
}

#[derive(Debug, Serialize)]
struct TreeDescriptor<'a> {
    rows: Vec<RowDescriptor<'a>>,
    trailing_closes: usize,
}

/// Format a snapshot as JSON row descriptors.
pub fn format_json(snapshot: &TreeSnapshot) -> Result<String> {
    let rows = snapshot
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| RowDescriptor {
            id: row.entry.checkbox_id(),
            label: &row.entry.label,
            name: row.entry.display_name(),
            depth: row.entry.depth,
            indent_spacers: row.indent_spacers,
            is_dir: row.entry.is_dir,
            is_common: row.entry.is_common,
            opens_group: row.opens_group,
            closes_groups: row.closes_groups,
            checked: snapshot.is_checked(i),
        })
        .collect();

    let descriptor = TreeDescriptor {
        rows,
        trailing_closes: snapshot.trailing_closes(),
    };

    Ok(serde_json::to_string_pretty(&descriptor)?)
}
