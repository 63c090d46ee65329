use super::entry::{Entry, FlattenedRow};

/// A fully rendered row sequence with balanced group boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTree {
    /// Rows in display order (depth-first pre-order of the implied tree).
    pub rows: Vec<FlattenedRow>,

    /// Group closings emitted after the last row to balance the sequence.
    pub trailing_closes: usize,
}

impl RenderedTree {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Render a sorted entry sequence into display rows.
///
/// Group accounting invariant: every directory row opens exactly one group
/// after its own markup, and that group closes exactly once, before the
/// next row whose depth is less than or equal to the directory's depth, or
/// at the end of the sequence. Since the input is sorted by label, the
/// resulting row order equals a depth-first pre-order traversal of the
/// directory tree implied by the paths.
pub fn render(entries: Vec<Entry>) -> RenderedTree {
    let mut rows = Vec::with_capacity(entries.len());

    // Depths of currently open directory groups, innermost last.
    let mut open_groups: Vec<usize> = Vec::new();

    for entry in entries {
        let mut closes_groups = 0;
        while open_groups.last().is_some_and(|&d| d >= entry.depth) {
            open_groups.pop();
            closes_groups += 1;
        }

        let opens_group = entry.is_dir;
        if opens_group {
            open_groups.push(entry.depth);
        }

        rows.push(FlattenedRow {
            indent_spacers: entry.depth - 1,
            opens_group,
            closes_groups,
            entry,
        });
    }

    RenderedTree {
        rows,
        trailing_closes: open_groups.len(),
    }
}
