use std::collections::BTreeSet;

use super::entry::FlattenedRow;

/// Compute the other rows whose checked state must change when one row is
/// toggled. The toggled row itself is excluded; the caller has already
/// applied its new state.
///
/// Rules, in render order:
/// - Toggling a directory propagates `new_checked` to every row in its
///   group (the contiguous following rows of strictly greater depth).
/// - Checking any row forces every ancestor directory checked. Unchecking
///   never propagates upward, so unchecking a plain leaf returns nothing.
///
/// The result is a pure function of the row sequence; no state is kept
/// between calls.
pub fn on_toggle(rows: &[FlattenedRow], index: usize, new_checked: bool) -> BTreeSet<String> {
    let mut affected = BTreeSet::new();

    let Some(row) = rows.get(index) else {
        return affected;
    };

    if row.entry.is_dir {
        for descendant in descendants(rows, index) {
            affected.insert(descendant.entry.id.clone());
        }
    }

    if new_checked {
        for ancestor in ancestors(rows, index) {
            affected.insert(ancestor.entry.id.clone());
        }
    }

    affected
}

/// Rows inside the group opened by the directory row at `index`: the
/// contiguous run of following rows at strictly greater depth.
fn descendants(rows: &[FlattenedRow], index: usize) -> impl Iterator<Item = &FlattenedRow> {
    let depth = rows[index].entry.depth;
    rows[index + 1..]
        .iter()
        .take_while(move |r| r.entry.depth > depth)
}

/// Directory rows whose group is still open at `index`, i.e. the row's
/// ancestors in the implied tree.
fn ancestors<'a>(rows: &'a [FlattenedRow], index: usize) -> Vec<&'a FlattenedRow> {
    let mut open: Vec<&FlattenedRow> = Vec::new();

    for row in &rows[..index + 1] {
        while open
            .last()
            .is_some_and(|top| top.entry.depth >= row.entry.depth)
        {
            open.pop();
        }
        if row.entry.is_dir {
            open.push(row);
        }
    }

    // The toggled row may itself be a directory sitting on top of the stack.
    if let Some(top) = open.last() {
        if top.entry.id == rows[index].entry.id {
            open.pop();
        }
    }

    open
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::FileStructure;
    use crate::tree::flatten::flatten;
    use crate::tree::render::{render, RenderedTree};

    fn example_tree() -> RenderedTree {
        // README.md, src/, src/lib/, src/lib/a.py
        let listing = FileStructure {
            dirs: [("d1", "src"), ("d2", "src/lib")]
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            files: [("f1", "src/lib/a.py"), ("f2", "README.md")]
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Default::default()
        };
        render(flatten(&listing).unwrap())
    }

    fn index_of(tree: &RenderedTree, label: &str) -> usize {
        tree.rows
            .iter()
            .position(|r| r.entry.label == label)
            .unwrap()
    }

    fn ids(set: &BTreeSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_unchecking_directory_unchecks_descendants() {
        let tree = example_tree();
        let src = index_of(&tree, "src");

        let affected = on_toggle(&tree.rows, src, false);
        assert_eq!(ids(&affected), ["d2", "f1"]);
    }

    #[test]
    fn test_checking_leaf_checks_ancestors() {
        let tree = example_tree();
        let a_py = index_of(&tree, "src/lib/a.py");

        let affected = on_toggle(&tree.rows, a_py, true);
        assert_eq!(ids(&affected), ["d1", "d2"]);
    }

    #[test]
    fn test_unchecking_leaf_changes_nothing() {
        let tree = example_tree();
        let a_py = index_of(&tree, "src/lib/a.py");

        let affected = on_toggle(&tree.rows, a_py, false);
        assert!(affected.is_empty());
    }

    #[test]
    fn test_unchecking_top_level_leaf_changes_nothing() {
        let tree = example_tree();
        let readme = index_of(&tree, "README.md");

        assert!(on_toggle(&tree.rows, readme, false).is_empty());
        // Checking it has no ancestors to force either.
        assert!(on_toggle(&tree.rows, readme, true).is_empty());
    }

    #[test]
    fn test_checking_directory_checks_descendants_and_ancestors() {
        let tree = example_tree();
        let lib = index_of(&tree, "src/lib");

        let affected = on_toggle(&tree.rows, lib, true);
        assert_eq!(ids(&affected), ["d1", "f1"]);
    }

    #[test]
    fn test_directory_toggle_does_not_reach_siblings() {
        let listing = FileStructure {
            dirs: [("d1", "a"), ("d2", "b")]
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            files: [("f1", "a/x.py"), ("f2", "b/y.py")]
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Default::default()
        };
        let tree = render(flatten(&listing).unwrap());
        let a = index_of(&tree, "a");

        let affected = on_toggle(&tree.rows, a, false);
        assert_eq!(ids(&affected), ["f1"]);
    }

    #[test]
    fn test_ancestors_skip_closed_groups() {
        // b/y.py's only ancestor is b, never the earlier closed group a.
        let listing = FileStructure {
            dirs: [("d1", "a"), ("d2", "b")]
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            files: [("f1", "a/x.py"), ("f2", "b/y.py")]
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Default::default()
        };
        let tree = render(flatten(&listing).unwrap());
        let y = index_of(&tree, "b/y.py");

        let affected = on_toggle(&tree.rows, y, true);
        assert_eq!(ids(&affected), ["d2"]);
    }

    #[test]
    fn test_ancestors_with_missing_intermediate_directory() {
        // The listing names src but not src/lib; the deep file's open
        // groups are just src.
        let listing = FileStructure {
            dirs: [("d1", "src")]
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            files: [("f1", "src/lib/a.py")]
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Default::default()
        };
        let tree = render(flatten(&listing).unwrap());
        let a_py = index_of(&tree, "src/lib/a.py");

        let affected = on_toggle(&tree.rows, a_py, true);
        assert_eq!(ids(&affected), ["d1"]);
    }

    #[test]
    fn test_out_of_bounds_index_is_empty() {
        let tree = example_tree();
        assert!(on_toggle(&tree.rows, 99, true).is_empty());
    }
}
