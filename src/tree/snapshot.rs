use std::collections::HashMap;

use crate::error::Result;
use crate::listing::FileStructure;

use super::entry::FlattenedRow;
use super::flatten::flatten;
use super::render::{render, RenderedTree};
use super::select::on_toggle;

/// One fully rendered tree plus its checked state.
///
/// A snapshot is built fresh from a listing on every project-name or
/// project-type change and replaced wholesale; it is never updated
/// incrementally. Every row starts checked.
#[derive(Debug, Clone)]
pub struct TreeSnapshot {
    tree: RenderedTree,
    checked: Vec<bool>,
    id_index: HashMap<String, usize>,
}

impl TreeSnapshot {
    /// Flatten and render a listing into a snapshot with all rows checked.
    pub fn build(listing: &FileStructure) -> Result<Self> {
        let tree = render(flatten(listing)?);
        let checked = vec![true; tree.rows.len()];
        let id_index = tree
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| (row.entry.id.clone(), i))
            .collect();

        Ok(Self {
            tree,
            checked,
            id_index,
        })
    }

    pub fn rows(&self) -> &[FlattenedRow] {
        &self.tree.rows
    }

    pub fn trailing_closes(&self) -> usize {
        self.tree.trailing_closes
    }

    pub fn len(&self) -> usize {
        self.tree.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.rows.is_empty()
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    /// Flip one row and apply the propagation rules to the rest of the
    /// snapshot. Returns the number of rows whose state changed.
    pub fn toggle(&mut self, index: usize) -> usize {
        if index >= self.checked.len() {
            return 0;
        }

        let new_checked = !self.checked[index];
        self.checked[index] = new_checked;
        let mut changed = 1;

        for id in on_toggle(&self.tree.rows, index, new_checked) {
            if let Some(&i) = self.id_index.get(&id) {
                if self.checked[i] != new_checked {
                    self.checked[i] = new_checked;
                    changed += 1;
                }
            }
        }

        changed
    }

    /// Checkbox ids of the currently selected rows, in row order.
    pub fn checked_ids(&self) -> Vec<String> {
        self.tree
            .rows
            .iter()
            .zip(&self.checked)
            .filter(|(_, &checked)| checked)
            .map(|(row, _)| row.entry.checkbox_id())
            .collect()
    }

    /// Number of currently selected rows.
    pub fn checked_count(&self) -> usize {
        self.checked.iter().filter(|&&c| c).count()
    }
}
