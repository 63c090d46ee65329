use std::collections::BTreeMap;

use crate::error::{PickerError, Result};
use crate::listing::FileStructure;

use super::entry::Entry;

/// Flatten a nested listing into a single ordered entry sequence.
///
/// Regular dirs and files are merged into one set of (id, label) pairs;
/// common paths are appended with their path doubling as id. The combined
/// sequence is sorted by label with a stable three-way comparison, so ties
/// keep their insertion order and reruns are reproducible.
///
/// Fails with [`PickerError::MissingLabel`] when an id does not resolve to
/// a usable label. Empty inputs produce an empty (valid) sequence. Ids are
/// expected to be unique across the regular and common sections combined.
pub fn flatten(listing: &FileStructure) -> Result<Vec<Entry>> {
    let mut entries = Vec::with_capacity(listing.len());

    collect_regular(&listing.dirs, true, &mut entries)?;
    collect_regular(&listing.files, false, &mut entries)?;

    for label in &listing.common_dirs {
        entries.push(common_entry(label, true)?);
    }
    for label in &listing.common_files {
        entries.push(common_entry(label, false)?);
    }

    entries.sort_by(|a, b| a.label.cmp(&b.label));

    Ok(entries)
}

fn collect_regular(
    section: &BTreeMap<String, String>,
    is_dir: bool,
    out: &mut Vec<Entry>,
) -> Result<()> {
    for (id, label) in section {
        if label.is_empty() {
            return Err(PickerError::MissingLabel { id: id.clone() });
        }
        out.push(Entry {
            id: id.clone(),
            label: label.clone(),
            depth: path_depth(label),
            is_dir,
            is_common: false,
        });
    }
    Ok(())
}

fn common_entry(label: &str, is_dir: bool) -> Result<Entry> {
    if label.is_empty() {
        return Err(PickerError::MissingLabel {
            id: label.to_string(),
        });
    }
    Ok(Entry {
        id: label.to_string(),
        label: label.to_string(),
        depth: path_depth(label),
        is_dir,
        is_common: true,
    })
}

/// Number of '/'-separated segments in a path. Always at least 1 for a
/// non-empty label.
fn path_depth(label: &str) -> usize {
    label.split('/').count()
}
