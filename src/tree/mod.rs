//! Tree flattening, rendering and selection propagation.
//!
//! This module turns a nested file/directory listing into a flat,
//! correctly-indented, parent/child-linked checkbox list:
//! - [`flatten`] merges and sorts the listing into entries
//! - [`render`] assigns indentation and balanced group boundaries
//! - [`on_toggle`] computes cascading selection changes
//! - [`TreeSnapshot`] ties the three together with checked state

mod entry;
mod flatten;
mod formatter;
mod render;
mod select;
mod snapshot;

pub use entry::{Entry, FlattenedRow};
pub use flatten::flatten;
pub use formatter::{format_json, format_rows, FormatOptions};
pub use render::{render, RenderedTree};
pub use select::on_toggle;
pub use snapshot::TreeSnapshot;
