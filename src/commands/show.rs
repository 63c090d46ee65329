//! Show command implementation

use std::fs;

use crate::catalog::TemplateRegistry;
use crate::cli::ShowArgs;
use crate::config::Config;
use crate::error::{PickerError, Result};
use crate::listing::{validate_project_name, FileStructure};
use crate::tree::{format_json, format_rows, FormatOptions, TreeSnapshot};

/// Run the show command
pub fn run(args: ShowArgs, config: &Config) -> Result<()> {
    // An explicitly supplied name must validate; an omitted name renders
    // the template placeholders instead.
    if !args.name.is_empty() {
        validate_project_name(&args.name)?;
    }

    let listing = resolve_listing(&args, config)?;

    tracing::info!(entries = listing.len(), "Rendering file tree");

    let snapshot = TreeSnapshot::build(&listing)?;

    let output = if args.json {
        format_json(&snapshot)?
    } else {
        let options = FormatOptions::new()
            .with_indent_width(config.picker.indent_width)
            .with_ids(args.ids || config.picker.show_ids);
        format_rows(&snapshot, &options)
    };

    print!("{}", output);

    if !args.json {
        let dirs = snapshot.rows().iter().filter(|r| r.entry.is_dir).count();
        let files = snapshot.len() - dirs;
        println!();
        println!(
            "{} paths ({} directories, {} files), all selected",
            snapshot.len(),
            dirs,
            files
        );
    }

    Ok(())
}

/// Pick the listing source: an `--input` JSON payload or the catalog.
fn resolve_listing(args: &ShowArgs, config: &Config) -> Result<FileStructure> {
    if let Some(path) = &args.input {
        let contents = fs::read_to_string(path).map_err(|e| PickerError::Io {
            path: path.clone(),
            source: e,
        })?;
        return FileStructure::from_json(&contents);
    }

    let registry = TemplateRegistry::new();
    let type_id = args
        .project_type
        .as_deref()
        .unwrap_or(&config.picker.default_project_type);

    registry.listing(type_id, &args.name)
}
