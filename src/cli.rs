use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Scaffold Picker - A file-tree picker for project scaffolding templates
#[derive(Parser, Debug)]
#[command(name = "scaffold-picker")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the file tree for a project type
    Show(ShowArgs),

    /// List available project types
    Types,

    /// Launch interactive TUI
    Tui(TuiArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Generate a man page
    Man,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Project type to render (see `types`)
    pub project_type: Option<String>,

    /// Project name substituted into the template paths
    #[arg(short, long, default_value = "", value_name = "NAME")]
    pub name: String,

    /// Read a file-structure JSON payload instead of using the catalog
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output row descriptors as JSON
    #[arg(long)]
    pub json: bool,

    /// Append checkbox ids to each row
    #[arg(long)]
    pub ids: bool,
}

#[derive(Args, Debug)]
pub struct TuiArgs {
    /// Project type to start with
    pub project_type: Option<String>,

    /// Initial project name
    #[arg(short, long, default_value = "", value_name = "NAME")]
    pub name: String,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Validates the CLI definition is correct
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_show_command() {
        let cli = Cli::parse_from(["scaffold-picker", "show", "python", "--name", "myproj"]);
        match cli.command {
            Command::Show(args) => {
                assert_eq!(args.project_type.as_deref(), Some("python"));
                assert_eq!(args.name, "myproj");
                assert!(!args.json);
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn parse_show_with_input() {
        let cli = Cli::parse_from(["scaffold-picker", "show", "--input", "listing.json", "--json"]);
        match cli.command {
            Command::Show(args) => {
                assert!(args.project_type.is_none());
                assert_eq!(args.input, Some(PathBuf::from("listing.json")));
                assert!(args.json);
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn parse_tui_defaults() {
        let cli = Cli::parse_from(["scaffold-picker", "tui"]);
        match cli.command {
            Command::Tui(args) => {
                assert!(args.project_type.is_none());
                assert!(args.name.is_empty());
            }
            _ => panic!("Expected Tui command"),
        }
    }

    #[test]
    fn global_verbose_flag() {
        let cli = Cli::parse_from(["scaffold-picker", "-vvv", "types"]);
        assert_eq!(cli.verbose, 3);
    }
}
