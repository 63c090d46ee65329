use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use scaffold_picker::catalog::TemplateRegistry;
use scaffold_picker::cli::{Cli, Command};
use scaffold_picker::commands;
use scaffold_picker::config::Config;
use scaffold_picker::tui;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    // Dispatch to subcommand
    match cli.command {
        Command::Show(args) => {
            tracing::info!(?args, "Rendering tree");
            commands::show::run(args, &config)?;
        }
        Command::Types => {
            commands::types::run()?;
        }
        Command::Tui(args) => {
            tracing::info!(?args, "Starting TUI");
            let project_type = args
                .project_type
                .unwrap_or_else(|| config.picker.default_project_type.clone());
            let app = tui::App::new(TemplateRegistry::new(), &project_type, args.name)?;
            tui::run(app, config.tui.tick_ms)?;
        }
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(args.shell, &mut cmd, name, &mut io::stdout());
        }
        Command::Man => {
            let man = clap_mangen::Man::new(Cli::command());
            man.render(&mut io::stdout())?;
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("scaffold_picker={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
