//! Stagehand CLI - build-and-deploy utility
//!
//! Usage: stagehand [OPTIONS] [COMMAND]
//!
//! Without a command, stagehand runs the deployment pipeline (compile,
//! rename, stage, attach dependencies) and then enters the interactive
//! menu. `stagehand routes` prints the recorded route listing and exits.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use stagehand::config;
use stagehand::menu;
use stagehand::pipeline::{self, BuildCommand};
use stagehand::routes;
use stagehand::ui::{ColorWhen, Reporter};

/// Stagehand - build-and-deploy utility
#[derive(Parser, Debug)]
#[command(name = "stagehand")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the deployment configuration file
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// When to color output
    #[arg(long, value_enum)]
    color: Option<ColorWhen>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the recorded route listing and exit
    Routes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let reporter = Reporter::new(cli.color, cli.verbose);

    match cli.command {
        Some(Commands::Routes) => {
            routes::display_added_routers(&reporter);
            Ok(())
        }
        None => cmd_deploy(&cli, &reporter),
    }
}

fn cmd_deploy(cli: &Cli, reporter: &Reporter) -> Result<()> {
    let (config, warnings) = config::load_with_warnings(&cli.config)?;
    let config = config::with_env_overrides(config);

    for warning in &warnings {
        reporter.warn(&format!(
            "unknown configuration key '{}' in '{}'",
            warning.key,
            warning.file.display()
        ));
    }
    reporter.detail(&format!("entry point: {}", config.entry_point));

    let build = BuildCommand::from_env();
    pipeline::run(&config, &build, reporter)?;

    menu::run(reporter)?;
    Ok(())
}
