use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use barcus::cli::args::{Cli, Commands};
use barcus::cli::commands;
use barcus::config::Config;

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("{}: {e:#}", "error".red().bold());
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays clean for piping. `BARCUS_LOG` takes the
/// usual `EnvFilter` directives and defaults to `warn`.
fn init_logging() {
    let filter = EnvFilter::try_from_env("BARCUS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load().context("could not load configuration")?;
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Parse { words } => commands::parse_line(&words, &config, format)?,
        Commands::Repl => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            commands::repl(stdin.lock(), &mut io::stdout().lock(), &config.repl, format, interactive)?;
            String::new()
        },
        Commands::Keywords => commands::keywords(format)?,
        Commands::Config(args) => commands::config(args.command, &config, format)?,
        Commands::Completions { shell, install } => commands::completions(&shell, install)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
