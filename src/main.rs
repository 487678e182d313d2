use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use fitshift::cli::args::{Cli, Commands};
use fitshift::cli::commands;
use fitshift::config::{Config, Paths};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let paths = Paths::new()?;
    // `config` commands must work even when the file is broken
    let config = match Config::load_from_path(&paths.config_file) {
        Ok(config) => config,
        Err(e) if matches!(cli.command, Commands::Config(_)) => {
            tracing::warn!(error = %e, "ignoring invalid config");
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Generate(args) => commands::generate(&args, &config, &paths, format)?,
        Commands::Start(args) => commands::start(&args, &config, &paths, format)?,
        Commands::Tui => commands::tui(&config, &paths, format)?,
        Commands::Catalog(args) => {
            let catalog = config.catalog(&paths, config.general.language)?;
            commands::catalog(&catalog, args.command, format)?
        }
        Commands::Config(args) => commands::config(&paths, args.command, format)?,
        Commands::Completions { shell, install } => {
            commands::completions(shell, install, format)?
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}

/// Log to stderr. `--log-level`/`FITSHIFT_LOG` wins over `RUST_LOG`; default is warn.
fn init_logging(level: Option<&str>) {
    let filter = level
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
