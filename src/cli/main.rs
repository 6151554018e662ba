//! Command-line interface entry point for `edu-catalog`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use edu_catalog::config::Config;
use edu_catalog::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use edu_catalog::info;

fn main() {
    let args = Cli::parse();

    // The persisted config stays free of CLI overrides so `config set` never saves them
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let mut config = stored.clone();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    // Verbose: enable if CLI flag OR config has verbose=true
    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // Initialize file logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let result = match &args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand.clone(), &mut stored, &defaults)
        }
        Command::Catalog {
            source,
            filter,
            format,
            output,
        } => commands::catalog::run(source, filter, *format, output.as_deref(), &config),
        Command::Facets { source } => commands::facets::run(source, &config),
        Command::Report {
            source,
            filter,
            format,
            output,
        } => commands::report::run(source, filter, *format, output.as_deref(), &config),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
