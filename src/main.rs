//! Gradebook - Student Grade Management System
//!
//! A CLI tool that keeps students and their subject grades in memory
//! and reports averages, letter grades, rankings and pass/fail lists
//! through a text menu.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (bad arguments, unreadable config, terminal I/O)

mod analysis;
mod cli;
mod config;
mod demo;
mod error;
mod menu;
mod models;
mod report;
mod roster;

use analysis::class_summary;
use anyhow::{Context, Result};
use cli::{Args, OutputFormat};
use config::{Config, DEFAULT_CONFIG_FILE};
use menu::Menu;
use roster::RosterStore;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Config comes first so `general.verbose` can raise the log level.
    let (mut config, config_warning) = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    config.merge_with_args(&args);
    if let Err(e) = config.validate() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    init_logging(&args, &config);

    info!("Gradebook v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);
    if let Some(warning) = config_warning {
        warn!("{}", warning);
    }
    debug!("Configuration: {:?}", config);

    if let Err(e) = run_session(&args, &config) {
        error!("Session failed: {:#}", e);
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .gradebook.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(DEFAULT_CONFIG_FILE);

    if path.exists() {
        eprintln!("⚠️  {} already exists. Remove it first or edit it manually.", DEFAULT_CONFIG_FILE);
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", DEFAULT_CONFIG_FILE))?;

    println!("✅ Created {} with default settings.", DEFAULT_CONFIG_FILE);
    println!("   Edit it to change the demo behaviour and report layout.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr; stdout belongs to the menu.
fn init_logging(args: &Args, config: &Config) {
    let level = if config.general.verbose && !args.quiet {
        tracing::Level::DEBUG
    } else {
        args.log_level()
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Run the demo (if wanted) and the menu over stdin/stdout.
fn run_session(args: &Args, config: &Config) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), config.report.clone());
    let mut roster = RosterStore::new();

    println!("Welcome to the Student Grade Management System!");

    let run_demo = match config.general.demo {
        Some(run) => run,
        None => menu.confirm_demo()?,
    };
    if run_demo {
        menu.run_demo(&mut roster)?;
    }

    if args.no_menu {
        drop(menu);
        return print_summary(&roster, args.format);
    }

    menu.run(&mut roster)?;
    info!("Session ended with {} students on the roster", roster.len());

    Ok(())
}

/// Print the closing class summary of a --no-menu run.
fn print_summary(roster: &RosterStore, format: OutputFormat) -> Result<()> {
    let summary = class_summary(roster);

    match format {
        OutputFormat::Json => println!("{}", report::generate_json_summary(&summary)?),
        OutputFormat::Text => print!("{}", report::class_summary_section(&summary)),
    }

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// A broken file at the default location is not fatal; the second value
/// carries the warning to log once logging is up.
fn load_config(args: &Args) -> Result<(Config, Option<String>)> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        return Ok((Config::load(config_path)?, None));
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => Ok((config, None)),
        Ok(None) => Ok((Config::default(), None)),
        Err(e) => Ok((
            Config::default(),
            Some(format!("Failed to load config, using defaults: {:#}", e)),
        )),
    }
}
