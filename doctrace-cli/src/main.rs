//! Command-line interface for doctrace
//! Scans Go test files for trace markers in doc comments and prints audit evidence linking each
//! test to its tickets.
//!
//! Usage:
//!   doctrace [`<path>`] [--format `<format>`] [--config `<file>`]   - Report traces found under a directory
//!   doctrace --list-categories                                  - Show the recognized categories

mod render;

use clap::{Arg, ArgAction, Command};
use doctrace_config::{ConfigError, DoctraceConfig, Loader, ReportFormat};
use doctrace_parser::{
    CategorySet, FunctionSource, GoScanner, PathSource, TraceExtractor, TraceMatcher,
};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("doctrace")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extracts audit traces from test function doc comments")
        .arg(
            Arg::new("path")
                .help("Directory containing the test files")
                .default_value(".")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Report format")
                .value_parser(["text", "json"]),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .help("Ticket project key, e.g. 'ABT' for ABT-123"),
        )
        .arg(
            Arg::new("category")
                .long("category")
                .help("Recognized category (repeatable, replaces the configured list)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("recursive")
                .long("recursive")
                .short('r')
                .help("Descend into subdirectories")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-categories")
                .long("list-categories")
                .help("List recognized categories and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log discovery and matching details to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let path = matches
        .get_one::<String>("path")
        .expect("path has a default value");

    let config = load_config(Path::new(path), &matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if matches.get_flag("list-categories") {
        handle_list_categories_command(&config);
        return;
    }

    handle_report_command(Path::new(path), &config);
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Defaults, then `doctrace.toml` in the scanned directory, then `--config`, then flags.
fn load_config(
    root: &Path,
    matches: &clap::ArgMatches,
) -> Result<DoctraceConfig, ConfigError> {
    let mut loader = Loader::new().project(root);
    if let Some(file) = matches.get_one::<String>("config") {
        loader = loader.file(file);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.report_format(format.parse::<ReportFormat>()?)?;
    }
    if let Some(prefix) = matches.get_one::<String>("prefix") {
        loader = loader.epic_prefix(prefix)?;
    }
    if let Some(categories) = matches.get_many::<String>("category") {
        loader = loader.categories(categories.cloned().collect())?;
    }
    if matches.get_flag("recursive") {
        loader = loader.recursive(true)?;
    }
    loader.build()
}

/// Handle the default report command
fn handle_report_command(root: &Path, config: &DoctraceConfig) {
    let categories = CategorySet::new(config.trace.categories.iter().cloned());
    let matcher = TraceMatcher::new(&config.trace.epic_prefix, categories).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let source = PathSource::new(root)
        .file_suffix(config.discovery.file_suffix.as_str())
        .recursive(config.discovery.recursive)
        .with_scanner(GoScanner::new(config.discovery.function_prefix.as_str()));

    let functions = source.functions().unwrap_or_else(|e| {
        eprintln!("Error reading comments from files: {}", e);
        std::process::exit(1);
    });

    let found = TraceExtractor::new(matcher).collect(functions);
    tracing::info!(functions = found.len(), "functions with traces");

    let output = render::render(&found, config.report.format).unwrap_or_else(|e| {
        eprintln!("Error formatting report: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the list-categories command
fn handle_list_categories_command(config: &DoctraceConfig) {
    println!("Recognized categories:\n");
    for category in CategorySet::new(config.trace.categories.iter().cloned()).iter() {
        println!("  {}", category);
    }
    println!("\nTicket prefix: {}", config.trace.epic_prefix);
}
