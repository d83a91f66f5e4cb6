//! CLI argument parsing and configuration.

use crate::api::DEFAULT_API_BASE;
use crate::error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
pub struct CliConfig {
    pub api_base: String,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Appcost TUI - Interactive terminal cost estimator for app builds");
    eprintln!();
    eprintln!("Usage: appcost-tui [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --api-base <URL>  Base URL of the catalog API");
    eprintln!("                    (default: {})", DEFAULT_API_BASE);
    eprintln!("  -h, --help        Show this help message");
    eprintln!("  -V, --version     Show version");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  Tab          Move focus (categories / features / submit)");
    eprintln!("  Up/Down      Move within the focused list");
    eprintln!("  Enter/Space  Select category, toggle feature, or submit");
    eprintln!("  q            Quit");
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args: Vec<String> = std::env::args().collect();
    parse_from(&args[1..])
}

fn parse_from(args: &[String]) -> Result<CliConfig> {
    let mut api_base: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-h" || arg == "--help" {
            print_usage();
            std::process::exit(0);
        } else if arg == "-V" || arg == "--version" {
            println!("appcost-tui {}", VERSION);
            std::process::exit(0);
        } else if arg == "--api-base" {
            i += 1;
            if i >= args.len() {
                print_usage();
                return Err(AppError::InvalidArgs(
                    "Missing value for --api-base".to_string(),
                ));
            }
            api_base = Some(args[i].clone());
            i += 1;
        } else {
            print_usage();
            return Err(AppError::InvalidArgs(format!("Unknown argument: {}", arg)));
        }
    }

    Ok(CliConfig {
        api_base: api_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
    })
}
