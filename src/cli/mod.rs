//! CLI argument parsing for appcost-tui.

mod args;

pub use args::{parse_args, CliConfig, VERSION};
