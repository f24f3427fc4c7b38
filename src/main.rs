// material-icons-ext - Material file and folder icons for Git hosting pages
// Command-line front end: `mie`

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use material_icons_ext::command_line::CommandLine;

/// Log filter variable; `--verbose` overrides it.
const LOG_ENV_VAR_NAME: &str = "MIE_LOG";

fn main() {
    let command_line = CommandLine::parse();

    let filter = if command_line.verbose {
        EnvFilter::new ("debug")
    } else {
        EnvFilter::try_from_env (LOG_ENV_VAR_NAME).unwrap_or_else (|_| EnvFilter::new ("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter (filter)
        .with_writer (std::io::stderr)
        .with_target (true)
        .init();

    if let Err(e) = material_icons_ext::run (&command_line) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
