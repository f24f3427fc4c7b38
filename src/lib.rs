// material-icons-ext - Material file and folder icons for Git hosting pages
// Icon resolution engine and listing row processing policy

pub mod ehm;
pub mod icon_mapping;
pub mod reference_tables;
pub mod icon_pack;
pub mod file_signal;
pub mod resolver;
pub mod scheduler;
pub mod rate_shaper;
pub mod dom;
pub mod provider;
pub mod row_processor;
pub mod stylesheet;
pub mod environment_provider;
pub mod config;
pub mod content_script;
pub mod command_line;

use std::io;

use command_line::CommandLine;
use ehm::AppError;

/// Main entry point for the library.
/// Called by main.rs once logging is set up; runs one command over stdio.
pub fn run(command_line: &CommandLine) -> Result<(), AppError> {
    let config = command_line.load_config()?;

    let stdin  = io::stdin();
    let stdout = io::stdout();

    command_line.execute (&config, &mut stdin.lock(), &mut stdout.lock())
}
