//! Stampgen - Command-line tool for rendering stamp image batches from JSON5 job files

use std::process::ExitCode;

use stampgen::cli;

fn main() -> ExitCode {
    cli::run()
}
