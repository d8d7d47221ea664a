//! Command-line interface implementation

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rayon::prelude::*;

use crate::job::{self, FieldIssues, JobError};
use crate::output::{generate_output_path, save_png, scale_image};
use crate::renderer::render_stamp;

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// Stampgen - render batches of stamp images from a JSON5 job file
#[derive(Parser)]
#[command(name = "stamp")]
#[command(about = "Stampgen - render batches of stamp images from a JSON5 job file")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render every stamp in a job to PNG
    Render {
        /// Input job file (JSON5)
        input: PathBuf,

        /// Output file or directory.
        /// If omitted: {job}_{index}.png next to the job file.
        /// If file (single stamp): output.png
        /// If file (batch): output_{index}.png
        /// If directory (ends with /): dir/{index}.png
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render only the stamp at this batch index
        #[arg(long)]
        index: Option<u32>,

        /// Scale output by integer factor (1-16, default: 1)
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=16))]
        scale: u8,
    },
    /// Validate a job file and report field errors
    Check {
        /// Input job file (JSON5)
        input: PathBuf,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            index,
            scale,
        } => run_render(&input, output.as_deref(), index, scale),
        Commands::Check { input, json } => run_check(&input, json),
    }
}

/// Execute the render command
fn run_render(input: &Path, output: Option<&Path>, index: Option<u32>, scale: u8) -> ExitCode {
    let job = match load_job(input) {
        Ok(job) => job,
        Err(code) => return code,
    };

    let inputs = match job::resolve(&job) {
        Ok(inputs) => inputs,
        Err(JobError::Invalid(issues)) => {
            print_issues(&issues);
            return ExitCode::from(EXIT_ERROR);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let indices: Vec<u32> = match index {
        Some(i) => vec![i],
        None => (0..inputs.length).collect(),
    };
    let is_single = indices.len() == 1;

    // Each stamp renders to its own surface, so the batch can fan out
    let frames: Vec<(u32, image::RgbaImage)> = indices
        .into_par_iter()
        .map(|i| (i, render_stamp(&inputs, i)))
        .collect();

    for (i, frame) in frames {
        let frame = scale_image(frame, scale);
        let path = generate_output_path(input, i, output, is_single);
        if let Err(e) = save_png(&frame, &path) {
            eprintln!("Error: Failed to save '{}': {}", path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
        println!("Saved: {}", path.display());
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the check command
fn run_check(input: &Path, json: bool) -> ExitCode {
    let job = match load_job(input) {
        Ok(job) => job,
        Err(code) => return code,
    };

    let issues = job::validate_job(&job);

    if json {
        let report = serde_json::json!({
            "valid": issues.is_empty(),
            "issues": &issues,
        });
        println!("{}", report);
    } else if issues.is_empty() {
        println!("OK: {}", input.display());
    } else {
        print_issues(&issues);
    }

    if issues.is_empty() {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

/// Read and parse a job file, mapping failures to exit codes.
fn load_job(input: &Path) -> Result<crate::models::StampJob, ExitCode> {
    let source = match fs::read_to_string(input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Cannot open input file '{}': {}", input.display(), e);
            return Err(ExitCode::from(EXIT_INVALID_ARGS));
        }
    };

    job::parse_job(&source).map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_ERROR)
    })
}

fn print_issues(issues: &[FieldIssues]) {
    for issue in issues {
        for error in &issue.errors {
            eprintln!("Error: {}: {}", issue.field, error.message);
        }
    }
}
