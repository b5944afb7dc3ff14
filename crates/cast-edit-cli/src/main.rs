//! cast-edit command line tool.
//!
//! Exit status is 0 on success, 2 for bad arguments or an invalid range
//! selection, and 1 for anything else.

mod cli;

use std::process::ExitCode;

use anyhow::Context;
use cast_edit::asciicast::WriteOptions;
use cast_edit::crop::CropSummary;
use cast_edit::edit::EditRequest;
use cast_edit::error::EditError;
use cast_edit::logging::init_logging;
use cast_edit::range::Range;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::debug;

use crate::cli::Cli;

/// Exit status for an invalid range selection.
const EXIT_INVALID_RANGES: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let ranges = match cli.ranges() {
        Ok(ranges) => ranges,
        Err(message) => Cli::command()
            .error(ErrorKind::ValueValidation, message)
            .exit(),
    };

    match run(&cli, ranges) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            exit_code(&err)
        }
    }
}

fn run(cli: &Cli, ranges: Vec<Range>) -> anyhow::Result<()> {
    let config = cli.config().context("loading configuration")?;
    init_logging(&config.logging)?;
    debug!(?config, "configuration loaded");

    let request = EditRequest {
        source: cli.source.clone(),
        destination: cli.output_path().map(std::path::Path::to_path_buf),
        ranges,
        write: WriteOptions::default().precision(config.output.precision),
    };

    let summary = request.run()?;
    if cli.dry_run {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &CropSummary) {
    for (index, section) in summary.sections.iter().enumerate() {
        println!(
            "section {}: {} -> output {:.6}..{:.6} ({} events)",
            index + 1,
            section.range,
            section.offset,
            section.offset + section.duration(),
            section.events
        );
    }
    println!(
        "total: {} events, {:.6}s",
        summary.event_count(),
        summary.duration()
    );
}

fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<EditError>() {
        Some(edit_err) if edit_err.is_validation() => ExitCode::from(EXIT_INVALID_RANGES),
        _ => ExitCode::FAILURE,
    }
}
