//! Command line arguments.

use std::path::{Path, PathBuf};

use cast_edit::config::{ConfigOverrides, EditConfig, EnvConfig, LogFormat};
use cast_edit::error::ConfigError;
use cast_edit::logging::verbosity_level;
use cast_edit::range::{Range, Stop, parse_secs};
use clap::{ArgAction, Parser};

/// Rearrange and remove sections from asciicast recordings.
///
/// Each `-s START STOP` pair selects a section of the source recording.
/// Sections are written in the order given, so listing them out of order
/// rearranges the recording. A STOP of `0` or `end` runs to the end of the
/// recording and is only allowed on the latest section.
#[derive(Debug, Parser)]
#[command(name = "cast-edit", version, about, long_about)]
#[command(after_help = "Example: keep everything except 2.3s..7s\n  \
                        cast-edit -r rocket.cast -w no_rocket.cast -s 0 2.3 -s 7 0")]
pub struct Cli {
    /// Asciicast to read
    #[arg(short = 'r', long = "read", value_name = "ASCIICAST")]
    pub source: PathBuf,

    /// Asciicast to write
    #[arg(
        short = 'w',
        long = "write",
        value_name = "ASCIICAST",
        required_unless_present = "dry_run"
    )]
    pub destination: Option<PathBuf>,

    /// Section of the recording to keep
    #[arg(
        short = 's',
        long = "section",
        num_args = 2,
        value_names = ["START", "STOP"],
        action = ArgAction::Append,
        allow_negative_numbers = true,
        required = true
    )]
    pub sections: Vec<String>,

    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE", env = "CAST_EDIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Decimal places kept on written timestamps
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(0..=9))]
    pub precision: Option<u32>,

    /// Log format: pretty, compact or json
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Check and summarize the edit without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Ranges in the order they were given.
    pub fn ranges(&self) -> Result<Vec<Range>, String> {
        self.sections
            .chunks(2)
            .map(|pair| match pair {
                [start, stop] => parse_range(start, stop),
                _ => Err("each section needs a START and a STOP".to_string()),
            })
            .collect()
    }

    /// Load configuration and apply flags on top of it.
    pub fn config(&self) -> Result<EditConfig, ConfigError> {
        self.config_with_env(&EnvConfig::default())
    }

    /// Load configuration reading environment settings from `env`.
    pub fn config_with_env(&self, env: &EnvConfig) -> Result<EditConfig, ConfigError> {
        let overrides = ConfigOverrides {
            log_level: None,
            log_format: self.log_format,
            precision: self.precision,
        };
        let mut config = EditConfig::load_with(self.config.as_deref(), env, &overrides)?;
        if self.verbose > 0 {
            config.logging.level = verbosity_level(&config.logging.level, self.verbose);
        }
        Ok(config)
    }

    /// Where output goes, unless this is a dry run.
    pub fn output_path(&self) -> Option<&Path> {
        if self.dry_run {
            None
        } else {
            self.destination.as_deref()
        }
    }
}

fn parse_range(start: &str, stop: &str) -> Result<Range, String> {
    let start = parse_secs(start)?;
    let stop: Stop = stop.parse()?;
    Range::new(start, stop).map_err(|e| e.to_string())
}
