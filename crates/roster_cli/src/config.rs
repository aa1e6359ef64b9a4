use clap::{Parser, ValueEnum};
use std::env;
use std::path::PathBuf;

pub(crate) const TEAMS_PATH_ENV: &str = "ROSTER_TEAMS_PATH";
pub(crate) const DEFAULT_TEAMS_PATH: &str = "teams.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable block per team
    Text,
    /// Pretty JSON array, invalid teams as null
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(about = "Decode a teams JSON document and print the rosters", long_about = None)]
pub struct Cli {
    /// Input JSON file path (falls back to $ROSTER_TEAMS_PATH, then teams.json)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Leave out entries that failed to decode
    #[arg(long, default_value = "false")]
    pub valid_only: bool,

    /// Print a decode summary after the teams
    #[arg(long, default_value = "false")]
    pub stats: bool,

    /// Log dropped entries (debug level) unless RUST_LOG says otherwise
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub valid_only: bool,
    pub stats: bool,
    pub verbose: bool,
}

impl CliConfig {
    /// `--input` wins over the environment, which wins over the default.
    pub fn from_cli(cli: Cli, env_input: Option<PathBuf>) -> Self {
        let input = cli
            .input
            .or(env_input)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEAMS_PATH));

        Self {
            input,
            format: cli.format,
            valid_only: cli.valid_only,
            stats: cli.stats,
            verbose: cli.verbose,
        }
    }
}

/// Input path from `$ROSTER_TEAMS_PATH`; blank values are ignored.
pub fn env_input_path() -> Option<PathBuf> {
    let Ok(path) = env::var(TEAMS_PATH_ENV) else {
        return None;
    };
    non_blank_path(&path)
}

fn non_blank_path(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}
