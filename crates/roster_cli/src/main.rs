//! Roster CLI
//!
//! Reads a teams JSON document, decodes it and prints every team.

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Cli, CliConfig, OutputFormat};
use roster_core::{DocumentStats, Team};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_cli(cli, config::env_input_path());

    init_tracing(config.verbose);
    run(&config)
}

fn run(config: &CliConfig) -> Result<()> {
    tracing::debug!("Reading teams from {}", config.input.display());

    let teams = roster_core::load_document(&config.input)
        .with_context(|| format!("Failed to decode teams from {}", config.input.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, teams, config)?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}

fn write_report<W: Write>(out: &mut W, teams: Vec<Option<Team>>, config: &CliConfig) -> Result<()> {
    let stats = DocumentStats::from_teams(&teams);
    if stats.rejected > 0 {
        tracing::warn!("{} of {} team entries were invalid", stats.rejected, stats.total);
    }

    let shown: Vec<Option<Team>> = if config.valid_only {
        teams.into_iter().filter(Option::is_some).collect()
    } else {
        teams
    };

    let body = match config.format {
        OutputFormat::Text => roster_core::render_text(&shown),
        OutputFormat::Json => {
            roster_core::render_json(&shown).context("Failed to serialize teams")?
        }
    };

    if !body.is_empty() {
        writeln!(out, "{}", body)?;
    }

    if config.stats {
        writeln!(out)?;
        writeln!(out, "{}", summary_line(&stats))?;
    }

    Ok(())
}

fn summary_line(stats: &DocumentStats) -> String {
    format!(
        "{} entries: {} valid, {} invalid ({} players, {} coaches)",
        stats.total, stats.decoded, stats.rejected, stats.players, stats.coaches
    )
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{Coach, Player};
    use std::path::PathBuf;

    fn config(format: OutputFormat, valid_only: bool, stats: bool) -> CliConfig {
        CliConfig {
            input: PathBuf::from("teams.json"),
            format,
            valid_only,
            stats,
            verbose: false,
        }
    }

    fn teams() -> Vec<Option<Team>> {
        vec![
            None,
            Some(Team::new(
                1,
                "Wolves",
                "Springfield",
                vec![Player::new("A", "G", 7)],
                vec![Coach::new("B", "HC")],
            )),
        ]
    }

    fn report(teams: Vec<Option<Team>>, config: &CliConfig) -> String {
        let mut out = Vec::new();
        write_report(&mut out, teams, config).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_report_keeps_invalid_entries() {
        let text = report(teams(), &config(OutputFormat::Text, false, false));
        assert!(text.starts_with("<invalid team>\n\nTeam #1: Wolves (Springfield)"));
        assert!(text.ends_with("    B (HC)\n"));
    }

    #[test]
    fn test_valid_only_with_stats() {
        let text = report(teams(), &config(OutputFormat::Text, true, true));

        assert!(!text.contains("<invalid team>"));
        assert!(text.ends_with("\n\n2 entries: 1 valid, 1 invalid (1 players, 1 coaches)\n"));
    }

    #[test]
    fn test_json_report() {
        let text = report(teams(), &config(OutputFormat::Json, false, false));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert!(value[0].is_null());
        assert_eq!(value[1]["City"], "Springfield");
        assert_eq!(value[1]["players"][0]["number"], 7);
    }

    #[test]
    fn test_empty_document_with_stats() {
        let text = report(Vec::new(), &config(OutputFormat::Text, false, true));
        assert_eq!(text, "\n0 entries: 0 valid, 0 invalid (0 players, 0 coaches)\n");
    }

    #[test]
    fn test_run_reports_missing_file() {
        let mut missing = config(OutputFormat::Text, false, false);
        missing.input = PathBuf::from("/no/such/dir/teams.json");

        let err = run(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to decode teams from"));
    }

    #[test]
    fn test_run_reports_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ this is not json").unwrap();

        let mut malformed = config(OutputFormat::Text, false, false);
        malformed.input = file.path().to_path_buf();

        let err = run(&malformed).unwrap_err();
        let cause = err.downcast_ref::<roster_core::RosterError>();
        assert!(cause.is_some_and(|e| e.is_malformed_input()), "unexpected error: {err:#}");
    }
}
