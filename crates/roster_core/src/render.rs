use crate::error::{Result, RosterError};
use crate::models::Team;

/// Placeholder printed for an entry that failed to decode.
pub const INVALID_TEAM: &str = "<invalid team>";

/// Human-readable listing, one block per entry separated by blank lines.
pub fn render_text(teams: &[Option<Team>]) -> String {
    teams
        .iter()
        .map(|entry| match entry {
            Some(team) => team.to_string(),
            None => INVALID_TEAM.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Pretty JSON array; invalid entries become `null`.
pub fn render_json(teams: &[Option<Team>]) -> Result<String> {
    serde_json::to_string_pretty(teams).map_err(RosterError::Serialize)
}
