//! Whole-document decoding.
//!
//! The document is a JSON array of team objects. Malformed JSON is the one
//! hard failure; every team entry is then decoded on its own and may come
//! back as `None` without affecting its neighbours.

use crate::decode::FromJson;
use crate::error::{Result, RosterError};
use crate::json;
use crate::models::Team;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// One entry per element of the source array, in order.
pub type DecodedTeams = Vec<Option<Team>>;

/// Decode a raw JSON payload into teams.
pub fn decode_document(bytes: &[u8]) -> Result<DecodedTeams> {
    let value: Value = serde_json::from_slice(bytes).map_err(RosterError::Deserialize)?;
    decode_value(&value)
}

pub fn decode_document_str(text: &str) -> Result<DecodedTeams> {
    decode_document(text.as_bytes())
}

/// Decode an already-parsed document.
pub fn decode_value(value: &Value) -> Result<DecodedTeams> {
    let Value::Array(entries) = value else {
        return Err(RosterError::NotAnArray {
            found: json::kind_of(value),
        });
    };

    let teams = entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let team = Team::from_value(entry);
            if team.is_none() {
                log::debug!(
                    "Team entry #{} ({}) is missing a mandatory field",
                    idx,
                    json::kind_of(entry)
                );
            }
            team
        })
        .collect();

    Ok(teams)
}

/// Read `path` once and decode it.
pub fn load_document(path: &Path) -> Result<DecodedTeams> {
    let bytes = fs::read(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let teams = decode_document(&bytes)?;

    let stats = DocumentStats::from_teams(&teams);
    log::info!(
        "Decoded {}: {} of {} teams valid ({} players, {} coaches)",
        path.display(),
        stats.decoded,
        stats.total,
        stats.players,
        stats.coaches
    );

    Ok(teams)
}

/// Decode statistics for a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    /// Entries in the source array.
    pub total: usize,
    pub decoded: usize,
    pub rejected: usize,
    /// Players kept across all decoded teams.
    pub players: usize,
    pub coaches: usize,
}

impl DocumentStats {
    pub fn from_teams(teams: &[Option<Team>]) -> Self {
        teams.iter().fold(Self::default(), |mut stats, entry| {
            stats.total += 1;
            match entry {
                Some(team) => {
                    stats.decoded += 1;
                    stats.players += team.players().len();
                    stats.coaches += team.coaches().len();
                }
                None => stats.rejected += 1,
            }
            stats
        })
    }
}
