use super::{Coach, Player};
use crate::decode::{decode_all_with, FromJson};
use crate::json::{self, JsonObject};
use serde::Serialize;
use std::fmt;

/// Key holding the team's city. Capitalized in the source documents, unlike
/// every other key.
pub const CITY_KEY: &str = "City";

/// A team with its roster.
///
/// `players` and `coaches` only ever hold entries that decoded completely;
/// they may be shorter than the lists in the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    id: i64,
    #[serde(rename = "teamName")]
    team_name: String,
    #[serde(rename = "City")]
    city: String,
    players: Vec<Player>,
    coaches: Vec<Coach>,
}

impl Team {
    pub fn new(
        id: i64,
        team_name: impl Into<String>,
        city: impl Into<String>,
        players: Vec<Player>,
        coaches: Vec<Coach>,
    ) -> Self {
        Self {
            id,
            team_name: team_name.into(),
            city: city.into(),
            players,
            coaches,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn coaches(&self) -> &[Coach] {
        &self.coaches
    }
}

impl FromJson for Team {
    fn from_json(json: &JsonObject) -> Option<Self> {
        let id = json::integer(json, "id")?;
        let team_name = json::string(json, "teamName")?;
        let city = json::string(json, CITY_KEY)?;

        let players = sanitized::<Player>(json, "players", id);
        let coaches = sanitized::<Coach>(json, "coaches", id);

        Some(Team::new(id, team_name, city, players, coaches))
    }
}

/// Decode the nested list under `key`, dropping entries that fail.
/// A missing or malformed list is an empty one.
fn sanitized<T: FromJson>(json: &JsonObject, key: &str, team_id: i64) -> Vec<T> {
    let Some(items) = json::object_array(json, key) else {
        if let Some(value) = json.get(key) {
            log::debug!(
                "Team {}: '{}' is a {}, not a list of objects; treating as empty",
                team_id,
                key,
                json::kind_of(value)
            );
        }
        return Vec::new();
    };

    decode_all_with(&items, |idx| {
        log::debug!("Team {}: dropping invalid {} entry #{}", team_id, key, idx);
    })
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Team #{}: {} ({})", self.id, self.team_name, self.city)?;

        if self.players.is_empty() {
            writeln!(f, "  Players: none")?;
        } else {
            writeln!(f, "  Players:")?;
            for player in &self.players {
                writeln!(f, "    {}", player)?;
            }
        }

        if self.coaches.is_empty() {
            write!(f, "  Coaches: none")
        } else {
            write!(f, "  Coaches:")?;
            for coach in &self.coaches {
                write!(f, "\n    {}", coach)?;
            }
            Ok(())
        }
    }
}
