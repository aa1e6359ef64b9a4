use crate::decode::FromJson;
use crate::json::{self, JsonObject};
use serde::Serialize;
use std::fmt;

/// A rostered player. Name, position and shirt number are all mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    name: String,
    position: String,
    number: i64,
}

impl Player {
    pub fn new(name: impl Into<String>, position: impl Into<String>, number: i64) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            number,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn number(&self) -> i64 {
        self.number
    }
}

impl FromJson for Player {
    fn from_json(json: &JsonObject) -> Option<Self> {
        let name = json::string(json, "name")?;
        let position = json::string(json, "position")?;
        let number = json::integer(json, "number")?;

        Some(Player::new(name, position, number))
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({})", self.number, self.name, self.position)
    }
}
