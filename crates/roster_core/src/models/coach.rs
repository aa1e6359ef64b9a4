use crate::decode::FromJson;
use crate::json::{self, JsonObject};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coach {
    name: String,
    position: String,
}

impl Coach {
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &str {
        &self.position
    }
}

impl FromJson for Coach {
    fn from_json(json: &JsonObject) -> Option<Self> {
        let name = json::string(json, "name")?;
        let position = json::string(json, "position")?;

        Some(Coach::new(name, position))
    }
}

impl fmt::Display for Coach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.position)
    }
}
