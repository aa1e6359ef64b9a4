use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Deserialization error: {0}")]
    Deserialize(#[source] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Expected a JSON array of teams at the top level, found {found}")]
    NotAnArray { found: &'static str },
}

impl RosterError {
    /// Hard failures raised while turning raw bytes into JSON.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            RosterError::Deserialize(_) | RosterError::NotAnArray { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
