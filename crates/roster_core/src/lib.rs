//! # roster_core - Defensive team roster decoding
//!
//! Turns a JSON document describing teams, their players and their coaches
//! into immutable typed records.
//!
//! ## Rules
//! - Accessors over dynamic JSON are total and answer `None` instead of failing
//! - A record decodes completely or not at all
//! - Invalid nested players/coaches are dropped; the team survives
//! - Only malformed JSON (or an unreadable file) is a hard error

pub mod decode;
pub mod document;
pub mod error;
pub mod json;
pub mod models;
pub mod render;

pub use decode::{decode_all, decode_all_with, FromJson};
pub use document::{
    decode_document, decode_document_str, decode_value, load_document, DecodedTeams,
    DocumentStats,
};
pub use error::{Result, RosterError};
pub use json::JsonObject;
pub use models::{Coach, Player, Team};
pub use render::{render_json, render_text};
