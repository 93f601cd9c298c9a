//! Saved-roster payloads: tolerant load, plain JSON save.
//!
//! Clients keep the roster in browser storage and re-import it on session
//! start, so loading has to accept old payload shapes. Saving always writes
//! the current wire format.

use crate::models::{Gender, Player, PlayerId, TeamSide};
use serde::Deserialize;
use serde_json::Value;

/// A stored player record. Payloads written before queue tracking existed
/// have no `sequenceNumber` or `createdAt`, so both are optional here and
/// defaulted on load.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPlayer {
    id: PlayerId,
    name: String,
    gender: Gender,
    #[serde(default)]
    team: TeamSide,
    #[serde(default)]
    sequence_number: Option<u64>,
    #[serde(default)]
    created_at: i64,
}

impl StoredPlayer {
    /// Legacy records without a sequence number take their 1-based position
    /// in the saved list, preserving the order they were stored in.
    fn into_player(self, position: usize) -> Player {
        Player {
            id: self.id,
            name: self.name,
            gender: self.gender,
            team: self.team,
            sequence_number: self.sequence_number.unwrap_or(position as u64 + 1),
            created_at: self.created_at,
        }
    }
}

/// Restore players from an already-parsed JSON value. A payload that is not
/// a well-formed list of records is treated as an empty roster (logged,
/// never an error).
pub fn players_from_value(value: Value) -> Vec<Player> {
    let stored: Vec<StoredPlayer> = match serde_json::from_value(value) {
        Ok(stored) => stored,
        Err(e) => {
            log::warn!("Discarding malformed saved roster: {}", e);
            return Vec::new();
        }
    };
    stored
        .into_iter()
        .enumerate()
        .map(|(i, s)| s.into_player(i))
        .collect()
}

/// Restore players from a raw saved payload string.
pub fn parse_players(raw: &str) -> Vec<Player> {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => players_from_value(value),
        Err(e) => {
            log::warn!("Discarding unparseable saved roster: {}", e);
            Vec::new()
        }
    }
}

/// Serialize players in the wire format (a JSON list of records).
pub fn serialize_players(players: &[Player]) -> String {
    serde_json::to_string(players).unwrap_or_else(|e| {
        log::error!("Failed to serialize roster: {}", e);
        "[]".to_string()
    })
}
