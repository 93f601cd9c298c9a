//! Roster and RosterError.

use crate::models::player::{Gender, Player, PlayerId, TeamSide};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Players that fit on one court side at a time.
pub const TEAM_SIZE: usize = 6;

/// Largest game pool a full balance will seat (two teams of six).
pub const GAME_CAPACITY: usize = 12;

/// Unique identifier for a roster.
pub type RosterId = Uuid;

/// Errors that can occur during roster operations. The taxonomy is narrow on
/// purpose: lookups of unknown players degrade to no-ops instead of failing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RosterError {
    /// A match result named the waiting line as the winner.
    InvalidWinningSide,
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::InvalidWinningSide => write!(f, "Winning side must be A or B"),
        }
    }
}

/// Full roster state: every player and their current side or queue spot.
///
/// The three sides partition the players; each player is on exactly one of
/// A, B, or the waiting line, and sequence numbers are unique roster-wide.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub id: RosterId,
    pub players: Vec<Player>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            players: Vec::new(),
        }
    }

    /// Create a roster from already-built players (e.g. a restored save).
    pub fn with_players(players: Vec<Player>) -> Self {
        Self {
            players,
            ..Self::new()
        }
    }

    /// Highest sequence number currently in use (0 when empty). New sequence
    /// numbers are always minted as `max_sequence() + 1`.
    pub fn max_sequence(&self) -> u64 {
        self.players
            .iter()
            .map(|p| p.sequence_number)
            .max()
            .unwrap_or(0)
    }

    /// Players on one side, sorted by ascending sequence number. Sorting is
    /// display order only; team membership is the observable state.
    pub fn side(&self, side: TeamSide) -> Vec<&Player> {
        let mut on_side: Vec<&Player> = self.players.iter().filter(|p| p.team == side).collect();
        on_side.sort_by_key(|p| p.sequence_number);
        on_side
    }

    /// How many players are currently on the given side.
    pub fn count(&self, side: TeamSide) -> usize {
        self.players.iter().filter(|p| p.team == side).count()
    }

    /// Look up a player by id.
    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Rename a player and/or change their gender in place. A pure field
    /// update: no rotation side effects, unknown ids are ignored.
    pub fn update_player(&mut self, id: PlayerId, name: &str, gender: Gender) {
        if let Some(p) = self.players.iter_mut().find(|p| p.id == id) {
            p.name = name.trim().to_uppercase();
            p.gender = gender;
        }
    }

    /// Drop every player (operator reset).
    pub fn clear(&mut self) {
        self.players.clear();
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
