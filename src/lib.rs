//! Volleyball roster rotation web app: library with models and business logic.

pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{
    admit_player, balance_teams, next_team_for_new_player, remove_and_refill, resolve_match,
};
pub use models::{
    Gender, Player, PlayerId, Roster, RosterError, RosterId, TeamSide, GAME_CAPACITY, TEAM_SIZE,
};
