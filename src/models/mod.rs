//! Data structures for the volleyball roster: players, sides, roster state.

mod player;
mod roster;

pub use player::{Gender, Player, PlayerId, TeamSide};
pub use roster::{Roster, RosterError, RosterId, GAME_CAPACITY, TEAM_SIZE};
