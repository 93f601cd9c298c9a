//! Roster business logic: admission, balancing, match rotation, removal.

mod admission;
mod balance;
mod removal;
mod rotation;

pub use admission::{admit_player, next_team_for_new_player};
pub use balance::balance_teams;
pub use removal::remove_and_refill;
pub use rotation::resolve_match;
