//! Admission: where a newly joining player lands.

use crate::models::{Gender, Player, Roster, TeamSide, TEAM_SIZE};

/// Which side the next player to join will be placed on.
///
/// Strict fill order: A until it holds six, then B until it holds six, then
/// the waiting line. Gender and arrival order play no part here.
pub fn next_team_for_new_player(roster: &Roster) -> TeamSide {
    if roster.count(TeamSide::A) < TEAM_SIZE {
        return TeamSide::A;
    }
    if roster.count(TeamSide::B) < TEAM_SIZE {
        return TeamSide::B;
    }
    TeamSide::Waiting
}

/// Admit a new player: mint the next sequence number (`max + 1`), place them
/// per the fill order, and return the grown roster.
pub fn admit_player(roster: &Roster, name: impl Into<String>, gender: Gender) -> Roster {
    let team = next_team_for_new_player(roster);
    let sequence_number = roster.max_sequence() + 1;
    let mut next = roster.clone();
    next.players.push(Player::new(name, gender, team, sequence_number));
    next
}
