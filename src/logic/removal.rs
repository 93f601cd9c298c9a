//! Removal and substitute refill.

use crate::models::{PlayerId, Roster, TeamSide};

/// Remove a player from the roster. If they were on court, the
/// longest-waiting substitute (lowest sequence number) is promoted into the
/// vacated side, keeping their sequence number; with nobody waiting the team
/// simply plays short-handed. Unknown ids return the roster unchanged.
pub fn remove_and_refill(roster: &Roster, id: PlayerId) -> Roster {
    let removed_team = match roster.get_player(id) {
        Some(p) => p.team,
        None => return roster.clone(),
    };

    let mut next = roster.clone();
    next.players.retain(|p| p.id != id);

    // Leaving the queue frees no court spot.
    if removed_team == TeamSide::Waiting {
        return next;
    }

    let substitute = next
        .players
        .iter()
        .filter(|p| p.team == TeamSide::Waiting)
        .min_by_key(|p| p.sequence_number)
        .map(|p| p.id);
    if let Some(substitute) = substitute {
        if let Some(p) = next.players.iter_mut().find(|p| p.id == substitute) {
            p.team = removed_team;
        }
    }
    next
}
