//! Match resolution: winners stay on court, losers rotate out by seniority.

use crate::models::{Player, Roster, RosterError, TeamSide, TEAM_SIZE};

/// Apply one finished game and return the rotated roster.
///
/// Winners keep their side and sequence numbers. The losing side and the
/// waiting line rotate:
///
/// * **Full swap** (six or more waiting): every loser is re-queued at the
///   end of the waiting line with fresh sequence numbers, and the six
///   longest-waiting substitutes take the losing side, keeping theirs.
/// * **Partial swap** (fewer than six waiting): all waiting players enter
///   the losing side; the most-senior losers fill the remaining spots but
///   are re-sequenced as the team's newest members, so they rotate out
///   first in a later game; the junior losers are re-queued into waiting
///   after them.
///
/// Re-sequencing is a single monotone pass from the roster's current
/// maximum, so relative order among re-sequenced players is preserved.
/// Deterministic: shuffling is the balancer's job, not this one's.
pub fn resolve_match(roster: &Roster, winning_side: TeamSide) -> Result<Roster, RosterError> {
    let loser_side = match winning_side {
        TeamSide::A => TeamSide::B,
        TeamSide::B => TeamSide::A,
        TeamSide::Waiting => return Err(RosterError::InvalidWinningSide),
    };

    let mut max_seq = roster.max_sequence();

    let winners: Vec<Player> = roster
        .players
        .iter()
        .filter(|p| p.team == winning_side)
        .cloned()
        .collect();

    // Low sequence number = arrived first = most senior.
    let mut losers: Vec<Player> = roster
        .players
        .iter()
        .filter(|p| p.team == loser_side)
        .cloned()
        .collect();
    losers.sort_by_key(|p| p.sequence_number);

    let mut waiting: Vec<Player> = roster
        .players
        .iter()
        .filter(|p| p.team == TeamSide::Waiting)
        .cloned()
        .collect();
    waiting.sort_by_key(|p| p.sequence_number);

    let mut next_loser_side: Vec<Player> = Vec::new();
    let mut next_waiting: Vec<Player> = Vec::new();

    if waiting.len() >= TEAM_SIZE {
        // Full swap: the whole losing team queues up at the end of the line.
        let mut entering = waiting;
        let remaining = entering.split_off(TEAM_SIZE);
        for p in &mut entering {
            p.team = loser_side;
        }
        next_loser_side = entering;

        next_waiting = remaining;
        for mut p in losers {
            max_seq += 1;
            p.team = TeamSide::Waiting;
            p.sequence_number = max_seq;
            next_waiting.push(p);
        }
    } else {
        // Partial swap: every substitute enters; senior losers stay to fill
        // the rest of the team.
        let spots_to_keep = (TEAM_SIZE - waiting.len()).min(losers.len());
        let leaving = losers.split_off(spots_to_keep);
        let staying = losers;

        for mut p in staying {
            max_seq += 1;
            p.sequence_number = max_seq;
            next_loser_side.push(p);
        }
        for mut p in leaving {
            max_seq += 1;
            p.team = TeamSide::Waiting;
            p.sequence_number = max_seq;
            next_waiting.push(p);
        }
        for mut p in waiting {
            p.team = loser_side;
            next_loser_side.push(p);
        }
    }

    let mut players = winners;
    players.append(&mut next_loser_side);
    players.append(&mut next_waiting);
    Ok(Roster {
        id: roster.id,
        players,
    })
}
