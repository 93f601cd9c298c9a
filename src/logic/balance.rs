//! Full re-balance: seat the earliest arrivals, split the pool by gender.

use crate::models::{Gender, Player, Roster, TeamSide, GAME_CAPACITY};
use rand::seq::SliceRandom;
use rand::Rng;

/// Re-seed every team assignment from scratch.
///
/// 1. Sort everyone by sequence number; arrival order decides who plays.
/// 2. The first twelve form the game pool; the rest go to the waiting line
///    with their sequence numbers untouched.
/// 3. Shuffle the pool's men and women separately, then alternate men
///    between A and B and drop each woman onto the currently smaller team
///    (ties go to A).
///
/// The shuffle only keeps the A/B split from being fixed by arrival order
/// among equally-eligible players; tests pass a seeded rng and assert
/// counts, not orderings.
pub fn balance_teams<R: Rng + ?Sized>(roster: &Roster, rng: &mut R) -> Roster {
    let mut sorted: Vec<Player> = roster.players.clone();
    sorted.sort_by_key(|p| p.sequence_number);

    let cutoff = sorted.len().min(GAME_CAPACITY);
    let waiting: Vec<Player> = sorted
        .split_off(cutoff)
        .into_iter()
        .map(|mut p| {
            p.team = TeamSide::Waiting;
            p
        })
        .collect();
    let pool = sorted;

    let mut men: Vec<Player> = pool
        .iter()
        .filter(|p| p.gender == Gender::Male)
        .cloned()
        .collect();
    let mut women: Vec<Player> = pool
        .iter()
        .filter(|p| p.gender == Gender::Female)
        .cloned()
        .collect();
    men.shuffle(rng);
    women.shuffle(rng);

    let mut team_a: Vec<Player> = Vec::new();
    let mut team_b: Vec<Player> = Vec::new();

    for (i, mut p) in men.into_iter().enumerate() {
        if i % 2 == 0 {
            p.team = TeamSide::A;
            team_a.push(p);
        } else {
            p.team = TeamSide::B;
            team_b.push(p);
        }
    }

    for mut p in women {
        if team_a.len() <= team_b.len() {
            p.team = TeamSide::A;
            team_a.push(p);
        } else {
            p.team = TeamSide::B;
            team_b.push(p);
        }
    }

    let mut players = team_a;
    players.append(&mut team_b);
    players.extend(waiting);
    Roster {
        id: roster.id,
        players,
    }
}
