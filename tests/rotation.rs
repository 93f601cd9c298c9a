//! Integration tests for match resolution: full and partial rotation.

use std::collections::HashSet;
use volley_mix_web::{resolve_match, Gender, Player, PlayerId, Roster, RosterError, TeamSide};

fn player(name: &str, gender: Gender, team: TeamSide, seq: u64) -> Player {
    Player::new(name, gender, team, seq)
}

/// A has 6 winners (seq 1-6), B has 6 losers (seq 10-15), 8 waiting (seq 100-107).
fn full_court_roster() -> Roster {
    let mut players = Vec::new();
    for seq in 1..=6 {
        players.push(player(&format!("A{seq}"), Gender::Male, TeamSide::A, seq));
    }
    for seq in 10..=15 {
        players.push(player(&format!("B{seq}"), Gender::Male, TeamSide::B, seq));
    }
    for seq in 100..=107 {
        players.push(player(&format!("W{seq}"), Gender::Female, TeamSide::Waiting, seq));
    }
    Roster::with_players(players)
}

fn ids_by_seq(roster: &Roster, side: TeamSide) -> Vec<(PlayerId, u64)> {
    roster
        .side(side)
        .iter()
        .map(|p| (p.id, p.sequence_number))
        .collect()
}

fn assert_unique_sequences(roster: &Roster) {
    let seqs: HashSet<u64> = roster.players.iter().map(|p| p.sequence_number).collect();
    assert_eq!(seqs.len(), roster.players.len(), "duplicate sequence numbers");
}

#[test]
fn full_swap_replaces_entire_losing_team() {
    let roster = full_court_roster();
    let winners_before = ids_by_seq(&roster, TeamSide::A);
    let losers_before = ids_by_seq(&roster, TeamSide::B);
    let waiting_before = ids_by_seq(&roster, TeamSide::Waiting);

    let next = resolve_match(&roster, TeamSide::A).unwrap();

    // Winners untouched: same players, same sequence numbers.
    assert_eq!(ids_by_seq(&next, TeamSide::A), winners_before);

    // B is now the six longest-waiting players, sequence numbers preserved.
    assert_eq!(ids_by_seq(&next, TeamSide::B), waiting_before[..6].to_vec());

    // Waiting: the two left-over substitutes unchanged, then the six ex-B
    // players re-sequenced past the old max (107) in their original order.
    let waiting_after = ids_by_seq(&next, TeamSide::Waiting);
    assert_eq!(waiting_after[..2], waiting_before[6..]);
    let requeued: Vec<(PlayerId, u64)> = losers_before
        .iter()
        .enumerate()
        .map(|(i, (id, _))| (*id, 108 + i as u64))
        .collect();
    assert_eq!(waiting_after[2..].to_vec(), requeued);

    assert_eq!(next.players.len(), roster.players.len());
    assert_unique_sequences(&next);
}

#[test]
fn partial_swap_keeps_most_senior_losers() {
    let mut players = Vec::new();
    for seq in 1..=6 {
        players.push(player(&format!("A{seq}"), Gender::Male, TeamSide::A, seq));
    }
    for seq in 10..=15 {
        players.push(player(&format!("B{seq}"), Gender::Male, TeamSide::B, seq));
    }
    players.push(player("W20", Gender::Female, TeamSide::Waiting, 20));
    players.push(player("W21", Gender::Female, TeamSide::Waiting, 21));
    let roster = Roster::with_players(players);

    let losers_before = ids_by_seq(&roster, TeamSide::B);
    let waiting_before = ids_by_seq(&roster, TeamSide::Waiting);

    let next = resolve_match(&roster, TeamSide::A).unwrap();

    // Both substitutes entered B with their sequence numbers intact, and the
    // four most-senior losers (seq 10-13) stayed, re-sequenced after the old
    // max (21) in their original order.
    let b_after = ids_by_seq(&next, TeamSide::B);
    assert_eq!(b_after.len(), 6);
    assert_eq!(b_after[..2], waiting_before[..]);
    let stayers: Vec<(PlayerId, u64)> = losers_before[..4]
        .iter()
        .enumerate()
        .map(|(i, (id, _))| (*id, 22 + i as u64))
        .collect();
    assert_eq!(b_after[2..].to_vec(), stayers);

    // The two junior losers (seq 14, 15) were queued after the stayers.
    let waiting_after = ids_by_seq(&next, TeamSide::Waiting);
    let queued: Vec<(PlayerId, u64)> = losers_before[4..]
        .iter()
        .enumerate()
        .map(|(i, (id, _))| (*id, 26 + i as u64))
        .collect();
    assert_eq!(waiting_after, queued);

    assert_unique_sequences(&next);
}

#[test]
fn empty_waiting_line_requeues_losers_in_place() {
    let mut players = Vec::new();
    for seq in 1..=6 {
        players.push(player(&format!("A{seq}"), Gender::Male, TeamSide::A, seq));
    }
    for seq in 10..=15 {
        players.push(player(&format!("B{seq}"), Gender::Female, TeamSide::B, seq));
    }
    let roster = Roster::with_players(players);
    let losers_before = ids_by_seq(&roster, TeamSide::B);

    let next = resolve_match(&roster, TeamSide::A).unwrap();

    // Nobody to swap in: the whole losing team stays but is re-sequenced
    // past the old max, preserving relative order.
    let b_after = ids_by_seq(&next, TeamSide::B);
    let expected: Vec<(PlayerId, u64)> = losers_before
        .iter()
        .enumerate()
        .map(|(i, (id, _))| (*id, 16 + i as u64))
        .collect();
    assert_eq!(b_after, expected);
    assert_eq!(next.count(TeamSide::Waiting), 0);
    assert_unique_sequences(&next);
}

#[test]
fn short_handed_losing_team_survives_partial_swap() {
    let mut players = Vec::new();
    for seq in 1..=6 {
        players.push(player(&format!("A{seq}"), Gender::Male, TeamSide::A, seq));
    }
    for seq in 10..=12 {
        players.push(player(&format!("B{seq}"), Gender::Male, TeamSide::B, seq));
    }
    players.push(player("W20", Gender::Female, TeamSide::Waiting, 20));
    let roster = Roster::with_players(players);

    let next = resolve_match(&roster, TeamSide::A).unwrap();

    // 3 losers, 1 substitute: all three losers stay (re-sequenced), the
    // substitute joins, nobody is pushed to the queue.
    assert_eq!(next.count(TeamSide::B), 4);
    assert_eq!(next.count(TeamSide::Waiting), 0);
    assert_unique_sequences(&next);
}

#[test]
fn b_can_win_too() {
    let roster = full_court_roster();
    let b_before = ids_by_seq(&roster, TeamSide::B);

    let next = resolve_match(&roster, TeamSide::B).unwrap();

    // Mirror case: B untouched, A fully swapped out.
    assert_eq!(ids_by_seq(&next, TeamSide::B), b_before);
    assert_eq!(
        ids_by_seq(&next, TeamSide::A),
        ids_by_seq(&roster, TeamSide::Waiting)[..6].to_vec()
    );
    assert_unique_sequences(&next);
}

#[test]
fn waiting_cannot_win_a_match() {
    let roster = full_court_roster();
    assert_eq!(
        resolve_match(&roster, TeamSide::Waiting),
        Err(RosterError::InvalidWinningSide)
    );
}

#[test]
fn resolving_an_empty_roster_is_harmless() {
    let roster = Roster::new();
    let next = resolve_match(&roster, TeamSide::A).unwrap();
    assert!(next.players.is_empty());
}
