//! Property tests for the pairing engine.
//!
//! Properties tested:
//! - Every input player is scheduled exactly once, in `len / 2` pairings
//! - An odd field gives exactly one bye, to the lowest ranked player
//! - Without history, pairs are standings neighbours
//! - Same input, same output, with or without history
//! - Duplicate ids are rejected

use proptest::prelude::*;
use swiss_tournament::prelude::*;

fn ranked_standings() -> impl Strategy<Value = Vec<StandingEntry>> {
    proptest::collection::vec(0u32..10, 0..40).prop_map(|mut wins| {
        wins.sort_unstable_by(|a, b| b.cmp(a));
        wins.into_iter()
            .enumerate()
            .map(|(i, w)| StandingEntry::new(i as u32 + 1, format!("P{i}"), w, 10))
            .collect()
    })
}

fn prior_meetings() -> impl Strategy<Value = MatchHistory> {
    proptest::collection::vec((1u32..40, 1u32..40), 0..30).prop_map(|met| {
        let matches: Vec<_> = met
            .into_iter()
            .filter(|(a, b)| a != b)
            .map(|(a, b)| MatchRecord::new(a, b, a))
            .collect();
        MatchHistory::from_matches(&matches)
    })
}

fn sorted_ids(ids: impl Iterator<Item = PlayerId>) -> Vec<PlayerId> {
    let mut ids: Vec<_> = ids.collect();
    ids.sort();
    ids
}

proptest! {
    /// Property: every player appears exactly once
    #[test]
    fn prop_every_player_scheduled_once(
        standings in ranked_standings(),
        history in prior_meetings(),
    ) {
        for round in [
            compute_pairings(&standings, None).unwrap(),
            compute_pairings(&standings, Some(&history)).unwrap(),
        ] {
            prop_assert_eq!(
                sorted_ids(round.players()),
                sorted_ids(standings.iter().map(|e| e.id))
            );
            prop_assert_eq!(round.pairings.len(), standings.len() / 2);
            prop_assert_eq!(round.len(), standings.len());
        }
    }

    /// Property: odd fields give the bye to the last ranked player
    #[test]
    fn prop_bye_goes_to_lowest_ranked(
        standings in ranked_standings(),
        history in prior_meetings(),
    ) {
        let round = compute_pairings(&standings, Some(&history)).unwrap();
        if standings.len() % 2 == 1 {
            prop_assert_eq!(round.bye.map(|b| b.id), standings.last().map(|e| e.id));
        } else {
            prop_assert!(round.bye.is_none());
        }
    }

    /// Property: without history, pairs are ranks (0, 1), (2, 3), ...
    #[test]
    fn prop_pairs_are_neighbours(standings in ranked_standings()) {
        let round = compute_pairings(&standings, None).unwrap();
        for (k, pair) in round.pairings.iter().enumerate() {
            prop_assert_eq!(pair.id_a, standings[2 * k].id);
            prop_assert_eq!(pair.id_b, standings[2 * k + 1].id);
            prop_assert!(standings[2 * k].wins >= standings[2 * k + 1].wins);
        }
    }

    /// Property: a rematch only survives when no local swap could fix it
    #[test]
    fn prop_history_never_adds_rematches(
        standings in ranked_standings(),
        history in prior_meetings(),
    ) {
        let strict = compute_pairings(&standings, None).unwrap();
        let avoiding = compute_pairings(&standings, Some(&history)).unwrap();
        let rematches = |round: &RoundPairings| {
            round
                .pairings
                .iter()
                .filter(|p| history.has_played(p.id_a, p.id_b))
                .count()
        };
        prop_assert!(rematches(&avoiding) <= rematches(&strict));
    }

    /// Property: pure function
    #[test]
    fn prop_same_input_same_output(
        standings in ranked_standings(),
        history in prior_meetings(),
    ) {
        prop_assert_eq!(
            compute_pairings(&standings, Some(&history)).unwrap(),
            compute_pairings(&standings, Some(&history)).unwrap()
        );
        prop_assert_eq!(
            compute_pairings(&standings, None).unwrap(),
            compute_pairings(&standings, None).unwrap()
        );
    }

    /// Property: any duplicated id is rejected
    #[test]
    fn prop_duplicate_rejected(
        standings in ranked_standings().prop_filter("need a player", |s| !s.is_empty()),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut standings = standings;
        let dup = standings[pick.index(standings.len())].clone();
        standings.push(dup);
        let result = compute_pairings(&standings, None);
        prop_assert!(
            matches!(result, Err(TournamentError::InvalidStandings { .. })),
            "expected InvalidStandings, got {:?}",
            result
        );
    }
}
