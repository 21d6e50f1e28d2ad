//! End-to-end scenarios across the store and the layout engine.

use proptest::prelude::*;

use crate::game::{Action, GameStore};
use crate::layout::{compute_layout, LayoutConfig};
use crate::types::{Orientation, TeamId, Viewport};

fn team_strategy() -> impl Strategy<Value = TeamId> {
    prop_oneof![Just(TeamId::Team1), Just(TeamId::Team2)]
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        team_strategy().prop_map(Action::IncrementScore),
        team_strategy().prop_map(Action::DecrementScore),
        Just(Action::ResetScores),
        team_strategy().prop_map(Action::IncrementTally),
        team_strategy().prop_map(Action::DecrementTally),
        proptest::option::of(team_strategy()).prop_map(Action::SetEditFocus),
        (team_strategy(), ".{0,40}").prop_map(|(team, name)| Action::CommitName { team, name }),
    ]
}

#[test]
fn test_score_then_tally_then_reset() {
    let mut store = GameStore::default();

    for _ in 0..3 {
        store.dispatch(Action::IncrementScore(TeamId::Team1));
    }
    store.dispatch(Action::DecrementScore(TeamId::Team1));
    assert_eq!(store.score(TeamId::Team1), 2);

    store.dispatch(Action::IncrementTally(TeamId::Team1));
    store.dispatch(Action::ResetScores);

    assert_eq!(store.score(TeamId::Team1), 0);
    assert_eq!(store.wins(TeamId::Team1), 1);
    assert_eq!(store.total_games(), 2);
}

#[test]
fn test_rename_during_play_keeps_counters() {
    let mut store = GameStore::default();
    store.dispatch(Action::IncrementScore(TeamId::Team2));
    store.dispatch(Action::IncrementTally(TeamId::Team2));
    store.dispatch(Action::SetEditFocus(Some(TeamId::Team2)));
    store.dispatch(Action::CommitName {
        team: TeamId::Team2,
        name: "  Hawks ".to_string(),
    });

    assert_eq!(store.name(TeamId::Team2), "Hawks");
    assert_eq!(store.score(TeamId::Team2), 1);
    assert_eq!(store.wins(TeamId::Team2), 1);
    assert_eq!(store.edit_focus(), None);
}

#[test]
fn test_rotation_recomputes_from_latest_sample() {
    let config = LayoutConfig::default();
    let portrait = compute_layout(Viewport::new(375.0, 667.0), &config);
    let landscape = compute_layout(Viewport::new(667.0, 375.0), &config);
    let back = compute_layout(Viewport::new(375.0, 667.0), &config);

    assert_eq!(portrait.orientation, Orientation::Portrait);
    assert_eq!(landscape.orientation, Orientation::Landscape);
    assert_eq!(portrait, back);
}

proptest! {
    #[test]
    fn prop_decrement_from_zero_stays_zero(team in team_strategy(), n in 0usize..50) {
        let mut store = GameStore::default();
        for _ in 0..n {
            store.dispatch(Action::DecrementScore(team));
        }
        prop_assert_eq!(store.score(team), 0);
    }

    #[test]
    fn prop_reset_scores_keeps_tallies(actions in proptest::collection::vec(action_strategy(), 0..60)) {
        let mut store = GameStore::default();
        for action in actions {
            store.dispatch(action);
        }
        let wins_before = store.state().game_wins;
        let focus_before = store.edit_focus();

        store.dispatch(Action::ResetScores);

        prop_assert_eq!(store.score(TeamId::Team1), 0);
        prop_assert_eq!(store.score(TeamId::Team2), 0);
        prop_assert_eq!(store.state().game_wins, wins_before);
        prop_assert_eq!(store.edit_focus(), focus_before);
    }

    #[test]
    fn prop_names_never_blank_or_too_long(actions in proptest::collection::vec(action_strategy(), 0..60)) {
        let mut store = GameStore::default();
        for action in actions {
            store.dispatch(action);
        }
        for team in TeamId::ALL {
            let name = store.name(team);
            prop_assert!(!name.trim().is_empty());
            prop_assert!(name.encode_utf16().count() <= 20);
        }
    }
}
