use uuid::Uuid;

use haxarena_backend::errors::LeagueError;
use haxarena_backend::league::identity::{resolve_identity, PlayerIdentity};
use haxarena_backend::league::stats::{aggregate_totals, top_by};
use haxarena_backend::models::player_stats::PlayerStatRow;

fn named_row(name: &str, team: &str, goals: i32) -> PlayerStatRow {
    PlayerStatRow {
        user_id: None,
        player_name: Some(name.to_string()),
        username: None,
        team_name: team.to_string(),
        team_logo_url: None,
        goals,
        assists: 0,
        dm: 0,
        clean_sheets: 0,
        saves: 0,
    }
}

#[test]
fn user_reference_wins_over_name() {
    let user_id = Uuid::new_v4();
    let identity = resolve_identity(Some(user_id), Some("ignored")).unwrap();
    assert_eq!(identity, PlayerIdentity::User(user_id));
}

#[test]
fn names_resolve_case_insensitively_after_trimming() {
    let a = resolve_identity(None, Some("  Aejen ")).unwrap();
    let b = resolve_identity(None, Some("aejen")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn missing_identity_is_a_validation_error() {
    match resolve_identity(None, Some("   ")) {
        Err(LeagueError::Validation(_)) => {}
        other => panic!("Expected a validation error, got {:?}", other),
    }
    assert!(resolve_identity(None, None).is_err());
}

// Scenario: two rows for "Aejen" with 2 and 1 goals on different fixtures
// sum to a single leaderboard entry with 3 goals.
#[test]
fn totals_sum_across_fixtures_per_identity() {
    let rows = vec![named_row("Aejen", "Red", 2), named_row("aejen", "Red", 1)];

    let totals = aggregate_totals(&rows).unwrap();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].goals, 3);
    assert_eq!(totals[0].player, "Aejen");
}

#[test]
fn distinct_players_stay_separate() {
    let user_id = Uuid::new_v4();
    let mut user_row = named_row("Aejen", "Red", 1);
    user_row.user_id = Some(user_id);
    user_row.username = Some("aejen_official".to_string());

    // Same display name but no user reference: a different identity
    let rows = vec![user_row, named_row("Aejen", "Blue", 4)];

    let totals = aggregate_totals(&rows).unwrap();
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].player, "aejen_official");
    assert_eq!(totals[0].goals, 1);
    assert_eq!(totals[1].goals, 4);
}

#[test]
fn latest_row_sets_the_current_team() {
    let rows = vec![named_row("Aejen", "Red", 1), named_row("Aejen", "Blue", 2)];

    let totals = aggregate_totals(&rows).unwrap();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].team_name, "Blue");
}

#[test]
fn zero_value_entries_are_excluded_from_views() {
    let rows = vec![named_row("Scorer", "Red", 3), named_row("Defender", "Red", 0)];

    let totals = aggregate_totals(&rows).unwrap();
    let goals_view = top_by(&totals, |entry| entry.goals, 10);
    assert_eq!(goals_view.len(), 1);
    assert_eq!(goals_view[0].player, "Scorer");
}

#[test]
fn views_rank_descending_and_truncate() {
    let rows = vec![
        named_row("One", "Red", 1),
        named_row("Five", "Red", 5),
        named_row("Three", "Red", 3),
        named_row("Four", "Red", 4),
    ];

    let totals = aggregate_totals(&rows).unwrap();
    let view = top_by(&totals, |entry| entry.goals, 2);
    assert_eq!(view.len(), 2);
    assert_eq!(view[0].player, "Five");
    assert_eq!(view[1].player, "Four");
}

#[test]
fn ties_keep_first_appearance_order() {
    let rows = vec![
        named_row("First", "Red", 2),
        named_row("Second", "Red", 2),
        named_row("Third", "Red", 2),
    ];

    let totals = aggregate_totals(&rows).unwrap();
    let view = top_by(&totals, |entry| entry.goals, 10);
    let names: Vec<&str> = view.iter().map(|entry| entry.player.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

// Deleting a stat row is modeled by re-aggregating without it; the total
// drops by exactly that row's contribution.
#[test]
fn removing_a_row_removes_exactly_its_contribution() {
    let rows = vec![named_row("Aejen", "Red", 2), named_row("Aejen", "Red", 1)];
    let totals_before = aggregate_totals(&rows).unwrap();
    assert_eq!(totals_before[0].goals, 3);

    let totals_after = aggregate_totals(&rows[..1]).unwrap();
    assert_eq!(totals_after[0].goals, 2);
}

#[test]
fn independent_views_use_independent_metrics() {
    let mut keeper = named_row("Keeper", "Red", 0);
    keeper.clean_sheets = 1;
    keeper.saves = 7;
    let mut playmaker = named_row("Playmaker", "Red", 1);
    playmaker.assists = 4;

    let totals = aggregate_totals(&[keeper, playmaker]).unwrap();

    let goals_view = top_by(&totals, |entry| entry.goals, 10);
    let assists_view = top_by(&totals, |entry| entry.assists, 10);
    let clean_sheets_view = top_by(&totals, |entry| entry.clean_sheets, 10);

    assert_eq!(goals_view.len(), 1);
    assert_eq!(goals_view[0].player, "Playmaker");
    assert_eq!(assists_view.len(), 1);
    assert_eq!(assists_view[0].player, "Playmaker");
    assert_eq!(clean_sheets_view.len(), 1);
    assert_eq!(clean_sheets_view[0].player, "Keeper");
}
