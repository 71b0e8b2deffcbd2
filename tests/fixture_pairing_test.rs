use chrono::Utc;
use uuid::Uuid;

use haxarena_backend::errors::LeagueError;
use haxarena_backend::models::fixture::{ByeSide, Fixture, Pairing};

fn base_fixture() -> Fixture {
    Fixture {
        id: Uuid::new_v4(),
        week: 1,
        home_team_id: None,
        away_team_id: None,
        match_date: None,
        is_bye: false,
        is_forfeit: false,
        is_postponed: false,
        is_played: false,
        home_score: None,
        away_score: None,
        referee: None,
        match_recording_url: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn regular_fixture_classifies_both_teams() {
    let home = Uuid::new_v4();
    let away = Uuid::new_v4();
    let mut fixture = base_fixture();
    fixture.home_team_id = Some(home);
    fixture.away_team_id = Some(away);

    assert_eq!(fixture.pairing().unwrap(), Pairing::Regular { home, away });
}

#[test]
fn bye_fixture_names_the_absent_side() {
    let present = Uuid::new_v4();

    let mut home_bye = base_fixture();
    home_bye.is_bye = true;
    home_bye.away_team_id = Some(present);
    assert_eq!(
        home_bye.pairing().unwrap(),
        Pairing::Bye {
            present,
            absent_side: ByeSide::Home
        }
    );

    let mut away_bye = base_fixture();
    away_bye.is_bye = true;
    away_bye.home_team_id = Some(present);
    assert_eq!(
        away_bye.pairing().unwrap(),
        Pairing::Bye {
            present,
            absent_side: ByeSide::Away
        }
    );
}

#[test]
fn regular_fixtures_expose_their_scoring_sides() {
    let home = Uuid::new_v4();
    let away = Uuid::new_v4();
    let mut fixture = base_fixture();
    fixture.home_team_id = Some(home);
    fixture.away_team_id = Some(away);

    assert_eq!(fixture.scoring_sides().unwrap(), (home, away));
}

// A BYE week has no opponent, so no scoreline may ever be recorded against
// it and team aggregates stay untouched.
#[test]
fn bye_fixtures_cannot_take_a_scoreline() {
    let mut bye = base_fixture();
    bye.is_bye = true;
    bye.home_team_id = Some(Uuid::new_v4());

    match bye.scoring_sides() {
        Err(LeagueError::InvalidOperation(_)) => {}
        other => panic!("Expected an invalid-operation error, got {:?}", other),
    }
}

#[test]
fn inconsistent_rows_are_rejected() {
    // Regular fixture missing a side
    let mut half_pair = base_fixture();
    half_pair.home_team_id = Some(Uuid::new_v4());
    match half_pair.pairing() {
        Err(LeagueError::InvalidOperation(_)) => {}
        other => panic!("Expected an invalid-operation error, got {:?}", other),
    }

    // BYE with both sides populated
    let mut crowded_bye = base_fixture();
    crowded_bye.is_bye = true;
    crowded_bye.home_team_id = Some(Uuid::new_v4());
    crowded_bye.away_team_id = Some(Uuid::new_v4());
    assert!(crowded_bye.pairing().is_err());
}
