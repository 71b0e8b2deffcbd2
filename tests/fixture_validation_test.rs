use chrono::Utc;
use uuid::Uuid;

use haxarena_backend::errors::LeagueError;
use haxarena_backend::league::validation::LeagueValidator;
use haxarena_backend::models::fixture::{ByeSide, CreateFixtureRequest, GoalEventRequest};
use haxarena_backend::models::player_stats::UpsertPlayerStatRequest;
use haxarena_backend::models::team_of_week::{PositionSlot, TeamOfWeekSlot};

fn regular_request() -> CreateFixtureRequest {
    CreateFixtureRequest {
        week: 1,
        home_team_id: Some(Uuid::new_v4()),
        away_team_id: Some(Uuid::new_v4()),
        match_date: Some(Utc::now()),
        is_bye: false,
        bye_side: None,
        referee: None,
    }
}

fn assert_validation_error(result: Result<(), LeagueError>) {
    match result {
        Err(LeagueError::Validation(_)) => {}
        other => panic!("Expected a validation error, got {:?}", other),
    }
}

#[test]
fn regular_fixture_with_both_teams_passes() {
    let validator = LeagueValidator::new();
    assert!(validator.validate_create_fixture(&regular_request()).is_ok());
}

// Scenario: is_bye=false with only home_team_id supplied must fail
#[test]
fn regular_fixture_missing_away_team_fails() {
    let validator = LeagueValidator::new();
    let mut request = regular_request();
    request.away_team_id = None;
    assert_validation_error(validator.validate_create_fixture(&request));
}

#[test]
fn regular_fixture_missing_match_date_fails() {
    let validator = LeagueValidator::new();
    let mut request = regular_request();
    request.match_date = None;
    assert_validation_error(validator.validate_create_fixture(&request));
}

#[test]
fn team_cannot_play_itself() {
    let validator = LeagueValidator::new();
    let mut request = regular_request();
    request.away_team_id = request.home_team_id;
    assert_validation_error(validator.validate_create_fixture(&request));
}

#[test]
fn bye_fixture_requires_bye_side() {
    let validator = LeagueValidator::new();
    let request = CreateFixtureRequest {
        week: 2,
        home_team_id: None,
        away_team_id: Some(Uuid::new_v4()),
        match_date: None,
        is_bye: true,
        bye_side: None,
        referee: None,
    };
    assert_validation_error(validator.validate_create_fixture(&request));
}

#[test]
fn bye_fixture_with_one_team_and_side_passes() {
    let validator = LeagueValidator::new();
    let request = CreateFixtureRequest {
        week: 2,
        home_team_id: None,
        away_team_id: Some(Uuid::new_v4()),
        match_date: None,
        is_bye: true,
        bye_side: Some(ByeSide::Home),
        referee: None,
    };
    assert!(validator.validate_create_fixture(&request).is_ok());
}

#[test]
fn bye_fixture_with_team_on_the_absent_side_fails() {
    let validator = LeagueValidator::new();
    let request = CreateFixtureRequest {
        week: 2,
        home_team_id: Some(Uuid::new_v4()),
        away_team_id: None,
        match_date: None,
        is_bye: true,
        bye_side: Some(ByeSide::Home),
        referee: None,
    };
    assert_validation_error(validator.validate_create_fixture(&request));
}

#[test]
fn bye_fixture_with_both_teams_fails() {
    let validator = LeagueValidator::new();
    let request = CreateFixtureRequest {
        week: 2,
        home_team_id: Some(Uuid::new_v4()),
        away_team_id: Some(Uuid::new_v4()),
        match_date: None,
        is_bye: true,
        bye_side: Some(ByeSide::Away),
        referee: None,
    };
    assert_validation_error(validator.validate_create_fixture(&request));
}

#[test]
fn negative_scores_are_rejected() {
    let validator = LeagueValidator::new();
    assert_validation_error(validator.validate_scores(-1, 0));
    assert_validation_error(validator.validate_scores(0, -3));
    assert!(validator.validate_scores(0, 0).is_ok());
    assert!(validator.validate_scores(10, 7).is_ok());
}

#[test]
fn absurd_scores_are_rejected() {
    let validator = LeagueValidator::new();
    assert_validation_error(validator.validate_scores(51, 0));
}

#[test]
fn week_number_must_be_positive() {
    let validator = LeagueValidator::new();
    assert_validation_error(validator.validate_week_number(0));
    assert_validation_error(validator.validate_week_number(-3));
    assert!(validator.validate_week_number(1).is_ok());
    assert!(validator.validate_week_number(38).is_ok());
}

#[test]
fn goal_event_requires_a_scorer() {
    let validator = LeagueValidator::new();
    let goals = vec![GoalEventRequest {
        scorer_user_id: None,
        scorer_name: Some("   ".to_string()),
        assist_user_id: None,
        assist_name: None,
        minute: 120,
        is_home_team: true,
    }];
    assert_validation_error(validator.validate_goal_events(&goals));
}

#[test]
fn goal_event_minute_cannot_be_negative() {
    let validator = LeagueValidator::new();
    let goals = vec![GoalEventRequest {
        scorer_user_id: None,
        scorer_name: Some("Aejen".to_string()),
        assist_user_id: None,
        assist_name: None,
        minute: -5,
        is_home_team: false,
    }];
    assert_validation_error(validator.validate_goal_events(&goals));
}

#[test]
fn player_stat_counters_cannot_be_negative() {
    let validator = LeagueValidator::new();
    let request = UpsertPlayerStatRequest {
        team_id: Uuid::new_v4(),
        user_id: None,
        player_name: Some("Aejen".to_string()),
        goals: 1,
        assists: 0,
        dm: -2,
        clean_sheets: 0,
        saves: 0,
    };
    match validator.validate_player_stat(&request) {
        Err(LeagueError::Validation(_)) => {}
        other => panic!("Expected a validation error, got {:?}", other),
    }
}

#[test]
fn roster_rejects_duplicate_position_slots() {
    let validator = LeagueValidator::new();
    let team_id = Uuid::new_v4();
    let roster = vec![
        TeamOfWeekSlot {
            position: PositionSlot::Goalkeeper,
            user_id: None,
            player_name: Some("Keeper One".to_string()),
            team_id,
        },
        TeamOfWeekSlot {
            position: PositionSlot::Goalkeeper,
            user_id: None,
            player_name: Some("Keeper Two".to_string()),
            team_id,
        },
    ];
    assert_validation_error(validator.validate_roster(&roster));
}

#[test]
fn roster_with_distinct_slots_passes() {
    let validator = LeagueValidator::new();
    let team_id = Uuid::new_v4();
    let roster = vec![
        TeamOfWeekSlot {
            position: PositionSlot::Goalkeeper,
            user_id: Some(Uuid::new_v4()),
            player_name: None,
            team_id,
        },
        TeamOfWeekSlot {
            position: PositionSlot::LeftWing,
            user_id: None,
            player_name: Some("Winger".to_string()),
            team_id,
        },
    ];
    assert!(validator.validate_roster(&roster).is_ok());
}

#[test]
fn team_names_are_sanitized() {
    let validator = LeagueValidator::new();
    assert_eq!(
        validator
            .validate_and_sanitize_team_name("  Red Dragons  ")
            .unwrap(),
        "Red Dragons"
    );
    assert!(validator.validate_and_sanitize_team_name("   ").is_err());
    assert!(validator.validate_and_sanitize_team_name("***").is_err());
}
