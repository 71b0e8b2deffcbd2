// src/league/validation.rs
use std::collections::HashSet;

use crate::errors::LeagueError;
use crate::models::fixture::{ByeSide, CreateFixtureRequest, GoalEventRequest};
use crate::models::player_stats::UpsertPlayerStatRequest;
use crate::models::team_of_week::TeamOfWeekSlot;

const MAX_REASONABLE_SCORE: i32 = 50;
const MAX_WEEK_NUMBER: i32 = 100;
const MAX_NAME_LENGTH: usize = 100;

/// Centralized validation for league operations
#[derive(Debug)]
pub struct LeagueValidator;

impl LeagueValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a fixture creation request against the BYE/regular shape rules
    pub fn validate_create_fixture(&self, request: &CreateFixtureRequest) -> Result<(), LeagueError> {
        self.validate_week_number(request.week)?;

        if request.is_bye {
            let bye_side = request.bye_side.ok_or_else(|| {
                LeagueError::validation("BYE fixture requires bye_side to name the absent side")
            })?;

            // Exactly one team may be present, and it must be on the non-BYE side
            match (bye_side, request.home_team_id, request.away_team_id) {
                (ByeSide::Home, None, Some(_)) | (ByeSide::Away, Some(_), None) => Ok(()),
                (ByeSide::Home, Some(_), _) => Err(LeagueError::validation(
                    "BYE fixture with bye_side=home must not carry a home team",
                )),
                (ByeSide::Away, _, Some(_)) => Err(LeagueError::validation(
                    "BYE fixture with bye_side=away must not carry an away team",
                )),
                _ => Err(LeagueError::validation(
                    "BYE fixture requires exactly one team on the non-BYE side",
                )),
            }
        } else {
            let home = request.home_team_id.ok_or_else(|| {
                LeagueError::validation("home_team_id is required for a regular fixture")
            })?;
            let away = request.away_team_id.ok_or_else(|| {
                LeagueError::validation("away_team_id is required for a regular fixture")
            })?;

            if home == away {
                return Err(LeagueError::validation(
                    "A team cannot play against itself",
                ));
            }

            if request.match_date.is_none() {
                return Err(LeagueError::validation(
                    "match_date is required for a regular fixture",
                ));
            }

            Ok(())
        }
    }

    /// Validate a recorded scoreline
    pub fn validate_scores(&self, home_score: i32, away_score: i32) -> Result<(), LeagueError> {
        if home_score < 0 {
            return Err(LeagueError::validation(format!(
                "Home score cannot be negative: {}",
                home_score
            )));
        }

        if away_score < 0 {
            return Err(LeagueError::validation(format!(
                "Away score cannot be negative: {}",
                away_score
            )));
        }

        // Catch obvious data entry errors
        if home_score > MAX_REASONABLE_SCORE || away_score > MAX_REASONABLE_SCORE {
            return Err(LeagueError::validation(format!(
                "Score too high (max {})",
                MAX_REASONABLE_SCORE
            )));
        }

        Ok(())
    }

    /// Validate the goal event list accompanying a result
    pub fn validate_goal_events(&self, goals: &[GoalEventRequest]) -> Result<(), LeagueError> {
        for goal in goals {
            if goal.minute < 0 {
                return Err(LeagueError::validation(format!(
                    "Goal minute cannot be negative: {}",
                    goal.minute
                )));
            }

            let has_scorer = goal.scorer_user_id.is_some()
                || goal
                    .scorer_name
                    .as_deref()
                    .map(|name| !name.trim().is_empty())
                    .unwrap_or(false);
            if !has_scorer {
                return Err(LeagueError::validation(
                    "Goal event requires a scorer user reference or name",
                ));
            }
        }

        Ok(())
    }

    /// Validate a per-fixture player stat submission
    pub fn validate_player_stat(&self, request: &UpsertPlayerStatRequest) -> Result<(), LeagueError> {
        let counters = [
            ("goals", request.goals),
            ("assists", request.assists),
            ("dm", request.dm),
            ("clean_sheets", request.clean_sheets),
            ("saves", request.saves),
        ];
        for (field, value) in counters {
            if value < 0 {
                return Err(LeagueError::validation(format!(
                    "{} cannot be negative: {}",
                    field, value
                )));
            }
        }

        if let Some(name) = request.player_name.as_deref() {
            if name.trim().len() > MAX_NAME_LENGTH {
                return Err(LeagueError::validation(format!(
                    "Player name too long (max {} characters)",
                    MAX_NAME_LENGTH
                )));
            }
        }

        Ok(())
    }

    /// Validate a team-of-week roster: at most one player per position slot
    pub fn validate_roster(&self, roster: &[TeamOfWeekSlot]) -> Result<(), LeagueError> {
        let mut seen = HashSet::new();
        for slot in roster {
            if !seen.insert(slot.position) {
                return Err(LeagueError::validation(format!(
                    "Duplicate position slot: {:?}",
                    slot.position
                )));
            }

            let has_player = slot.user_id.is_some()
                || slot
                    .player_name
                    .as_deref()
                    .map(|name| !name.trim().is_empty())
                    .unwrap_or(false);
            if !has_player {
                return Err(LeagueError::validation(
                    "Roster slot requires a user reference or player name",
                ));
            }
        }

        Ok(())
    }

    /// Validate week number
    pub fn validate_week_number(&self, week: i32) -> Result<(), LeagueError> {
        if week < 1 {
            return Err(LeagueError::validation(format!(
                "Week number must be positive: {}",
                week
            )));
        }

        if week > MAX_WEEK_NUMBER {
            return Err(LeagueError::validation(format!(
                "Week number too high: {} (max {})",
                week, MAX_WEEK_NUMBER
            )));
        }

        Ok(())
    }

    /// Validate and sanitize a team name
    pub fn validate_and_sanitize_team_name(&self, name: &str) -> Result<String, LeagueError> {
        let sanitized: String = name
            .trim()
            .chars()
            .filter(|&c| c != '\0')
            .collect::<String>()
            .trim()
            .to_string();

        if sanitized.is_empty() {
            return Err(LeagueError::validation("Team name cannot be empty"));
        }

        if sanitized.len() > MAX_NAME_LENGTH {
            return Err(LeagueError::validation(format!(
                "Team name too long (max {} characters)",
                MAX_NAME_LENGTH
            )));
        }

        if !sanitized.chars().any(|c| c.is_alphanumeric()) {
            return Err(LeagueError::validation(
                "Team name must contain alphanumeric characters",
            ));
        }

        Ok(sanitized)
    }
}

impl Default for LeagueValidator {
    fn default() -> Self {
        Self::new()
    }
}
