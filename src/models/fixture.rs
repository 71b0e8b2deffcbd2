// src/models/fixture.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::LeagueError;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Fixture {
    pub id: Uuid,
    pub week: i32,
    pub home_team_id: Option<Uuid>,
    pub away_team_id: Option<Uuid>,
    pub match_date: Option<DateTime<Utc>>,
    pub is_bye: bool,
    pub is_forfeit: bool,
    pub is_postponed: bool,
    pub is_played: bool,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub referee: Option<String>,
    pub match_recording_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ByeSide {
    Home,
    Away,
}

/// Classified team pairing of a fixture. Callers go through this instead of
/// reading the nullable team columns directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pairing {
    Regular { home: Uuid, away: Uuid },
    Bye { present: Uuid, absent_side: ByeSide },
}

impl Fixture {
    /// Classify the fixture's pairing. A row that matches neither shape is
    /// rejected rather than half-trusted.
    pub fn pairing(&self) -> Result<Pairing, LeagueError> {
        match (self.is_bye, self.home_team_id, self.away_team_id) {
            (false, Some(home), Some(away)) => Ok(Pairing::Regular { home, away }),
            (true, Some(present), None) => Ok(Pairing::Bye {
                present,
                absent_side: ByeSide::Away,
            }),
            (true, None, Some(present)) => Ok(Pairing::Bye {
                present,
                absent_side: ByeSide::Home,
            }),
            _ => Err(LeagueError::invalid_operation(format!(
                "Fixture {} has an inconsistent team pairing",
                self.id
            ))),
        }
    }

    /// The two sides a scoreline applies to. BYE fixtures have none, so
    /// recording a result against one is rejected here before any team
    /// aggregate is touched.
    pub fn scoring_sides(&self) -> Result<(Uuid, Uuid), LeagueError> {
        match self.pairing()? {
            Pairing::Regular { home, away } => Ok((home, away)),
            Pairing::Bye { .. } => Err(LeagueError::invalid_operation(format!(
                "Cannot record a result for BYE fixture {}",
                self.id
            ))),
        }
    }
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct GoalEvent {
    pub id: Uuid,
    pub fixture_id: Uuid,
    pub scorer_user_id: Option<Uuid>,
    pub scorer_name: Option<String>,
    pub assist_user_id: Option<Uuid>,
    pub assist_name: Option<String>,
    pub minute: i32,
    pub is_home_team: bool,
}

// Request/Response DTOs

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateFixtureRequest {
    pub week: i32,
    pub home_team_id: Option<Uuid>,
    pub away_team_id: Option<Uuid>,
    pub match_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_bye: bool,
    pub bye_side: Option<ByeSide>,
    pub referee: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GoalEventRequest {
    pub scorer_user_id: Option<Uuid>,
    pub scorer_name: Option<String>,
    pub assist_user_id: Option<Uuid>,
    pub assist_name: Option<String>,
    pub minute: i32,
    pub is_home_team: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RecordResultRequest {
    pub home_score: i32,
    pub away_score: i32,
    #[serde(default)]
    pub goals: Vec<GoalEventRequest>,
    pub match_recording_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetFlagRequest {
    pub value: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetRefereeRequest {
    pub referee: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetMatchDateRequest {
    pub match_date: DateTime<Utc>,
}

/// A fixture joined with team names and its minute-ordered goal events
#[derive(Debug, Serialize, Deserialize)]
pub struct FixtureWithDetails {
    #[serde(flatten)]
    pub fixture: Fixture,
    pub home_team_name: Option<String>,
    pub away_team_name: Option<String>,
    pub goals: Vec<GoalEvent>,
}
