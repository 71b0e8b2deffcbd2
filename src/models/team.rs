// src/models/team.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::league::points::{RankTier, TeamRecord};

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub logo_url: Option<String>,
    pub played: i32,
    pub won: i32,
    pub drawn: i32,
    pub lost: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: i32,
    pub head_to_head: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    pub fn record(&self) -> TeamRecord {
        TeamRecord {
            played: self.played,
            won: self.won,
            drawn: self.drawn,
            lost: self.lost,
            goals_for: self.goals_for,
            goals_against: self.goals_against,
            goal_difference: self.goal_difference,
            points: self.points,
            head_to_head: self.head_to_head,
        }
    }
}

/// Request to create a new team
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateTeamRequest {
    pub name: String,
    pub logo_url: Option<String>,
}

/// Manual override of a team's aggregate record. Any subset of fields may
/// be supplied; goal difference is always recomputed server-side.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct TeamOverrideRequest {
    pub played: Option<i32>,
    pub won: Option<i32>,
    pub drawn: Option<i32>,
    pub lost: Option<i32>,
    pub goals_for: Option<i32>,
    pub goals_against: Option<i32>,
    pub points: Option<i32>,
    pub head_to_head: Option<i32>,
}

/// A team with its read-time rank and position band
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RankedTeam {
    #[serde(flatten)]
    pub team: Team,
    pub position: i32,
    pub tier: RankTier,
}
