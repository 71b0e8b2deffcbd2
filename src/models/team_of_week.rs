// src/models/team_of_week.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed formation slots. Exactly one player may occupy each slot.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PositionSlot {
    Goalkeeper,
    RightBack,
    LeftBack,
    CentralMidfielder,
    RightWing,
    LeftWing,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TeamOfWeekSlot {
    pub position: PositionSlot,
    pub user_id: Option<Uuid>,
    pub player_name: Option<String>,
    pub team_id: Uuid,
}

/// Roster snapshot for one week. Pure storage, no derived data.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TeamOfWeek {
    pub week: i32,
    pub roster: Vec<TeamOfWeekSlot>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpsertTeamOfWeekRequest {
    pub roster: Vec<TeamOfWeekSlot>,
}
