// src/models/player_stats.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PlayerMatchStat {
    pub id: Uuid,
    pub fixture_id: Uuid,
    pub team_id: Uuid,
    pub user_id: Option<Uuid>,
    pub player_name: Option<String>,
    pub goals: i32,
    pub assists: i32,
    pub dm: i32,
    pub clean_sheets: i32,
    pub saves: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpsertPlayerStatRequest {
    pub team_id: Uuid,
    pub user_id: Option<Uuid>,
    pub player_name: Option<String>,
    #[serde(default)]
    pub goals: i32,
    #[serde(default)]
    pub assists: i32,
    #[serde(default)]
    pub dm: i32,
    #[serde(default)]
    pub clean_sheets: i32,
    #[serde(default)]
    pub saves: i32,
}

/// A stat row joined with display data, as fed into leaderboard aggregation
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PlayerStatRow {
    pub user_id: Option<Uuid>,
    pub player_name: Option<String>,
    pub username: Option<String>,
    pub team_name: String,
    pub team_logo_url: Option<String>,
    pub goals: i32,
    pub assists: i32,
    pub dm: i32,
    pub clean_sheets: i32,
    pub saves: i32,
}

/// Cross-fixture totals for one resolved player identity
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LeaderboardEntry {
    pub player: String,
    pub user_id: Option<Uuid>,
    pub team_name: String,
    pub team_logo_url: Option<String>,
    pub goals: i32,
    pub assists: i32,
    pub dm: i32,
    pub clean_sheets: i32,
    pub saves: i32,
}

/// The four independently ranked top-N views
#[derive(Debug, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub goals: Vec<LeaderboardEntry>,
    pub assists: Vec<LeaderboardEntry>,
    pub dm: Vec<LeaderboardEntry>,
    pub clean_sheets: Vec<LeaderboardEntry>,
}
