// src/league/team_of_week.rs
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::errors::LeagueError;
use crate::league::validation::LeagueValidator;
use crate::models::team_of_week::{TeamOfWeek, TeamOfWeekSlot};

/// Satellite roster snapshot store, one record per week. No computation
/// beyond storage and retrieval.
#[derive(Debug)]
pub struct TeamOfWeekService {
    pool: PgPool,
    validator: LeagueValidator,
}

#[derive(sqlx::FromRow)]
struct TeamOfWeekRow {
    week: i32,
    roster: Json<Vec<TeamOfWeekSlot>>,
    updated_at: DateTime<Utc>,
}

impl From<TeamOfWeekRow> for TeamOfWeek {
    fn from(row: TeamOfWeekRow) -> Self {
        TeamOfWeek {
            week: row.week,
            roster: row.roster.0,
            updated_at: row.updated_at,
        }
    }
}

impl TeamOfWeekService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            validator: LeagueValidator::new(),
        }
    }

    /// Replace the full roster for a week
    pub async fn upsert(
        &self,
        week: i32,
        roster: Vec<TeamOfWeekSlot>,
    ) -> Result<TeamOfWeek, LeagueError> {
        self.validator.validate_week_number(week)?;
        self.validator.validate_roster(&roster)?;

        let row = sqlx::query_as::<_, TeamOfWeekRow>(
            r#"
            INSERT INTO team_of_week (week, roster, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (week) DO UPDATE SET
                roster = EXCLUDED.roster,
                updated_at = NOW()
            RETURNING week, roster, updated_at
            "#,
        )
        .bind(week)
        .bind(Json(roster))
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Upserted team of the week for week {}", week);
        Ok(row.into())
    }

    pub async fn get(&self, week: i32) -> Result<TeamOfWeek, LeagueError> {
        sqlx::query_as::<_, TeamOfWeekRow>(
            "SELECT week, roster, updated_at FROM team_of_week WHERE week = $1",
        )
        .bind(week)
        .fetch_optional(&self.pool)
        .await?
        .map(Into::into)
        .ok_or_else(|| LeagueError::not_found(format!("No team of the week for week {}", week)))
    }

    pub async fn list_all(&self) -> Result<Vec<TeamOfWeek>, LeagueError> {
        let rows = sqlx::query_as::<_, TeamOfWeekRow>(
            "SELECT week, roster, updated_at FROM team_of_week ORDER BY week",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
