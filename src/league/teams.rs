// src/league/teams.rs
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::LeagueError;
use crate::league::standings::reverse_result_in_tx;
use crate::league::validation::LeagueValidator;
use crate::models::fixture::{Fixture, Pairing};
use crate::models::team::{CreateTeamRequest, Team};

/// Service owning team lifecycle. Aggregate mutation lives in the standings
/// module; this covers creation, lookup, and the explicit cascading delete.
#[derive(Debug)]
pub struct TeamService {
    pool: PgPool,
    validator: LeagueValidator,
}

impl TeamService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            validator: LeagueValidator::new(),
        }
    }

    pub async fn create_team(&self, request: &CreateTeamRequest) -> Result<Team, LeagueError> {
        let name = self.validator.validate_and_sanitize_team_name(&request.name)?;

        let existing = sqlx::query_as::<_, (i64,)>(
            "SELECT COUNT(*) FROM teams WHERE LOWER(name) = LOWER($1)",
        )
        .bind(&name)
        .fetch_one(&self.pool)
        .await?;
        if existing.0 > 0 {
            return Err(LeagueError::validation(format!(
                "Team name '{}' is already taken",
                name
            )));
        }

        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (id, name, logo_url, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&name)
        .bind(request.logo_url.as_deref())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Created team {} ({})", team.name, team.id);
        Ok(team)
    }

    pub async fn get_team(&self, team_id: Uuid) -> Result<Team, LeagueError> {
        sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
            .bind(team_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| LeagueError::not_found(format!("Team {} not found", team_id)))
    }

    /// Explicit admin delete. Played fixtures involving the team are reversed
    /// for their opponents before the cascade removes the fixtures themselves.
    pub async fn delete_team(&self, team_id: Uuid) -> Result<(), LeagueError> {
        let mut tx = self.pool.begin().await?;

        let exists = sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM teams WHERE id = $1")
            .bind(team_id)
            .fetch_one(&mut *tx)
            .await?;
        if exists.0 == 0 {
            return Err(LeagueError::not_found(format!("Team {} not found", team_id)));
        }

        let played_fixtures = sqlx::query_as::<_, Fixture>(
            r#"
            SELECT * FROM fixtures
            WHERE is_played = TRUE AND is_bye = FALSE
              AND (home_team_id = $1 OR away_team_id = $1)
            FOR UPDATE
            "#,
        )
        .bind(team_id)
        .fetch_all(&mut *tx)
        .await?;

        for fixture in &played_fixtures {
            if let Pairing::Regular { home, away } = fixture.pairing()? {
                let home_score = fixture.home_score.unwrap_or(0);
                let away_score = fixture.away_score.unwrap_or(0);
                if home == team_id {
                    reverse_result_in_tx(&mut tx, away, away_score, home_score).await?;
                } else {
                    reverse_result_in_tx(&mut tx, home, home_score, away_score).await?;
                }
            }
        }

        sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(team_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            "Deleted team {} and reconciled {} played fixtures",
            team_id,
            played_fixtures.len()
        );
        Ok(())
    }
}
