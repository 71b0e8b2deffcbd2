// src/league/fixtures.rs
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::errors::LeagueError;
use crate::league::standings::{apply_result_in_tx, lock_team_pair_in_tx, reverse_result_in_tx};
use crate::league::validation::LeagueValidator;
use crate::models::fixture::{
    CreateFixtureRequest, Fixture, FixtureWithDetails, GoalEvent, Pairing, RecordResultRequest,
};

/// Service owning the fixture ledger: scheduling, result recording, flag
/// overlays, and deletion. Result recording and deletion reconcile team
/// aggregates inside a single transaction.
#[derive(Debug)]
pub struct FixtureService {
    pool: PgPool,
    validator: LeagueValidator,
}

impl FixtureService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            validator: LeagueValidator::new(),
        }
    }

    /// Create a fixture, either a regular pairing or a BYE. New fixtures are
    /// unplayed and have no standings impact.
    pub async fn create_fixture(
        &self,
        request: &CreateFixtureRequest,
    ) -> Result<Fixture, LeagueError> {
        self.validator.validate_create_fixture(request)?;

        for team_id in [request.home_team_id, request.away_team_id]
            .into_iter()
            .flatten()
        {
            self.ensure_team_exists(team_id).await?;
        }

        let fixture = sqlx::query_as::<_, Fixture>(
            r#"
            INSERT INTO fixtures (
                id, week, home_team_id, away_team_id, match_date,
                is_bye, referee, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.week)
        .bind(request.home_team_id)
        .bind(request.away_team_id)
        .bind(request.match_date)
        .bind(request.is_bye)
        .bind(request.referee.as_deref())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            "Created {} fixture {} for week {}",
            if fixture.is_bye { "BYE" } else { "regular" },
            fixture.id,
            fixture.week
        );
        Ok(fixture)
    }

    /// All fixtures with team names and minute-ordered goal events,
    /// week-ordered.
    pub async fn list_fixtures(&self) -> Result<Vec<FixtureWithDetails>, LeagueError> {
        let fixtures = sqlx::query_as::<_, Fixture>(
            "SELECT * FROM fixtures ORDER BY week, match_date NULLS LAST, created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        let team_names: HashMap<Uuid, String> =
            sqlx::query_as::<_, (Uuid, String)>("SELECT id, name FROM teams")
                .fetch_all(&self.pool)
                .await?
                .into_iter()
                .collect();

        let events = sqlx::query_as::<_, GoalEvent>(
            "SELECT * FROM goal_events ORDER BY minute, id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut events_by_fixture: HashMap<Uuid, Vec<GoalEvent>> = HashMap::new();
        for event in events {
            events_by_fixture
                .entry(event.fixture_id)
                .or_default()
                .push(event);
        }

        Ok(fixtures
            .into_iter()
            .map(|fixture| {
                let home_team_name = fixture
                    .home_team_id
                    .and_then(|id| team_names.get(&id).cloned());
                let away_team_name = fixture
                    .away_team_id
                    .and_then(|id| team_names.get(&id).cloned());
                let goals = events_by_fixture.remove(&fixture.id).unwrap_or_default();
                FixtureWithDetails {
                    fixture,
                    home_team_name,
                    away_team_name,
                    goals,
                }
            })
            .collect())
    }

    /// Record or edit a result. Editing first reverses the previous
    /// contribution so team aggregates end up as if only the final scoreline
    /// had ever been recorded. The goal event list and the recording URL are
    /// replaced wholesale, so omitting the URL on an edit clears it.
    pub async fn record_result(
        &self,
        fixture_id: Uuid,
        request: &RecordResultRequest,
    ) -> Result<Fixture, LeagueError> {
        self.validator
            .validate_scores(request.home_score, request.away_score)?;
        self.validator.validate_goal_events(&request.goals)?;

        let mut tx = self.pool.begin().await?;

        let fixture = Self::fetch_fixture_for_update(&mut tx, fixture_id).await?;

        let (home, away) = fixture.scoring_sides()?;
        lock_team_pair_in_tx(&mut tx, home, away).await?;

        // Reverse the previous contribution before applying the new one
        if fixture.is_played {
            let prev_home = fixture.home_score.unwrap_or(0);
            let prev_away = fixture.away_score.unwrap_or(0);
            reverse_result_in_tx(&mut tx, home, prev_home, prev_away).await?;
            reverse_result_in_tx(&mut tx, away, prev_away, prev_home).await?;
        }

        apply_result_in_tx(&mut tx, home, request.home_score, request.away_score).await?;
        apply_result_in_tx(&mut tx, away, request.away_score, request.home_score).await?;

        // Replace the goal event list atomically
        sqlx::query("DELETE FROM goal_events WHERE fixture_id = $1")
            .bind(fixture_id)
            .execute(&mut *tx)
            .await?;

        for goal in &request.goals {
            sqlx::query(
                r#"
                INSERT INTO goal_events (
                    id, fixture_id, scorer_user_id, scorer_name,
                    assist_user_id, assist_name, minute, is_home_team
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(fixture_id)
            .bind(goal.scorer_user_id)
            .bind(goal.scorer_name.as_deref().map(str::trim))
            .bind(goal.assist_user_id)
            .bind(goal.assist_name.as_deref().map(str::trim))
            .bind(goal.minute)
            .bind(goal.is_home_team)
            .execute(&mut *tx)
            .await?;
        }

        let updated = sqlx::query_as::<_, Fixture>(
            r#"
            UPDATE fixtures
            SET home_score = $2, away_score = $3, is_played = TRUE,
                match_recording_url = $4,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(fixture_id)
        .bind(request.home_score)
        .bind(request.away_score)
        .bind(request.match_recording_url.as_deref())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            "Recorded result {} - {} for fixture {}",
            request.home_score,
            request.away_score,
            fixture_id
        );
        Ok(updated)
    }

    /// Flag overlays and metadata mutators. None of these touch standings.
    pub async fn set_postponed(&self, fixture_id: Uuid, value: bool) -> Result<Fixture, LeagueError> {
        self.update_metadata(fixture_id, "is_postponed", MetadataValue::Bool(value))
            .await
    }

    pub async fn set_forfeit(&self, fixture_id: Uuid, value: bool) -> Result<Fixture, LeagueError> {
        // Informational only; a forfeit scoreline is a separate, explicit
        // record_result call by the administrator
        self.update_metadata(fixture_id, "is_forfeit", MetadataValue::Bool(value))
            .await
    }

    pub async fn set_referee(
        &self,
        fixture_id: Uuid,
        referee: Option<String>,
    ) -> Result<Fixture, LeagueError> {
        self.update_metadata(fixture_id, "referee", MetadataValue::Text(referee))
            .await
    }

    pub async fn set_match_date(
        &self,
        fixture_id: Uuid,
        match_date: DateTime<Utc>,
    ) -> Result<Fixture, LeagueError> {
        self.update_metadata(fixture_id, "match_date", MetadataValue::Date(match_date))
            .await
    }

    /// Delete a fixture. A played non-BYE fixture has its standings
    /// contribution reversed first; goal events and player stats cascade.
    pub async fn delete_fixture(&self, fixture_id: Uuid) -> Result<(), LeagueError> {
        let mut tx = self.pool.begin().await?;

        let fixture = Self::fetch_fixture_for_update(&mut tx, fixture_id).await?;

        if fixture.is_played {
            if let Pairing::Regular { home, away } = fixture.pairing()? {
                lock_team_pair_in_tx(&mut tx, home, away).await?;
                let home_score = fixture.home_score.unwrap_or(0);
                let away_score = fixture.away_score.unwrap_or(0);
                reverse_result_in_tx(&mut tx, home, home_score, away_score).await?;
                reverse_result_in_tx(&mut tx, away, away_score, home_score).await?;
            }
        }

        sqlx::query("DELETE FROM fixtures WHERE id = $1")
            .bind(fixture_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!("Deleted fixture {}", fixture_id);
        Ok(())
    }

    async fn fetch_fixture_for_update(
        tx: &mut Transaction<'_, Postgres>,
        fixture_id: Uuid,
    ) -> Result<Fixture, LeagueError> {
        sqlx::query_as::<_, Fixture>("SELECT * FROM fixtures WHERE id = $1 FOR UPDATE")
            .bind(fixture_id)
            .fetch_optional(&mut **tx)
            .await?
            .ok_or_else(|| LeagueError::not_found(format!("Fixture {} not found", fixture_id)))
    }

    async fn ensure_team_exists(&self, team_id: Uuid) -> Result<(), LeagueError> {
        let exists = sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM teams WHERE id = $1")
            .bind(team_id)
            .fetch_one(&self.pool)
            .await?;
        if exists.0 == 0 {
            return Err(LeagueError::not_found(format!("Team {} not found", team_id)));
        }
        Ok(())
    }

    async fn update_metadata(
        &self,
        fixture_id: Uuid,
        column: &'static str,
        value: MetadataValue,
    ) -> Result<Fixture, LeagueError> {
        // Column names come from a fixed set above, never from input
        let sql = format!(
            "UPDATE fixtures SET {} = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
            column
        );

        let query = sqlx::query_as::<_, Fixture>(&sql).bind(fixture_id);
        let query = match value {
            MetadataValue::Bool(v) => query.bind(v),
            MetadataValue::Text(v) => query.bind(v),
            MetadataValue::Date(v) => query.bind(v),
        };

        query
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| LeagueError::not_found(format!("Fixture {} not found", fixture_id)))
    }
}

enum MetadataValue {
    Bool(bool),
    Text(Option<String>),
    Date(DateTime<Utc>),
}
