// src/league/standings.rs
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::errors::LeagueError;
use crate::league::points::{standings_ordering, RankTier, TeamRecord};
use crate::models::team::{RankedTeam, Team, TeamOverrideRequest};

/// The order in which a pair of team rows is locked. Every writer touching
/// two teams goes through this, so two transactions over the same pair
/// always take the locks in the same order and cannot deadlock.
pub fn lock_order(a: Uuid, b: Uuid) -> (Uuid, Uuid) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Lock both team rows, in canonical order, for the rest of the
/// surrounding transaction.
pub(crate) async fn lock_team_pair_in_tx(
    tx: &mut Transaction<'_, Postgres>,
    a: Uuid,
    b: Uuid,
) -> Result<(), LeagueError> {
    let (first, second) = lock_order(a, b);
    for team_id in [first, second] {
        sqlx::query("SELECT id FROM teams WHERE id = $1 FOR UPDATE")
            .bind(team_id)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

/// Load a team's aggregate record with a row lock held for the rest of the
/// surrounding transaction.
async fn fetch_record_for_update(
    tx: &mut Transaction<'_, Postgres>,
    team_id: Uuid,
) -> Result<TeamRecord, LeagueError> {
    sqlx::query_as::<_, TeamRecord>(
        r#"
        SELECT played, won, drawn, lost, goals_for, goals_against,
               goal_difference, points, head_to_head
        FROM teams
        WHERE id = $1
        FOR UPDATE
        "#,
    )
    .bind(team_id)
    .fetch_optional(&mut **tx)
    .await?
    .ok_or_else(|| LeagueError::not_found(format!("Team {} not found", team_id)))
}

async fn store_record(
    tx: &mut Transaction<'_, Postgres>,
    team_id: Uuid,
    record: &TeamRecord,
) -> Result<(), LeagueError> {
    sqlx::query(
        r#"
        UPDATE teams
        SET played = $2, won = $3, drawn = $4, lost = $5,
            goals_for = $6, goals_against = $7, goal_difference = $8,
            points = $9, head_to_head = $10, updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(team_id)
    .bind(record.played)
    .bind(record.won)
    .bind(record.drawn)
    .bind(record.lost)
    .bind(record.goals_for)
    .bind(record.goals_against)
    .bind(record.goal_difference)
    .bind(record.points)
    .bind(record.head_to_head)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

/// Fold one result into a team's stored record, inside the caller's
/// transaction.
pub(crate) async fn apply_result_in_tx(
    tx: &mut Transaction<'_, Postgres>,
    team_id: Uuid,
    goals_for: i32,
    goals_against: i32,
) -> Result<(), LeagueError> {
    let mut record = fetch_record_for_update(tx, team_id).await?;
    record.apply_result(goals_for, goals_against);
    store_record(tx, team_id, &record).await
}

/// Remove one previously applied result from a team's stored record.
pub(crate) async fn reverse_result_in_tx(
    tx: &mut Transaction<'_, Postgres>,
    team_id: Uuid,
    goals_for: i32,
    goals_against: i32,
) -> Result<(), LeagueError> {
    let mut record = fetch_record_for_update(tx, team_id).await?;
    record.reverse_result(goals_for, goals_against);
    store_record(tx, team_id, &record).await
}

/// Service owning the standings reads and the manual override path
#[derive(Debug)]
pub struct StandingsService {
    pool: PgPool,
}

impl StandingsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The public ranked table. Ordering is computed at read time and never
    /// persisted; position bands derive from the rank index.
    pub async fn ranked_table(&self) -> Result<Vec<RankedTeam>, LeagueError> {
        let mut teams = sqlx::query_as::<_, Team>("SELECT * FROM teams")
            .fetch_all(&self.pool)
            .await?;

        teams.sort_by(|a, b| standings_ordering(&a.record(), &a.name, &b.record(), &b.name));

        Ok(teams
            .into_iter()
            .enumerate()
            .map(|(index, team)| {
                let position = (index + 1) as i32;
                RankedTeam {
                    team,
                    position,
                    tier: RankTier::for_position(position),
                }
            })
            .collect())
    }

    /// Administrator override of any subset of a team's aggregate fields.
    /// Goal difference is recomputed unconditionally so the invariant holds
    /// even under manual edits.
    pub async fn manual_override(
        &self,
        team_id: Uuid,
        request: &TeamOverrideRequest,
    ) -> Result<Team, LeagueError> {
        let mut tx = self.pool.begin().await?;

        let mut record = fetch_record_for_update(&mut tx, team_id).await?;

        if let Some(played) = request.played {
            record.played = played;
        }
        if let Some(won) = request.won {
            record.won = won;
        }
        if let Some(drawn) = request.drawn {
            record.drawn = drawn;
        }
        if let Some(lost) = request.lost {
            record.lost = lost;
        }
        if let Some(goals_for) = request.goals_for {
            record.goals_for = goals_for;
        }
        if let Some(goals_against) = request.goals_against {
            record.goals_against = goals_against;
        }
        if let Some(points) = request.points {
            record.points = points;
        }
        if let Some(head_to_head) = request.head_to_head {
            record.head_to_head = head_to_head;
        }
        record.recompute_goal_difference();

        store_record(&mut tx, team_id, &record).await?;

        let team = sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
            .bind(team_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!("Applied manual override to team {} ({})", team.name, team_id);
        Ok(team)
    }
}
