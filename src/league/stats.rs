// src/league/stats.rs
use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::LeagueError;
use crate::league::identity::{resolve_identity, PlayerIdentity};
use crate::league::validation::LeagueValidator;
use crate::models::player_stats::{
    LeaderboardEntry, LeaderboardResponse, PlayerMatchStat, PlayerStatRow, UpsertPlayerStatRequest,
};

pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

/// Sum all stat rows per resolved player identity. Each entry keeps the
/// first-seen display name and the team of the latest row (the player's
/// current team). Entry order is first-appearance order, which is what
/// breaks ties in the ranked views.
pub fn aggregate_totals(rows: &[PlayerStatRow]) -> Result<Vec<LeaderboardEntry>, LeagueError> {
    let mut entries: Vec<LeaderboardEntry> = Vec::new();
    let mut index_by_identity: HashMap<PlayerIdentity, usize> = HashMap::new();

    for row in rows {
        let identity = resolve_identity(row.user_id, row.player_name.as_deref())?;

        match index_by_identity.get(&identity) {
            Some(&index) => {
                let entry = &mut entries[index];
                entry.goals += row.goals;
                entry.assists += row.assists;
                entry.dm += row.dm;
                entry.clean_sheets += row.clean_sheets;
                entry.saves += row.saves;
                // Latest row wins for the current team
                entry.team_name = row.team_name.clone();
                entry.team_logo_url = row.team_logo_url.clone();
            }
            None => {
                let display_name = row
                    .username
                    .clone()
                    .or_else(|| row.player_name.as_deref().map(|name| name.trim().to_string()))
                    .unwrap_or_default();
                index_by_identity.insert(identity, entries.len());
                entries.push(LeaderboardEntry {
                    player: display_name,
                    user_id: row.user_id,
                    team_name: row.team_name.clone(),
                    team_logo_url: row.team_logo_url.clone(),
                    goals: row.goals,
                    assists: row.assists,
                    dm: row.dm,
                    clean_sheets: row.clean_sheets,
                    saves: row.saves,
                });
            }
        }
    }

    Ok(entries)
}

/// One ranked view: non-zero entries, stable-sorted descending so ties keep
/// first-appearance order, truncated to `limit`.
pub fn top_by<F>(entries: &[LeaderboardEntry], metric: F, limit: usize) -> Vec<LeaderboardEntry>
where
    F: Fn(&LeaderboardEntry) -> i32,
{
    let mut view: Vec<LeaderboardEntry> = entries
        .iter()
        .filter(|entry| metric(entry) > 0)
        .cloned()
        .collect();
    view.sort_by(|a, b| metric(b).cmp(&metric(a)));
    view.truncate(limit);
    view
}

/// Service owning per-fixture player stat rows and the read-time
/// leaderboards
#[derive(Debug)]
pub struct PlayerStatsService {
    pool: PgPool,
    validator: LeagueValidator,
}

impl PlayerStatsService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            validator: LeagueValidator::new(),
        }
    }

    /// One row per (fixture, resolved player identity); re-submission for the
    /// same pair updates in place.
    pub async fn upsert_stat(
        &self,
        fixture_id: Uuid,
        request: &UpsertPlayerStatRequest,
    ) -> Result<PlayerMatchStat, LeagueError> {
        self.validator.validate_player_stat(request)?;
        let identity = resolve_identity(request.user_id, request.player_name.as_deref())?;

        let mut tx = self.pool.begin().await?;

        let fixture_exists =
            sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM fixtures WHERE id = $1")
                .bind(fixture_id)
                .fetch_one(&mut *tx)
                .await?;
        if fixture_exists.0 == 0 {
            return Err(LeagueError::not_found(format!(
                "Fixture {} not found",
                fixture_id
            )));
        }

        let team_exists = sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM teams WHERE id = $1")
            .bind(request.team_id)
            .fetch_one(&mut *tx)
            .await?;
        if team_exists.0 == 0 {
            return Err(LeagueError::not_found(format!(
                "Team {} not found",
                request.team_id
            )));
        }

        let existing = sqlx::query_as::<_, PlayerMatchStat>(
            "SELECT * FROM player_match_stats WHERE fixture_id = $1 FOR UPDATE",
        )
        .bind(fixture_id)
        .fetch_all(&mut *tx)
        .await?;

        let matched = existing.iter().find(|stat| {
            resolve_identity(stat.user_id, stat.player_name.as_deref())
                .map(|existing_identity| existing_identity == identity)
                .unwrap_or(false)
        });

        let stat = match matched {
            Some(stat) => {
                sqlx::query_as::<_, PlayerMatchStat>(
                    r#"
                    UPDATE player_match_stats
                    SET team_id = $2, goals = $3, assists = $4, dm = $5,
                        clean_sheets = $6, saves = $7, updated_at = NOW()
                    WHERE id = $1
                    RETURNING *
                    "#,
                )
                .bind(stat.id)
                .bind(request.team_id)
                .bind(request.goals)
                .bind(request.assists)
                .bind(request.dm)
                .bind(request.clean_sheets)
                .bind(request.saves)
                .fetch_one(&mut *tx)
                .await?
            }
            None => {
                sqlx::query_as::<_, PlayerMatchStat>(
                    r#"
                    INSERT INTO player_match_stats (
                        id, fixture_id, team_id, user_id, player_name,
                        goals, assists, dm, clean_sheets, saves,
                        created_at, updated_at
                    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW(), NOW())
                    RETURNING *
                    "#,
                )
                .bind(Uuid::new_v4())
                .bind(fixture_id)
                .bind(request.team_id)
                .bind(request.user_id)
                .bind(request.player_name.as_deref().map(str::trim))
                .bind(request.goals)
                .bind(request.assists)
                .bind(request.dm)
                .bind(request.clean_sheets)
                .bind(request.saves)
                .fetch_one(&mut *tx)
                .await?
            }
        };

        tx.commit().await?;
        Ok(stat)
    }

    pub async fn delete_stat(&self, stat_id: Uuid) -> Result<(), LeagueError> {
        let deleted = sqlx::query("DELETE FROM player_match_stats WHERE id = $1")
            .bind(stat_id)
            .execute(&self.pool)
            .await?;
        if deleted.rows_affected() == 0 {
            return Err(LeagueError::not_found(format!(
                "Player stat {} not found",
                stat_id
            )));
        }
        Ok(())
    }

    /// The four ranked views, computed from scratch on every read so stat
    /// edits and deletions need no reversal bookkeeping.
    pub async fn leaderboard(&self, limit: Option<usize>) -> Result<LeaderboardResponse, LeagueError> {
        let limit = limit.unwrap_or(DEFAULT_LEADERBOARD_SIZE);

        let rows = sqlx::query_as::<_, PlayerStatRow>(
            r#"
            SELECT pms.user_id, pms.player_name, u.username,
                   t.name AS team_name, t.logo_url AS team_logo_url,
                   pms.goals, pms.assists, pms.dm, pms.clean_sheets, pms.saves
            FROM player_match_stats pms
            JOIN teams t ON pms.team_id = t.id
            LEFT JOIN users u ON pms.user_id = u.id
            ORDER BY pms.created_at, pms.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let totals = aggregate_totals(&rows)?;

        Ok(LeaderboardResponse {
            goals: top_by(&totals, |entry| entry.goals, limit),
            assists: top_by(&totals, |entry| entry.assists, limit),
            dm: top_by(&totals, |entry| entry.dm, limit),
            clean_sheets: top_by(&totals, |entry| entry.clean_sheets, limit),
        })
    }
}
