// src/handlers/league/stats_handler.rs
use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::league::stats::PlayerStatsService;
use crate::middleware::auth::Claims;
use crate::models::common::LeaderboardQuery;
use crate::models::player_stats::UpsertPlayerStatRequest;

/// Upsert a per-fixture player stat row
#[tracing::instrument(
    name = "Upsert player stat",
    skip(request, pool, claims),
    fields(fixture_id = %fixture_id, admin_user = %claims.username)
)]
pub async fn upsert_player_stat(
    fixture_id: Uuid,
    request: web::Json<UpsertPlayerStatRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let stats_service = PlayerStatsService::new(pool.get_ref().clone());

    match stats_service.upsert_stat(fixture_id, &request).await {
        Ok(stat) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Player stat saved",
            "data": stat
        }))),
        Err(e) => {
            tracing::error!(
                "Failed to upsert player stat for fixture {}: {}",
                fixture_id,
                e
            );
            Ok(e.error_response())
        }
    }
}

/// Delete a player stat row
#[tracing::instrument(
    name = "Delete player stat",
    skip(pool, claims),
    fields(stat_id = %stat_id, admin_user = %claims.username)
)]
pub async fn delete_player_stat(
    stat_id: Uuid,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let stats_service = PlayerStatsService::new(pool.get_ref().clone());

    match stats_service.delete_stat(stat_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Player stat deleted"
        }))),
        Err(e) => {
            tracing::error!("Failed to delete player stat {}: {}", stat_id, e);
            Ok(e.error_response())
        }
    }
}

/// The four ranked leaderboard views
#[tracing::instrument(name = "Get leaderboard", skip(query, pool), fields(limit = ?query.limit))]
pub async fn get_leaderboard(
    query: web::Query<LeaderboardQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let stats_service = PlayerStatsService::new(pool.get_ref().clone());

    match stats_service.leaderboard(query.limit).await {
        Ok(leaderboard) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": leaderboard
        }))),
        Err(e) => {
            tracing::error!("Failed to compute leaderboard: {}", e);
            Ok(e.error_response())
        }
    }
}
