// src/handlers/league/team_of_week_handler.rs
use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;
use sqlx::PgPool;

use crate::league::team_of_week::TeamOfWeekService;
use crate::middleware::auth::Claims;
use crate::models::team_of_week::UpsertTeamOfWeekRequest;

/// Replace the team-of-week roster for a week
#[tracing::instrument(
    name = "Upsert team of week",
    skip(request, pool, claims),
    fields(week = %week, admin_user = %claims.username)
)]
pub async fn upsert_team_of_week(
    week: i32,
    request: web::Json<UpsertTeamOfWeekRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let totw_service = TeamOfWeekService::new(pool.get_ref().clone());

    match totw_service.upsert(week, request.into_inner().roster).await {
        Ok(team_of_week) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Team of the week saved",
            "data": team_of_week
        }))),
        Err(e) => {
            tracing::error!("Failed to upsert team of week {}: {}", week, e);
            Ok(e.error_response())
        }
    }
}

/// Get the roster for one week
#[tracing::instrument(name = "Get team of week", skip(pool), fields(week = %week))]
pub async fn get_team_of_week(week: i32, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let totw_service = TeamOfWeekService::new(pool.get_ref().clone());

    match totw_service.get(week).await {
        Ok(team_of_week) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": team_of_week
        }))),
        Err(e) => {
            tracing::error!("Failed to get team of week {}: {}", week, e);
            Ok(e.error_response())
        }
    }
}

/// List every stored week, week-ordered
#[tracing::instrument(name = "List teams of week", skip(pool))]
pub async fn list_teams_of_week(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let totw_service = TeamOfWeekService::new(pool.get_ref().clone());

    match totw_service.list_all().await {
        Ok(weeks) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": weeks,
            "total_count": weeks.len()
        }))),
        Err(e) => {
            tracing::error!("Failed to list teams of week: {}", e);
            Ok(e.error_response())
        }
    }
}
