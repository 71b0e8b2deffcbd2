// src/handlers/league/team_handler.rs
use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::league::standings::StandingsService;
use crate::league::teams::TeamService;
use crate::middleware::auth::Claims;
use crate::models::team::{CreateTeamRequest, TeamOverrideRequest};

/// Create a new team
#[tracing::instrument(
    name = "Create team",
    skip(request, pool, claims),
    fields(team_name = %request.name, admin_user = %claims.username)
)]
pub async fn create_team(
    request: web::Json<CreateTeamRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let team_service = TeamService::new(pool.get_ref().clone());

    match team_service.create_team(&request).await {
        Ok(team) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "message": "Team created successfully",
            "data": team
        }))),
        Err(e) => {
            tracing::error!("Failed to create team: {}", e);
            Ok(e.error_response())
        }
    }
}

/// Get a single team
#[tracing::instrument(name = "Get team", skip(pool), fields(team_id = %team_id))]
pub async fn get_team(team_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let team_service = TeamService::new(pool.get_ref().clone());

    match team_service.get_team(team_id).await {
        Ok(team) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": team
        }))),
        Err(e) => {
            tracing::error!("Failed to get team {}: {}", team_id, e);
            Ok(e.error_response())
        }
    }
}

/// Manual override of a team's aggregate record
#[tracing::instrument(
    name = "Override team record",
    skip(request, pool, claims),
    fields(team_id = %team_id, admin_user = %claims.username)
)]
pub async fn override_team(
    team_id: Uuid,
    request: web::Json<TeamOverrideRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let standings_service = StandingsService::new(pool.get_ref().clone());

    match standings_service.manual_override(team_id, &request).await {
        Ok(team) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Team record updated",
            "data": team
        }))),
        Err(e) => {
            tracing::error!("Failed to override team {}: {}", team_id, e);
            Ok(e.error_response())
        }
    }
}

/// Delete a team, cascading to its fixtures
#[tracing::instrument(
    name = "Delete team",
    skip(pool, claims),
    fields(team_id = %team_id, admin_user = %claims.username)
)]
pub async fn delete_team(
    team_id: Uuid,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let team_service = TeamService::new(pool.get_ref().clone());

    match team_service.delete_team(team_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Team deleted successfully"
        }))),
        Err(e) => {
            tracing::error!("Failed to delete team {}: {}", team_id, e);
            Ok(e.error_response())
        }
    }
}
