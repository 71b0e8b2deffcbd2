// src/handlers/league/fixture_handler.rs
use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::league::fixtures::FixtureService;
use crate::middleware::auth::Claims;
use crate::models::fixture::*;

/// Create a fixture (regular pairing or BYE)
#[tracing::instrument(
    name = "Create fixture",
    skip(request, pool, claims),
    fields(
        week = %request.week,
        is_bye = %request.is_bye,
        admin_user = %claims.username
    )
)]
pub async fn create_fixture(
    request: web::Json<CreateFixtureRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let fixture_service = FixtureService::new(pool.get_ref().clone());

    match fixture_service.create_fixture(&request).await {
        Ok(fixture) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "message": "Fixture created successfully",
            "data": fixture
        }))),
        Err(e) => {
            tracing::error!("Failed to create fixture: {}", e);
            Ok(e.error_response())
        }
    }
}

/// List all fixtures with goal events
#[tracing::instrument(name = "List fixtures", skip(pool))]
pub async fn list_fixtures(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let fixture_service = FixtureService::new(pool.get_ref().clone());

    match fixture_service.list_fixtures().await {
        Ok(fixtures) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": fixtures,
            "total_count": fixtures.len()
        }))),
        Err(e) => {
            tracing::error!("Failed to list fixtures: {}", e);
            Ok(e.error_response())
        }
    }
}

/// Record or edit a fixture result
#[tracing::instrument(
    name = "Record fixture result",
    skip(request, pool, claims),
    fields(
        fixture_id = %fixture_id,
        admin_user = %claims.username
    )
)]
pub async fn record_result(
    fixture_id: Uuid,
    request: web::Json<RecordResultRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    tracing::info!(
        "Recording result {} - {} for fixture {} by admin: {}",
        request.home_score,
        request.away_score,
        fixture_id,
        claims.username
    );

    let fixture_service = FixtureService::new(pool.get_ref().clone());

    match fixture_service.record_result(fixture_id, &request).await {
        Ok(fixture) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Result recorded successfully",
            "data": fixture
        }))),
        Err(e) => {
            tracing::error!("Failed to record result for fixture {}: {}", fixture_id, e);
            Ok(e.error_response())
        }
    }
}

/// Flip the postponed flag
#[tracing::instrument(
    name = "Set fixture postponed",
    skip(request, pool, claims),
    fields(fixture_id = %fixture_id, admin_user = %claims.username)
)]
pub async fn set_postponed(
    fixture_id: Uuid,
    request: web::Json<SetFlagRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let fixture_service = FixtureService::new(pool.get_ref().clone());

    match fixture_service.set_postponed(fixture_id, request.value).await {
        Ok(fixture) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": fixture
        }))),
        Err(e) => {
            tracing::error!("Failed to set postponed on fixture {}: {}", fixture_id, e);
            Ok(e.error_response())
        }
    }
}

/// Flip the forfeit flag
#[tracing::instrument(
    name = "Set fixture forfeit",
    skip(request, pool, claims),
    fields(fixture_id = %fixture_id, admin_user = %claims.username)
)]
pub async fn set_forfeit(
    fixture_id: Uuid,
    request: web::Json<SetFlagRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let fixture_service = FixtureService::new(pool.get_ref().clone());

    match fixture_service.set_forfeit(fixture_id, request.value).await {
        Ok(fixture) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": fixture
        }))),
        Err(e) => {
            tracing::error!("Failed to set forfeit on fixture {}: {}", fixture_id, e);
            Ok(e.error_response())
        }
    }
}

/// Set or clear the referee
#[tracing::instrument(
    name = "Set fixture referee",
    skip(request, pool, claims),
    fields(fixture_id = %fixture_id, admin_user = %claims.username)
)]
pub async fn set_referee(
    fixture_id: Uuid,
    request: web::Json<SetRefereeRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let fixture_service = FixtureService::new(pool.get_ref().clone());

    match fixture_service
        .set_referee(fixture_id, request.referee.clone())
        .await
    {
        Ok(fixture) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": fixture
        }))),
        Err(e) => {
            tracing::error!("Failed to set referee on fixture {}: {}", fixture_id, e);
            Ok(e.error_response())
        }
    }
}

/// Reschedule a fixture
#[tracing::instrument(
    name = "Set fixture date",
    skip(request, pool, claims),
    fields(fixture_id = %fixture_id, admin_user = %claims.username)
)]
pub async fn set_match_date(
    fixture_id: Uuid,
    request: web::Json<SetMatchDateRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let fixture_service = FixtureService::new(pool.get_ref().clone());

    match fixture_service
        .set_match_date(fixture_id, request.match_date)
        .await
    {
        Ok(fixture) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": fixture
        }))),
        Err(e) => {
            tracing::error!("Failed to set match date on fixture {}: {}", fixture_id, e);
            Ok(e.error_response())
        }
    }
}

/// Delete a fixture, reconciling standings when it was played
#[tracing::instrument(
    name = "Delete fixture",
    skip(pool, claims),
    fields(fixture_id = %fixture_id, admin_user = %claims.username)
)]
pub async fn delete_fixture(
    fixture_id: Uuid,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let fixture_service = FixtureService::new(pool.get_ref().clone());

    match fixture_service.delete_fixture(fixture_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Fixture deleted successfully"
        }))),
        Err(e) => {
            tracing::error!("Failed to delete fixture {}: {}", fixture_id, e);
            Ok(e.error_response())
        }
    }
}
