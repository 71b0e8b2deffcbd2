// src/routes/admin.rs
use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::league::{
    fixture_handler, stats_handler, team_handler, team_of_week_handler,
};
use crate::middleware::admin::AdminMiddleware;
use crate::middleware::auth::Claims;
use crate::models::fixture::{
    CreateFixtureRequest, RecordResultRequest, SetFlagRequest, SetMatchDateRequest,
    SetRefereeRequest,
};
use crate::models::player_stats::UpsertPlayerStatRequest;
use crate::models::team::{CreateTeamRequest, TeamOverrideRequest};
use crate::models::team_of_week::UpsertTeamOfWeekRequest;

pub fn init_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(AdminMiddleware)
            // Team management
            .service(web::resource("/teams").route(web::post().to(create_team)))
            .service(
                web::resource("/teams/{id}")
                    .route(web::patch().to(override_team))
                    .route(web::delete().to(delete_team)),
            )
            // Fixture ledger
            .service(web::resource("/fixtures").route(web::post().to(create_fixture)))
            .service(web::resource("/fixtures/{id}").route(web::delete().to(delete_fixture)))
            .service(web::resource("/fixtures/{id}/result").route(web::put().to(record_result)))
            .service(web::resource("/fixtures/{id}/postponed").route(web::put().to(set_postponed)))
            .service(web::resource("/fixtures/{id}/forfeit").route(web::put().to(set_forfeit)))
            .service(web::resource("/fixtures/{id}/referee").route(web::put().to(set_referee)))
            .service(web::resource("/fixtures/{id}/date").route(web::put().to(set_match_date)))
            // Player stats
            .service(
                web::resource("/fixtures/{id}/stats").route(web::put().to(upsert_player_stat)),
            )
            .service(web::resource("/stats/{id}").route(web::delete().to(delete_player_stat)))
            // Team of the week
            .service(
                web::resource("/team-of-week/{week}").route(web::put().to(upsert_team_of_week)),
            ),
    );
}

async fn create_team(
    request: web::Json<CreateTeamRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    team_handler::create_team(request, pool, claims).await
}

async fn override_team(
    path: web::Path<Uuid>,
    request: web::Json<TeamOverrideRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    team_handler::override_team(path.into_inner(), request, pool, claims).await
}

async fn delete_team(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    team_handler::delete_team(path.into_inner(), pool, claims).await
}

async fn create_fixture(
    request: web::Json<CreateFixtureRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    fixture_handler::create_fixture(request, pool, claims).await
}

async fn delete_fixture(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    fixture_handler::delete_fixture(path.into_inner(), pool, claims).await
}

async fn record_result(
    path: web::Path<Uuid>,
    request: web::Json<RecordResultRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    fixture_handler::record_result(path.into_inner(), request, pool, claims).await
}

async fn set_postponed(
    path: web::Path<Uuid>,
    request: web::Json<SetFlagRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    fixture_handler::set_postponed(path.into_inner(), request, pool, claims).await
}

async fn set_forfeit(
    path: web::Path<Uuid>,
    request: web::Json<SetFlagRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    fixture_handler::set_forfeit(path.into_inner(), request, pool, claims).await
}

async fn set_referee(
    path: web::Path<Uuid>,
    request: web::Json<SetRefereeRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    fixture_handler::set_referee(path.into_inner(), request, pool, claims).await
}

async fn set_match_date(
    path: web::Path<Uuid>,
    request: web::Json<SetMatchDateRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    fixture_handler::set_match_date(path.into_inner(), request, pool, claims).await
}

async fn upsert_player_stat(
    path: web::Path<Uuid>,
    request: web::Json<UpsertPlayerStatRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    stats_handler::upsert_player_stat(path.into_inner(), request, pool, claims).await
}

async fn delete_player_stat(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    stats_handler::delete_player_stat(path.into_inner(), pool, claims).await
}

async fn upsert_team_of_week(
    path: web::Path<i32>,
    request: web::Json<UpsertTeamOfWeekRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    team_of_week_handler::upsert_team_of_week(path.into_inner(), request, pool, claims).await
}
