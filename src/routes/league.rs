// src/routes/league.rs
use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::league::{
    fixture_handler, standings_handler, stats_handler, team_handler, team_of_week_handler,
};
use crate::models::common::LeaderboardQuery;

/// Get the ranked standings table
#[get("/teams")]
pub async fn get_ranked_teams(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    standings_handler::get_ranked_teams(pool).await
}

/// Get a single team
#[get("/teams/{team_id}")]
pub async fn get_team_info(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let team_id = path.into_inner();
    team_handler::get_team(team_id, pool).await
}

/// Get all fixtures with goal events
#[get("/fixtures")]
pub async fn get_fixtures(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    fixture_handler::list_fixtures(pool).await
}

/// Get the player leaderboards
#[get("/leaderboard")]
pub async fn get_leaderboard(
    query: web::Query<LeaderboardQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    stats_handler::get_leaderboard(query, pool).await
}

/// List all team-of-week rosters
#[get("/team-of-week")]
pub async fn list_teams_of_week(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    team_of_week_handler::list_teams_of_week(pool).await
}

/// Get the team-of-week roster for one week
#[get("/team-of-week/{week}")]
pub async fn get_team_of_week(path: web::Path<i32>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let week = path.into_inner();
    team_of_week_handler::get_team_of_week(week, pool).await
}
