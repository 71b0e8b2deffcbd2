// src/handlers/league/standings_handler.rs
use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;
use sqlx::PgPool;

use crate::league::standings::StandingsService;

/// The public ranked table
#[tracing::instrument(name = "Get ranked teams", skip(pool))]
pub async fn get_ranked_teams(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let standings_service = StandingsService::new(pool.get_ref().clone());

    match standings_service.ranked_table().await {
        Ok(table) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": table,
            "total_count": table.len()
        }))),
        Err(e) => {
            tracing::error!("Failed to get standings: {}", e);
            Ok(e.error_response())
        }
    }
}
