use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

/// Error surface of the league core. Every mutating operation either fully
/// commits (including standings reconciliation) or fails with one of these.
#[derive(Debug, thiserror::Error)]
pub enum LeagueError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidOperation(String),
    #[error("{0}")]
    Authorization(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl LeagueError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }

    /// Stable machine-readable kind, exposed in the error envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            LeagueError::Validation(_) => "validation_error",
            LeagueError::NotFound(_) => "not_found",
            LeagueError::InvalidOperation(_) => "invalid_operation",
            LeagueError::Authorization(_) => "authorization_error",
            LeagueError::Database(_) => "database_error",
        }
    }
}

impl ResponseError for LeagueError {
    fn status_code(&self) -> StatusCode {
        match self {
            LeagueError::Validation(_) => StatusCode::BAD_REQUEST,
            LeagueError::NotFound(_) => StatusCode::NOT_FOUND,
            LeagueError::InvalidOperation(_) => StatusCode::CONFLICT,
            LeagueError::Authorization(_) => StatusCode::FORBIDDEN,
            LeagueError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Do not leak database internals to clients
        let message = match self {
            LeagueError::Database(e) => {
                tracing::error!("Database error: {}", e);
                "Internal database error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "error_kind": self.kind(),
            "message": message
        }))
    }
}
