// src/league/identity.rs
use uuid::Uuid;

use crate::errors::LeagueError;

/// Resolved player identity. A registered user reference and a free-text
/// player name are the same underlying concept for grouping; names are
/// matched case-insensitively after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlayerIdentity {
    User(Uuid),
    Name(String),
}

/// Single resolution point used by both stat upsert and leaderboard
/// grouping. The user reference wins when both are populated.
pub fn resolve_identity(
    user_id: Option<Uuid>,
    player_name: Option<&str>,
) -> Result<PlayerIdentity, LeagueError> {
    if let Some(user_id) = user_id {
        return Ok(PlayerIdentity::User(user_id));
    }

    match player_name.map(|name| name.trim().to_lowercase()) {
        Some(normalized) if !normalized.is_empty() => Ok(PlayerIdentity::Name(normalized)),
        _ => Err(LeagueError::validation(
            "Player identity requires a user reference or a non-empty player name",
        )),
    }
}
