// src/models/user.rs
use serde::{Deserialize, Serialize};

// Account management lives in an external service; the league core only
// reads role/status out of JWT claims and resolves user references to
// display names via joins.

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Moderator,
    Admin,
    SuperAdmin,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Suspended,
    Banned,
}
