pub mod common;
pub mod fixture;
pub mod player_stats;
pub mod team;
pub mod team_of_week;
pub mod user;
