pub mod fixture_handler;
pub mod standings_handler;
pub mod stats_handler;
pub mod team_handler;
pub mod team_of_week_handler;
