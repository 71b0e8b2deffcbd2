pub mod fixtures;
pub mod identity;
pub mod points;
pub mod standings;
pub mod stats;
pub mod team_of_week;
pub mod teams;
pub mod validation;
