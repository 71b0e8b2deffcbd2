// src/league/points.rs
//
// Pure standings arithmetic. Services apply these against team rows inside
// their own transactions, so the same contract holds whether aggregates are
// maintained incrementally or recomputed from the full fixture history.
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

pub const WIN_POINTS: i32 = 3;
pub const DRAW_POINTS: i32 = 1;

/// A team's aggregate record, detached from its database row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamRecord {
    pub played: i32,
    pub won: i32,
    pub drawn: i32,
    pub lost: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: i32,
    pub head_to_head: i32,
}

impl TeamRecord {
    /// Fold one played result into the record.
    pub fn apply_result(&mut self, goals_for: i32, goals_against: i32) {
        self.played += 1;
        match goals_for.cmp(&goals_against) {
            Ordering::Greater => {
                self.won += 1;
                self.points += WIN_POINTS;
            }
            Ordering::Equal => {
                self.drawn += 1;
                self.points += DRAW_POINTS;
            }
            Ordering::Less => {
                self.lost += 1;
            }
        }
        self.goals_for += goals_for;
        self.goals_against += goals_against;
        self.recompute_goal_difference();
    }

    /// Exact algebraic inverse of `apply_result`. Required before re-scoring
    /// or deleting a played fixture.
    pub fn reverse_result(&mut self, goals_for: i32, goals_against: i32) {
        self.played -= 1;
        match goals_for.cmp(&goals_against) {
            Ordering::Greater => {
                self.won -= 1;
                self.points -= WIN_POINTS;
            }
            Ordering::Equal => {
                self.drawn -= 1;
                self.points -= DRAW_POINTS;
            }
            Ordering::Less => {
                self.lost -= 1;
            }
        }
        self.goals_for -= goals_for;
        self.goals_against -= goals_against;
        self.recompute_goal_difference();
    }

    /// Goal difference is derived, never set directly.
    pub fn recompute_goal_difference(&mut self) {
        self.goal_difference = self.goals_for - self.goals_against;
    }
}

/// Read-time standings order: points, then the manual head-to-head
/// adjustment, then goal difference, then case-insensitive name as the
/// documented stable last resort.
pub fn standings_ordering(a: &TeamRecord, a_name: &str, b: &TeamRecord, b_name: &str) -> Ordering {
    b.points
        .cmp(&a.points)
        .then(b.head_to_head.cmp(&a.head_to_head))
        .then(b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| a_name.to_lowercase().cmp(&b_name.to_lowercase()))
}

// Position bands for the public table, derived from rank index at read time.
pub const TITLE_TIER_MAX_POSITION: i32 = 4;
pub const PLAYOFF_TIER_MAX_POSITION: i32 = 12;
pub const SECONDARY_TIER_MAX_POSITION: i32 = 16;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RankTier {
    Title,
    Playoff,
    Secondary,
    Relegation,
}

impl RankTier {
    /// Band for a 1-based table position.
    pub fn for_position(position: i32) -> Self {
        if position <= TITLE_TIER_MAX_POSITION {
            RankTier::Title
        } else if position <= PLAYOFF_TIER_MAX_POSITION {
            RankTier::Playoff
        } else if position <= SECONDARY_TIER_MAX_POSITION {
            RankTier::Secondary
        } else {
            RankTier::Relegation
        }
    }
}
