//! Full level computation for one user's habits

use chrono::NaiveDate;
use common::models::HabitRecords;
use serde::Serialize;
use tracing::info;

use crate::aggregate::{aggregate, home_rank, AggregatedLevel, HomeRank};
use crate::badges::{evaluate_badges, next_badges, unlocked_count, BadgeProgress, BADGES};
use crate::snapshot::{snapshot_for, HabitLevelSnapshot};

/// Everything the home/profile view shows about a user's levels
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub habits: Vec<HabitLevelSnapshot>,
    pub aggregated: AggregatedLevel,
    pub rank: HomeRank,
    pub badges: Vec<BadgeProgress>,
    pub next_badges: Vec<BadgeProgress>,
}

/// Recompute snapshots, aggregate, rank and badges from raw records
pub fn build_profile(habits: &[HabitRecords], today: NaiveDate) -> Profile {
    let snapshots: Vec<HabitLevelSnapshot> =
        habits.iter().map(|h| snapshot_for(h, today)).collect();
    let aggregated = aggregate(&snapshots);
    let rank = home_rank(aggregated.total_level);
    let badges = evaluate_badges(&aggregated, BADGES);
    let next_badges = next_badges(&badges);

    info!(
        "Profile for {} habits: total level {} ({}), {} badges unlocked",
        aggregated.total_habits,
        aggregated.total_level,
        rank.title,
        unlocked_count(&badges)
    );

    Profile {
        habits: snapshots,
        aggregated,
        rank,
        badges,
        next_badges,
    }
}
