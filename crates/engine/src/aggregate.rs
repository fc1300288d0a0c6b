//! Cross-habit aggregation and home rank progress

use serde::Serialize;

use crate::snapshot::HabitLevelSnapshot;

/// Total level thresholds of the home/profile ranks
pub const HOME_LEVEL_THRESHOLDS: [u32; 5] = [0, 11, 31, 61, 101];

/// Rank titles, aligned with `HOME_LEVEL_THRESHOLDS`
pub const HOME_RANK_TITLES: [&str; 5] = ["Seedling", "Sprout", "Sapling", "Tree", "Forest"];

/// Sum/max reduction of a user's habit snapshots
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedLevel {
    pub total_level: u32,
    pub total_habits: u32,
    pub total_completion_days: u32,
    pub total_hours_decimal: f64,
    pub longest_streak: u32,
    /// Sum of every habit's current streak
    pub current_streak: u32,
}

pub fn aggregate(snapshots: &[HabitLevelSnapshot]) -> AggregatedLevel {
    snapshots
        .iter()
        .fold(AggregatedLevel::default(), |mut acc, s| {
            acc.total_level += s.completion_level + s.hours_level;
            acc.total_habits += 1;
            acc.total_completion_days += s.completion_days;
            acc.total_hours_decimal += s.total_hours;
            acc.longest_streak = acc.longest_streak.max(s.longest_streak);
            acc.current_streak += s.current_streak;
            acc
        })
}

/// Percent progress from the highest threshold reached toward the next one.
///
/// Thresholds must be ascending. Past the last threshold progress is 100.
pub fn tier_progress(total_level: u32, thresholds: &[u32]) -> u32 {
    let Some(idx) = thresholds.iter().rposition(|&t| t <= total_level) else {
        return 0;
    };
    let current = thresholds[idx];

    match thresholds.get(idx + 1) {
        None => 100,
        Some(&next) => {
            let span = (next - current) as f64;
            (100.0 * (total_level - current) as f64 / span).round() as u32
        }
    }
}

/// Named home rank of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeRank {
    /// 1-based rank number
    pub rank: u32,
    pub title: &'static str,
    pub threshold: u32,
    pub next_threshold: Option<u32>,
    pub progress: u32,
}

pub fn home_rank(total_level: u32) -> HomeRank {
    let idx = HOME_LEVEL_THRESHOLDS
        .iter()
        .rposition(|&t| t <= total_level)
        .unwrap_or(0);

    HomeRank {
        rank: idx as u32 + 1,
        title: HOME_RANK_TITLES[idx],
        threshold: HOME_LEVEL_THRESHOLDS[idx],
        next_threshold: HOME_LEVEL_THRESHOLDS.get(idx + 1).copied(),
        progress: tier_progress(total_level, &HOME_LEVEL_THRESHOLDS),
    }
}
