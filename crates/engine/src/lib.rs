//! Level, streak and badge computation for Track habits

pub mod aggregate;
pub mod badges;
pub mod calendar;
pub mod profile;
pub mod snapshot;
pub mod streaks;
pub mod tiers;

#[cfg(test)]
mod calendar_test;

pub use aggregate::{aggregate, home_rank, tier_progress, AggregatedLevel, HomeRank};
pub use badges::{evaluate_badges, Badge, BadgeCategory, BadgeProgress, BADGES};
pub use calendar::{generate_month_grid, generate_week_grid, month_activity, today_in};
pub use profile::{build_profile, Profile};
pub use snapshot::{habit_snapshot, HabitLevelSnapshot};
pub use streaks::{compute_streak, Streak};
pub use tiers::{compute_level, Tier, COMPLETION_TIERS, HOURS_TIERS, MAX_LEVEL};
