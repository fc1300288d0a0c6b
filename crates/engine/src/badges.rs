//! Badge catalogue and unlock evaluation

use serde::{Deserialize, Serialize};

use crate::aggregate::AggregatedLevel;

/// Which aggregated metric a badge is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BadgeCategory {
    Completion,
    Hours,
    HabitsCount,
    StreakDays,
}

impl BadgeCategory {
    pub const ALL: [BadgeCategory; 4] = [
        BadgeCategory::Completion,
        BadgeCategory::Hours,
        BadgeCategory::HabitsCount,
        BadgeCategory::StreakDays,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BadgeCategory::Completion => "Completion",
            BadgeCategory::Hours => "Hours",
            BadgeCategory::HabitsCount => "Habits",
            BadgeCategory::StreakDays => "Streak",
        }
    }

    /// The aggregated value this category is measured by
    pub fn metric(&self, aggregated: &AggregatedLevel) -> u32 {
        match self {
            BadgeCategory::Completion => aggregated.total_completion_days,
            BadgeCategory::Hours => aggregated.total_hours_decimal.floor() as u32,
            BadgeCategory::HabitsCount => aggregated.total_habits,
            BadgeCategory::StreakDays => aggregated.longest_streak,
        }
    }
}

/// A milestone definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: &'static str,
    pub level_threshold: u32,
    pub title: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub category: BadgeCategory,
}

const fn badge(
    id: &'static str,
    category: BadgeCategory,
    level_threshold: u32,
    title: &'static str,
    icon: &'static str,
    color: &'static str,
) -> Badge {
    Badge {
        id,
        level_threshold,
        title,
        icon,
        color,
        category,
    }
}

use BadgeCategory::{Completion, HabitsCount, Hours, StreakDays};

/// All badges, ordered by category then threshold
pub const BADGES: &[Badge] = &[
    badge("completion_10", Completion, 10, "First Steps", "check", "bronze"),
    badge("completion_30", Completion, 30, "Month of Effort", "check", "silver"),
    badge("completion_100", Completion, 100, "Centurion", "check", "gold"),
    badge("completion_365", Completion, 365, "Year Round", "check", "platinum"),
    badge("completion_1000", Completion, 1000, "Unstoppable", "check", "diamond"),
    badge("hours_10", Hours, 10, "Warming Up", "clock", "bronze"),
    badge("hours_50", Hours, 50, "Dedicated", "clock", "silver"),
    badge("hours_100", Hours, 100, "Hundred Hours", "clock", "gold"),
    badge("hours_500", Hours, 500, "Deep Practice", "clock", "platinum"),
    badge("hours_1000", Hours, 1000, "Master of Time", "clock", "diamond"),
    badge("habits_1", HabitsCount, 1, "Getting Started", "list", "bronze"),
    badge("habits_3", HabitsCount, 3, "Juggler", "list", "silver"),
    badge("habits_5", HabitsCount, 5, "Routine Builder", "list", "gold"),
    badge("habits_10", HabitsCount, 10, "Life Designer", "list", "platinum"),
    badge("streak_3", StreakDays, 3, "On a Roll", "flame", "bronze"),
    badge("streak_7", StreakDays, 7, "Full Week", "flame", "silver"),
    badge("streak_30", StreakDays, 30, "Habit Formed", "flame", "gold"),
    badge("streak_100", StreakDays, 100, "Iron Will", "flame", "platinum"),
    badge("streak_365", StreakDays, 365, "Legend", "flame", "diamond"),
];

/// A badge together with the user's standing against it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeProgress {
    #[serde(flatten)]
    pub badge: Badge,
    pub unlocked: bool,
    pub current_value: u32,
    pub remaining_value: u32,
}

/// Evaluate every badge against the aggregated metrics, keeping input order
pub fn evaluate_badges(aggregated: &AggregatedLevel, badges: &[Badge]) -> Vec<BadgeProgress> {
    badges
        .iter()
        .map(|badge| {
            let current_value = badge.category.metric(aggregated);
            BadgeProgress {
                badge: *badge,
                unlocked: current_value >= badge.level_threshold,
                current_value,
                remaining_value: badge.level_threshold.saturating_sub(current_value),
            }
        })
        .collect()
}

/// The closest locked badge of each category, in category order
pub fn next_badges(progress: &[BadgeProgress]) -> Vec<BadgeProgress> {
    BadgeCategory::ALL
        .iter()
        .filter_map(|category| {
            progress
                .iter()
                .filter(|p| p.badge.category == *category && !p.unlocked)
                .min_by_key(|p| p.badge.level_threshold)
                .cloned()
        })
        .collect()
}

/// Count of unlocked badges
pub fn unlocked_count(progress: &[BadgeProgress]) -> usize {
    progress.iter().filter(|p| p.unlocked).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn aggregated(habits: u32, days: u32, hours: f64, longest: u32) -> AggregatedLevel {
        AggregatedLevel {
            total_level: 0,
            total_habits: habits,
            total_completion_days: days,
            total_hours_decimal: hours,
            longest_streak: longest,
            current_streak: 0,
        }
    }

    #[test]
    fn test_badge_ids_unique() {
        let ids: HashSet<_> = BADGES.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), BADGES.len());
    }

    #[test]
    fn test_badges_ascending_within_category() {
        for category in BadgeCategory::ALL {
            let thresholds: Vec<u32> = BADGES
                .iter()
                .filter(|b| b.category == category)
                .map(|b| b.level_threshold)
                .collect();
            assert!(!thresholds.is_empty());
            assert!(thresholds.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_nothing_unlocked_for_new_user() {
        let progress = evaluate_badges(&AggregatedLevel::default(), BADGES);

        assert_eq!(progress.len(), BADGES.len());
        assert_eq!(unlocked_count(&progress), 0);
        assert!(progress.iter().all(|p| p.remaining_value == p.badge.level_threshold));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let progress = evaluate_badges(&aggregated(3, 0, 0.0, 0), BADGES);
        let juggler = progress.iter().find(|p| p.badge.id == "habits_3").unwrap();

        assert!(juggler.unlocked);
        assert_eq!(juggler.current_value, 3);
        assert_eq!(juggler.remaining_value, 0);
    }

    #[test]
    fn test_hours_metric_floors() {
        let progress = evaluate_badges(&aggregated(0, 0, 9.99, 0), BADGES);
        let warming_up = progress.iter().find(|p| p.badge.id == "hours_10").unwrap();

        assert!(!warming_up.unlocked);
        assert_eq!(warming_up.current_value, 9);
        assert_eq!(warming_up.remaining_value, 1);
    }

    #[test]
    fn test_streak_uses_longest_streak() {
        let mut agg = aggregated(1, 7, 0.0, 7);
        agg.current_streak = 0;
        let progress = evaluate_badges(&agg, BADGES);

        let full_week = progress.iter().find(|p| p.badge.id == "streak_7").unwrap();
        assert!(full_week.unlocked);
    }

    #[test]
    fn test_remaining_never_negative() {
        let progress = evaluate_badges(&aggregated(50, 5000, 5000.0, 500), BADGES);
        assert!(progress.iter().all(|p| p.unlocked && p.remaining_value == 0));
    }

    #[test]
    fn test_evaluation_is_idempotent_and_keeps_order() {
        let agg = aggregated(4, 120, 64.5, 12);
        let first = evaluate_badges(&agg, BADGES);
        let second = evaluate_badges(&agg, BADGES);

        assert_eq!(first, second);
        let ids: Vec<_> = first.iter().map(|p| p.badge.id).collect();
        let expected: Vec<_> = BADGES.iter().map(|b| b.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_next_badges_one_per_category() {
        let progress = evaluate_badges(&aggregated(4, 120, 64.5, 12), BADGES);
        let next: Vec<_> = next_badges(&progress).into_iter().map(|p| p.badge.id).collect();

        assert_eq!(next, vec!["completion_365", "hours_100", "habits_5", "streak_30"]);
    }

    #[test]
    fn test_next_badges_skips_completed_categories() {
        let progress = evaluate_badges(&aggregated(10, 0, 0.0, 0), BADGES);
        let next = next_badges(&progress);

        assert!(next.iter().all(|p| p.badge.category != BadgeCategory::HabitsCount));
        assert_eq!(next.len(), 3);
    }

    #[test]
    fn test_progress_serializes_flat() {
        let progress = evaluate_badges(&aggregated(1, 0, 0.0, 0), &BADGES[10..11]);
        let json = serde_json::to_value(&progress[0]).unwrap();

        assert_eq!(json["id"], "habits_1");
        assert_eq!(json["levelThreshold"], 1);
        assert_eq!(json["category"], "habitsCount");
        assert_eq!(json["unlocked"], true);
        assert_eq!(json["remainingValue"], 0);
    }
}
