//! Per-habit level snapshots, recomputed from the full record history

use std::collections::BTreeSet;

use chrono::NaiveDate;
use common::models::{HabitRecords, Record};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::streaks::compute_streak;
use crate::tiers::{completion_level, hours_level};

/// Levels and streaks of a single habit at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitLevelSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habit_id: Option<Uuid>,
    pub completion_level: u32,
    pub hours_level: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Distinct dates with a completed record
    #[serde(default)]
    pub completion_days: u32,
    /// Logged minutes / 60
    #[serde(default)]
    pub total_hours: f64,
}

/// Build a snapshot from every record of one habit.
///
/// Several records on the same date count as one completed day. Minutes are
/// summed over all records, completed or not.
pub fn habit_snapshot(records: &[Record], today: NaiveDate) -> HabitLevelSnapshot {
    let completed: BTreeSet<NaiveDate> = records
        .iter()
        .filter(|r| r.completed)
        .map(|r| r.date)
        .collect();

    let total_minutes: u64 = records.iter().map(|r| r.duration_minutes as u64).sum();
    let total_hours = total_minutes as f64 / 60.0;
    let completion_days = completed.len() as u32;
    let streak = compute_streak(completed, today);

    HabitLevelSnapshot {
        habit_id: None,
        completion_level: completion_level(completion_days),
        hours_level: hours_level(total_hours),
        current_streak: streak.current_streak,
        longest_streak: streak.longest_streak,
        completion_days,
        total_hours,
    }
}

/// Snapshot of a habit, tagged with its id
pub fn snapshot_for(habit: &HabitRecords, today: NaiveDate) -> HabitLevelSnapshot {
    let snapshot = HabitLevelSnapshot {
        habit_id: Some(habit.habit_id),
        ..habit_snapshot(&habit.records, today)
    };

    debug!(
        "Habit {} at completion level {}, hours level {} ({} records)",
        habit.habit_id,
        snapshot.completion_level,
        snapshot.hours_level,
        habit.records.len()
    );

    snapshot
}
