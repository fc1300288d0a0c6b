//! Sunday-first calendar grids and per-day activity
//!
//! Grid arithmetic works on naive dates. Only "today" depends on a timezone,
//! and callers derive it once with [`today_in`] so every comparison in a
//! request happens on the same civil calendar.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use common::models::{Record, YearMonth};
use serde::Serialize;

/// Six weeks of seven days
pub const GRID_DAYS: usize = 42;

/// The current calendar date in `tz`
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

fn days_since_sunday(date: NaiveDate) -> Duration {
    Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// The Sunday on or before `date`, or `None` past the start of chrono's range
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_signed(days_since_sunday(date))
}

/// The Sunday-first week containing `date`, or `None` when that week runs
/// outside the representable date range
pub fn generate_week_grid(date: NaiveDate) -> Option<[NaiveDate; 7]> {
    let start = week_start(date)?;
    start.checked_add_signed(Duration::days(6))?;
    Some(std::array::from_fn(|i| start + Duration::days(i as i64)))
}

/// 42 consecutive dates starting at the Sunday on or before the 1st of `month`
pub fn generate_month_grid(month: YearMonth) -> [NaiveDate; GRID_DAYS] {
    // YearMonth is limited to years 1..=9999, far inside chrono's range
    let start = month.first_day() - days_since_sunday(month.first_day());
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// One cell of a month calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    pub completed: bool,
    pub duration_minutes: u32,
    /// Heatmap shade, 0 (nothing logged) to 4
    pub intensity: u8,
}

/// Heatmap shade for a day's log
pub fn intensity(completed: bool, duration_minutes: u32) -> u8 {
    match duration_minutes {
        0 if completed => 1,
        0 => 0,
        1..=14 => 1,
        15..=29 => 2,
        30..=59 => 3,
        _ => 4,
    }
}

/// Annotate the month grid with the records that fall on each day
pub fn month_activity(month: YearMonth, records: &[Record], today: NaiveDate) -> Vec<DayCell> {
    let mut by_day: HashMap<NaiveDate, (bool, u32)> = HashMap::new();
    for record in records {
        let entry = by_day.entry(record.date).or_insert((false, 0));
        entry.0 |= record.completed;
        entry.1 = entry.1.saturating_add(record.duration_minutes);
    }

    generate_month_grid(month)
        .into_iter()
        .map(|date| {
            let (completed, duration_minutes) = by_day.get(&date).copied().unwrap_or_default();
            DayCell {
                date,
                in_month: month.contains(date),
                is_today: date == today,
                completed,
                duration_minutes,
                intensity: intensity(completed, duration_minutes),
            }
        })
        .collect()
}
