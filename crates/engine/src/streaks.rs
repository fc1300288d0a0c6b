//! Streak calculation from completed dates

use chrono::NaiveDate;
use serde::Serialize;

/// Current and best run of consecutive completed days
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Compute streaks from the dates a habit was completed on.
///
/// Dates may arrive in any order and may repeat. The trailing run only counts
/// as the current streak while its last day is `today` or the day before;
/// any other last day, earlier or later than that, reports 0.
pub fn compute_streak<I>(completed_dates: I, today: NaiveDate) -> Streak
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut days: Vec<NaiveDate> = completed_dates.into_iter().collect();
    days.sort_unstable();
    days.dedup();

    let Some(&last_day) = days.last() else {
        return Streak::default();
    };

    let mut longest = 1u32;
    let mut run = 1u32;

    for window in days.windows(2) {
        if window[0].succ_opt() == Some(window[1]) {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }

    let active = last_day == today || Some(last_day) == today.pred_opt();

    Streak {
        current_streak: if active { run } else { 0 },
        longest_streak: longest,
    }
}

/// Whether a streak ending on `last_day` still counts on `today`
pub fn is_active(last_day: NaiveDate, today: NaiveDate) -> bool {
    compute_streak([last_day], today).current_streak > 0
}
