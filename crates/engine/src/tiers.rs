//! Tier tables and level calculation
//!
//! A tier table is a piecewise-linear curve from a cumulative quantity
//! (completed days or logged hours) to a level. Each tier ends at
//! `threshold_value`, where the level reaches `level_at_tier_end`; inside the
//! tier one level is gained every `rate_per_level` units. The curve starts at
//! an implicit origin of level 0 at value 0, and levels below 1 are floored.

use serde::Serialize;

/// Lowest level a habit can have, even with no records
pub const MIN_LEVEL: u32 = 1;

/// Level cap reached at the final tier's threshold
pub const MAX_LEVEL: u32 = 999;

/// One breakpoint of a level curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    pub level_at_tier_end: u32,
    pub threshold_value: f64,
    pub rate_per_level: f64,
}

impl Tier {
    pub const fn new(level_at_tier_end: u32, threshold_value: f64, rate_per_level: f64) -> Self {
        Self {
            level_at_tier_end,
            threshold_value,
            rate_per_level,
        }
    }
}

/// Level curve for distinct completed days
pub const COMPLETION_TIERS: &[Tier] = &[
    Tier::new(100, 100.0, 1.0),
    Tier::new(200, 300.0, 2.0),
    Tier::new(500, 1200.0, 3.0),
    Tier::new(MAX_LEVEL, 3695.0, 5.0),
];

/// Level curve for cumulative logged hours
pub const HOURS_TIERS: &[Tier] = &[
    Tier::new(100, 100.0, 1.0),
    Tier::new(300, 500.0, 2.0),
    Tier::new(600, 1400.0, 3.0),
    Tier::new(MAX_LEVEL, 3395.0, 5.0),
];

/// Where a value sits on a curve: the tier containing it and the tier's origin
struct Position<'a> {
    tier: &'a Tier,
    prior_level: u32,
    prior_threshold: f64,
}

/// Returns `None` when the value is at or past the final threshold
fn locate(value: f64, tiers: &[Tier]) -> Option<Position<'_>> {
    let mut prior_level = 0;
    let mut prior_threshold = 0.0;

    for tier in tiers {
        if value < tier.threshold_value {
            return Some(Position {
                tier,
                prior_level,
                prior_threshold,
            });
        }
        prior_level = tier.level_at_tier_end;
        prior_threshold = tier.threshold_value;
    }

    None
}

/// Convert a cumulative value into a level on the given curve
pub fn compute_level(value: f64, tiers: &[Tier]) -> u32 {
    if value.is_nan() {
        return MIN_LEVEL;
    }

    match locate(value, tiers) {
        Some(pos) => {
            let steps = ((value - pos.prior_threshold) / pos.tier.rate_per_level)
                .floor()
                .max(0.0);
            let level = pos.prior_level.saturating_add(steps as u32);
            level.min(pos.tier.level_at_tier_end).max(MIN_LEVEL)
        }
        None => tiers
            .last()
            .map(|t| t.level_at_tier_end)
            .unwrap_or(MIN_LEVEL)
            .max(MIN_LEVEL),
    }
}

/// Level for a count of distinct completed days
pub fn completion_level(days: u32) -> u32 {
    compute_level(days as f64, COMPLETION_TIERS)
}

/// Level for a cumulative number of hours
pub fn hours_level(hours: f64) -> u32 {
    compute_level(hours, HOURS_TIERS)
}

/// Progress of a value within its current level
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    pub level: u32,
    /// Smallest value that reaches `level`
    pub current_floor: f64,
    /// Value at which the next level begins, `None` once capped
    pub next_threshold: Option<f64>,
    pub percent: u32,
}

/// Describe how far a value is through its current level
pub fn level_progress(value: f64, tiers: &[Tier]) -> LevelProgress {
    let level = compute_level(value, tiers);
    let value = if value.is_nan() { 0.0 } else { value.max(0.0) };

    let Some(pos) = locate(value, tiers) else {
        return LevelProgress {
            level,
            current_floor: tiers.last().map(|t| t.threshold_value).unwrap_or(0.0),
            next_threshold: None,
            percent: 100,
        };
    };

    let rate = pos.tier.rate_per_level;
    let steps = level.saturating_sub(pos.prior_level) as f64;
    // Level 1 is also granted to values below the first full step
    let current_floor = if level == MIN_LEVEL && pos.prior_level < MIN_LEVEL {
        pos.prior_threshold
    } else {
        pos.prior_threshold + steps * rate
    };
    let next_threshold = pos.prior_threshold + (steps + 1.0) * rate;

    let span = next_threshold - current_floor;
    let percent = if span > 0.0 {
        ((value - current_floor) / span * 100.0).floor().clamp(0.0, 100.0) as u32
    } else {
        0
    };

    LevelProgress {
        level,
        current_floor,
        next_threshold: Some(next_threshold),
        percent,
    }
}
