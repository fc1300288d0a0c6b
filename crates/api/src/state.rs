//! Application state

use chrono::NaiveDate;
use common::Config;

/// Shared application state
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Today in the configured timezone, unless the caller pinned a date
    pub fn today_or(&self, pinned: Option<NaiveDate>) -> NaiveDate {
        pinned.unwrap_or_else(|| engine::today_in(self.config.timezone))
    }
}
