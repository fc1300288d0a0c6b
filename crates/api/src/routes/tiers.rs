//! Tier table routes

use axum::Json;
use engine::aggregate::{HOME_LEVEL_THRESHOLDS, HOME_RANK_TITLES};
use engine::{Tier, COMPLETION_TIERS, HOURS_TIERS, MAX_LEVEL};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TiersResponse {
    pub max_level: u32,
    pub completion: &'static [Tier],
    pub hours: &'static [Tier],
    pub home_thresholds: [u32; 5],
    pub home_titles: [&'static str; 5],
}

/// The level curves and home rank thresholds
pub async fn list() -> Json<TiersResponse> {
    Json(TiersResponse {
        max_level: MAX_LEVEL,
        completion: COMPLETION_TIERS,
        hours: HOURS_TIERS,
        home_thresholds: HOME_LEVEL_THRESHOLDS,
        home_titles: HOME_RANK_TITLES,
    })
}
