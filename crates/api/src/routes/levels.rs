//! Level routes
//!
//! Every request carries the full record history it needs; nothing is stored
//! between calls.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use common::models::HabitRecords;
use engine::snapshot::snapshot_for;
use engine::tiers::{level_progress, LevelProgress};
use engine::{
    aggregate, build_profile, home_rank, AggregatedLevel, HabitLevelSnapshot, HomeRank, Profile,
    COMPLETION_TIERS, HOURS_TIERS,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SnapshotRequest {
    #[serde(flatten)]
    pub habit: HabitRecords,
    /// Overrides the server's notion of today
    pub today: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub habits: Vec<HabitRecords>,
    pub today: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct AggregateRequest {
    #[serde(default)]
    pub snapshots: Vec<HabitLevelSnapshot>,
}

#[derive(Serialize)]
pub struct AggregateResponse {
    pub aggregated: AggregatedLevel,
    pub rank: HomeRank,
}

#[derive(Deserialize)]
pub struct ProgressQuery {
    #[serde(default)]
    pub days: u32,
    #[serde(default)]
    pub hours: f64,
}

#[derive(Serialize)]
pub struct ProgressResponse {
    pub completion: LevelProgress,
    pub hours: LevelProgress,
}

/// Position of a habit's totals within their current levels
pub async fn progress(Query(query): Query<ProgressQuery>) -> Json<ProgressResponse> {
    Json(ProgressResponse {
        completion: level_progress(query.days as f64, COMPLETION_TIERS),
        hours: level_progress(query.hours, HOURS_TIERS),
    })
}

/// Levels and streaks of one habit
pub async fn snapshot(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SnapshotRequest>,
) -> ApiResult<Json<HabitLevelSnapshot>> {
    let today = state.today_or(req.today);
    Ok(Json(snapshot_for(&req.habit, today)))
}

/// Snapshots, aggregate, rank and badges for all of a user's habits
pub async fn profile(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ProfileRequest>,
) -> ApiResult<Json<Profile>> {
    let today = state.today_or(req.today);
    info!("Profile requested for {} habits (today {})", req.habits.len(), today);
    Ok(Json(build_profile(&req.habits, today)))
}

/// Aggregate snapshots the caller already holds
pub async fn aggregate_snapshots(
    Json(req): Json<AggregateRequest>,
) -> ApiResult<Json<AggregateResponse>> {
    let aggregated = aggregate(&req.snapshots);
    let rank = home_rank(aggregated.total_level);
    Ok(Json(AggregateResponse { aggregated, rank }))
}
