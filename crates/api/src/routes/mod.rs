//! API routes

use std::sync::Arc;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::error::ApiError;
use crate::state::AppState;

pub mod badges;
pub mod calendar;
pub mod health;
pub mod levels;
pub mod tiers;

/// Build the API router with state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/tiers", get(tiers::list))
        .route("/api/badges", get(badges::list))
        .route("/api/habits/snapshot", post(levels::snapshot))
        .route("/api/profile", post(levels::profile))
        .route("/api/levels/aggregate", post(levels::aggregate_snapshots))
        .route("/api/levels/progress", get(levels::progress))
        .route("/api/calendar/week", get(calendar::week))
        .route(
            "/api/calendar/:year/:month",
            get(calendar::month).post(calendar::month_with_activity),
        )
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
