//! Calendar routes

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use common::models::{Record, YearMonth};
use common::Error;
use engine::calendar::DayCell;
use engine::{generate_month_grid, generate_week_grid, month_activity};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Serialize)]
pub struct MonthGridResponse {
    pub month: YearMonth,
    pub days: Vec<NaiveDate>,
}

#[derive(Serialize)]
pub struct MonthActivityResponse {
    pub month: YearMonth,
    pub days: Vec<DayCell>,
}

#[derive(Serialize)]
pub struct WeekResponse {
    pub days: Vec<NaiveDate>,
}

#[derive(Deserialize)]
pub struct ActivityRequest {
    #[serde(default)]
    pub records: Vec<Record>,
    pub today: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct WeekQuery {
    pub date: Option<NaiveDate>,
}

/// The 42 dates shown for a month
pub async fn month(Path((year, month)): Path<(i32, u32)>) -> ApiResult<Json<MonthGridResponse>> {
    let month = YearMonth::new(year, month)?;
    Ok(Json(MonthGridResponse {
        month,
        days: generate_month_grid(month).to_vec(),
    }))
}

/// The month grid annotated with the posted records
pub async fn month_with_activity(
    State(state): State<Arc<AppState>>,
    Path((year, month)): Path<(i32, u32)>,
    Json(req): Json<ActivityRequest>,
) -> ApiResult<Json<MonthActivityResponse>> {
    let month = YearMonth::new(year, month)?;
    let today = state.today_or(req.today);
    Ok(Json(MonthActivityResponse {
        month,
        days: month_activity(month, &req.records, today),
    }))
}

/// The Sunday-first week containing `date` (default: today)
pub async fn week(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WeekQuery>,
) -> ApiResult<Json<WeekResponse>> {
    let date = state.today_or(query.date);
    let days = generate_week_grid(date).ok_or_else(|| Error::InvalidDate(date.to_string()))?;
    Ok(Json(WeekResponse {
        days: days.to_vec(),
    }))
}
