// src/handlers/overrides.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use super::validate_money;
use crate::{
    common::{dates::StayDateQuery, error::AppError},
    config::AppState,
    middleware::{json::AppJson, path::AppPath},
};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateOverridePayload {
    pub room_id: i32,

    // "YYYY-MM-DD"
    pub stay_date: NaiveDate,

    #[validate(custom(function = "validate_money"))]
    pub overridden_rate: Decimal,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOverridePayload {
    #[validate(custom(function = "validate_money"))]
    pub overridden_rate: Decimal,
}

pub async fn create_override(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CreateOverridePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let created = app_state
        .room_service
        .create_override(payload.room_id, payload.stay_date, payload.overridden_rate)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_overrides(
    State(app_state): State<AppState>,
    AppPath(room_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let overrides = app_state.room_service.list_overrides(room_id).await?;
    Ok((StatusCode::OK, Json(overrides)))
}

pub async fn update_override(
    State(app_state): State<AppState>,
    AppPath(room_id): AppPath<i32>,
    Query(query): Query<StayDateQuery>,
    AppJson(payload): AppJson<UpdateOverridePayload>,
) -> Result<impl IntoResponse, AppError> {
    let stay_date = query.parse()?;
    payload.validate()?;

    let updated = app_state
        .room_service
        .update_override(room_id, stay_date, payload.overridden_rate)
        .await?;

    Ok((StatusCode::OK, Json(updated)))
}

pub async fn delete_override(
    State(app_state): State<AppState>,
    AppPath(room_id): AppPath<i32>,
    Query(query): Query<StayDateQuery>,
) -> Result<impl IntoResponse, AppError> {
    let stay_date = query.parse()?;
    app_state.room_service.delete_override(room_id, stay_date).await?;
    Ok(StatusCode::NO_CONTENT)
}
