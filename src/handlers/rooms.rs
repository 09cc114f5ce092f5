// src/handlers/rooms.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use super::validate_money;
use crate::{common::error::AppError, config::AppState, middleware::{json::AppJson, path::AppPath}};

// ---
// Payload: CreateRoom
// ---
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoomPayload {
    #[validate(length(min = 1, max = 255, message = "room_name must have between 1 and 255 characters."))]
    pub room_name: String,

    #[validate(custom(function = "validate_money"))]
    pub default_rate: Decimal,
}

// PUT parcial: só o que vier no corpo é alterado
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRoomPayload {
    #[validate(length(min = 1, max = 255, message = "room_name must have between 1 and 255 characters."))]
    pub room_name: Option<String>,

    #[validate(custom(function = "validate_money"))]
    pub default_rate: Option<Decimal>,
}

pub async fn list_rooms(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rooms = app_state.room_service.list_rooms().await?;
    Ok((StatusCode::OK, Json(rooms)))
}

pub async fn create_room(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CreateRoomPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let room = app_state
        .room_service
        .create_room(&payload.room_name, payload.default_rate)
        .await?;

    Ok((StatusCode::CREATED, Json(room)))
}

pub async fn get_room(
    State(app_state): State<AppState>,
    AppPath(room_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room = app_state.room_service.get_room(room_id).await?;
    Ok((StatusCode::OK, Json(room)))
}

pub async fn update_room(
    State(app_state): State<AppState>,
    AppPath(room_id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateRoomPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let room = app_state
        .room_service
        .update_room(room_id, payload.room_name.as_deref(), payload.default_rate)
        .await?;

    Ok((StatusCode::OK, Json(room)))
}

pub async fn delete_room(
    State(app_state): State<AppState>,
    AppPath(room_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.room_service.delete_room(room_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
