// src/handlers/discounts.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use super::validate_money;
use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{json::AppJson, path::AppPath},
    models::{DiscountType, RoomDiscountAssignment},
    services::DiscountChanges,
};

// ---
// Payload: CreateDiscount
// ---
// discount_type fora de {"fixed", "percentage"} falha já no AppJson (400).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDiscountPayload {
    #[validate(length(min = 1, max = 255, message = "discount_name must have between 1 and 255 characters."))]
    pub discount_name: String,

    #[serde(default = "default_discount_type")]
    pub discount_type: DiscountType,

    #[validate(custom(function = "validate_money"))]
    pub discount_value: Decimal,
}

fn default_discount_type() -> DiscountType {
    DiscountType::Fixed
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDiscountPayload {
    #[validate(length(min = 1, max = 255, message = "discount_name must have between 1 and 255 characters."))]
    pub discount_name: Option<String>,

    pub discount_type: Option<DiscountType>,

    #[validate(custom(function = "validate_money"))]
    pub discount_value: Option<Decimal>,
}

impl From<UpdateDiscountPayload> for DiscountChanges {
    fn from(payload: UpdateDiscountPayload) -> Self {
        Self {
            discount_name: payload.discount_name,
            discount_type: payload.discount_type,
            discount_value: payload.discount_value,
        }
    }
}

pub async fn list_discounts(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let discounts = app_state.discount_service.list_discounts().await?;
    Ok((StatusCode::OK, Json(discounts)))
}

pub async fn create_discount(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CreateDiscountPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let discount = app_state
        .discount_service
        .create_discount(&payload.discount_name, payload.discount_type, payload.discount_value)
        .await?;

    Ok((StatusCode::CREATED, Json(discount)))
}

pub async fn get_discount(
    State(app_state): State<AppState>,
    AppPath(discount_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let discount = app_state.discount_service.get_discount(discount_id).await?;
    Ok((StatusCode::OK, Json(discount)))
}

pub async fn update_discount(
    State(app_state): State<AppState>,
    AppPath(discount_id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateDiscountPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let discount = app_state
        .discount_service
        .update_discount(discount_id, payload.into())
        .await?;

    Ok((StatusCode::OK, Json(discount)))
}

pub async fn delete_discount(
    State(app_state): State<AppState>,
    AppPath(discount_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.discount_service.delete_discount(discount_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---
// Handler: assign_discounts
// Corpo: [{"room_id": 1, "discounts": [1, 2]}, ...]
// ---
pub async fn assign_discounts(
    State(app_state): State<AppState>,
    AppJson(assignments): AppJson<Vec<RoomDiscountAssignment>>,
) -> Result<impl IntoResponse, AppError> {
    app_state.discount_service.assign_to_rooms(&assignments).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Discounts are successfully assigned to rooms" })),
    ))
}
