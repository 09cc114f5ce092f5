// src/handlers/rates.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::{dates::DateRangeQuery, error::AppError},
    config::AppState,
    middleware::path::AppPath,
};

// ---
// Handler: get_lowest_rates
// GET /api/rooms/{room_id}/lowest-rates?start_date=2024-07-10&end_date=2024-07-12
// ---
pub async fn get_lowest_rates(
    State(app_state): State<AppState>,
    AppPath(room_id): AppPath<i32>,
    Query(range): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    // Datas são validadas antes de qualquer acesso ao banco
    let (start_date, end_date) = range.parse()?;

    let rates = app_state
        .pricing_service
        .lowest_rates(room_id, start_date, end_date)
        .await?;

    Ok((StatusCode::OK, Json(rates)))
}
