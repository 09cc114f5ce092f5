// src/middleware/path.rs

use axum::extract::{rejection::PathRejection, FromRequestParts, Path};
use axum::http::request::Parts;

use crate::common::error::AppError;

// Mesmo papel do AppJson, para parâmetros de rota: "/api/rooms/abc" vira
// 400 com {"error": ...} em vez do texto puro do axum.
pub struct AppPath<T>(pub T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;
        Ok(AppPath(value))
    }
}
