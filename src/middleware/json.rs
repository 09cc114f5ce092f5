// src/middleware/json.rs

use axum::extract::{rejection::JsonRejection, FromRequest, Request};
use axum::Json;

use crate::common::error::AppError;

// Extrator de corpo JSON: igual ao `Json` do axum, mas qualquer falha de
// leitura (campo faltando, tipo de desconto desconhecido, JSON quebrado)
// vira AppError::InvalidInput (400) com a mensagem do serde.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;
        Ok(AppJson(value))
    }
}
