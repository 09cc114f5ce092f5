// src/db/override_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use crate::{common::error::AppError, models::RateOverride};

const OVERRIDE_COLUMNS: &str = "room_id, stay_date, overridden_rate";

#[derive(Clone)]
pub struct OverrideRepository {
    pool: PgPool,
}

impl OverrideRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_room(&self, room_id: i32) -> Result<Vec<RateOverride>, AppError> {
        let overrides = sqlx::query_as::<_, RateOverride>(&format!(
            "SELECT {OVERRIDE_COLUMNS} FROM rate_overrides WHERE room_id = $1 ORDER BY stay_date ASC"
        ))
        .bind(room_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(overrides)
    }

    // Intervalo fechado: start_date e end_date entram na busca.
    pub async fn find_in_range(
        &self,
        room_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<RateOverride>, AppError> {
        let overrides = sqlx::query_as::<_, RateOverride>(&format!(
            r#"
            SELECT {OVERRIDE_COLUMNS} FROM rate_overrides
            WHERE room_id = $1 AND stay_date BETWEEN $2 AND $3
            ORDER BY stay_date ASC
            "#
        ))
        .bind(room_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.pool)
        .await?;
        Ok(overrides)
    }

    pub async fn create(
        &self,
        room_id: i32,
        stay_date: NaiveDate,
        overridden_rate: Decimal,
    ) -> Result<RateOverride, AppError> {
        sqlx::query_as::<_, RateOverride>(&format!(
            r#"
            INSERT INTO rate_overrides (room_id, stay_date, overridden_rate)
            VALUES ($1, $2, $3)
            RETURNING {OVERRIDE_COLUMNS}
            "#
        ))
        .bind(room_id)
        .bind(stay_date)
        .bind(overridden_rate)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::Conflict(format!(
                        "An overridden rate for room {room_id} on {stay_date} already exists"
                    ));
                }
                if db_err.is_foreign_key_violation() {
                    return AppError::RoomNotFound;
                }
            }
            e.into()
        })
    }

    pub async fn update(
        &self,
        room_id: i32,
        stay_date: NaiveDate,
        overridden_rate: Decimal,
    ) -> Result<Option<RateOverride>, AppError> {
        let updated = sqlx::query_as::<_, RateOverride>(&format!(
            r#"
            UPDATE rate_overrides SET overridden_rate = $3
            WHERE room_id = $1 AND stay_date = $2
            RETURNING {OVERRIDE_COLUMNS}
            "#
        ))
        .bind(room_id)
        .bind(stay_date)
        .bind(overridden_rate)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }

    pub async fn delete(&self, room_id: i32, stay_date: NaiveDate) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM rate_overrides WHERE room_id = $1 AND stay_date = $2")
            .bind(room_id)
            .bind(stay_date)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
