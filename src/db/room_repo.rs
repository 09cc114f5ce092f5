// src/db/room_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use crate::{common::error::AppError, models::Room};

// Responsável por todas as interações com a tabela 'rooms'
#[derive(Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Room>, AppError> {
        let rooms = sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY room_id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rooms)
    }

    pub async fn find_by_id(&self, room_id: i32) -> Result<Option<Room>, AppError> {
        let room = sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE room_id = $1")
            .bind(room_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(room)
    }

    /// Verifica a existência do quarto dentro de uma transação já aberta.
    pub async fn exists<'e, E>(&self, executor: E, room_id: i32) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let found: Option<i32> = sqlx::query_scalar("SELECT room_id FROM rooms WHERE room_id = $1")
            .bind(room_id)
            .fetch_optional(executor)
            .await?;
        Ok(found.is_some())
    }

    pub async fn create(&self, room_name: &str, default_rate: Decimal) -> Result<Room, AppError> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (room_name, default_rate)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(room_name)
        .bind(default_rate)
        .fetch_one(&self.pool)
        .await?;
        Ok(room)
    }

    // Atualização parcial: campos ausentes (NULL) mantêm o valor atual.
    pub async fn update(
        &self,
        room_id: i32,
        room_name: Option<&str>,
        default_rate: Option<Decimal>,
    ) -> Result<Option<Room>, AppError> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            UPDATE rooms
            SET room_name    = COALESCE($2, room_name),
                default_rate = COALESCE($3, default_rate)
            WHERE room_id = $1
            RETURNING *
            "#,
        )
        .bind(room_id)
        .bind(room_name)
        .bind(default_rate)
        .fetch_optional(&self.pool)
        .await?;
        Ok(room)
    }

    /// Remove o quarto; overrides e vínculos caem por ON DELETE CASCADE.
    pub async fn delete(&self, room_id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM rooms WHERE room_id = $1")
            .bind(room_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
