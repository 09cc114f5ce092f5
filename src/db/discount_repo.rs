// src/db/discount_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use crate::{
    common::error::AppError,
    models::{Discount, DiscountType},
};

#[derive(Clone)]
pub struct DiscountRepository {
    pool: PgPool,
}

impl DiscountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---
    // Leitura
    // ---

    pub async fn list(&self) -> Result<Vec<Discount>, AppError> {
        let discounts = sqlx::query_as::<_, Discount>("SELECT * FROM discounts ORDER BY discount_id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(discounts)
    }

    pub async fn find_by_id(&self, discount_id: i32) -> Result<Option<Discount>, AppError> {
        let discount = sqlx::query_as::<_, Discount>("SELECT * FROM discounts WHERE discount_id = $1")
            .bind(discount_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(discount)
    }

    /// Todos os descontos vinculados ao quarto, via 'room_discounts'.
    pub async fn find_linked_to_room(&self, room_id: i32) -> Result<Vec<Discount>, AppError> {
        let discounts = sqlx::query_as::<_, Discount>(
            r#"
            SELECT d.* FROM discounts d
            JOIN room_discounts rd ON rd.discount_id = d.discount_id
            WHERE rd.room_id = $1
            ORDER BY d.discount_id ASC
            "#,
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(discounts)
    }

    // ---
    // Escrita
    // ---

    pub async fn create(
        &self,
        discount_name: &str,
        discount_type: DiscountType,
        discount_value: Decimal,
    ) -> Result<Discount, AppError> {
        let discount = sqlx::query_as::<_, Discount>(
            r#"
            INSERT INTO discounts (discount_name, discount_type, discount_value)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(discount_name)
        .bind(discount_type)
        .bind(discount_value)
        .fetch_one(&self.pool)
        .await?;
        Ok(discount)
    }

    // Grava a linha inteira; a mesclagem parcial acontece no service.
    pub async fn update(&self, discount: &Discount) -> Result<Option<Discount>, AppError> {
        let updated = sqlx::query_as::<_, Discount>(
            r#"
            UPDATE discounts
            SET discount_name = $2, discount_type = $3, discount_value = $4
            WHERE discount_id = $1
            RETURNING *
            "#,
        )
        .bind(discount.discount_id)
        .bind(&discount.discount_name)
        .bind(discount.discount_type)
        .bind(discount.discount_value)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }

    pub async fn delete(&self, discount_id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM discounts WHERE discount_id = $1")
            .bind(discount_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ---
    // Vínculos quarto/desconto (rodam dentro da transação do service)
    // ---

    pub async fn find_name<'e, E>(&self, executor: E, discount_id: i32) -> Result<Option<String>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let name: Option<String> = sqlx::query_scalar("SELECT discount_name FROM discounts WHERE discount_id = $1")
            .bind(discount_id)
            .fetch_optional(executor)
            .await?;
        Ok(name)
    }

    /// Cria o vínculo. Retorna `false` se o par já existia.
    pub async fn link_room<'e, E>(&self, executor: E, room_id: i32, discount_id: i32) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            INSERT INTO room_discounts (room_id, discount_id)
            VALUES ($1, $2)
            ON CONFLICT (room_id, discount_id) DO NOTHING
            "#,
        )
        .bind(room_id)
        .bind(discount_id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() == 1)
    }
}
