// src/services/discount_service.rs

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{DiscountRepository, RoomRepository},
    models::{Discount, DiscountType, RoomDiscountAssignment},
};

#[derive(Clone)]
pub struct DiscountService {
    pool: PgPool,
    discount_repo: DiscountRepository,
    room_repo: RoomRepository,
}

// Campos opcionais de um PUT parcial
#[derive(Debug, Default, Clone)]
pub struct DiscountChanges {
    pub discount_name: Option<String>,
    pub discount_type: Option<DiscountType>,
    pub discount_value: Option<Decimal>,
}

/// Percentuais vão de 0 a 100. O mínimo (>= 0) já é checado no payload.
fn ensure_valid_value(discount_type: DiscountType, discount_value: Decimal) -> Result<(), AppError> {
    if discount_type == DiscountType::Percentage && discount_value > Decimal::ONE_HUNDRED {
        return Err(AppError::InvalidInput(
            "Percentage discounts must be between 0 and 100.".to_string(),
        ));
    }
    Ok(())
}

impl DiscountChanges {
    fn apply_to(self, mut discount: Discount) -> Discount {
        if let Some(name) = self.discount_name {
            discount.discount_name = name;
        }
        if let Some(discount_type) = self.discount_type {
            discount.discount_type = discount_type;
        }
        if let Some(value) = self.discount_value {
            discount.discount_value = value;
        }
        discount
    }
}

impl DiscountService {
    pub fn new(pool: PgPool, discount_repo: DiscountRepository, room_repo: RoomRepository) -> Self {
        Self { pool, discount_repo, room_repo }
    }

    pub async fn list_discounts(&self) -> Result<Vec<Discount>, AppError> {
        self.discount_repo.list().await
    }

    pub async fn get_discount(&self, discount_id: i32) -> Result<Discount, AppError> {
        self.discount_repo
            .find_by_id(discount_id)
            .await?
            .ok_or(AppError::DiscountNotFound)
    }

    pub async fn create_discount(
        &self,
        discount_name: &str,
        discount_type: DiscountType,
        discount_value: Decimal,
    ) -> Result<Discount, AppError> {
        ensure_valid_value(discount_type, discount_value)?;
        let discount = self
            .discount_repo
            .create(discount_name, discount_type, discount_value)
            .await?;
        tracing::info!(discount_id = discount.discount_id, ?discount_type, "Desconto criado");
        Ok(discount)
    }

    pub async fn update_discount(&self, discount_id: i32, changes: DiscountChanges) -> Result<Discount, AppError> {
        let current = self.get_discount(discount_id).await?;
        let merged = changes.apply_to(current);

        // Revalida após mesclar: trocar só o tipo para "percentage" também conta
        ensure_valid_value(merged.discount_type, merged.discount_value)?;

        self.discount_repo
            .update(&merged)
            .await?
            .ok_or(AppError::DiscountNotFound)
    }

    pub async fn delete_discount(&self, discount_id: i32) -> Result<(), AppError> {
        if !self.discount_repo.delete(discount_id).await? {
            return Err(AppError::DiscountNotFound);
        }
        Ok(())
    }

    // --- ASSIGN (vínculos quarto/desconto) ---
    // Tudo ou nada: qualquer quarto/desconto inexistente ou par repetido
    // desfaz a requisição inteira.
    pub async fn assign_to_rooms(&self, assignments: &[RoomDiscountAssignment]) -> Result<usize, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut linked = 0;

        for assignment in assignments {
            let room_id = assignment.room_id;
            if !self.room_repo.exists(&mut *tx, room_id).await? {
                return Err(AppError::RoomNotFound);
            }

            for &discount_id in &assignment.discounts {
                let discount_name = self
                    .discount_repo
                    .find_name(&mut *tx, discount_id)
                    .await?
                    .ok_or(AppError::DiscountNotFound)?;

                if !self.discount_repo.link_room(&mut *tx, room_id, discount_id).await? {
                    return Err(AppError::Conflict(format!(
                        "The mapping of room {room_id} and discount \"{discount_name}\" already exists"
                    )));
                }
                linked += 1;
            }
        }

        tx.commit().await?;
        tracing::info!(linked, "Descontos vinculados aos quartos");
        Ok(linked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn money(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn summer() -> Discount {
        Discount {
            discount_id: 3,
            discount_name: "Summer".into(),
            discount_type: DiscountType::Fixed,
            discount_value: money("150.00"),
        }
    }

    #[test]
    fn percentage_above_one_hundred_is_rejected() {
        assert!(ensure_valid_value(DiscountType::Percentage, money("100.00")).is_ok());
        assert!(matches!(
            ensure_valid_value(DiscountType::Percentage, money("100.01")),
            Err(AppError::InvalidInput(_))
        ));
        assert!(ensure_valid_value(DiscountType::Fixed, money("150.00")).is_ok());
    }

    #[test]
    fn partial_changes_keep_untouched_fields() {
        let changes = DiscountChanges {
            discount_name: Some("Winter".into()),
            ..Default::default()
        };

        let merged = changes.apply_to(summer());

        assert_eq!(merged.discount_name, "Winter");
        assert_eq!(merged.discount_type, DiscountType::Fixed);
        assert_eq!(merged.discount_value, money("150.00"));
    }

    #[test]
    fn switching_type_revalidates_existing_value() {
        let changes = DiscountChanges {
            discount_type: Some(DiscountType::Percentage),
            ..Default::default()
        };

        let merged = changes.apply_to(summer());

        assert!(ensure_valid_value(merged.discount_type, merged.discount_value).is_err());
    }

    // --- Vínculos: exigem Postgres ---

    async fn seed(pool: &PgPool) -> (DiscountService, i32, i32, i32) {
        let rooms = RoomRepository::new(pool.clone());
        let discounts = DiscountRepository::new(pool.clone());
        let room = rooms.create("Deluxe", money("100.00")).await.unwrap();
        let summer = discounts.create("Summer", DiscountType::Percentage, money("10")).await.unwrap();
        let loyalty = discounts.create("Loyalty", DiscountType::Fixed, money("15.00")).await.unwrap();
        let service = DiscountService::new(pool.clone(), discounts, rooms);
        (service, room.room_id, summer.discount_id, loyalty.discount_id)
    }

    async fn link_count(pool: &PgPool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM room_discounts")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    fn assignment(room_id: i32, discounts: Vec<i32>) -> RoomDiscountAssignment {
        RoomDiscountAssignment { room_id, discounts }
    }

    #[sqlx::test]
    #[ignore = "needs a Postgres server in DATABASE_URL"]
    async fn links_every_pair_in_the_request(pool: PgPool) {
        let (service, room_id, summer, loyalty) = seed(&pool).await;

        let linked = service.assign_to_rooms(&[assignment(room_id, vec![summer, loyalty])]).await.unwrap();

        assert_eq!(linked, 2);
        assert_eq!(link_count(&pool).await, 2);
    }

    #[sqlx::test]
    #[ignore = "needs a Postgres server in DATABASE_URL"]
    async fn missing_discount_rolls_back_earlier_pairs(pool: PgPool) {
        let (service, room_id, summer, _) = seed(&pool).await;

        let result = service.assign_to_rooms(&[assignment(room_id, vec![summer, 9999])]).await;

        assert!(matches!(result, Err(AppError::DiscountNotFound)));
        assert_eq!(link_count(&pool).await, 0);
    }

    #[sqlx::test]
    #[ignore = "needs a Postgres server in DATABASE_URL"]
    async fn missing_room_rolls_back_earlier_pairs(pool: PgPool) {
        let (service, room_id, summer, _) = seed(&pool).await;

        let result = service
            .assign_to_rooms(&[assignment(room_id, vec![summer]), assignment(9999, vec![summer])])
            .await;

        assert!(matches!(result, Err(AppError::RoomNotFound)));
        assert_eq!(link_count(&pool).await, 0);
    }

    #[sqlx::test]
    #[ignore = "needs a Postgres server in DATABASE_URL"]
    async fn duplicate_pair_conflicts_and_rolls_back(pool: PgPool) {
        let (service, room_id, summer, loyalty) = seed(&pool).await;
        service.assign_to_rooms(&[assignment(room_id, vec![summer])]).await.unwrap();

        let result = service.assign_to_rooms(&[assignment(room_id, vec![loyalty, summer])]).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(link_count(&pool).await, 1);
    }
}
