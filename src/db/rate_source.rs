// src/db/rate_source.rs

use async_trait::async_trait;
use chrono::NaiveDate;
use crate::{
    common::error::AppError,
    db::{DiscountRepository, OverrideRepository, RoomRepository},
    models::{Discount, RateOverride, Room},
};

/// Consultas somente-leitura de que o cálculo de menores tarifas precisa.
///
/// Em produção quem responde é o Postgres ([`PgRateSource`]); nos testes,
/// um repositório em memória.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn get_room(&self, room_id: i32) -> Result<Option<Room>, AppError>;

    /// Overrides do quarto com `stay_date` em `[start_date, end_date]`.
    async fn get_overrides(
        &self,
        room_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<RateOverride>, AppError>;

    async fn get_linked_discounts(&self, room_id: i32) -> Result<Vec<Discount>, AppError>;
}

#[derive(Clone)]
pub struct PgRateSource {
    rooms: RoomRepository,
    overrides: OverrideRepository,
    discounts: DiscountRepository,
}

impl PgRateSource {
    pub fn new(rooms: RoomRepository, overrides: OverrideRepository, discounts: DiscountRepository) -> Self {
        Self { rooms, overrides, discounts }
    }
}

#[async_trait]
impl RateSource for PgRateSource {
    async fn get_room(&self, room_id: i32) -> Result<Option<Room>, AppError> {
        self.rooms.find_by_id(room_id).await
    }

    async fn get_overrides(
        &self,
        room_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<RateOverride>, AppError> {
        self.overrides.find_in_range(room_id, start_date, end_date).await
    }

    async fn get_linked_discounts(&self, room_id: i32) -> Result<Vec<Discount>, AppError> {
        self.discounts.find_linked_to_room(room_id).await
    }
}
